//! Memoized win/loss search for variants without a closed-form oracle.
//!
//! Classifies a position by direct game-tree search under the normal play
//! convention: a position is winning iff some move leads to a position that
//! is losing for the opponent; a position with no moves is lost. Every move
//! in the supported variants strictly shrinks the position, so the recursion
//! always terminates.
//!
//! Visited positions are memoized in an `FxHashMap` for the duration of one
//! `solve` call, so repeated sub-positions (common once piles or tower rows
//! decompose into equal fragments) are classified once.

use rustc_hash::FxHashMap;

use super::ruleset::Ruleset;

/// Classify `position`: can the player to move force a win?
pub fn solve<R: Ruleset>(rules: &R, position: &R::Position) -> bool {
    let mut memo = FxHashMap::default();
    winning(rules, position, &mut memo)
}

fn winning<R: Ruleset>(
    rules: &R,
    position: &R::Position,
    memo: &mut FxHashMap<R::Position, bool>,
) -> bool {
    if let Some(&known) = memo.get(position) {
        return known;
    }

    let mut result = false;
    for mv in rules.legal_moves(position) {
        let next = rules
            .apply(position, &mv)
            .expect("move enumerated by legal_moves must apply");
        if !winning(rules, &next, memo) {
            result = true;
            break;
        }
    }

    memo.insert(position.clone(), result);
    result
}
