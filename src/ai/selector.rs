//! Difficulty-driven move selection.
//!
//! The selector is the opponent's brain: it searches for a provably winning
//! move (one whose successor position the oracle classifies as losing for
//! the opponent), then decides per the difficulty profile whether to play
//! it or to fall back to a weighted-random legal move. At the top tier the
//! blunder probability is zero and a found winning move is always played.
//!
//! The selector must never be invoked on a terminal position; the session
//! checks terminality first, so an empty move list here is a broken internal
//! invariant and panics rather than being smoothed over.

use serde::{Deserialize, Serialize};

use crate::core::{DifficultyProfile, GameRng};
use crate::rules::Oracle;

/// Why a hint recommends its move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rationale {
    /// The move leaves the opponent in a losing position.
    ForcedWin,
    /// No forced win exists from here; the move is the best fallback.
    NoForcedWin,
}

/// A recommended move with its machine-readable justification.
///
/// Turning the rationale into hint text is the presentation layer's job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint<M> {
    pub recommended: M,
    pub rationale: Rationale,
}

/// The opponent move selector.
///
/// Owns the RNG for blunder draws and fallback selection, so a session
/// seeded identically replays identical engine moves.
#[derive(Clone, Debug)]
pub struct MoveSelector {
    rng: GameRng,
}

impl MoveSelector {
    /// Create a selector with its own deterministic RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Select one legal move for the player about to move.
    ///
    /// # Panics
    ///
    /// Panics if the position is terminal; callers must check terminality
    /// first.
    pub fn select_move<R: Oracle>(
        &mut self,
        rules: &R,
        position: &R::Position,
        profile: &DifficultyProfile,
    ) -> R::Move {
        let moves = rules.legal_moves(position);
        assert!(
            !moves.is_empty(),
            "selector invoked on a terminal position"
        );

        let winning = winning_move(rules, position, &moves);

        // One draw per call keeps the RNG stream identical whether or not a
        // winning move was found.
        let blunder = self.rng.gen_bool(profile.random_move_probability);

        match winning {
            Some(mv) if !blunder => mv,
            _ => self.fallback(rules, position, &moves, profile),
        }
    }

    /// Weighted-random fallback over all legal moves.
    fn fallback<R: Oracle>(
        &mut self,
        rules: &R,
        position: &R::Position,
        moves: &[R::Move],
        profile: &DifficultyProfile,
    ) -> R::Move {
        let weights: Vec<f32> = moves
            .iter()
            .map(|mv| {
                if profile.prefer_large_moves {
                    rules.reduction(position, mv).max(1) as f32
                } else {
                    1.0
                }
            })
            .collect();

        let idx = self
            .rng
            .choose_weighted(&weights)
            .expect("fallback weights are non-empty and positive");
        moves[idx].clone()
    }
}

/// A move whose successor the oracle classifies as losing for the opponent,
/// if one exists.
fn winning_move<R: Oracle>(
    rules: &R,
    position: &R::Position,
    moves: &[R::Move],
) -> Option<R::Move> {
    moves
        .iter()
        .find(|mv| {
            let next = rules
                .apply(position, mv)
                .expect("move enumerated by legal_moves must apply");
            rules.is_terminal(&next) || !rules.is_winning(&next)
        })
        .cloned()
}

/// Recommend a move for the player about to move.
///
/// Returns the winning move when one exists, otherwise the fallback that
/// removes the most material (ending the game fastest). Deterministic, so
/// repeated hint requests on the same position agree.
///
/// # Panics
///
/// Panics if the position is terminal.
pub fn hint<R: Oracle>(rules: &R, position: &R::Position) -> Hint<R::Move> {
    let moves = rules.legal_moves(position);
    assert!(!moves.is_empty(), "hint requested on a terminal position");

    if let Some(mv) = winning_move(rules, position, &moves) {
        return Hint {
            recommended: mv,
            rationale: Rationale::ForcedWin,
        };
    }

    let best = moves
        .iter()
        .max_by_key(|mv| rules.reduction(position, mv))
        .expect("move list is non-empty")
        .clone();
    Hint {
        recommended: best,
        rationale: Rationale::NoForcedWin,
    }
}
