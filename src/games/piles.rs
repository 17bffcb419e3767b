//! Pile splitting.
//!
//! A multiset of positive piles. A move either takes any number of cards
//! from one pile (the pile disappears when emptied) or splits one pile into
//! two positive piles with the same total. The player clearing the last
//! card wins.
//!
//! The move space is kept exactly as the source game played it: take any
//! `1..=size`, split into any two positive parts. That is acknowledged to
//! diverge from the classical game it resembles; the as-played rules are
//! authoritative here.
//!
//! Like the tower game, the oracle has no closed form and delegates to the
//! memoized search in [`crate::rules::search`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Difficulty, GameError, GameRng};
use crate::rules::{search, Oracle, Ruleset, Setup};

/// A multiset of positive piles.
///
/// Pile order is kept as-is for indexing and display, but equality and
/// hashing are multiset-based: `[2,3]` and `[3,2]` are the same game state.
/// That is what the rules mean, and it lets the win/loss search memoize per
/// partition instead of per ordering.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PilePosition {
    piles: SmallVec<[u32; 8]>,
}

impl PartialEq for PilePosition {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for PilePosition {}

impl std::hash::Hash for PilePosition {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl PilePosition {
    fn sorted(&self) -> SmallVec<[u32; 8]> {
        let mut sorted = self.piles.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Build a position from pile sizes. Sizes must be positive.
    #[must_use]
    pub fn new(sizes: impl IntoIterator<Item = u32>) -> Self {
        let piles: SmallVec<[u32; 8]> = sizes.into_iter().collect();
        assert!(piles.iter().all(|&p| p > 0), "piles must be positive");
        Self { piles }
    }

    /// Pile sizes in display order.
    #[must_use]
    pub fn piles(&self) -> &[u32] {
        &self.piles
    }

    /// Number of piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    /// True when no piles remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Largest take currently possible: the maximum pile size.
    #[must_use]
    pub fn max_take(&self) -> u32 {
        self.piles.iter().copied().max().unwrap_or(0)
    }
}

/// A pile-split move: reduce one pile, or partition it in two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileMove {
    /// Remove `count` cards from pile `pile`.
    Take { pile: usize, count: u32 },
    /// Partition pile `pile` into two positive piles `left + right`.
    Split { pile: usize, left: u32, right: u32 },
}

/// Rule set for the pile-split game.
#[derive(Clone, Copy, Debug, Default)]
pub struct PileSplit;

impl Ruleset for PileSplit {
    type Position = PilePosition;
    type Move = PileMove;

    fn legal_moves(&self, position: &PilePosition) -> Vec<PileMove> {
        let mut moves = Vec::new();
        for (pile, &size) in position.piles().iter().enumerate() {
            for count in 1..=size {
                moves.push(PileMove::Take { pile, count });
            }
            // left <= right: (2,3) and (3,2) are the same partition, and
            // enumerating both would double-weight splits in the fallback
            // draw. `apply` still accepts either orientation from callers.
            for left in 1..=size / 2 {
                moves.push(PileMove::Split {
                    pile,
                    left,
                    right: size - left,
                });
            }
        }
        moves
    }

    fn apply(&self, position: &PilePosition, mv: &PileMove) -> Result<PilePosition, GameError> {
        match *mv {
            PileMove::Take { pile, count } => {
                let Some(&size) = position.piles().get(pile) else {
                    return Err(GameError::InvalidMove(format!(
                        "pile index {} out of bounds ({} piles)",
                        pile,
                        position.len()
                    )));
                };
                if count == 0 {
                    return Err(GameError::InvalidMove("take count must be positive".into()));
                }
                if count > size {
                    return Err(GameError::InvalidMove(format!(
                        "take count {} exceeds pile size {}",
                        count, size
                    )));
                }

                let mut next = position.clone();
                if count == size {
                    next.piles.remove(pile);
                } else {
                    next.piles[pile] = size - count;
                }
                Ok(next)
            }
            PileMove::Split { pile, left, right } => {
                let Some(&size) = position.piles().get(pile) else {
                    return Err(GameError::InvalidMove(format!(
                        "pile index {} out of bounds ({} piles)",
                        pile,
                        position.len()
                    )));
                };
                if left == 0 || right == 0 {
                    return Err(GameError::InvalidMove(
                        "both parts of a split must be positive".into(),
                    ));
                }
                if left.checked_add(right) != Some(size) {
                    return Err(GameError::InvalidMove(format!(
                        "split {} + {} does not partition pile of size {}",
                        left, right, size
                    )));
                }

                let mut next = position.clone();
                next.piles[pile] = left;
                next.piles.insert(pile + 1, right);
                Ok(next)
            }
        }
    }

    fn is_terminal(&self, position: &PilePosition) -> bool {
        position.is_empty()
    }

    fn reduction(&self, _position: &PilePosition, mv: &PileMove) -> u32 {
        match *mv {
            PileMove::Take { count, .. } => count,
            // Splits remove nothing; weight them like the smallest take.
            PileMove::Split { .. } => 1,
        }
    }
}

impl Oracle for PileSplit {
    fn is_winning(&self, position: &PilePosition) -> bool {
        search::solve(self, position)
    }
}

impl Setup for PileSplit {
    fn random_position(&self, difficulty: Difficulty, rng: &mut GameRng) -> PilePosition {
        let (pile_count, lo, hi) = match difficulty {
            Difficulty::Easy => (1 + rng.gen_range_usize(0..2), 2, 5),
            Difficulty::Medium => (2, 3, 7),
            Difficulty::Hard => (2 + rng.gen_range_usize(0..2), 4, 9),
            Difficulty::Insane => (3, 5, 12),
        };
        PilePosition::new((0..pile_count).map(|_| rng.gen_range_u32(lo..=hi)))
    }

    fn fallback_position(&self) -> PilePosition {
        // A single pile is always a first-mover win: take it whole.
        PilePosition::new([5])
    }
}
