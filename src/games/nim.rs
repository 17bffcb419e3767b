//! Heap-taking Nim.
//!
//! A position is an ordered sequence of heap sizes. A move takes between 1
//! and the whole heap from a single heap; the player taking the last object
//! wins. Heap order carries no win/loss meaning but is preserved (and zero
//! heaps stay in place) so the presentation layer can keep stable layouts.
//!
//! The outcome oracle is the classical nim-sum: XOR all heap sizes, nonzero
//! means the player to move wins (Sprague-Grundy theory for sums of
//! independent heaps).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Difficulty, GameError, GameRng};
use crate::rules::{Oracle, Ruleset, Setup};

/// An ordered sequence of heap sizes.
///
/// Shared by [`HeapNim`] and [`crate::games::CoinRow`], which play the same
/// take-from-one-heap mechanics over different boards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Heaps {
    heaps: SmallVec<[u32; 8]>,
}

impl Heaps {
    /// Build a position from heap sizes.
    #[must_use]
    pub fn new(sizes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            heaps: sizes.into_iter().collect(),
        }
    }

    /// Heap sizes in display order.
    #[must_use]
    pub fn sizes(&self) -> &[u32] {
        &self.heaps
    }

    /// Number of heaps, counting emptied ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heaps.len()
    }

    /// True when every heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heaps.iter().all(|&h| h == 0)
    }

    /// XOR of all heap sizes.
    #[must_use]
    pub fn nim_sum(&self) -> u32 {
        self.heaps.iter().fold(0, |acc, &h| acc ^ h)
    }
}

/// Take `count` objects from heap `heap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TakeMove {
    /// Index of the heap taken from.
    pub heap: usize,
    /// Number of objects removed, `1..=heaps[heap]`.
    pub count: u32,
}

/// Enumerate every `(heap, count)` take from a heap position.
pub(crate) fn legal_takes(position: &Heaps) -> Vec<TakeMove> {
    let mut moves = Vec::new();
    for (heap, &size) in position.sizes().iter().enumerate() {
        for count in 1..=size {
            moves.push(TakeMove { heap, count });
        }
    }
    moves
}

/// Validate and apply a take, producing the successor position.
pub(crate) fn apply_take(position: &Heaps, mv: &TakeMove) -> Result<Heaps, GameError> {
    let Some(&size) = position.sizes().get(mv.heap) else {
        return Err(GameError::InvalidMove(format!(
            "heap index {} out of bounds ({} heaps)",
            mv.heap,
            position.len()
        )));
    };
    if mv.count == 0 {
        return Err(GameError::InvalidMove("take count must be positive".into()));
    }
    if mv.count > size {
        return Err(GameError::InvalidMove(format!(
            "take count {} exceeds heap size {}",
            mv.count, size
        )));
    }

    let mut next = position.clone();
    next.heaps[mv.heap] = size - mv.count;
    Ok(next)
}

/// Rule set for heap-taking Nim.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapNim;

impl Ruleset for HeapNim {
    type Position = Heaps;
    type Move = TakeMove;

    fn legal_moves(&self, position: &Heaps) -> Vec<TakeMove> {
        legal_takes(position)
    }

    fn apply(&self, position: &Heaps, mv: &TakeMove) -> Result<Heaps, GameError> {
        apply_take(position, mv)
    }

    fn is_terminal(&self, position: &Heaps) -> bool {
        position.is_empty()
    }

    fn reduction(&self, _position: &Heaps, mv: &TakeMove) -> u32 {
        mv.count
    }
}

impl Oracle for HeapNim {
    fn is_winning(&self, position: &Heaps) -> bool {
        position.nim_sum() != 0
    }
}

impl Setup for HeapNim {
    fn random_position(&self, difficulty: Difficulty, rng: &mut GameRng) -> Heaps {
        let (heap_count, max_size) = match difficulty {
            Difficulty::Easy => (3, 5),
            Difficulty::Medium => (3 + rng.gen_range_usize(0..2), 7),
            Difficulty::Hard => (4, 9),
            Difficulty::Insane => (4 + rng.gen_range_usize(0..2), 11),
        };
        Heaps::new((0..heap_count).map(|_| rng.gen_range_u32(1..=max_size)))
    }

    fn fallback_position(&self) -> Heaps {
        // Nim-sum 3^4^5 = 2: the first mover is winning.
        Heaps::new([3, 4, 5])
    }
}
