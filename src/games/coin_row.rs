//! Coin-row manipulation, played as a heap game.
//!
//! Each row of coins is encoded as a heap; a move removes any number of
//! coins from one row. Legality and outcome therefore coincide with
//! [`HeapNim`](crate::games::HeapNim) over the same encoding; what differs
//! is the board shape the players see: more, flatter rows, scaled by
//! difficulty.

use crate::core::{Difficulty, GameError, GameRng};
use crate::rules::{Oracle, Ruleset, Setup};

use super::nim::{apply_take, legal_takes, Heaps, TakeMove};

/// Rule set for the coin-row game.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoinRow;

impl Ruleset for CoinRow {
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

impl Oracle for CoinRow {
    fn is_winning(&self, position: &Heaps) -> bool {
        position.nim_sum() != 0
    }
}

impl Setup for CoinRow {
    fn random_position(&self, difficulty: Difficulty, rng: &mut GameRng) -> Heaps {
        let (row_count, max_coins) = match difficulty {
            Difficulty::Easy => (4, 3),
            Difficulty::Medium => (5, 4),
            Difficulty::Hard => (6, 5),
            Difficulty::Insane => (7, 6),
        };
        Heaps::new((0..row_count).map(|_| rng.gen_range_u32(1..=max_coins)))
    }

    fn fallback_position(&self) -> Heaps {
        // Nim-sum 2^3^4 = 5: the first mover is winning.
        Heaps::new([2, 3, 4])
    }
}
