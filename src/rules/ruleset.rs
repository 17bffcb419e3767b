//! Rule set trait for game variant implementations.
//!
//! Each variant implements `Ruleset` to define its rules:
//! - What moves are legal
//! - How a move transforms a position
//! - When a position is terminal
//!
//! Positions are immutable snapshots: `apply` always produces a fresh
//! position and never mutates its input. Under the normal play convention a
//! position with no legal moves is lost for the player to move, so
//! `is_terminal` and "legal_moves is empty" must agree exactly.

use std::fmt::Debug;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::{Difficulty, GameError, GameRng};

/// Rule set trait.
///
/// Variants implement this trait to define their rules. The session and the
/// move selector drive gameplay exclusively through it.
///
/// ## Implementation Notes
///
/// - `legal_moves`: must return an empty vec exactly when the position is
///   terminal.
/// - `apply`: must validate and reject with `GameError::InvalidMove` any move
///   outside `legal_moves`; must be deterministic.
pub trait Ruleset {
    /// Immutable game state snapshot.
    type Position: Clone + Debug + PartialEq + Eq + Hash + Serialize + DeserializeOwned;

    /// A single move in this variant.
    type Move: Clone + Debug + PartialEq + Eq + Serialize + DeserializeOwned;

    /// Enumerate all legal moves from a position.
    ///
    /// Returns empty exactly when the position is terminal.
    fn legal_moves(&self, position: &Self::Position) -> Vec<Self::Move>;

    /// Apply a move, producing the successor position.
    ///
    /// Fails with `GameError::InvalidMove` if the move is not legal from
    /// `position`; the input position is never modified.
    fn apply(&self, position: &Self::Position, mv: &Self::Move)
        -> Result<Self::Position, GameError>;

    /// Check whether a position is terminal (player to move has lost).
    ///
    /// Default implementation enumerates moves; variants override it where a
    /// cheaper check exists.
    fn is_terminal(&self, position: &Self::Position) -> bool {
        self.legal_moves(position).is_empty()
    }

    /// How much material a move removes, for the difficulty-weighted
    /// fallback draw. Variants without a natural notion of size keep the
    /// default weight of 1.
    fn reduction(&self, _position: &Self::Position, _mv: &Self::Move) -> u32 {
        1
    }
}

/// Outcome classification: can the player about to move force a win?
///
/// Implementations use whatever combinatorial theory fits the variant: the
/// nim-sum for heap games, a bottom-up table for factor subtraction, or the
/// memoized search in [`crate::rules::search`] where no closed form is used.
///
/// Only meaningful on non-terminal positions; the session checks terminality
/// first.
pub trait Oracle: Ruleset {
    /// True iff the player to move can force a win under optimal play.
    fn is_winning(&self, position: &Self::Position) -> bool;
}

/// Randomized starting-position construction.
///
/// `random_position` draws a fresh start bounded by difficulty-dependent
/// ranges; `fallback_position` is a fixed, known-winning default used when
/// the biased construction loop exhausts its attempt cap.
pub trait Setup: Ruleset {
    /// Draw a random starting position for the given tier.
    fn random_position(&self, difficulty: Difficulty, rng: &mut GameRng) -> Self::Position;

    /// Fixed safe default; must be a winning position for the first mover.
    fn fallback_position(&self) -> Self::Position;
}
