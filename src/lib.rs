//! # impartial
//!
//! A combinatorial-game analysis and opponent engine shared by five
//! turn-based, perfect-information games: heap-taking Nim, coin-row
//! manipulation, factor subtraction, adjacent-tower connection, and pile
//! splitting.
//!
//! ## Design Principles
//!
//! 1. **Immutable positions**: every move produces a fresh position via
//!    `Ruleset::apply`; the only mutable handle is the `GameSession`, owned
//!    by exactly one caller.
//!
//! 2. **Capability interface over branching**: each variant implements the
//!    `Ruleset`/`Oracle` traits once; nothing dispatches on game names at
//!    call sites.
//!
//! 3. **Deterministic**: all randomness (opponent blunders, starting
//!    positions) flows through a seeded `GameRng`, so sessions replay
//!    exactly.
//!
//! ## Architecture
//!
//! The session asks the rule set for legal moves, the oracle for the
//! win/loss classification, and (on the engine's turn) the selector for a
//! move that is optimal with a difficulty-tuned probability. Outcomes come
//! from variant-specific theory (the nim-sum for heap games, a bottom-up
//! table for factor subtraction) or from memoized game-tree search where
//! no closed form is used.
//!
//! ## Modules
//!
//! - `core`: players, difficulty tiers, errors, RNG
//! - `rules`: the `Ruleset`/`Oracle`/`Setup` traits and the lazy search
//! - `games`: the five variant implementations
//! - `ai`: winning-move search, difficulty fallback, hints
//! - `session`: turn alternation and starting-position construction

pub mod ai;
pub mod core;
pub mod games;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Controller, Difficulty, DifficultyProfile, GameError, GameMode, GameRng, GameRngState, Player,
};

pub use crate::rules::{Oracle, Ruleset, Setup};

pub use crate::games::{
    CoinRow, ConnectMove, FactorMove, FactorPosition, FactorSubtraction, HeapNim, Heaps, PileMove,
    PilePosition, PileSplit, TakeMove, TowerConnection, TowerPosition,
};

pub use crate::ai::{hint, Hint, MoveSelector, Rationale};

pub use crate::session::{GameSession, MoveOutcome, MoveRecord, MAX_START_ATTEMPTS};
