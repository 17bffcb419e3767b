//! Core engine types: players, difficulty, errors, RNG.
//!
//! This module contains the fundamental building blocks shared by every game
//! variant. Nothing here knows about heaps, factors, towers, or piles.

pub mod difficulty;
pub mod error;
pub mod player;
pub mod rng;

pub use difficulty::{Difficulty, DifficultyProfile};
pub use error::GameError;
pub use player::{Controller, GameMode, Player};
pub use rng::{GameRng, GameRngState};
