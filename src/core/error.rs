//! Error values surfaced by the engine.
//!
//! The policy follows two rules:
//!
//! - Errors a caller can meaningfully handle (an illegal move, an
//!   out-of-turn engine request) are returned as `Result` values and leave
//!   the session untouched.
//! - Broken internal invariants (the selector invoked on a terminal
//!   position by engine code itself) are panics, not `Err` values.
//!
//! No error is ever swallowed: an invalid move is always reported, never
//! coerced into a legal one.

use serde::{Deserialize, Serialize};

/// Errors returned by rule sets and sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// The move is not a member of `legal_moves` for the current position.
    /// The session state is unchanged.
    InvalidMove(String),

    /// `engine_move` was called while the current seat is human-controlled.
    /// A caller bug; propagated, never recovered.
    EngineOutOfTurn,

    /// A move or selection was requested on a finished session.
    /// A caller bug; propagated, never recovered.
    SelectorOnTerminal,

    /// Randomized starting-position construction exhausted its attempt cap
    /// without satisfying the bias constraint. Internal: the session always
    /// resolves this to the variant's fixed fallback position.
    StartRetriesExhausted,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidMove(reason) => write!(f, "invalid move: {}", reason),
            GameError::EngineOutOfTurn => {
                write!(f, "engine move requested on a human-controlled turn")
            }
            GameError::SelectorOnTerminal => {
                write!(f, "move requested on a finished session")
            }
            GameError::StartRetriesExhausted => {
                write!(f, "starting-position construction exhausted its retries")
            }
        }
    }
}

impl std::error::Error for GameError {}
