//! Difficulty tiers and the opponent behavior profile they select.
//!
//! Difficulty is chosen once per session and is read-only afterwards. A tier
//! controls two independent things:
//!
//! - How often the engine deliberately plays a non-optimal move
//!   (`random_move_probability`).
//! - How the engine picks among fallback moves when no forced win exists
//!   (`prefer_large_moves`: weight toward bigger reductions so games end
//!   faster).
//!
//! Starting-position construction also scales with the tier; see each game's
//! `Setup` implementation.

use serde::{Deserialize, Serialize};

/// One of the four fixed difficulty tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Insane,
}

impl Difficulty {
    /// All tiers, weakest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Insane,
    ];

    /// Numeric level, 1 (Easy) through 4 (Insane).
    ///
    /// The presentation layer passes difficulty as a plain integer.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Insane => 4,
        }
    }

    /// Tier for a numeric level; `None` outside 1..=4.
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            4 => Some(Difficulty::Insane),
            _ => None,
        }
    }

    /// The opponent behavior profile for this tier.
    #[must_use]
    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                random_move_probability: 0.75,
                prefer_large_moves: false,
            },
            Difficulty::Medium => DifficultyProfile {
                random_move_probability: 0.40,
                prefer_large_moves: false,
            },
            Difficulty::Hard => DifficultyProfile {
                random_move_probability: 0.15,
                prefer_large_moves: true,
            },
            Difficulty::Insane => DifficultyProfile {
                random_move_probability: 0.0,
                prefer_large_moves: true,
            },
        }
    }
}

/// Opponent behavior parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Probability of discarding a found winning move in favor of a random
    /// legal move. 0.0 means the engine never blunders.
    pub random_move_probability: f64,

    /// When falling back to a random move, weight the draw toward moves that
    /// remove more material.
    pub prefer_large_moves: bool,
}
