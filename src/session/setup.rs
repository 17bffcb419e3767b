//! Randomized starting-position construction.
//!
//! Single-opponent sessions are biased so the human (the first mover)
//! starts in a winning position; two-human sessions accept whatever comes
//! out first. The bias loop is capped: when `MAX_START_ATTEMPTS` random
//! constructions all fail the constraint, the variant's fixed known-winning
//! fallback is used instead of looping further.

use crate::core::{Difficulty, GameError, GameMode, GameRng};
use crate::rules::{Oracle, Setup};

/// Attempt cap for the biased construction loop.
pub const MAX_START_ATTEMPTS: usize = 32;

/// Draw a starting position satisfying the mode's bias constraint.
///
/// Errors with `StartRetriesExhausted` after `MAX_START_ATTEMPTS` failed
/// draws; callers resolve that to [`Setup::fallback_position`].
pub fn biased_position<R>(
    rules: &R,
    mode: GameMode,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Result<R::Position, GameError>
where
    R: Oracle + Setup,
{
    for _ in 0..MAX_START_ATTEMPTS {
        let position = rules.random_position(difficulty, rng);
        if rules.is_terminal(&position) {
            continue;
        }
        match mode {
            GameMode::Pvp => return Ok(position),
            GameMode::Pve => {
                if rules.is_winning(&position) {
                    return Ok(position);
                }
            }
        }
    }
    Err(GameError::StartRetriesExhausted)
}

/// `biased_position` with the capped-retry fallback applied.
pub fn starting_position<R>(
    rules: &R,
    mode: GameMode,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> R::Position
where
    R: Oracle + Setup,
{
    biased_position(rules, mode, difficulty, rng)
        .unwrap_or_else(|_| rules.fallback_position())
}
