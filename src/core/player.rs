//! Player identity and seat control.
//!
//! All five game variants are strictly two-player, so players are a fixed
//! enum rather than an indexed ID. Who *controls* a seat (a human at the
//! controls or the engine opponent) is a property of the game mode, not the
//! player: in player-versus-engine mode, `Player::Two` is driven by the
//! engine.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// `Player::One` always moves first in a fresh session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 0-based index, for callers that keep per-player arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Who drives a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    Human,
    Engine,
}

/// Session mode, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans alternating at the same session.
    Pvp,
    /// Human as `Player::One` against the engine as `Player::Two`.
    Pve,
}

impl GameMode {
    /// The controller of `player` under this mode.
    #[must_use]
    pub const fn controller(self, player: Player) -> Controller {
        match (self, player) {
            (GameMode::Pve, Player::Two) => Controller::Engine,
            _ => Controller::Human,
        }
    }
}
