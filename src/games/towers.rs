//! Adjacent-tower connection.
//!
//! A row of towers, each available or spent. A move connects two adjacent
//! available towers; both become unavailable. The player making the last
//! connection wins. Which pairs were connected is remembered for the
//! presentation layer only; legality depends solely on availability, and
//! per-player attribution of a link comes from the session's move history.
//!
//! No closed-form outcome theory is used here: the oracle delegates to the
//! memoized win/loss search in [`crate::rules::search`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Difficulty, GameError, GameRng};
use crate::rules::{search, Oracle, Ruleset, Setup};

/// A row of towers plus the connected pairs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TowerPosition {
    available: SmallVec<[bool; 16]>,
    /// Left tower index of each connected pair, kept sorted so equal game
    /// states compare equal regardless of move order.
    links: SmallVec<[u16; 8]>,
}

impl TowerPosition {
    /// A fresh row of `count` available towers.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            available: smallvec::smallvec![true; count],
            links: SmallVec::new(),
        }
    }

    /// Build from explicit availability flags.
    #[must_use]
    pub fn from_flags(flags: impl IntoIterator<Item = bool>) -> Self {
        Self {
            available: flags.into_iter().collect(),
            links: SmallVec::new(),
        }
    }

    /// Availability per tower, in row order.
    #[must_use]
    pub fn available(&self) -> &[bool] {
        &self.available
    }

    /// Number of towers in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.available.len()
    }

    /// True when the row has no towers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Left tower index of each connected pair, ascending.
    #[must_use]
    pub fn links(&self) -> &[u16] {
        &self.links
    }
}

/// Connect towers `tower` and `tower + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectMove {
    pub tower: usize,
}

/// Rule set for the tower-connection game.
#[derive(Clone, Copy, Debug, Default)]
pub struct TowerConnection;

impl Ruleset for TowerConnection {
    type Position = TowerPosition;
    type Move = ConnectMove;

    fn legal_moves(&self, position: &TowerPosition) -> Vec<ConnectMove> {
        position
            .available
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0] && pair[1])
            .map(|(tower, _)| ConnectMove { tower })
            .collect()
    }

    fn apply(
        &self,
        position: &TowerPosition,
        mv: &ConnectMove,
    ) -> Result<TowerPosition, GameError> {
        let t = mv.tower;
        // saturating_sub keeps the bound check overflow-free for any index.
        if t >= position.len().saturating_sub(1) {
            return Err(GameError::InvalidMove(format!(
                "tower {} has no right neighbor ({} towers)",
                t,
                position.len()
            )));
        }
        if !position.available[t] || !position.available[t + 1] {
            return Err(GameError::InvalidMove(format!(
                "towers {} and {} are not both available",
                t,
                t + 1
            )));
        }

        let mut next = position.clone();
        next.available[t] = false;
        next.available[t + 1] = false;
        let link = t as u16;
        let at = next.links.partition_point(|&l| l < link);
        next.links.insert(at, link);
        Ok(next)
    }

    fn is_terminal(&self, position: &TowerPosition) -> bool {
        !position
            .available
            .windows(2)
            .any(|pair| pair[0] && pair[1])
    }
}

impl Oracle for TowerConnection {
    fn is_winning(&self, position: &TowerPosition) -> bool {
        search::solve(self, position)
    }
}

impl Setup for TowerConnection {
    fn random_position(&self, difficulty: Difficulty, rng: &mut GameRng) -> TowerPosition {
        let count = match difficulty {
            Difficulty::Easy => 5 + rng.gen_range_usize(0..2),
            Difficulty::Medium => 7 + rng.gen_range_usize(0..2),
            Difficulty::Hard => 9 + rng.gen_range_usize(0..2),
            Difficulty::Insane => 11 + rng.gen_range_usize(0..2),
        };
        TowerPosition::new(count)
    }

    fn fallback_position(&self) -> TowerPosition {
        // A row of 6 is a first-mover win (verified in tests via the search).
        TowerPosition::new(6)
    }
}
