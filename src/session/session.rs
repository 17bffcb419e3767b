//! The game session: the engine's only stateful component.
//!
//! A session owns the current position and drives turn alternation. Its
//! lifecycle is `IN_PROGRESS` until a move empties the move set, then
//! terminal forever; restarting means constructing a new session. Every
//! position it holds was produced by `Ruleset::apply`, so the immutability
//! invariant (moves produce new positions, never mutate) holds end to end.
//!
//! Under the normal play convention the player who makes the last legal
//! move wins: terminality is checked after each applied move and the mover
//! is recorded as the winner.

use serde::{Deserialize, Serialize};

use crate::ai::{self, Hint, MoveSelector};
use crate::core::{Controller, Difficulty, DifficultyProfile, GameError, GameMode, GameRng, Player};
use crate::rules::{Oracle, Setup};

use super::setup;

/// A move taken during the session, with attribution for replay and
/// presentation (for instance, which player drew each tower link).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord<M> {
    pub player: Player,
    pub mv: M,
    /// 0-based move number within the session.
    pub turn: u32,
}

/// What a successfully applied move did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub game_over: bool,
    pub winner: Option<Player>,
}

/// A running game of one variant.
///
/// `Player::One` (always human) moves first. In `Pve` mode `Player::Two` is
/// the engine and moves only through [`GameSession::engine_move`].
#[derive(Clone, Debug)]
pub struct GameSession<R: Oracle + Setup> {
    rules: R,
    position: R::Position,
    mode: GameMode,
    difficulty: Difficulty,
    profile: DifficultyProfile,
    current: Player,
    over: bool,
    winner: Option<Player>,
    turn: u32,
    history: Vec<MoveRecord<R::Move>>,
    selector: MoveSelector,
}

impl<R: Oracle + Setup> GameSession<R> {
    /// Start a session: construct a starting position (biased toward a
    /// winning start for the human in `Pve`, capped retries with a fixed
    /// fallback) and hand the first turn to `Player::One`.
    ///
    /// The same `(rules, mode, difficulty, seed)` tuple reproduces the same
    /// session, including every engine move.
    #[must_use]
    pub fn new(rules: R, mode: GameMode, difficulty: Difficulty, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let position = setup::starting_position(&rules, mode, difficulty, &mut rng);
        // Distinct stream for the selector so longer construction runs do
        // not shift the opponent's draws.
        let selector = MoveSelector::new(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1));

        Self {
            rules,
            position,
            mode,
            difficulty,
            profile: difficulty.profile(),
            current: Player::One,
            over: false,
            winner: None,
            turn: 0,
            history: Vec::new(),
            selector,
        }
    }

    /// Start from an explicit position instead of a random construction.
    ///
    /// Used by callers restoring a known layout and by tests.
    ///
    /// # Panics
    ///
    /// Panics if `position` is already terminal.
    #[must_use]
    pub fn with_position(
        rules: R,
        position: R::Position,
        mode: GameMode,
        difficulty: Difficulty,
        seed: u64,
    ) -> Self {
        assert!(
            !rules.is_terminal(&position),
            "cannot start a session on a terminal position"
        );
        let mut session = Self::new(rules, mode, difficulty, seed);
        session.position = position;
        session
    }

    // === Accessors ===

    #[must_use]
    pub fn position(&self) -> &R::Position {
        &self.position
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Who controls the seat about to move.
    #[must_use]
    pub fn current_controller(&self) -> Controller {
        self.mode.controller(self.current)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Moves taken so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord<R::Move>] {
        &self.history
    }

    // === Queries ===

    /// All legal moves from the current position; empty iff the session is
    /// over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<R::Move> {
        self.rules.legal_moves(&self.position)
    }

    /// Can the player about to move force a win?
    ///
    /// # Panics
    ///
    /// Panics on a finished session; there is no player to move.
    #[must_use]
    pub fn is_winning_position(&self) -> bool {
        assert!(!self.over, "no player to move on a finished session");
        self.rules.is_winning(&self.position)
    }

    /// Recommend a move for the player about to move, with its rationale.
    ///
    /// # Panics
    ///
    /// Panics on a finished session.
    #[must_use]
    pub fn hint(&self) -> Hint<R::Move> {
        assert!(!self.over, "no hint on a finished session");
        ai::hint(&self.rules, &self.position)
    }

    // === Transitions ===

    /// Validate and apply a move for the player about to move.
    ///
    /// An illegal move errors and leaves the session untouched. A move that
    /// empties the move set ends the session with the mover as winner;
    /// otherwise the turn passes to the opponent.
    pub fn make_move(&mut self, mv: &R::Move) -> Result<MoveOutcome, GameError> {
        if self.over {
            return Err(GameError::SelectorOnTerminal);
        }

        let next = self.rules.apply(&self.position, mv)?;

        self.history.push(MoveRecord {
            player: self.current,
            mv: mv.clone(),
            turn: self.turn,
        });
        self.position = next;
        self.turn += 1;

        if self.rules.is_terminal(&self.position) {
            self.over = true;
            self.winner = Some(self.current);
        } else {
            self.switch_player();
        }

        Ok(MoveOutcome {
            game_over: self.over,
            winner: self.winner,
        })
    }

    /// Let the engine take its turn.
    ///
    /// Errors with `EngineOutOfTurn` when the seat about to move is
    /// human-controlled and `SelectorOnTerminal` on a finished session;
    /// both are caller bugs and are propagated unchanged.
    pub fn engine_move(&mut self) -> Result<MoveOutcome, GameError> {
        if self.over {
            return Err(GameError::SelectorOnTerminal);
        }
        if self.current_controller() != Controller::Engine {
            return Err(GameError::EngineOutOfTurn);
        }

        let mv = self
            .selector
            .select_move(&self.rules, &self.position, &self.profile);
        self.make_move(&mv)
    }

    fn switch_player(&mut self) {
        self.current = self.current.opponent();
    }
}
