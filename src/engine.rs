//! The game state engine: snapshot history, cursor, and move application.

use crate::error::EngineError;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of submitting a move to the engine.
///
/// A rejected move leaves the engine untouched. Rejection is deliberate
/// policy rather than an error: the UI forwards every click and the engine
/// decides, so callers (and tests) can still tell "ignored on purpose"
/// apart from "nothing happened because of a bug".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was applied; history grew by one snapshot.
    Applied,
    /// The move was ignored and no state changed.
    Rejected(RejectReason),
}

/// Why a well-formed move was ignored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum RejectReason {
    /// The target cell already holds a mark.
    #[display("{_0} is already occupied")]
    CellOccupied(Position),
    /// The snapshot under the cursor already has a winner.
    #[display("Game is already won by {_0}")]
    GameOver(Player),
}

/// The tic-tac-toe timeline engine.
///
/// Owns the full game state: an append-only history of board snapshots and
/// a cursor selecting which snapshot is live. `history[0]` is always the
/// empty board, and each later snapshot differs from its predecessor by
/// exactly one cell going from empty to a mark. Whose turn it is falls out
/// of cursor parity and is never stored.
///
/// Jumping the cursor backwards and then moving truncates the abandoned
/// future before appending, so history always describes one line of play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    /// Board snapshots, oldest first. Never empty.
    history: Vec<Board>,
    /// Index of the snapshot currently displayed.
    cursor: usize,
}

impl Engine {
    /// Creates a new engine holding a single empty snapshot.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Re-initializes history and cursor, discarding the game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history = vec![Board::new()];
        self.cursor = 0;
    }

    /// The snapshot under the cursor.
    pub fn board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the snapshot currently displayed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The player who moves next from the current cursor position.
    pub fn current_player(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// Applies a move at the given cell index (0-8, row-major).
    ///
    /// On success the future beyond the cursor (if any) is discarded, the
    /// new snapshot is appended, and the cursor advances onto it. A move
    /// onto an occupied cell, or while the snapshot under the cursor
    /// already has a winner, is rejected without changing any state.
    ///
    /// The winner check applies to the snapshot under the cursor only: a
    /// win recorded on a later snapshot never blocks a move made after
    /// jumping back, consistent with time-travel truncation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] when `cell >= 9`.
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.current_player()))]
    pub fn apply_move(&mut self, cell: usize) -> Result<MoveOutcome, EngineError> {
        let pos = Position::from_index(cell).ok_or(EngineError::InvalidIndex {
            index: cell,
            bound: 9,
        })?;

        let current = &self.history[self.cursor];
        if let Some(winner) = rules::check_winner(current) {
            return Ok(MoveOutcome::Rejected(RejectReason::GameOver(winner)));
        }
        if !current.is_empty(pos) {
            return Ok(MoveOutcome::Rejected(RejectReason::CellOccupied(pos)));
        }

        let mut next = current.clone();
        next.set(pos, Square::Occupied(self.current_player()));

        // Drop the abandoned future before appending.
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor += 1;

        Ok(MoveOutcome::Applied)
    }

    /// Moves the cursor to a prior (or later) snapshot.
    ///
    /// History is untouched; only the cursor and the derived turn change.
    /// Jumping remains legal after a win, so a finished game can still be
    /// reviewed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] when `step` does not index an
    /// existing snapshot. The UI only ever offers valid steps, so an
    /// out-of-range step is a caller bug worth surfacing.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        if step >= self.history.len() {
            return Err(EngineError::InvalidIndex {
                index: step,
                bound: self.history.len(),
            });
        }
        self.cursor = step;
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
