//! Draw detection logic.

use super::win::check_winner;
use crate::types::Board;

/// Checks if the board is a draw: every square filled and no winner.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
