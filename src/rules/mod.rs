//! Pure rule functions: win detection, draw detection, outcome evaluation.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::check_winner;

use crate::types::{Board, Outcome};

/// Evaluates a board: won, drawn, or still in progress.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
