//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Evaluation order is fixed as listed; the first uniform non-empty
/// line wins. Unreachable in a legal game to have two, since moves stop
/// once a winner exists, but the order keeps the function deterministic.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if that player holds three in a row,
/// `None` otherwise. A full drawn board also returns `None`; use
/// [`super::outcome`] to distinguish a draw from a game in progress.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let occ = board.get(a);
        if occ != Square::Empty && occ == board.get(b) && occ == board.get(c) {
            if let Square::Occupied(player) = occ {
                return Some(player);
            }
        }
    }

    None
}
