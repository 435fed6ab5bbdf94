//! Snapshot chain invariant: history is a single line of play.

use super::Invariant;
use crate::engine::Engine;
use crate::position::Position;
use crate::types::Square;

/// Invariant: history forms a well-formed chain of snapshots.
///
/// - History is never empty and `history[0]` is all-empty.
/// - The cursor indexes a valid snapshot.
/// - Each successive snapshot differs from its predecessor in exactly one
///   cell, and that cell goes from empty to occupied. Occupied cells are
///   never altered by later snapshots.
pub struct SnapshotChainInvariant;

impl Invariant for SnapshotChainInvariant {
    fn holds(engine: &Engine) -> bool {
        let history = engine.history();

        let Some(first) = history.first() else {
            return false;
        };
        if Position::ALL.iter().any(|pos| !first.is_empty(*pos)) {
            return false;
        }
        if engine.cursor() >= history.len() {
            return false;
        }

        for pair in history.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let mut changed = 0;
            for pos in Position::ALL {
                match (prev.get(pos), next.get(pos)) {
                    (a, b) if a == b => {}
                    (Square::Empty, Square::Occupied(_)) => changed += 1,
                    // Occupied cell altered or cleared
                    _ => return false,
                }
            }
            if changed != 1 {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "History is a chain: one empty-to-occupied cell change per snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_engine_holds() {
        assert!(SnapshotChainInvariant::holds(&Engine::new()));
    }

    #[test]
    fn test_holds_across_moves_and_jumps() {
        let mut engine = Engine::new();
        for cell in [4, 0, 8, 2] {
            engine.apply_move(cell).unwrap();
            assert!(SnapshotChainInvariant::holds(&engine));
        }
        engine.jump_to(1).unwrap();
        assert!(SnapshotChainInvariant::holds(&engine));
        engine.apply_move(6).unwrap();
        assert!(SnapshotChainInvariant::holds(&engine));
    }
}
