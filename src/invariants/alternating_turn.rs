//! Alternating turn invariant: marks appear in X, O, X, O order.

use super::Invariant;
use crate::engine::Engine;
use crate::position::Position;
use crate::types::{Player, Square};

/// Invariant: the mark added between snapshot `k` and `k + 1` belongs to
/// `Player::for_step(k)` - X for even `k`, O for odd `k`.
///
/// Together with [`super::SnapshotChainInvariant`] this pins down turn
/// alternation: since turn is derived from cursor parity rather than
/// stored, this is the check that derivation and history agree.
pub struct AlternatingTurnInvariant;

impl Invariant for AlternatingTurnInvariant {
    fn holds(engine: &Engine) -> bool {
        for (step, pair) in engine.history().windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            let expected = Player::for_step(step);

            for pos in Position::ALL {
                if prev.get(pos) != next.get(pos) {
                    match next.get(pos) {
                        Square::Occupied(player) if player == expected => {}
                        _ => return false,
                    }
                }
            }
        }

        true
    }

    fn description() -> &'static str {
        "Marks alternate: snapshot k+1 adds X when k is even, O when odd"
    }
}
