//! Reachable-state invariants for the timeline engine.
//!
//! Every state the engine can reach through `apply_move` and `jump_to`
//! satisfies these checks. They are exposed so tests (and debugging
//! sessions) can validate an engine wholesale instead of re-deriving the
//! properties ad hoc.

mod alternating_turn;
mod snapshot_chain;

pub use alternating_turn::AlternatingTurnInvariant;
pub use snapshot_chain::SnapshotChainInvariant;

use crate::engine::Engine;

/// A property that holds for every reachable engine state.
pub trait Invariant {
    /// Returns true when the invariant holds for this engine.
    fn holds(engine: &Engine) -> bool;

    /// Human-readable description of the property.
    fn description() -> &'static str;
}

/// Checks all invariants, returning the description of the first violated
/// one.
pub fn check_all(engine: &Engine) -> Result<(), &'static str> {
    if !SnapshotChainInvariant::holds(engine) {
        return Err(SnapshotChainInvariant::description());
    }
    if !AlternatingTurnInvariant::holds(engine) {
        return Err(AlternatingTurnInvariant::description());
    }
    Ok(())
}
