//! Error types for the timeline engine.

use serde::{Deserialize, Serialize};

/// Errors raised by [`crate::Engine`] operations.
///
/// Illegal-but-well-formed moves (occupied cell, game already won) are not
/// errors; they come back as [`crate::MoveOutcome::Rejected`]. Errors are
/// reserved for out-of-bounds indices, which indicate a caller bug rather
/// than a user action the policy ignores.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_more::Error,
)]
pub enum EngineError {
    /// A cell or step index fell outside its valid range.
    #[display("Index {index} is out of bounds (valid range 0..{bound})")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Exclusive upper bound that was violated.
        bound: usize,
    },
}
