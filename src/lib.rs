//! Tic-tac-toe timeline engine - a pure game state machine with time travel.
//!
//! The crate owns exactly one piece of state: an append-only history of
//! board snapshots plus a cursor selecting the live snapshot. A rendering
//! collaborator (DOM, TUI, anything) displays what the engine exposes and
//! forwards clicks back in; the engine itself performs no I/O.
//!
//! # Architecture
//!
//! - **Engine**: history/cursor state machine ([`Engine`])
//! - **Rules**: pure win/draw evaluation ([`rules`])
//! - **View**: derived status line and timeline labels ([`TimelineEntry`])
//! - **Invariants**: reachable-state checks for tests ([`invariants`])
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{Engine, MoveOutcome};
//!
//! let mut engine = Engine::new();
//! engine.apply_move(4)?; // X takes the center
//! assert_eq!(engine.status(), "Next player:O");
//!
//! // Clicking an occupied cell is ignored, not an error.
//! assert!(matches!(engine.apply_move(4)?, MoveOutcome::Rejected(_)));
//!
//! // Time travel: jump back, move again, and the old future is gone.
//! engine.jump_to(0)?;
//! engine.apply_move(0)?;
//! assert_eq!(engine.history().len(), 2);
//! # Ok::<(), tictactoe_timeline::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod error;
mod position;
mod types;
mod view;

// Public rule and invariant surfaces
pub mod invariants;
pub mod rules;

// Crate-level exports - engine and transitions
pub use engine::{Engine, MoveOutcome, RejectReason};

// Crate-level exports - errors
pub use error::EngineError;

// Crate-level exports - domain types
pub use position::Position;
pub use types::{Board, Outcome, Player, Square};

// Crate-level exports - rendering data
pub use view::TimelineEntry;
