//! Derived rendering data: status line and timeline labels.
//!
//! The engine exposes plain data here; layout, styling, and event binding
//! belong to the rendering collaborator.

use crate::engine::Engine;
use crate::rules;
use crate::types::Outcome;
use derive_getters::Getters;
use serde::Serialize;

/// One entry in the move-history list offered to the user.
///
/// `step` is a valid argument for [`Engine::jump_to`]; `label` is the text
/// shown on the corresponding control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct TimelineEntry {
    /// History index this entry navigates to.
    step: usize,
    /// Display text for the navigation control.
    label: String,
}

impl Engine {
    /// Status line for the snapshot under the cursor.
    ///
    /// `"Winner X"` / `"Winner O"` once a line is complete, `"Draw"` on a
    /// full board with no winner, otherwise `"Next player:X"` /
    /// `"Next player:O"`.
    pub fn status(&self) -> String {
        match rules::outcome(self.board()) {
            Outcome::Won(winner) => format!("Winner {winner}"),
            Outcome::Draw => "Draw".to_string(),
            Outcome::InProgress => format!("Next player:{}", self.current_player()),
        }
    }

    /// Navigation entries, one per snapshot, oldest first.
    pub fn timeline(&self) -> Vec<TimelineEntry> {
        (0..self.history().len())
            .map(|step| TimelineEntry {
                step,
                label: if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move # {step}")
                },
            })
            .collect()
    }
}
