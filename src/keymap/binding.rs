//! Keybinding struct representing a mapping from a keystroke to a command

use super::command::Command;
use super::types::Keystroke;

/// A single keybinding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: impl Into<Command>) -> Self {
        Self {
            keystroke,
            command: command.into(),
        }
    }

    pub fn matches(&self, keystroke: &Keystroke) -> bool {
        self.keystroke == *keystroke
    }

    /// Get display string for this keybinding
    pub fn display_string(&self) -> String {
        self.keystroke.display_string()
    }
}
