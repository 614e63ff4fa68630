//! Commands a keybinding can trigger

use std::fmt;

use crate::editable::FormatCommand;

/// What a keystroke does inside a focused surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Dispatch a formatting command, exactly as the toolbar would
    Format(FormatCommand),
    /// Removes a default binding when merged over it
    Unbound,
}

impl Command {
    /// Parse the `command` / `value` pair of a keymap entry
    pub fn from_parts(name: &str, value: Option<&str>) -> Option<Self> {
        if name == "Unbound" {
            return Some(Command::Unbound);
        }
        FormatCommand::from_name(name, value).map(Command::Format)
    }

    pub fn format_command(self) -> Option<FormatCommand> {
        match self {
            Command::Format(cmd) => Some(cmd),
            Command::Unbound => None,
        }
    }
}

impl From<FormatCommand> for Command {
    fn from(cmd: FormatCommand) -> Self {
        Command::Format(cmd)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Format(cmd) => write!(f, "{cmd}"),
            Command::Unbound => write!(f, "Unbound"),
        }
    }
}
