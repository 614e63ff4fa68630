//! Per-field binding state

use crate::dom::NodeId;
use crate::editable::{FormatCommand, Selection};

/// Stable handle to a binding, valid for the binder's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(pub usize);

/// Last computed active state of the toggleable commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl ToggleState {
    pub fn get(&self, command: FormatCommand) -> bool {
        match command {
            FormatCommand::Bold => self.bold,
            FormatCommand::Italic => self.italic,
            FormatCommand::Underline => self.underline,
            _ => false,
        }
    }

    pub fn set(&mut self, command: FormatCommand, active: bool) {
        match command {
            FormatCommand::Bold => self.bold = active,
            FormatCommand::Italic => self.italic = active,
            FormatCommand::Underline => self.underline = active,
            _ => {}
        }
    }

    pub fn any(&self) -> bool {
        self.bold || self.italic || self.underline
    }
}

/// A toolbar button and the command it dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarButton {
    pub node: NodeId,
    pub command: FormatCommand,
}

/// One source field paired with its editable surface
#[derive(Debug, Clone)]
pub struct Binding {
    pub id: BindingId,
    /// The form field whose value is submitted
    pub source_field: NodeId,
    pub container: NodeId,
    pub toolbar: NodeId,
    /// The contenteditable element
    pub surface: NodeId,
    /// The `<span>` holding "N characters"
    pub counter: NodeId,
    pub buttons: Vec<ToolbarButton>,
    pub selection: Option<Selection>,
    pub focused: bool,
    pub toggles: ToggleState,
    pub character_count: usize,
}

impl Binding {
    pub fn button_for(&self, command: FormatCommand) -> Option<NodeId> {
        self.buttons
            .iter()
            .find(|b| b.command == command)
            .map(|b| b.node)
    }

    pub fn command_for(&self, button: NodeId) -> Option<FormatCommand> {
        self.buttons
            .iter()
            .find(|b| b.node == button)
            .map(|b| b.command)
    }

    /// Whether a command has somewhere to apply
    pub fn is_active(&self) -> bool {
        self.focused || self.selection.is_some()
    }
}
