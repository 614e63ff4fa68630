//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use crate::editable::FormatCommand;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    /// All registered bindings
    bindings: Vec<Keybinding>,
    /// Fast lookup (indices into bindings)
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding. A later binding for the same keystroke replaces the
    /// earlier one; `Unbound` removes it.
    pub fn add_binding(&mut self, binding: Keybinding) {
        if binding.command == Command::Unbound {
            if let Some(idx) = self.lookup.remove(&binding.keystroke) {
                self.bindings.remove(idx);
                self.reindex();
            }
            return;
        }

        match self.lookup.get(&binding.keystroke) {
            Some(&idx) => self.bindings[idx] = binding,
            None => {
                self.lookup.insert(binding.keystroke, self.bindings.len());
                self.bindings.push(binding);
            }
        }
    }

    fn reindex(&mut self) {
        self.lookup = self
            .bindings
            .iter()
            .enumerate()
            .map(|(idx, b)| (b.keystroke, idx))
            .collect();
    }

    /// Look up the formatting command bound to a keystroke.
    /// Modifiers must match exactly.
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<FormatCommand> {
        let idx = self.lookup.get(keystroke)?;
        self.bindings[*idx].command.format_command()
    }

    /// Get all bindings
    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the keybinding for a command (first match)
    pub fn binding_for(&self, command: FormatCommand) -> Option<&Keybinding> {
        self.bindings
            .iter()
            .find(|b| b.command == Command::Format(command))
    }

    /// Get display string for a command's keybinding
    pub fn display_for(&self, command: FormatCommand) -> Option<String> {
        self.binding_for(command).map(|b| b.display_string())
    }
}
