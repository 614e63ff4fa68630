//! Configurable keyboard accelerators for rich-text surfaces
//!
//! This module provides a data-driven keybinding system that:
//! - Maps keystrokes to formatting commands
//! - Ships defaults as an embedded keymap.yaml
//! - Enables customization via an override YAML file
//!
//! # Architecture
//!
//! ```text
//! KeyboardEvent → keystroke_from_dom() → Keymap::lookup() → FormatCommand
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Embedded defaults only
//! let keymap = Keymap::with_bindings(load_default_keymap(None));
//!
//! // Defaults merged with an override file
//! let keymap = Keymap::with_bindings(load_default_keymap(Some(path)));
//! ```

mod binding;
mod command;
mod config;
mod defaults;
mod dom_adapter;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use defaults::{default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings};
pub use dom_adapter::keystroke_from_dom;
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
