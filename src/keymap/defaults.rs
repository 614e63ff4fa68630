//! Default keybindings for rich-text surfaces
//!
//! The defaults ship as keymap.yaml at the project root, embedded at compile
//! time. A hardcoded table is the fallback if that file ever fails to parse.

use std::path::Path;

use crate::editable::FormatCommand;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. `override_path`, when given and present
///
/// Override bindings with `command: Unbound` remove matching default bindings.
pub fn load_default_keymap(override_path: Option<&Path>) -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    let Some(path) = override_path else {
        return bindings;
    };
    if !path.exists() {
        tracing::debug!("No keymap override at {}", path.display());
        return bindings;
    }

    match load_keymap_file(path) {
        Ok(overrides) => {
            tracing::info!(
                "Merging keymap from {} ({} bindings)",
                path.display(),
                overrides.len()
            );
            bindings = merge_bindings(bindings, overrides);
        }
        Err(e) => {
            tracing::warn!("Failed to load keymap from {}: {}", path.display(), e);
        }
    }

    bindings
}

/// Merge override bindings into base bindings
///
/// - If an override has the same keystroke → replaces base
/// - If an override command is `Unbound` → removes matching base bindings
/// - Otherwise → the override is added
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke)
        {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded default bindings
pub fn default_bindings() -> Vec<Keybinding> {
    let ctrl = Modifiers::CTRL;

    vec![
        bind(KeyCode::Char('b'), ctrl, FormatCommand::Bold),
        bind(KeyCode::Char('i'), ctrl, FormatCommand::Italic),
        bind(KeyCode::Char('u'), ctrl, FormatCommand::Underline),
    ]
}

/// Helper to create a keybinding
fn bind(key: KeyCode, mods: Modifiers, command: FormatCommand) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl_b() -> Keystroke {
        Keystroke::new(KeyCode::Char('b'), Modifiers::CTRL)
    }

    fn ctrl_i() -> Keystroke {
        Keystroke::new(KeyCode::Char('i'), Modifiers::CTRL)
    }

    fn ctrl_k() -> Keystroke {
        Keystroke::new(KeyCode::Char('k'), Modifiers::CTRL)
    }

    #[test]
    fn test_default_bindings_cover_toggles() {
        let bindings = default_bindings();
        for toggle in FormatCommand::TOGGLES {
            assert!(
                bindings.iter().any(|b| b.command == Command::Format(toggle)),
                "Should have a binding for {toggle}"
            );
        }
    }

    #[test]
    fn test_embedded_yaml_matches_hardcoded_defaults() {
        let parsed = parse_keymap_yaml(get_default_keymap_yaml()).unwrap();
        assert_eq!(parsed, default_bindings());
    }

    #[test]
    fn test_merge_empty_user_returns_base() {
        let base = vec![Keybinding::new(ctrl_b(), FormatCommand::Bold)];

        let merged = merge_bindings(base, vec![]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].command, Command::Format(FormatCommand::Bold));
    }

    #[test]
    fn test_merge_adds_new_binding() {
        let base = vec![Keybinding::new(ctrl_b(), FormatCommand::Bold)];
        let user = vec![Keybinding::new(ctrl_k(), FormatCommand::CreateLink)];

        let merged = merge_bindings(base, user);
        assert_eq!(merged.len(), 2);
        assert!(merged
            .iter()
            .any(|b| b.command == Command::Format(FormatCommand::CreateLink)));
    }

    #[test]
    fn test_merge_overrides_existing() {
        let base = vec![Keybinding::new(ctrl_b(), FormatCommand::Bold)];
        // Remap Ctrl+B to RemoveFormat
        let user = vec![Keybinding::new(ctrl_b(), FormatCommand::RemoveFormat)];

        let merged = merge_bindings(base, user);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].command, Command::Format(FormatCommand::RemoveFormat));
    }

    #[test]
    fn test_merge_unbound_removes_binding() {
        let base = vec![
            Keybinding::new(ctrl_b(), FormatCommand::Bold),
            Keybinding::new(ctrl_i(), FormatCommand::Italic),
        ];
        let user = vec![Keybinding::new(ctrl_b(), Command::Unbound)];

        let merged = merge_bindings(base, user);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].command, Command::Format(FormatCommand::Italic));
    }

    #[test]
    fn test_merge_unbound_on_nonexistent_is_noop() {
        let base = vec![Keybinding::new(ctrl_b(), FormatCommand::Bold)];
        let user = vec![Keybinding::new(ctrl_k(), Command::Unbound)];

        let merged = merge_bindings(base, user);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_load_without_override_uses_embedded() {
        let bindings = load_default_keymap(None);
        assert_eq!(bindings, default_bindings());

        let missing = Path::new("/nonexistent/dashboard-ui/keymap.yaml");
        assert_eq!(load_default_keymap(Some(missing)), default_bindings());
    }
}
