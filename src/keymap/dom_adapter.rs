//! Adapter to convert host keyboard events to our Keystroke type

use super::config::parse_key_code;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Convert a `KeyboardEvent` (its `key` value plus modifier flags) to a
/// Keystroke
///
/// Returns None for keys no accelerator can use: modifier-only presses,
/// dead keys, navigation and media keys.
pub fn keystroke_from_dom(
    key: &str,
    ctrl: bool,
    shift: bool,
    alt: bool,
    meta: bool,
) -> Option<Keystroke> {
    let mods = Modifiers::new(ctrl, shift, alt, meta);

    let key_code = match key {
        " " => KeyCode::Space,
        "Control" | "Shift" | "Alt" | "Meta" | "Dead" | "Unidentified" => return None,
        _ => parse_key_code(&key.to_lowercase()).ok()?,
    };

    Some(Keystroke::new(key_code, mods))
}
