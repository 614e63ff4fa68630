//! Configuration system tests
//!
//! Tests for config paths, config-driven binding, and keymap overrides.

mod common;

use common::*;
use dashboard_ui::config_paths;
use dashboard_ui::editable::{BlockTag, FormatCommand, Selection};
use dashboard_ui::keymap::{load_default_keymap, KeyCode, Keymap, Keystroke, Modifiers};
use dashboard_ui::messages::{EditorMsg, Msg, PageMsg};
use dashboard_ui::{update, AppConfig, Cmd, DashboardModel};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_paths_share_app_dir() {
    let Some(dir) = config_paths::config_dir() else {
        return;
    };
    assert!(dir.to_string_lossy().contains("dashboard-ui"));
    assert_eq!(config_paths::config_file(), Some(dir.join("config.yaml")));
    assert_eq!(config_paths::keymap_file(), Some(dir.join("keymap.yaml")));
    assert_eq!(config_paths::logs_dir(), Some(dir.join("logs")));
}

// ========================================================================
// Config-driven binding
// ========================================================================

#[test]
fn test_custom_roles_and_strings() {
    let config = AppConfig::from_yaml(
        "binder:\n  roles: [summary]\n  placeholder: Write the summary\n  deferred_classes: [drawer]\n",
    )
    .unwrap();
    let html = "<textarea name=\"summary\"></textarea>\
                <textarea name=\"notes\"></textarea>\
                <div class=\"drawer\" id=\"d\"><textarea name=\"summary\"></textarea></div>";
    let keymap = Keymap::with_bindings(load_default_keymap(None));
    let mut model = DashboardModel::from_html(html, config, keymap);
    let mut host = ScriptedHost::new();

    update(&mut model, Msg::Page(PageMsg::Loaded), &mut host);
    assert_eq!(model.binder.len(), 1);
    let surface = first_binding(&model).surface;
    assert_eq!(model.document.attr(surface, "placeholder"), Some("Write the summary"));

    let drawer = model.document.by_id("d").unwrap();
    update(&mut model, Msg::Page(PageMsg::RegionShown(drawer)), &mut host);
    assert_eq!(model.binder.len(), 2);
}

#[test]
fn test_config_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "binder:\n  link_rejection: Select some text first.\nwidgets:\n  scroll_delay_ms: 250\n",
    )
    .unwrap();

    let config = AppConfig::load(Some(&path));
    assert_eq!(config.binder.link_rejection, "Select some text first.");
    assert_eq!(config.widgets.scroll_delay_ms, 250);
    assert_eq!(config.widgets.hover_debounce_ms, 50);
}

// ========================================================================
// Keymap overrides
// ========================================================================

#[test]
fn test_keymap_override_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymap.yaml");
    std::fs::write(
        &path,
        "bindings:\n\
         \x20 - key: ctrl+b\n\
         \x20   command: Unbound\n\
         \x20 - key: ctrl+alt+2\n\
         \x20   command: formatBlock\n\
         \x20   value: h2\n",
    )
    .unwrap();

    let keymap = Keymap::with_bindings(load_default_keymap(Some(&path)));
    assert_eq!(keymap.lookup(&Keystroke::new(KeyCode::Char('b'), Modifiers::CTRL)), None);
    assert_eq!(
        keymap.lookup(&Keystroke::new(
            KeyCode::Char('2'),
            Modifiers::new(true, false, true, false)
        )),
        Some(FormatCommand::FormatBlock(BlockTag::Heading2))
    );
    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::Char('i'), Modifiers::CTRL)),
        Some(FormatCommand::Italic)
    );
}

#[test]
fn test_unbound_accelerator_not_shown_or_handled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymap.yaml");
    std::fs::write(&path, "bindings:\n  - key: ctrl+u\n    command: Unbound\n").unwrap();

    let keymap = Keymap::with_bindings(load_default_keymap(Some(&path)));
    let mut model = DashboardModel::from_html(&notes_page("text"), AppConfig::default(), keymap);
    let mut host = ScriptedHost::new();
    update(&mut model, Msg::Page(PageMsg::Loaded), &mut host);
    focus_and_select(&mut model, &mut host, Selection::new(0, 4));

    let underline = first_binding(&model).button_for(FormatCommand::Underline).unwrap();
    assert_eq!(model.document.attr(underline, "title"), Some("Underline"));

    let surface = first_binding(&model).surface;
    let cmd = update(
        &mut model,
        Msg::Editor(EditorMsg::KeyDown {
            node: surface,
            keystroke: Keystroke::new(KeyCode::Char('u'), Modifiers::CTRL),
        }),
        &mut host,
    );
    assert_eq!(cmd, None);
    assert_eq!(field_value(&model), "text");

    // The toolbar button still works
    assert_eq!(click(&mut model, &mut host, FormatCommand::Underline), Some(Cmd::PreventDefault));
    assert_eq!(field_value(&model), "<u>text</u>");
}
