//! Surface-to-field synchronization and the character counter

mod common;

use common::*;
use dashboard_ui::editable::Selection;
use dashboard_ui::messages::{EditorMsg, Msg};
use dashboard_ui::update;

#[test]
fn test_backspace_updates_value_and_counter() {
    let mut host = ScriptedHost::new();
    let mut model = loaded_model(&notes_page("hello"), &mut host);
    let surface = first_binding(&model).surface;

    update(&mut model, Msg::Editor(EditorMsg::Focus(surface)), &mut host);
    for _ in 0..3 {
        update(&mut model, Msg::Editor(EditorMsg::DeleteBackward(surface)), &mut host);
    }

    assert_eq!(field_value(&model), "he");
    assert_eq!(counter_text(&model), "2 characters");
}

#[test]
fn test_typing_replaces_selection() {
    let mut host = ScriptedHost::new();
    let mut model = loaded_model(&notes_page("<b>hello</b> world"), &mut host);
    focus_and_select(&mut model, &mut host, Selection::new(6, 11));
    let surface = first_binding(&model).surface;

    update(
        &mut model,
        Msg::Editor(EditorMsg::InsertText {
            node: surface,
            text: "there".to_string(),
        }),
        &mut host,
    );

    assert_eq!(field_value(&model), "<b>hello</b> there");
    assert_eq!(counter_text(&model), "11 characters");
    assert_eq!(first_binding(&model).selection, Some(Selection::collapsed(11)));
}

#[test]
fn test_counter_counts_characters_not_bytes() {
    let mut host = ScriptedHost::new();
    let model = loaded_model(&notes_page("<p>naïve café</p>"), &mut host);
    assert_eq!(counter_text(&model), "10 characters");
}

#[test]
fn test_delete_forward_at_end_is_noop() {
    let mut host = ScriptedHost::new();
    let mut model = loaded_model(&notes_page("abc"), &mut host);
    let surface = first_binding(&model).surface;
    update(&mut model, Msg::Editor(EditorMsg::Focus(surface)), &mut host);

    update(&mut model, Msg::Editor(EditorMsg::DeleteForward(surface)), &mut host);
    assert_eq!(field_value(&model), "abc");
}

#[test]
fn test_blur_writes_value() {
    let mut host = ScriptedHost::new();
    let mut model = loaded_model(&notes_page("draft"), &mut host);
    let binding = first_binding(&model);
    let (surface, field) = (binding.surface, binding.source_field);

    // Simulate an edit the host applied directly to the surface
    model.document.set_inner_html(surface, "<p>final</p>");
    assert_eq!(model.document.value(field), Some("draft"));

    update(&mut model, Msg::Editor(EditorMsg::Blur(surface)), &mut host);
    assert_eq!(model.document.value(field), Some("<p>final</p>"));
    assert_eq!(counter_text(&model), "5 characters");
    assert!(!first_binding(&model).focused);
}

#[test]
fn test_focus_and_blur_keep_comments() {
    let stored = "<!--StartFragment--><p>x</p><!--EndFragment-->";
    let mut host = ScriptedHost::new();
    let mut model = loaded_model(&notes_page(stored), &mut host);
    let surface = first_binding(&model).surface;
    assert_eq!(counter_text(&model), "1 characters");

    update(&mut model, Msg::Editor(EditorMsg::Focus(surface)), &mut host);
    update(&mut model, Msg::Editor(EditorMsg::Blur(surface)), &mut host);
    assert_eq!(field_value(&model), stored);
    assert_eq!(counter_text(&model), "1 characters");
}

#[test]
fn test_events_resolve_from_nested_targets() {
    let mut host = ScriptedHost::new();
    let mut model = loaded_model(&notes_page("<p><b>deep</b></p>"), &mut host);
    let surface = first_binding(&model).surface;
    let bold = model.document.first_child(model.document.first_child(surface).unwrap()).unwrap();
    let text = model.document.first_child(bold).unwrap();

    update(&mut model, Msg::Editor(EditorMsg::Focus(text)), &mut host);
    assert!(first_binding(&model).focused);
    assert_eq!(first_binding(&model).selection, Some(Selection::collapsed(4)));
}

#[test]
fn test_events_outside_surfaces_ignored() {
    let mut host = ScriptedHost::new();
    let mut model = loaded_model(&notes_page("x"), &mut host);
    let form = model.document.by_id("update-form").unwrap();
    let before = model.html();

    let cmd = update(&mut model, Msg::Editor(EditorMsg::DeleteBackward(form)), &mut host);
    assert_eq!(cmd, None);
    assert_eq!(model.html(), before);
}
