//! Toolbar construction

use crate::dom::{Document, Element, NodeId};
use crate::editable::{Alignment, BlockTag, FormatCommand, ListKind};
use crate::keymap::Keymap;

use super::binding::ToolbarButton;

struct ButtonSpec {
    group: usize,
    command: FormatCommand,
    icon: &'static str,
    icon_extra: Option<&'static str>,
    title: &'static str,
}

const GROUP_COUNT: usize = 6;

const fn button(
    group: usize,
    command: FormatCommand,
    icon: &'static str,
    title: &'static str,
) -> ButtonSpec {
    ButtonSpec {
        group,
        command,
        icon,
        icon_extra: None,
        title,
    }
}

impl ButtonSpec {
    /// Smaller icon for the lower heading levels
    const fn small(mut self) -> Self {
        self.icon_extra = Some("fa-xs");
        self
    }
}

const BUTTONS: &[ButtonSpec] = &[
    // Text formatting
    button(0, FormatCommand::Bold, "fas fa-bold", "Bold"),
    button(0, FormatCommand::Italic, "fas fa-italic", "Italic"),
    button(0, FormatCommand::Underline, "fas fa-underline", "Underline"),
    button(
        0,
        FormatCommand::RemoveFormat,
        "fas fa-eraser",
        "Clear Formatting",
    ),
    // Paragraph
    button(
        1,
        FormatCommand::FormatBlock(BlockTag::Heading1),
        "fas fa-heading",
        "Heading 1",
    ),
    button(
        1,
        FormatCommand::FormatBlock(BlockTag::Heading2),
        "fas fa-heading",
        "Heading 2",
    )
    .small(),
    button(
        1,
        FormatCommand::FormatBlock(BlockTag::Heading3),
        "fas fa-heading",
        "Heading 3",
    )
    .small(),
    button(
        1,
        FormatCommand::FormatBlock(BlockTag::Paragraph),
        "fas fa-paragraph",
        "Paragraph",
    ),
    // Lists
    button(
        2,
        FormatCommand::InsertList(ListKind::Unordered),
        "fas fa-list-ul",
        "Bullet List",
    ),
    button(
        2,
        FormatCommand::InsertList(ListKind::Ordered),
        "fas fa-list-ol",
        "Numbered List",
    ),
    // Alignment
    button(
        3,
        FormatCommand::Justify(Alignment::Left),
        "fas fa-align-left",
        "Align Left",
    ),
    button(
        3,
        FormatCommand::Justify(Alignment::Center),
        "fas fa-align-center",
        "Align Center",
    ),
    button(
        3,
        FormatCommand::Justify(Alignment::Right),
        "fas fa-align-right",
        "Align Right",
    ),
    button(
        3,
        FormatCommand::Justify(Alignment::Full),
        "fas fa-align-justify",
        "Justify",
    ),
    // Indentation
    button(4, FormatCommand::Indent, "fas fa-indent", "Indent"),
    button(4, FormatCommand::Outdent, "fas fa-outdent", "Outdent"),
    // Links
    button(5, FormatCommand::CreateLink, "fas fa-link", "Insert Link"),
    button(5, FormatCommand::Unlink, "fas fa-unlink", "Remove Link"),
];

/// Button title, with the accelerator appended for toggles ("Bold (Ctrl+B)")
fn button_title(spec: &ButtonSpec, keymap: &Keymap) -> String {
    if !spec.command.is_toggle() {
        return spec.title.to_string();
    }
    match keymap.display_for(spec.command) {
        Some(keys) => format!("{} ({})", spec.title, keys),
        None => spec.title.to_string(),
    }
}

/// Build a detached `div.rich-text-toolbar` with every button
pub fn build_toolbar(doc: &mut Document, keymap: &Keymap) -> (NodeId, Vec<ToolbarButton>) {
    let toolbar =
        doc.create_element_from(Element::new("div").with_attr("class", "rich-text-toolbar"));
    let groups: Vec<NodeId> = (0..GROUP_COUNT)
        .map(|_| {
            let group =
                doc.create_element_from(Element::new("div").with_attr("class", "toolbar-group"));
            doc.append_child(toolbar, group);
            group
        })
        .collect();

    let mut buttons = Vec::with_capacity(BUTTONS.len());
    for spec in BUTTONS {
        let mut element = Element::new("button")
            .with_attr("type", "button")
            .with_attr("class", "toolbar-button")
            .with_attr("title", &button_title(spec, keymap))
            .with_attr("data-command", spec.command.name());
        if let Some(value) = spec.command.value() {
            element = element.with_attr("data-value", value);
        }
        let button = doc.create_element_from(element);

        let mut icon = Element::new("i").with_attr("class", spec.icon);
        if let Some(extra) = spec.icon_extra {
            icon.add_class(extra);
        }
        let icon = doc.create_element_from(icon);
        doc.append_child(button, icon);

        doc.append_child(groups[spec.group], button);
        buttons.push(ToolbarButton {
            node: button,
            command: spec.command,
        });
    }

    (toolbar, buttons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Selector;
    use crate::keymap::default_bindings;

    #[test]
    fn test_toolbar_layout() {
        let mut doc = Document::new();
        let keymap = Keymap::with_bindings(default_bindings());
        let (toolbar, buttons) = build_toolbar(&mut doc, &keymap);

        assert_eq!(doc.children(toolbar).len(), 6);
        assert_eq!(buttons.len(), 18);
        let counts: Vec<usize> = doc
            .children(toolbar)
            .iter()
            .map(|&g| doc.children(g).len())
            .collect();
        assert_eq!(counts, vec![4, 4, 2, 4, 2, 2]);
    }

    #[test]
    fn test_button_markup() {
        let mut doc = Document::new();
        let keymap = Keymap::with_bindings(default_bindings());
        let (toolbar, _) = build_toolbar(&mut doc, &keymap);

        let bold = doc
            .query(toolbar, &Selector::parse("button[data-command=\"bold\"]"))
            .unwrap();
        assert_eq!(doc.attr(bold, "title"), Some("Bold (Ctrl+B)"));
        assert_eq!(doc.attr(bold, "type"), Some("button"));
        assert_eq!(doc.attr(bold, "data-value"), None);

        let h2 = doc
            .query(toolbar, &Selector::parse("button[data-value=\"h2\"]"))
            .unwrap();
        assert_eq!(doc.attr(h2, "data-command"), Some("formatBlock"));
        assert_eq!(
            doc.outer_html(h2),
            "<button type=\"button\" class=\"toolbar-button\" title=\"Heading 2\" data-command=\"formatBlock\" data-value=\"h2\"><i class=\"fas fa-heading fa-xs\"></i></button>"
        );
    }

    #[test]
    fn test_titles_follow_keymap() {
        let mut doc = Document::new();
        let (toolbar, _) = build_toolbar(&mut doc, &Keymap::new());
        let bold = doc
            .query(toolbar, &Selector::parse("button[data-command=\"bold\"]"))
            .unwrap();
        assert_eq!(doc.attr(bold, "title"), Some("Bold"));
    }
}
