//! "Show More" toggles for overflowing content blocks

use crate::commands::Cmd;
use crate::dom::{Document, Element, NodeId, Selector};
use crate::host::Host;

const SHOW_MORE: &str = "<i class=\"fas fa-chevron-down me-1\"></i> Show More";
const SHOW_LESS: &str = "<i class=\"fas fa-chevron-up me-1\"></i> Show Less";

/// An overflowing `.expandable-content` block and its toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expandable {
    pub content: NodeId,
    pub button: NodeId,
}

/// Add a toggle button after every `.expandable-content` the host reports
/// as overflowing
pub fn init_expandables(doc: &mut Document, host: &dyn Host) -> Vec<Expandable> {
    let containers = doc.query_all(doc.root(), &Selector::parse(".expandable-content"));
    let mut items = Vec::new();
    for content in containers {
        let overflowing = host
            .measure(doc, content)
            .is_some_and(|extent| extent.overflows());
        if !overflowing {
            continue;
        }

        let button = doc.create_element_from(
            Element::new("button")
                .with_attr("class", "expand-button")
                .with_attr("aria-expanded", "false"),
        );
        doc.set_inner_html(button, SHOW_MORE);
        let wrapper =
            doc.create_element_from(Element::new("div").with_attr("class", "text-center"));
        doc.append_child(wrapper, button);
        doc.insert_after(content, wrapper);

        items.push(Expandable { content, button });
    }
    items
}

/// Flip a block between collapsed and expanded. Expanding scrolls the
/// button into view after `scroll_delay_ms`.
pub fn toggle_expandable(
    doc: &mut Document,
    item: Expandable,
    scroll_delay_ms: u64,
) -> Option<Cmd> {
    let expanded = doc.toggle_class(item.content, "expanded");
    if expanded {
        doc.set_inner_html(item.button, SHOW_LESS);
        doc.set_attr(item.button, "aria-expanded", "true");
        Some(Cmd::ScrollIntoView {
            node: item.button,
            delay_ms: scroll_delay_ms,
        })
    } else {
        doc.set_inner_html(item.button, SHOW_MORE);
        doc.set_attr(item.button, "aria-expanded", "false");
        None
    }
}
