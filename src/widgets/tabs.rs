//! Same-page tab navigation

use crate::commands::Cmd;
use crate::dom::{Document, NodeId, Selector};

fn tab_links(doc: &Document) -> Vec<NodeId> {
    doc.query_all(doc.root(), &Selector::parse(".nav-tabs .nav-link"))
}

/// The tab link at or around `node`, if any
pub fn tab_link_at(doc: &Document, node: NodeId) -> Option<NodeId> {
    let links = tab_links(doc);
    doc.closest(node, |_, n| links.contains(&n))
}

/// Activate a clicked tab link.
///
/// Links to other pages are left to default navigation, as are clicks on
/// the already active tab. Otherwise the link becomes the only active tab,
/// every pane is hidden, and the pane named by the link's fragment shown.
pub fn click_tab(doc: &mut Document, link: NodeId) -> Option<Cmd> {
    if doc.has_class(link, "active") {
        return None;
    }
    let href = doc.attr(link, "href").map(str::to_string);
    if href.as_deref().is_some_and(|h| !h.starts_with('#')) {
        return None;
    }

    for tab in tab_links(doc) {
        doc.remove_class(tab, "active");
    }
    doc.add_class(link, "active");

    for pane in doc.query_all(doc.root(), &Selector::parse(".tab-content .tab-pane")) {
        doc.remove_class(pane, "show");
        doc.remove_class(pane, "active");
    }

    let target = href
        .as_deref()
        .and_then(|h| h.split('#').nth(1))
        .filter(|id| !id.is_empty())
        .and_then(|id| doc.by_id(id));
    if let Some(pane) = target {
        doc.add_class(pane, "show");
        doc.add_class(pane, "active");
    }
    tracing::debug!("Switched tab to {}", href.as_deref().unwrap_or(""));

    Some(Cmd::PreventDefault)
}
