//! Finding qualifying source fields

use crate::config::BinderConfig;
use crate::dom::{Document, NodeId};

/// Whether `node` is a container that stays hidden until shown
pub fn is_deferred_region(doc: &Document, node: NodeId, config: &BinderConfig) -> bool {
    let Some(el) = doc.element(node) else {
        return false;
    };
    if config.deferred_classes.iter().any(|c| el.has_class(c)) {
        return true;
    }
    el.id().is_some_and(|id| {
        config
            .deferred_id_prefixes
            .iter()
            .any(|prefix| id.starts_with(prefix.as_str()))
    })
}

/// Whether any ancestor of `node` is a deferred region
pub fn in_deferred_region(doc: &Document, node: NodeId, config: &BinderConfig) -> bool {
    doc.ancestors(node)
        .any(|ancestor| is_deferred_region(doc, ancestor, config))
}

/// Field tag and role match, ignoring where the field sits
pub fn has_qualifying_role(doc: &Document, node: NodeId, config: &BinderConfig) -> bool {
    doc.has_tag(node, &config.field_tag)
        && doc
            .attr(node, "name")
            .is_some_and(|name| config.roles.iter().any(|role| role == name))
}

/// Fields to bind at startup: matching role, outside any deferred region
pub fn startup_fields(doc: &Document, config: &BinderConfig) -> Vec<NodeId> {
    doc.descendants(doc.root())
        .into_iter()
        .filter(|&n| has_qualifying_role(doc, n, config) && !in_deferred_region(doc, n, config))
        .collect()
}

/// Fields to bind when `region` is shown: every matching role inside it
pub fn region_fields(doc: &Document, region: NodeId, config: &BinderConfig) -> Vec<NodeId> {
    doc.descendants(region)
        .into_iter()
        .filter(|&n| has_qualifying_role(doc, n, config))
        .collect()
}
