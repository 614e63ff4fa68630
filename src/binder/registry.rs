//! Binding registry
//!
//! Owns every binding and remembers which source fields are already bound.
//! A field is reserved before any widget is built, so a re-entrant scan
//! during bind finds it taken.

use std::collections::HashMap;

use crate::dom::{Document, NodeId};

use super::binding::{Binding, BindingId};

#[derive(Debug, Default)]
pub struct Registry {
    by_field: HashMap<NodeId, BindingId>,
    slots: Vec<Option<Binding>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `field`. Returns `None` if it was already claimed.
    pub fn reserve(&mut self, field: NodeId) -> Option<BindingId> {
        if self.by_field.contains_key(&field) {
            return None;
        }
        let id = BindingId(self.slots.len());
        self.slots.push(None);
        self.by_field.insert(field, id);
        Some(id)
    }

    /// Store the finished binding in its reserved slot
    pub fn fill(&mut self, binding: Binding) {
        if let Some(slot) = self.slots.get_mut(binding.id.0) {
            *slot = Some(binding);
        }
    }

    pub fn is_bound(&self, field: NodeId) -> bool {
        self.by_field.contains_key(&field)
    }

    pub fn get(&self, id: BindingId) -> Option<&Binding> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: BindingId) -> Option<&mut Binding> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn for_field(&self, field: NodeId) -> Option<BindingId> {
        self.by_field.get(&field).copied()
    }

    /// Binding whose surface is `node` or contains it
    pub fn for_surface_node(&self, doc: &Document, node: NodeId) -> Option<BindingId> {
        self.iter()
            .find(|b| b.surface == node || doc.is_descendant_of(node, b.surface))
            .map(|b| b.id)
    }

    /// Binding owning a toolbar button (or the button's icon)
    pub fn for_button(&self, doc: &Document, node: NodeId) -> Option<(BindingId, NodeId)> {
        self.iter().find_map(|b| {
            b.buttons
                .iter()
                .find(|btn| btn.node == node || doc.is_descendant_of(node, btn.node))
                .map(|btn| (b.id, btn.node))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_is_exclusive() {
        let mut doc = Document::new();
        let field = doc.create_element("textarea");
        let other = doc.create_element("textarea");

        let mut registry = Registry::new();
        let id = registry.reserve(field).unwrap();
        assert_eq!(registry.reserve(field), None);
        assert!(registry.is_bound(field));
        assert_eq!(registry.for_field(field), Some(id));
        // Reserved but not yet filled
        assert!(registry.get(id).is_none());
        assert_eq!(registry.iter().count(), 0);

        assert_eq!(registry.reserve(other), Some(BindingId(1)));
        assert_eq!(registry.len(), 2);
    }
}
