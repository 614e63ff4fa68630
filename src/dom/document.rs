//! Arena-backed document tree
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`].
//! Detaching a node only unlinks it; its slot stays allocated so the id can
//! be re-inserted elsewhere.

use super::node::{Element, Node, NodeId, NodeKind};
use super::parser;
use super::selector::Selector;
use super::serialize;

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Root)],
            root: NodeId(0),
        }
    }

    /// Parse markup into a new document. Never fails: malformed input is
    /// recovered the way a browser would, as best effort.
    pub fn parse(html: &str) -> Self {
        let mut doc = Self::new();
        let root = doc.root;
        parser::parse_into(&mut doc, root, html);
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[self.root.0].children.is_empty()
    }

    // =========================================================================
    // Creation
    // =========================================================================

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind));
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(Element::new(tag)))
    }

    /// Create a detached element from a prepared [`Element`]
    pub fn create_element_from(&mut self, element: Element) -> NodeId {
        self.push(NodeKind::Element(element))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, body: &str) -> NodeId {
        self.push(NodeKind::Comment(body.to_string()))
    }

    /// Copy an element without its children. Text nodes are copied as is.
    pub fn shallow_clone(&mut self, node: NodeId) -> NodeId {
        let kind = match &self.nodes[node.0].kind {
            NodeKind::Root => NodeKind::Root,
            NodeKind::Element(el) => NodeKind::Element(el.clone()),
            NodeKind::Text(t) => NodeKind::Text(t.clone()),
            NodeKind::Comment(c) => NodeKind::Comment(c.clone()),
        };
        self.push(kind)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.nodes[node.0].kind
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].children.first().copied()
    }

    pub fn last_child(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].children.last().copied()
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        match &self.nodes[node.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[node.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|el| el.tag.as_str())
    }

    pub fn has_tag(&self, node: NodeId, tag: &str) -> bool {
        self.tag(node) == Some(tag)
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|el| el.attr(name))
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.set_attr(name, value);
        }
    }

    pub fn remove_attr(&mut self, node: NodeId, name: &str) {
        if let Some(el) = self.element_mut(node) {
            el.remove_attr(name);
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.add_class(class);
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.remove_class(class);
        }
    }

    /// Toggle a class, returning whether it is present afterwards
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        self.element_mut(node)
            .map(|el| el.toggle_class(class))
            .unwrap_or(false)
    }

    pub fn is_text(&self, node: NodeId) -> bool {
        matches!(self.nodes[node.0].kind, NodeKind::Text(_))
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn set_text(&mut self, node: NodeId, text: String) {
        if let NodeKind::Text(t) = &mut self.nodes[node.0].kind {
            *t = text;
        }
    }

    /// Form-control value (`textarea`, `input`)
    pub fn value(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|el| el.value.as_str())
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.value = value.to_string();
        }
    }

    // =========================================================================
    // Tree structure
    // =========================================================================

    pub fn index_in_parent(&self, node: NodeId) -> Option<usize> {
        let parent = self.parent(node)?;
        self.nodes[parent.0].children.iter().position(|&c| c == node)
    }

    pub fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let idx = self.index_in_parent(node)?;
        idx.checked_sub(1)
            .and_then(|i| self.nodes[parent.0].children.get(i).copied())
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let idx = self.index_in_parent(node)?;
        self.nodes[parent.0].children.get(idx + 1).copied()
    }

    /// Unlink a node from its parent. The subtree stays intact.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Insert `node` immediately before `reference`
    pub fn insert_before(&mut self, reference: NodeId, node: NodeId) {
        self.detach(node);
        let Some(parent) = self.parent(reference) else {
            return;
        };
        let idx = self.index_in_parent(reference).unwrap_or(0);
        self.nodes[node.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(idx, node);
    }

    /// Insert `node` immediately after `reference`
    pub fn insert_after(&mut self, reference: NodeId, node: NodeId) {
        self.detach(node);
        let Some(parent) = self.parent(reference) else {
            return;
        };
        let idx = self
            .index_in_parent(reference)
            .map(|i| i + 1)
            .unwrap_or(self.nodes[parent.0].children.len());
        self.nodes[node.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(idx, node);
    }

    /// Replace a node with its own children, in place
    pub fn unwrap_node(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for &child in &children {
            self.nodes[child.0].parent = None;
        }
        for child in children {
            self.insert_before(node, child);
        }
        self.detach(node);
    }

    /// Wrap `node` in `wrapper` (which takes its place in the tree)
    pub fn wrap_node(&mut self, node: NodeId, wrapper: NodeId) {
        self.insert_before(node, wrapper);
        self.append_child(wrapper, node);
    }

    /// Move every child of `from` to the end of `to`
    pub fn move_children(&mut self, from: NodeId, to: NodeId) {
        let children = self.nodes[from.0].children.clone();
        for child in children {
            self.append_child(to, child);
        }
    }

    pub fn remove_children(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    /// Ancestors from the parent upward, including the root
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            next: self.parent(node),
        }
    }

    pub fn is_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(node).any(|a| a == ancestor)
    }

    /// Whether `node` is attached under the document root
    pub fn is_connected(&self, node: NodeId) -> bool {
        node == self.root || self.is_descendant_of(node, self.root)
    }

    /// Nearest inclusive ancestor satisfying `pred`
    pub fn closest<F>(&self, node: NodeId, pred: F) -> Option<NodeId>
    where
        F: Fn(&Document, NodeId) -> bool,
    {
        if pred(self, node) {
            return Some(node);
        }
        self.ancestors(node).find(|&a| pred(self, a))
    }

    /// Descendants of `scope` in document order, excluding `scope`
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    /// Element descendants of `scope` matching a CSS-like selector
    pub fn query_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&n| selector.matches(self, n))
            .collect()
    }

    pub fn query(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&n| selector.matches(self, n))
    }

    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&n| self.element(n).and_then(|el| el.id()) == Some(id))
    }

    // =========================================================================
    // Content
    // =========================================================================

    pub fn text_content(&self, node: NodeId) -> String {
        match &self.nodes[node.0].kind {
            NodeKind::Text(t) => t.clone(),
            NodeKind::Comment(_) => String::new(),
            _ => {
                let mut out = String::new();
                for &child in self.children(node) {
                    out.push_str(&self.text_content(child));
                }
                out
            }
        }
    }

    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        if self.is_text(node) {
            self.set_text(node, text.to_string());
            return;
        }
        self.remove_children(node);
        if !text.is_empty() {
            let t = self.create_text(text);
            self.append_child(node, t);
        }
    }

    pub fn inner_html(&self, node: NodeId) -> String {
        serialize::inner_html(self, node)
    }

    pub fn outer_html(&self, node: NodeId) -> String {
        serialize::outer_html(self, node)
    }

    /// Replace the children of `node` with parsed markup
    pub fn set_inner_html(&mut self, node: NodeId, html: &str) {
        self.remove_children(node);
        parser::parse_into(self, node, html);
    }
}

/// Iterator over a node's ancestors
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.doc.parent(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_detach() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.create_element("p");
        let b = doc.create_element("p");
        let c = doc.create_element("p");
        doc.append_child(root, a);
        doc.insert_after(a, c);
        doc.insert_before(c, b);
        assert_eq!(doc.children(root), &[a, b, c]);
        assert_eq!(doc.next_sibling(a), Some(b));
        assert_eq!(doc.previous_sibling(a), None);

        doc.detach(b);
        assert_eq!(doc.children(root), &[a, c]);
        assert_eq!(doc.parent(b), None);
    }

    #[test]
    fn test_unwrap_keeps_order() {
        let mut doc = Document::parse("<p>a<b>b<i>c</i></b>d</p>");
        let b = doc.query(doc.root(), &Selector::parse("b")).unwrap();
        doc.unwrap_node(b);
        assert_eq!(doc.inner_html(doc.root()), "<p>ab<i>c</i>d</p>");
    }

    #[test]
    fn test_wrap_node() {
        let mut doc = Document::parse("<p>hello</p>");
        let p = doc.first_child(doc.root()).unwrap();
        let text = doc.first_child(p).unwrap();
        let b = doc.create_element("b");
        doc.wrap_node(text, b);
        assert_eq!(doc.inner_html(doc.root()), "<p><b>hello</b></p>");
    }

    #[test]
    fn test_text_content_and_closest() {
        let doc = Document::parse("<div class=\"card\"><h5>Title</h5><span>x</span></div>");
        let span = doc.query(doc.root(), &Selector::parse("span")).unwrap();
        assert_eq!(doc.text_content(doc.root()), "Titlex");
        let card = doc.closest(span, |d, n| d.has_class(n, "card"));
        assert!(card.is_some());
        assert!(doc.is_descendant_of(span, card.unwrap()));
    }

    #[test]
    fn test_set_inner_html_replaces_children() {
        let mut doc = Document::parse("<div id=\"x\"><p>old</p></div>");
        let div = doc.by_id("x").unwrap();
        doc.set_inner_html(div, "<b>new</b> text");
        assert_eq!(doc.inner_html(div), "<b>new</b> text");
        assert_eq!(doc.text_content(div), "new text");
    }
}
