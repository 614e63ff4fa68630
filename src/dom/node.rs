//! Node and element types for the in-memory document tree

/// Index of a node in its owning [`Document`](super::Document) arena.
///
/// Ids stay valid for the lifetime of the document; detached nodes keep
/// their slot and can be re-inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node holds
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Document root (never an element, never serialized itself)
    Root,
    Element(Element),
    Text(String),
    /// Comment body without the `<!--` `-->` delimiters. Carries no text.
    Comment(String),
}

/// An element with ordered attributes.
///
/// Attribute order is preserved so that parsing and re-serializing
/// canonical markup yields the same string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    /// Live value of a form control. For `textarea` this starts as the
    /// element's text content and is never reflected back into markup.
    pub value: String,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attrs: Vec::new(),
            value: String::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value.to_string();
        } else {
            self.attrs.push((name, value.to_string()));
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let idx = self.attrs.iter().position(|(n, _)| n == name)?;
        Some(self.attrs.remove(idx).1)
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_ascii_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let mut classes: Vec<&str> = self.classes().collect();
        classes.push(class);
        let joined = classes.join(" ");
        self.set_attr("class", &joined);
    }

    pub fn remove_class(&mut self, class: &str) {
        if !self.has_class(class) {
            return;
        }
        let joined = self
            .classes()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("class", &joined);
    }

    /// Toggle a class, returning whether it is present afterwards
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Same tag and same attributes in the same order
    pub fn same_shape(&self, other: &Element) -> bool {
        self.tag == other.tag && self.attrs == other.attrs
    }

    pub fn is_void(&self) -> bool {
        is_void_tag(&self.tag)
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            kind,
        }
    }
}

/// Elements that never have children or an end tag
pub fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Elements whose content is raw text rather than markup
pub fn is_raw_text_tag(tag: &str) -> bool {
    matches!(tag, "script" | "style" | "textarea" | "title")
}

/// Block-level elements that own a line of text in the editing model
pub fn is_text_block_tag(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "div" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "pre" | "li"
    )
}

/// Any element that breaks an inline run
pub fn is_block_tag(tag: &str) -> bool {
    is_text_block_tag(tag)
        || matches!(
            tag,
            "ul" | "ol" | "blockquote" | "table" | "hr" | "section" | "article" | "header" | "footer"
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_manipulation() {
        let mut el = Element::new("div").with_attr("class", "tab-pane fade");
        assert!(el.has_class("fade"));
        el.add_class("show");
        el.add_class("show");
        assert_eq!(el.attr("class"), Some("tab-pane fade show"));
        el.remove_class("fade");
        assert_eq!(el.attr("class"), Some("tab-pane show"));
        assert!(!el.toggle_class("show"));
        assert!(el.toggle_class("active"));
        assert_eq!(el.attr("class"), Some("tab-pane active"));
    }

    #[test]
    fn test_attr_order_preserved() {
        let mut el = Element::new("A");
        el.set_attr("href", "x");
        el.set_attr("title", "t");
        el.set_attr("href", "y");
        assert_eq!(el.tag, "a");
        assert_eq!(
            el.attrs,
            vec![
                ("href".to_string(), "y".to_string()),
                ("title".to_string(), "t".to_string())
            ]
        );
    }

    #[test]
    fn test_same_shape() {
        let a = Element::new("a").with_attr("href", "x");
        let b = Element::new("a").with_attr("href", "x");
        let c = Element::new("a").with_attr("href", "y");
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
    }
}
