//! Selection inside a rendered surface.
//!
//! Offsets count characters (Unicode scalar values) of the surface's text
//! content. Markup contributes nothing, so formatting commands never move a
//! selection.

/// A text selection with anchor (start point) and head (caret position).
/// The anchor stays fixed while the head moves during selection extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the caret is (moving point)
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (caret with no selected text)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// Check if selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Get the start offset (minimum of anchor and head)
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Get the end offset (maximum of anchor and head)
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// Check if selection is reversed (head before anchor)
    pub fn is_reversed(&self) -> bool {
        self.head < self.anchor
    }

    /// Extend selection to new head offset
    pub fn extend_to(&mut self, offset: usize) {
        self.head = offset;
    }

    /// Collapse selection to head offset
    pub fn collapse(&mut self) {
        self.anchor = self.head;
    }

    /// Collapse selection to start offset
    pub fn collapse_to_start(&mut self) {
        let start = self.start();
        self.anchor = start;
        self.head = start;
    }

    /// Clamp both ends to a text length
    pub fn clamped(self, len: usize) -> Self {
        Self {
            anchor: self.anchor.min(len),
            head: self.head.min(len),
        }
    }

    /// Check if an offset is within this selection (end exclusive)
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start() && offset < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_collapsed() {
        let sel = Selection::collapsed(5);
        assert!(sel.is_empty());
        assert_eq!(sel.anchor, sel.head);
        assert_eq!(sel.len(), 0);
    }

    #[test]
    fn test_selection_start_end() {
        let forward = Selection::new(0, 5);
        assert_eq!(forward.start(), 0);
        assert_eq!(forward.end(), 5);
        assert!(!forward.is_reversed());

        let backward = Selection::new(5, 0);
        assert_eq!(backward.start(), 0);
        assert_eq!(backward.end(), 5);
        assert!(backward.is_reversed());
    }

    #[test]
    fn test_selection_extend_and_collapse() {
        let mut sel = Selection::collapsed(2);
        sel.extend_to(10);
        assert_eq!(sel.len(), 8);
        sel.collapse();
        assert_eq!(sel, Selection::collapsed(10));

        let mut sel = Selection::new(3, 9);
        sel.collapse_to_start();
        assert_eq!(sel, Selection::collapsed(3));
    }

    #[test]
    fn test_selection_contains_and_clamp() {
        let sel = Selection::new(2, 8);
        assert!(!sel.contains(1));
        assert!(sel.contains(2));
        assert!(!sel.contains(8)); // End is exclusive
        assert_eq!(Selection::new(2, 20).clamped(6), Selection::new(2, 6));
    }
}
