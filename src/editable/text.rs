//! Mapping between surface offsets and text nodes
//!
//! A surface's text is the concatenation of its text nodes in document
//! order. Each text node covers a [`TextRun`] of that text; splitting a
//! node at a run boundary leaves the concatenation unchanged.

use crate::dom::{is_block_tag, Document, NodeId};

/// The slice of surface text held by one text node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun {
    pub node: NodeId,
    pub start: usize,
    pub len: usize,
}

impl TextRun {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.len > 0 && self.start < end && self.end() > start
    }
}

/// All text nodes under `surface`, in document order
pub fn text_runs(doc: &Document, surface: NodeId) -> Vec<TextRun> {
    let mut offset = 0;
    doc.descendants(surface)
        .into_iter()
        .filter_map(|node| {
            let len = doc.text(node)?.chars().count();
            let run = TextRun {
                node,
                start: offset,
                len,
            };
            offset += len;
            Some(run)
        })
        .collect()
}

/// Number of characters of text under `surface`
pub fn text_length(doc: &Document, surface: NodeId) -> usize {
    text_runs(doc, surface).last().map_or(0, TextRun::end)
}

/// The run owning the character before a caret.
///
/// At offset 0 this is the first non-empty run instead, so a caret at the
/// very start reports the formatting of the first character.
pub fn run_at_caret(runs: &[TextRun], offset: usize) -> Option<TextRun> {
    if offset == 0 {
        return runs.iter().find(|r| r.len > 0).copied();
    }
    runs.iter()
        .find(|r| r.len > 0 && r.start < offset && offset <= r.end())
        .copied()
}

pub(crate) fn byte_index(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Split a text node at a character index. Returns the new node holding the
/// tail, or `None` when the index is at either edge.
pub fn split_text(doc: &mut Document, node: NodeId, at: usize) -> Option<NodeId> {
    let text = doc.text(node)?;
    let len = text.chars().count();
    if at == 0 || at >= len {
        return None;
    }
    let byte = byte_index(text, at);
    let (head, tail) = text.split_at(byte);
    let (head, tail) = (head.to_string(), tail.to_string());
    doc.set_text(node, head);
    let tail_node = doc.create_text(&tail);
    doc.insert_after(node, tail_node);
    Some(tail_node)
}

fn split_at_offset(doc: &mut Document, surface: NodeId, offset: usize) {
    let runs = text_runs(doc, surface);
    if let Some(run) = runs
        .iter()
        .find(|r| r.start < offset && offset < r.end())
    {
        split_text(doc, run.node, offset - run.start);
    }
}

/// Split text nodes so `start..end` is covered by whole nodes, and return
/// them. Empty ranges isolate nothing.
pub fn isolate(doc: &mut Document, surface: NodeId, start: usize, end: usize) -> Vec<NodeId> {
    if start >= end {
        return Vec::new();
    }
    split_at_offset(doc, surface, start);
    split_at_offset(doc, surface, end);
    text_runs(doc, surface)
        .into_iter()
        .filter(|r| r.len > 0 && start <= r.start && r.end() <= end)
        .map(|r| r.node)
        .collect()
}

/// Whitespace-only text sitting between block elements, which carries no
/// visible content of its own
pub fn is_structural_whitespace(doc: &Document, node: NodeId) -> bool {
    let Some(text) = doc.text(node) else {
        return false;
    };
    if !text.chars().all(char::is_whitespace) {
        return false;
    }
    let is_block = |n: Option<NodeId>| n.and_then(|n| doc.tag(n)).is_some_and(is_block_tag);
    is_block(doc.previous_sibling(node))
        || is_block(doc.next_sibling(node))
        || doc
            .parent(node)
            .and_then(|p| doc.tag(p))
            .is_some_and(|t| matches!(t, "ul" | "ol" | "table"))
}
