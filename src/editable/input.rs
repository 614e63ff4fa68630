//! Text input on a surface: typing and deletion.
//!
//! All operations take the current selection and return the selection that
//! results, collapsed at the new caret.

use crate::dom::{Document, NodeId};

use super::formatter::normalize;
use super::selection::Selection;
use super::text::{byte_index, isolate, run_at_caret, text_length, text_runs};

/// Replace the selection with `text`
pub fn insert_text(
    doc: &mut Document,
    surface: NodeId,
    selection: Selection,
    text: &str,
) -> Selection {
    let caret = selection.start();
    if !selection.is_empty() {
        delete_range(doc, surface, selection.start(), selection.end());
    }
    if text.is_empty() {
        return Selection::collapsed(caret);
    }

    let runs = text_runs(doc, surface);
    match run_at_caret(&runs, caret) {
        Some(run) => {
            let mut current = doc.text(run.node).unwrap_or_default().to_string();
            let byte = byte_index(&current, caret - run.start);
            current.insert_str(byte, text);
            doc.set_text(run.node, current);
        }
        None => {
            // No text yet: descend into the last element so typing lands
            // inside whatever block structure the surface has
            let mut target = surface;
            while let Some(last) = doc
                .last_child(target)
                .filter(|&c| doc.element(c).is_some_and(|el| !el.is_void()))
            {
                target = last;
            }
            let node = doc.create_text(text);
            doc.append_child(target, node);
        }
    }
    Selection::collapsed(caret + text.chars().count())
}

/// Remove the characters in `start..end`, pruning elements left empty
pub fn delete_range(doc: &mut Document, surface: NodeId, start: usize, end: usize) {
    let nodes = isolate(doc, surface, start, end);
    if nodes.is_empty() {
        return;
    }
    let parents: Vec<NodeId> = nodes.iter().filter_map(|&n| doc.parent(n)).collect();
    for node in nodes {
        doc.detach(node);
    }
    for parent in parents {
        prune_empty(doc, parent, surface);
    }
    normalize(doc, surface);
}

fn prune_empty(doc: &mut Document, mut node: NodeId, surface: NodeId) {
    while node != surface && doc.children(node).is_empty() {
        let Some(parent) = doc.parent(node) else {
            return;
        };
        if doc.element(node).is_some_and(|el| el.is_void()) {
            return;
        }
        doc.detach(node);
        node = parent;
    }
}

/// Backspace: delete the selection, or the character before the caret
pub fn delete_backward(doc: &mut Document, surface: NodeId, selection: Selection) -> Selection {
    if !selection.is_empty() {
        delete_range(doc, surface, selection.start(), selection.end());
        return Selection::collapsed(selection.start());
    }
    let caret = selection.head.min(text_length(doc, surface));
    if caret == 0 {
        return Selection::collapsed(0);
    }
    delete_range(doc, surface, caret - 1, caret);
    Selection::collapsed(caret - 1)
}

/// Delete: delete the selection, or the character after the caret
pub fn delete_forward(doc: &mut Document, surface: NodeId, selection: Selection) -> Selection {
    if !selection.is_empty() {
        delete_range(doc, surface, selection.start(), selection.end());
        return Selection::collapsed(selection.start());
    }
    let caret = selection.head;
    if caret < text_length(doc, surface) {
        delete_range(doc, surface, caret, caret + 1);
    }
    Selection::collapsed(caret)
}
