//! Formatting primitives
//!
//! [`FormattingPrimitive`] is the seam between the binder and whatever
//! actually rewrites markup. [`DomFormatter`] is the built-in
//! implementation operating on the in-memory document.
//!
//! Every operation follows the same shape: isolate the text nodes touched by
//! the selection, restructure the tree around them, then normalize so that
//! equivalent markup always serializes the same way.

use crate::dom::{is_block_tag, is_text_block_tag, Document, Element, NodeId};

use super::command::{Alignment, BlockTag, FormatCommand, ListKind};
use super::selection::Selection;
use super::text::{is_structural_whitespace, isolate, run_at_caret, text_runs};

/// Rewrites the content of a surface in response to formatting commands
pub trait FormattingPrimitive {
    /// Apply `command` to `selection` inside `surface`.
    ///
    /// Returns whether the command did anything. `value` carries the
    /// runtime parameter (the URL for `CreateLink`).
    fn execute(
        &mut self,
        doc: &mut Document,
        surface: NodeId,
        selection: Selection,
        command: FormatCommand,
        value: Option<&str>,
    ) -> bool;

    /// Whether a toggle command is active at `selection`
    fn query_state(
        &self,
        doc: &Document,
        surface: NodeId,
        selection: Selection,
        command: FormatCommand,
    ) -> bool;
}

/// Inline styles with on/off state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineStyle {
    Bold,
    Italic,
    Underline,
}

impl InlineStyle {
    fn from_command(command: FormatCommand) -> Option<Self> {
        match command {
            FormatCommand::Bold => Some(InlineStyle::Bold),
            FormatCommand::Italic => Some(InlineStyle::Italic),
            FormatCommand::Underline => Some(InlineStyle::Underline),
            _ => None,
        }
    }

    /// Tags that count as this style being on
    fn tags(self) -> &'static [&'static str] {
        match self {
            InlineStyle::Bold => &["b", "strong"],
            InlineStyle::Italic => &["i", "em"],
            InlineStyle::Underline => &["u"],
        }
    }

    /// Tag used when applying the style
    fn wrapper(self) -> &'static str {
        self.tags()[0]
    }
}

/// Inline formatting stripped by `RemoveFormat`
const FORMATTING_TAGS: &[&str] = &[
    "b", "strong", "i", "em", "u", "s", "strike", "font", "span", "sub", "sup", "mark", "code",
    "small", "big",
];

/// Elements merged with an identical adjacent sibling
const MERGEABLE_TAGS: &[&str] = &[
    "b", "strong", "i", "em", "u", "s", "strike", "font", "span", "sub", "sup", "mark", "code",
    "small", "big", "a", "blockquote",
];

const BLOCKQUOTE_INDENT: &str = "margin: 0 0 0 40px; border: none; padding: 0px;";

/// The built-in formatter working directly on the document tree
#[derive(Debug, Clone, Copy, Default)]
pub struct DomFormatter;

impl FormattingPrimitive for DomFormatter {
    fn execute(
        &mut self,
        doc: &mut Document,
        surface: NodeId,
        selection: Selection,
        command: FormatCommand,
        value: Option<&str>,
    ) -> bool {
        let changed = match command {
            FormatCommand::Bold | FormatCommand::Italic | FormatCommand::Underline => {
                match InlineStyle::from_command(command) {
                    Some(style) => toggle_inline(doc, surface, selection, style),
                    None => false,
                }
            }
            FormatCommand::RemoveFormat => lift_selection(doc, surface, selection, FORMATTING_TAGS),
            FormatCommand::FormatBlock(tag) => format_block(doc, surface, selection, tag),
            FormatCommand::InsertList(kind) => toggle_list(doc, surface, selection, kind),
            FormatCommand::Justify(align) => justify(doc, surface, selection, align),
            FormatCommand::Indent => indent(doc, surface, selection),
            FormatCommand::Outdent => outdent(doc, surface, selection),
            FormatCommand::CreateLink => match value.map(str::trim) {
                Some(url) if !url.is_empty() => create_link(doc, surface, selection, url),
                _ => false,
            },
            FormatCommand::Unlink => unlink(doc, surface, selection),
        };
        if changed {
            normalize(doc, surface);
        }
        changed
    }

    fn query_state(
        &self,
        doc: &Document,
        surface: NodeId,
        selection: Selection,
        command: FormatCommand,
    ) -> bool {
        let Some(style) = InlineStyle::from_command(command) else {
            return false;
        };
        let tags = style.tags();
        let runs = text_runs(doc, surface);
        if selection.is_empty() {
            return run_at_caret(&runs, selection.head)
                .is_some_and(|run| nearest_ancestor_in(doc, run.node, surface, tags).is_some());
        }
        let mut selected = runs
            .iter()
            .filter(|r| r.overlaps(selection.start(), selection.end()))
            .filter(|r| !is_structural_whitespace(doc, r.node))
            .peekable();
        selected.peek().is_some()
            && selected.all(|r| nearest_ancestor_in(doc, r.node, surface, tags).is_some())
    }
}

// =========================================================================
// Tree helpers
// =========================================================================

/// Nearest ancestor of `node` strictly inside `surface` whose tag is in `tags`
fn nearest_ancestor_in(
    doc: &Document,
    node: NodeId,
    surface: NodeId,
    tags: &[&str],
) -> Option<NodeId> {
    doc.ancestors(node)
        .take_while(|&a| a != surface)
        .find(|&a| doc.tag(a).is_some_and(|t| tags.contains(&t)))
}

/// Split `container` so that `child` is its only child. Siblings before and
/// after move into shallow copies of `container` placed around it.
fn split_around(doc: &mut Document, container: NodeId, child: NodeId) {
    let children = doc.children(container).to_vec();
    let Some(idx) = children.iter().position(|&c| c == child) else {
        return;
    };
    let (before, after) = (&children[..idx], &children[idx + 1..]);
    if !before.is_empty() {
        let left = doc.shallow_clone(container);
        doc.insert_before(container, left);
        for &c in before {
            doc.append_child(left, c);
        }
    }
    if !after.is_empty() {
        let right = doc.shallow_clone(container);
        doc.insert_after(container, right);
        for &c in after {
            doc.append_child(right, c);
        }
    }
}

/// Split every element from `node` up to `ancestor` so the path between them
/// holds nothing else
fn isolate_path(doc: &mut Document, node: NodeId, ancestor: NodeId) {
    let mut child = node;
    while let Some(container) = doc.parent(child) {
        split_around(doc, container, child);
        if container == ancestor {
            return;
        }
        child = container;
    }
}

/// Move `node` out of every enclosing element with a tag in `tags`
fn lift_out(doc: &mut Document, node: NodeId, surface: NodeId, tags: &[&str]) -> bool {
    let mut lifted = false;
    while let Some(ancestor) = nearest_ancestor_in(doc, node, surface, tags) {
        isolate_path(doc, node, ancestor);
        doc.unwrap_node(ancestor);
        lifted = true;
    }
    lifted
}

/// Text nodes covering a non-empty selection, minus inter-block whitespace
fn selected_text_nodes(doc: &mut Document, surface: NodeId, selection: Selection) -> Vec<NodeId> {
    isolate(doc, surface, selection.start(), selection.end())
        .into_iter()
        .filter(|&n| !is_structural_whitespace(doc, n))
        .collect()
}

/// The nearest text block holding `node`. Loose inline content directly
/// inside the surface (or a container block) is first gathered into a `div`,
/// one `<br>`-separated line at a time. The `<br>` ending the gathered line
/// is dropped since the new block ends it.
fn ensure_block(doc: &mut Document, node: NodeId, surface: NodeId) -> Option<NodeId> {
    let existing = doc
        .ancestors(node)
        .take_while(|&a| a != surface)
        .find(|&a| doc.tag(a).is_some_and(is_text_block_tag));
    if existing.is_some() {
        return existing;
    }

    let mut top = node;
    while let Some(parent) = doc.parent(top) {
        if parent == surface || doc.tag(parent).is_some_and(is_block_tag) {
            break;
        }
        top = parent;
    }
    let container = doc.parent(top)?;

    let ends_line =
        |doc: &Document, n: NodeId| doc.tag(n).is_some_and(|t| t == "br" || is_block_tag(t));
    let siblings = doc.children(container).to_vec();
    let idx = siblings.iter().position(|&c| c == top)?;
    let mut lo = idx;
    while lo > 0 && !ends_line(doc, siblings[lo - 1]) {
        lo -= 1;
    }
    let mut hi = idx;
    while hi + 1 < siblings.len() && !ends_line(doc, siblings[hi + 1]) {
        hi += 1;
    }

    let block = doc.create_element("div");
    doc.insert_before(siblings[lo], block);
    for &sibling in &siblings[lo..=hi] {
        doc.append_child(block, sibling);
    }
    if let Some(&br) = siblings.get(hi + 1).filter(|&&n| doc.has_tag(n, "br")) {
        doc.detach(br);
    }
    Some(block)
}

/// Text blocks touched by the selection, in document order
fn selected_blocks(doc: &mut Document, surface: NodeId, selection: Selection) -> Vec<NodeId> {
    let runs = text_runs(doc, surface);
    let nodes: Vec<NodeId> = if selection.is_empty() {
        run_at_caret(&runs, selection.head)
            .map(|r| vec![r.node])
            .unwrap_or_default()
    } else {
        runs.iter()
            .filter(|r| r.overlaps(selection.start(), selection.end()))
            .filter(|r| !is_structural_whitespace(doc, r.node))
            .map(|r| r.node)
            .collect()
    };

    let mut blocks = Vec::new();
    for node in nodes {
        if let Some(block) = ensure_block(doc, node, surface) {
            if !blocks.contains(&block) {
                blocks.push(block);
            }
        }
    }
    blocks
}

fn list_of(doc: &Document, item: NodeId) -> Option<NodeId> {
    if !doc.has_tag(item, "li") {
        return None;
    }
    doc.parent(item)
        .filter(|&p| doc.has_tag(p, "ul") || doc.has_tag(p, "ol"))
}

// =========================================================================
// Inline operations
// =========================================================================

fn toggle_inline(
    doc: &mut Document,
    surface: NodeId,
    selection: Selection,
    style: InlineStyle,
) -> bool {
    if selection.is_empty() {
        return false;
    }
    let nodes = selected_text_nodes(doc, surface, selection);
    if nodes.is_empty() {
        return false;
    }
    let tags = style.tags();
    let all_on = nodes
        .iter()
        .all(|&n| nearest_ancestor_in(doc, n, surface, tags).is_some());

    for node in nodes {
        if all_on {
            lift_out(doc, node, surface, tags);
        } else if nearest_ancestor_in(doc, node, surface, tags).is_none() {
            let wrapper = doc.create_element(style.wrapper());
            doc.wrap_node(node, wrapper);
        }
    }
    true
}

fn lift_selection(
    doc: &mut Document,
    surface: NodeId,
    selection: Selection,
    tags: &[&str],
) -> bool {
    if selection.is_empty() {
        return false;
    }
    let mut changed = false;
    for node in selected_text_nodes(doc, surface, selection) {
        changed |= lift_out(doc, node, surface, tags);
    }
    changed
}

fn create_link(doc: &mut Document, surface: NodeId, selection: Selection, url: &str) -> bool {
    if selection.is_empty() {
        return false;
    }
    let nodes = selected_text_nodes(doc, surface, selection);
    if nodes.is_empty() {
        return false;
    }
    for node in nodes {
        lift_out(doc, node, surface, &["a"]);
        let anchor = doc.create_element_from(Element::new("a").with_attr("href", url));
        doc.wrap_node(node, anchor);
    }
    true
}

fn unlink(doc: &mut Document, surface: NodeId, selection: Selection) -> bool {
    if !selection.is_empty() {
        return lift_selection(doc, surface, selection, &["a"]);
    }
    let runs = text_runs(doc, surface);
    let anchor = run_at_caret(&runs, selection.head)
        .and_then(|run| nearest_ancestor_in(doc, run.node, surface, &["a"]));
    match anchor {
        Some(anchor) => {
            doc.unwrap_node(anchor);
            true
        }
        None => false,
    }
}

// =========================================================================
// Block operations
// =========================================================================

fn format_block(doc: &mut Document, surface: NodeId, selection: Selection, tag: BlockTag) -> bool {
    let blocks = selected_blocks(doc, surface, selection);
    for &block in &blocks {
        if doc.has_tag(block, "li") {
            let inner = doc.create_element(tag.as_str());
            doc.move_children(block, inner);
            doc.append_child(block, inner);
        } else if let Some(el) = doc.element_mut(block) {
            el.tag = tag.as_str().to_string();
        }
    }
    !blocks.is_empty()
}

/// Replace a list item with a paragraph, splitting its list around it
fn unlist_item(doc: &mut Document, item: NodeId) {
    let Some(list) = list_of(doc, item) else {
        return;
    };
    split_around(doc, list, item);
    let paragraph = doc.create_element("p");
    doc.move_children(item, paragraph);
    doc.insert_before(list, paragraph);
    doc.detach(list);
}

fn toggle_list(doc: &mut Document, surface: NodeId, selection: Selection, kind: ListKind) -> bool {
    let blocks = selected_blocks(doc, surface, selection);
    let Some(&first) = blocks.first() else {
        return false;
    };

    let all_this_kind = blocks
        .iter()
        .all(|&b| list_of(doc, b).is_some_and(|l| doc.has_tag(l, kind.tag())));
    if all_this_kind {
        for block in blocks {
            unlist_item(doc, block);
        }
        return true;
    }

    if blocks.iter().all(|&b| list_of(doc, b).is_some()) {
        for &block in &blocks {
            if let Some(list) = list_of(doc, block) {
                if let Some(el) = doc.element_mut(list) {
                    el.tag = kind.tag().to_string();
                }
            }
        }
        return true;
    }

    let old_lists: Vec<NodeId> = blocks.iter().filter_map(|&b| list_of(doc, b)).collect();
    let list = doc.create_element(kind.tag());
    let anchor = list_of(doc, first).unwrap_or(first);
    doc.insert_before(anchor, list);
    for block in blocks {
        if doc.has_tag(block, "li") {
            doc.append_child(list, block);
            continue;
        }
        let item = doc.create_element("li");
        if doc.has_tag(block, "p") || doc.has_tag(block, "div") {
            doc.move_children(block, item);
            doc.detach(block);
        } else {
            doc.append_child(item, block);
        }
        doc.append_child(list, item);
    }
    for old in old_lists {
        if doc.children(old).is_empty() {
            doc.detach(old);
        }
    }
    true
}

fn justify(doc: &mut Document, surface: NodeId, selection: Selection, align: Alignment) -> bool {
    let blocks = selected_blocks(doc, surface, selection);
    for &block in &blocks {
        match align {
            Alignment::Left => doc.remove_style_property(block, "text-align"),
            _ => doc.set_style_property(block, "text-align", align.css_value()),
        }
    }
    !blocks.is_empty()
}

fn indent(doc: &mut Document, surface: NodeId, selection: Selection) -> bool {
    let mut changed = false;
    for block in selected_blocks(doc, surface, selection) {
        let Some(list) = list_of(doc, block) else {
            let quote =
                doc.create_element_from(
                    Element::new("blockquote").with_attr("style", BLOCKQUOTE_INDENT),
                );
            doc.wrap_node(block, quote);
            changed = true;
            continue;
        };
        // A first item has nothing to nest under
        let Some(prev) = doc.previous_sibling(block).filter(|&p| doc.has_tag(p, "li")) else {
            continue;
        };
        let list_tag = doc.tag(list).unwrap_or("ul").to_string();
        let nested = match doc.last_child(prev).filter(|&c| doc.has_tag(c, &list_tag)) {
            Some(nested) => nested,
            None => {
                let nested = doc.create_element(&list_tag);
                doc.append_child(prev, nested);
                nested
            }
        };
        doc.append_child(nested, block);
        changed = true;
    }
    changed
}

fn outdent(doc: &mut Document, surface: NodeId, selection: Selection) -> bool {
    let mut changed = false;
    for block in selected_blocks(doc, surface, selection) {
        if let Some(list) = list_of(doc, block) {
            match doc.parent(list).filter(|&p| doc.has_tag(p, "li")) {
                Some(outer_item) => {
                    split_around(doc, list, block);
                    doc.insert_after(outer_item, block);
                    doc.detach(list);
                }
                None => unlist_item(doc, block),
            }
            changed = true;
        } else if let Some(quote) = nearest_ancestor_in(doc, block, surface, &["blockquote"]) {
            isolate_path(doc, block, quote);
            doc.unwrap_node(quote);
            changed = true;
        }
    }
    changed
}

// =========================================================================
// Normalization
// =========================================================================

/// Canonicalize the subtree under `node`: drop empty text and empty inline
/// elements, merge adjacent text nodes and identical adjacent elements.
pub fn normalize(doc: &mut Document, node: NodeId) {
    for child in doc.children(node).to_vec() {
        if doc.element(child).is_some() {
            normalize(doc, child);
        }
    }

    let mut prev: Option<NodeId> = None;
    for child in doc.children(node).to_vec() {
        if doc.text(child).is_some_and(str::is_empty) {
            doc.detach(child);
            continue;
        }
        let empty_inline = doc.element(child).is_some_and(|el| {
            !el.is_void() && MERGEABLE_TAGS.contains(&el.tag.as_str()) && el.tag != "blockquote"
        }) && doc.children(child).is_empty();
        if empty_inline {
            doc.detach(child);
            continue;
        }

        if let Some(p) = prev {
            let merged = match (doc.text(p), doc.text(child)) {
                (Some(a), Some(b)) => Some(format!("{a}{b}")),
                _ => None,
            };
            if let Some(merged) = merged {
                doc.set_text(p, merged);
                doc.detach(child);
                continue;
            }
            let same = match (doc.element(p), doc.element(child)) {
                (Some(a), Some(b)) => MERGEABLE_TAGS.contains(&a.tag.as_str()) && a.same_shape(b),
                _ => false,
            };
            if same {
                doc.move_children(child, p);
                doc.detach(child);
                normalize(doc, p);
                continue;
            }
        }
        prev = Some(child);
    }
}
