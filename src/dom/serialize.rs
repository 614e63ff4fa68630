//! Markup serialization (`innerHTML` / `outerHTML` semantics)

use super::document::Document;
use super::node::{is_raw_text_tag, NodeId, NodeKind};

pub(crate) fn inner_html(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    let raw = doc
        .tag(node)
        .is_some_and(|tag| is_raw_text_tag(tag) && tag != "textarea" && tag != "title");
    for &child in doc.children(node) {
        write_node(doc, child, raw, &mut out);
    }
    out
}

pub(crate) fn outer_html(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, node, false, &mut out);
    out
}

fn write_node(doc: &Document, node: NodeId, raw_parent: bool, out: &mut String) {
    match doc.kind(node) {
        NodeKind::Root => {
            for &child in doc.children(node) {
                write_node(doc, child, false, out);
            }
        }
        NodeKind::Text(text) => {
            if raw_parent {
                out.push_str(text);
            } else {
                out.push_str(&escape_text(text));
            }
        }
        NodeKind::Comment(body) => {
            out.push_str("<!--");
            out.push_str(body);
            out.push_str("-->");
        }
        NodeKind::Element(el) => {
            out.push('<');
            out.push_str(&el.tag);
            for (name, value) in &el.attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
            out.push('>');
            if el.is_void() {
                return;
            }
            out.push_str(&inner_html(doc, node));
            out.push_str("</");
            out.push_str(&el.tag);
            out.push('>');
        }
    }
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_text("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("say \"hi\" & go"), "say &quot;hi&quot; &amp; go");
    }

    #[test]
    fn test_script_content_not_escaped() {
        let doc = Document::parse("<script>if (a < b) {}</script>");
        assert_eq!(doc.inner_html(doc.root()), "<script>if (a < b) {}</script>");
    }

    #[test]
    fn test_void_elements_have_no_end_tag() {
        let doc = Document::parse("<p>a<br/>b<img src=\"x.png\"></p>");
        assert_eq!(doc.inner_html(doc.root()), "<p>a<br>b<img src=\"x.png\"></p>");
    }
}
