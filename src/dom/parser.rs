//! Lenient HTML fragment parser
//!
//! Never rejects input. Comments become comment nodes and an unclosed one
//! swallows the rest of the input. Stray `<` characters become text and
//! unmatched end tags are ignored.
//! There is no implicit-close logic beyond void elements.

use super::document::Document;
use super::node::{is_raw_text_tag, is_void_tag, Element, NodeId};

/// Parse `html` and append the resulting nodes to `parent`
pub(crate) fn parse_into(doc: &mut Document, parent: NodeId, html: &str) {
    let bytes = html.as_bytes();
    let mut stack = vec![parent];
    let mut text_start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }

        if starts_with_at(bytes, i, b"<!--") {
            flush_text(doc, &stack, html, text_start, i);
            let (body_end, next) = find_subslice(bytes, i + 4, b"-->")
                .map_or((bytes.len(), bytes.len()), |end| (end, end + 3));
            let body = html.get(i + 4..body_end).unwrap_or("");
            let current = *stack.last().unwrap_or(&parent);
            let comment = doc.create_comment(body);
            doc.append_child(current, comment);
            i = next;
            text_start = i;
            continue;
        }

        if starts_with_at(bytes, i, b"<!") || starts_with_at(bytes, i, b"<?") {
            flush_text(doc, &stack, html, text_start, i);
            i = find_byte(bytes, i, b'>').map_or(bytes.len(), |end| end + 1);
            text_start = i;
            continue;
        }

        if starts_with_at(bytes, i, b"</") {
            let Some((tag, next)) = parse_end_tag(html, i) else {
                i += 1;
                continue;
            };
            flush_text(doc, &stack, html, text_start, i);
            close_element(doc, &mut stack, &tag);
            i = next;
            text_start = i;
            continue;
        }

        let Some((element, self_closing, next)) = parse_start_tag(html, i) else {
            i += 1;
            continue;
        };
        flush_text(doc, &stack, html, text_start, i);
        i = next;

        let tag = element.tag.clone();
        let current = *stack.last().unwrap_or(&parent);
        let node = doc.create_element_from(element);
        doc.append_child(current, node);

        if self_closing || is_void_tag(&tag) {
            text_start = i;
            continue;
        }

        if is_raw_text_tag(&tag) {
            let close = find_end_tag_ci(bytes, i, tag.as_bytes()).unwrap_or(bytes.len());
            let raw = html.get(i..close).unwrap_or("");
            if !raw.is_empty() {
                let content = if tag == "textarea" || tag == "title" {
                    decode_character_references(raw)
                } else {
                    raw.to_string()
                };
                let text = doc.create_text(&content);
                doc.append_child(node, text);
            }
            if tag == "textarea" {
                let value = doc.text_content(node);
                doc.set_value(node, &value);
            }
            i = parse_end_tag(html, close).map_or(bytes.len(), |(_, next)| next);
            text_start = i;
            continue;
        }

        stack.push(node);
        text_start = i;
    }

    flush_text(doc, &stack, html, text_start, bytes.len());
}

fn flush_text(doc: &mut Document, stack: &[NodeId], html: &str, start: usize, end: usize) {
    if start >= end {
        return;
    }
    let Some(raw) = html.get(start..end) else {
        return;
    };
    let Some(&parent) = stack.last() else {
        return;
    };
    let text = doc.create_text(&decode_character_references(raw));
    doc.append_child(parent, text);
}

fn close_element(doc: &Document, stack: &mut Vec<NodeId>, tag: &str) {
    // Index 0 is the insertion parent and is never popped
    let Some(pos) = stack
        .iter()
        .skip(1)
        .rposition(|&n| doc.tag(n) == Some(tag))
    else {
        return;
    };
    stack.truncate(pos + 1);
}

fn parse_start_tag(html: &str, at: usize) -> Option<(Element, bool, usize)> {
    let bytes = html.as_bytes();
    let mut i = at + 1;
    if !bytes.get(i)?.is_ascii_alphabetic() {
        return None;
    }

    let tag_start = i;
    while i < bytes.len() && is_tag_char(bytes[i]) {
        i += 1;
    }
    let mut element = Element::new(html.get(tag_start..i)?);
    let mut self_closing = false;

    loop {
        skip_ws(bytes, &mut i);
        match bytes.get(i)? {
            b'>' => {
                i += 1;
                break;
            }
            b'/' if bytes.get(i + 1) == Some(&b'>') => {
                self_closing = true;
                i += 2;
                break;
            }
            b'/' => {
                i += 1;
                continue;
            }
            _ => {}
        }

        let name_start = i;
        while i < bytes.len() && is_attr_name_char(bytes[i]) {
            i += 1;
        }
        if i == name_start {
            // Unexpected byte such as a lone quote; skip it
            i += 1;
            continue;
        }
        let name = html.get(name_start..i)?.to_ascii_lowercase();

        skip_ws(bytes, &mut i);
        let value = if bytes.get(i) == Some(&b'=') {
            i += 1;
            skip_ws(bytes, &mut i);
            parse_attr_value(html, &mut i)?
        } else {
            String::new()
        };

        // First occurrence wins, as in browsers
        if !element.has_attr(&name) {
            element.attrs.push((name, value));
        }
    }

    Some((element, self_closing, i))
}

fn parse_attr_value(html: &str, i: &mut usize) -> Option<String> {
    let bytes = html.as_bytes();
    let first = *bytes.get(*i)?;
    if first == b'"' || first == b'\'' {
        let start = *i + 1;
        let end = find_byte(bytes, start, first)?;
        *i = end + 1;
        return Some(decode_character_references(html.get(start..end)?));
    }

    let start = *i;
    while *i < bytes.len() && !bytes[*i].is_ascii_whitespace() && bytes[*i] != b'>' {
        *i += 1;
    }
    Some(decode_character_references(html.get(start..*i)?))
}

fn parse_end_tag(html: &str, at: usize) -> Option<(String, usize)> {
    let bytes = html.as_bytes();
    let mut i = at + 2;
    if !bytes.get(i)?.is_ascii_alphabetic() {
        return None;
    }
    let start = i;
    while i < bytes.len() && is_tag_char(bytes[i]) {
        i += 1;
    }
    let tag = html.get(start..i)?.to_ascii_lowercase();
    let close = find_byte(bytes, i, b'>')?;
    Some((tag, close + 1))
}

/// Decode the character references that show up in stored editor content
pub fn decode_character_references(src: &str) -> String {
    if !src.contains('&') {
        return src.to_string();
    }

    let mut out = String::with_capacity(src.len());
    let mut rest = src;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest.find(';').filter(|&semi| semi <= 10).and_then(|semi| {
            let entity = &rest[1..semi];
            decode_entity(entity).map(|ch| (ch, semi + 1))
        });

        match decoded {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let num = entity.strip_prefix('#')?;
            let code = if let Some(hex) = num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                num.parse::<u32>().ok()?
            };
            // NUL, C1 controls and surrogates are not allowed as references
            match code {
                0 | 0x80..=0x9f | 0xd800..=0xdfff => Some(char::REPLACEMENT_CHARACTER),
                _ => char::from_u32(code),
            }
        }
    }
}

fn starts_with_at(bytes: &[u8], at: usize, pat: &[u8]) -> bool {
    bytes.get(at..at + pat.len()) == Some(pat)
}

fn find_subslice(bytes: &[u8], from: usize, pat: &[u8]) -> Option<usize> {
    if from >= bytes.len() {
        return None;
    }
    bytes[from..]
        .windows(pat.len())
        .position(|w| w == pat)
        .map(|p| p + from)
}

fn find_byte(bytes: &[u8], from: usize, b: u8) -> Option<usize> {
    bytes.get(from..)?.iter().position(|&x| x == b).map(|p| p + from)
}

fn find_end_tag_ci(bytes: &[u8], from: usize, tag: &[u8]) -> Option<usize> {
    let mut i = from;
    while let Some(lt) = find_subslice(bytes, i, b"</") {
        let name = bytes.get(lt + 2..lt + 2 + tag.len())?;
        if name.eq_ignore_ascii_case(tag) {
            let after = bytes.get(lt + 2 + tag.len()).copied();
            if matches!(after, None | Some(b'>' | b' ' | b'\t' | b'\n' | b'/')) {
                return Some(lt);
            }
        }
        i = lt + 2;
    }
    None
}

fn skip_ws(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() && bytes[*i].is_ascii_whitespace() {
        *i += 1;
    }
}

fn is_tag_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

fn is_attr_name_char(b: u8) -> bool {
    !b.is_ascii_whitespace() && !matches!(b, b'/' | b'>' | b'=' | b'"' | b'\'' | b'<')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(html: &str) -> String {
        let doc = Document::parse(html);
        doc.inner_html(doc.root())
    }

    #[test]
    fn test_canonical_markup_round_trips() {
        for html in [
            "plain text",
            "<p>Hello <b>world</b></p>",
            "<h1>Title</h1><ul><li>one</li><li>two</li></ul>",
            "<p style=\"text-align: center;\">x &amp; y &lt; z</p>",
            "<a href=\"https://example.com\" target=\"_blank\">link</a>",
            "line<br>break",
            "<p>a&nbsp;b</p>",
        ] {
            assert_eq!(round_trip(html), html, "round trip of {html}");
        }
    }

    #[test]
    fn test_unclosed_elements_are_recovered() {
        let doc = Document::parse("<p>open <b>bold");
        assert_eq!(doc.inner_html(doc.root()), "<p>open <b>bold</b></p>");
    }

    #[test]
    fn test_stray_end_tag_ignored() {
        let doc = Document::parse("a</span>b");
        assert_eq!(doc.inner_html(doc.root()), "ab");
    }

    #[test]
    fn test_lone_angle_bracket_is_text() {
        let doc = Document::parse("1 < 2");
        assert_eq!(doc.text_content(doc.root()), "1 < 2");
        assert_eq!(doc.inner_html(doc.root()), "1 &lt; 2");
    }

    #[test]
    fn test_comments_kept_as_nodes() {
        let doc = Document::parse("a<!-- hidden -->b");
        assert_eq!(doc.children(doc.root()).len(), 3);
        assert_eq!(doc.text_content(doc.root()), "ab");
        assert_eq!(doc.inner_html(doc.root()), "a<!-- hidden -->b");
    }

    #[test]
    fn test_unclosed_comment_swallows_rest() {
        let doc = Document::parse("a<!-- unclosed <b>x</b>");
        assert_eq!(doc.text_content(doc.root()), "a");
        assert_eq!(doc.inner_html(doc.root()), "a<!-- unclosed <b>x</b>-->");
    }

    #[test]
    fn test_textarea_value_is_decoded_text() {
        let doc = Document::parse(
            "<textarea name=\"notes\">&lt;b&gt;saved&lt;/b&gt; <i>raw</i></textarea><p>after</p>",
        );
        let ta = doc.first_child(doc.root()).unwrap();
        assert_eq!(doc.value(ta), Some("<b>saved</b> <i>raw</i>"));
        assert_eq!(doc.children(doc.root()).len(), 2);
    }

    #[test]
    fn test_attribute_forms() {
        let doc = Document::parse("<input disabled value=x data-a='1' data-b=\"&quot;q&quot;\">");
        let input = doc.first_child(doc.root()).unwrap();
        let el = doc.element(input).unwrap();
        assert_eq!(el.attr("disabled"), Some(""));
        assert_eq!(el.attr("value"), Some("x"));
        assert_eq!(el.attr("data-a"), Some("1"));
        assert_eq!(el.attr("data-b"), Some("\"q\""));
    }

    #[test]
    fn test_numeric_references() {
        assert_eq!(decode_character_references("&#65;&#x42;&#39;"), "AB'");
        assert_eq!(decode_character_references("AT&T"), "AT&T");
        assert_eq!(decode_character_references("&unknown;"), "&unknown;");
    }

    #[test]
    fn test_disallowed_numeric_references_become_replacement() {
        assert_eq!(decode_character_references("a&#0;b"), "a\u{fffd}b");
        assert_eq!(decode_character_references("&#x85;"), "\u{fffd}");
        assert_eq!(decode_character_references("&#xD800;"), "\u{fffd}");
        assert_eq!(decode_character_references("&#x1F600;"), "\u{1f600}");
    }
}
