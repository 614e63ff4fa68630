//! Minimal CSS selector matching
//!
//! Supports compound selectors (`tag`, `#id`, `.class`, `[attr]`,
//! `[attr="v"]`, `[attr^="v"]`) joined by the descendant combinator.
//! Parsing is lenient: an unrecognized character ends the current compound.

use super::document::Document;
use super::node::{Element, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrTest {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, AttrTest)>,
}

impl Compound {
    fn matches(&self, el: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if el.tag != *tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.id() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|(name, test)| match (el.attr(name), test) {
            (None, _) => false,
            (Some(_), AttrTest::Exists) => true,
            (Some(v), AttrTest::Equals(want)) => v == want,
            (Some(v), AttrTest::Prefix(want)) => v.starts_with(want.as_str()),
        })
    }
}

/// A parsed selector: compounds joined by descendant combinators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<Compound>,
}

impl Selector {
    pub fn parse(source: &str) -> Self {
        let parts = source
            .split_ascii_whitespace()
            .map(parse_compound)
            .filter(|c| *c != Compound::default())
            .collect();
        Self { parts }
    }

    /// `tag[attr="value"]`
    pub fn tag_with_attr(tag: &str, attr: &str, value: &str) -> Self {
        Self {
            parts: vec![Compound {
                tag: Some(tag.to_ascii_lowercase()),
                attrs: vec![(attr.to_string(), AttrTest::Equals(value.to_string()))],
                ..Compound::default()
            }],
        }
    }

    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some((last, rest)) = self.parts.split_last() else {
            return false;
        };
        let Some(el) = doc.element(node) else {
            return false;
        };
        if !last.matches(el) {
            return false;
        }

        let mut remaining = rest.iter().rev().peekable();
        for ancestor in doc.ancestors(node) {
            let Some(compound) = remaining.peek() else {
                break;
            };
            if doc.element(ancestor).is_some_and(|el| compound.matches(el)) {
                remaining.next();
            }
        }
        remaining.peek().is_none()
    }
}

fn parse_compound(src: &str) -> Compound {
    let mut compound = Compound::default();
    let chars: Vec<char> = src.chars().collect();
    let mut i = 0;

    let ident = |chars: &[char], i: &mut usize| -> String {
        let start = *i;
        while *i < chars.len() && (chars[*i].is_alphanumeric() || matches!(chars[*i], '-' | '_')) {
            *i += 1;
        }
        chars[start..*i].iter().collect()
    };

    if i < chars.len() && (chars[i].is_alphabetic() || chars[i] == '*') {
        if chars[i] == '*' {
            i += 1;
        } else {
            compound.tag = Some(ident(&chars, &mut i).to_ascii_lowercase());
        }
    }

    while i < chars.len() {
        match chars[i] {
            '.' => {
                i += 1;
                let class = ident(&chars, &mut i);
                if !class.is_empty() {
                    compound.classes.push(class);
                }
            }
            '#' => {
                i += 1;
                let id = ident(&chars, &mut i);
                if !id.is_empty() {
                    compound.id = Some(id);
                }
            }
            '[' => {
                i += 1;
                let name = ident(&chars, &mut i).to_ascii_lowercase();
                let test = match (chars.get(i), chars.get(i + 1)) {
                    (Some('='), _) => {
                        i += 1;
                        AttrTest::Equals(attr_value(&chars, &mut i))
                    }
                    (Some('^'), Some('=')) => {
                        i += 2;
                        AttrTest::Prefix(attr_value(&chars, &mut i))
                    }
                    _ => AttrTest::Exists,
                };
                while i < chars.len() && chars[i] != ']' {
                    i += 1;
                }
                i += 1;
                if !name.is_empty() {
                    compound.attrs.push((name, test));
                }
            }
            _ => break,
        }
    }

    compound
}

fn attr_value(chars: &[char], i: &mut usize) -> String {
    let quote = chars.get(*i).copied().filter(|c| *c == '"' || *c == '\'');
    if let Some(q) = quote {
        *i += 1;
        let start = *i;
        while *i < chars.len() && chars[*i] != q {
            *i += 1;
        }
        let value = chars[start..*i].iter().collect();
        *i += 1;
        value
    } else {
        let start = *i;
        while *i < chars.len() && chars[*i] != ']' {
            *i += 1;
        }
        chars[start..*i].iter().collect()
    }
}
