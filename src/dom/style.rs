//! Inline `style` attribute helpers

use super::document::Document;
use super::node::NodeId;

/// Split `a: b; c: d` into ordered `(property, value)` pairs
pub fn parse_declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim();
            (!name.is_empty()).then(|| (name, value.to_string()))
        })
        .collect()
}

/// Serialize declarations the way browsers write them back: `a: b; c: d;`
pub fn serialize_declarations(decls: &[(String, String)]) -> String {
    decls
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Document {
    pub fn style_property(&self, node: NodeId, name: &str) -> Option<String> {
        let style = self.attr(node, "style")?;
        parse_declarations(style)
            .into_iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn set_style_property(&mut self, node: NodeId, name: &str, value: &str) {
        let mut decls = parse_declarations(self.attr(node, "style").unwrap_or(""));
        match decls.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => decls.push((name.to_string(), value.to_string())),
        }
        let style = serialize_declarations(&decls);
        self.set_attr(node, "style", &style);
    }

    /// Remove a property; drops the attribute once no declarations remain
    pub fn remove_style_property(&mut self, node: NodeId, name: &str) {
        let Some(style) = self.attr(node, "style") else {
            return;
        };
        let decls: Vec<_> = parse_declarations(style)
            .into_iter()
            .filter(|(n, _)| n != name)
            .collect();
        if decls.is_empty() {
            self.remove_attr(node, "style");
        } else {
            let style = serialize_declarations(&decls);
            self.set_attr(node, "style", &style);
        }
    }
}
