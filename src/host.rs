//! Host environment seam
//!
//! Blocking dialogs and layout measurement come from whatever embeds the
//! crate (a browser shim, a test harness, the CLI).

use crate::dom::{Document, NodeId};

/// Rendered size of an element, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub scroll_height: u32,
    pub client_height: u32,
}

impl Extent {
    pub fn overflows(&self) -> bool {
        self.scroll_height > self.client_height
    }
}

pub trait Host {
    /// Show a message and wait for dismissal
    fn alert(&mut self, message: &str);

    /// Ask for a line of text; `None` when cancelled
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;

    /// Layout of `node`, if the host can lay out
    fn measure(&self, doc: &Document, node: NodeId) -> Option<Extent>;

    /// Viewport at most 768px wide
    fn is_small_screen(&self) -> bool {
        false
    }
}

/// Host without a user or a layout engine: alerts are logged, prompts are
/// cancelled, nothing measures.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    pub alerts: Vec<String>,
}

impl Host for HeadlessHost {
    fn alert(&mut self, message: &str) {
        tracing::warn!("alert: {}", message);
        self.alerts.push(message.to_string());
    }

    fn prompt(&mut self, message: &str, _default: &str) -> Option<String> {
        tracing::debug!("prompt cancelled (headless): {}", message);
        None
    }

    fn measure(&self, _doc: &Document, _node: NodeId) -> Option<Extent> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_host() {
        let doc = Document::new();
        let mut host = HeadlessHost::default();
        host.alert("hi");
        assert_eq!(host.alerts, vec!["hi"]);
        assert_eq!(host.prompt("Enter the URL:", "https://"), None);
        assert_eq!(host.measure(&doc, doc.root()), None);
        assert!(!host.is_small_screen());
    }

    #[test]
    fn test_extent_overflow() {
        assert!(Extent { scroll_height: 600, client_height: 500 }.overflows());
        assert!(!Extent { scroll_height: 500, client_height: 500 }.overflows());
    }
}
