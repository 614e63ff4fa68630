//! Page widgets outside the rich-text editors
//!
//! - expandable content blocks with "Show More" / "Show Less"
//! - same-page tab navigation
//! - timeline badge classes
//! - collapsible meeting notes

mod badges;
mod expand;
mod notes;
mod tabs;

pub use badges::{classify, format_badges};
pub use expand::{init_expandables, toggle_expandable, Expandable};
pub use notes::MeetingNotes;
pub use tabs::{click_tab, tab_link_at};

use crate::commands::Cmd;
use crate::config::WidgetConfig;
use crate::dom::{Document, NodeId};
use crate::host::Host;

/// Widget state for one page
#[derive(Debug, Clone, Default)]
pub struct PageWidgets {
    pub expandables: Vec<Expandable>,
    pub notes: Option<MeetingNotes>,
    initialized: bool,
}

impl PageWidgets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Set up every widget on the page. Runs once; later calls do nothing.
    pub fn init(&mut self, doc: &mut Document, host: &dyn Host, config: &WidgetConfig) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.expandables = init_expandables(doc, host);
        self.notes = MeetingNotes::init(doc, host, config.notes_max_height);
        let badges = format_badges(doc);
        tracing::info!(
            "Widgets ready: {} expandable, notes={}, {} badge(s)",
            self.expandables.len(),
            self.notes.is_some(),
            badges
        );
    }

    /// Expandable whose button is or contains `node`
    pub fn expandable_at(&self, doc: &Document, node: NodeId) -> Option<Expandable> {
        self.expandables
            .iter()
            .find(|e| e.button == node || doc.is_descendant_of(node, e.button))
            .copied()
    }

    pub fn is_notes_button(&self, node: NodeId) -> bool {
        self.notes.is_some_and(|n| n.button == node)
    }

    pub fn click_expand(
        &self,
        doc: &mut Document,
        node: NodeId,
        config: &WidgetConfig,
    ) -> Option<Cmd> {
        let item = self.expandable_at(doc, node)?;
        toggle_expandable(doc, item, config.scroll_delay_ms)
    }

    pub fn click_notes(&self, doc: &mut Document, node: NodeId) {
        if let Some(notes) = self.notes.filter(|n| n.button == node) {
            notes.toggle(doc);
        }
    }
}
