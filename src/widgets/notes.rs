//! Collapsible meeting notes

use crate::dom::{Document, Element, NodeId, Selector};
use crate::host::Host;

const VIEW_ALL: &str = "View All Notes";
const COLLAPSE: &str = "Collapse Notes";

/// The page's `.meeting-notes` section, capped at `max_height` pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetingNotes {
    pub section: NodeId,
    pub button: NodeId,
    pub max_height: u32,
}

impl MeetingNotes {
    /// Cap the first `.meeting-notes` section if it is taller than
    /// `max_height` and add a "View All Notes" button after it
    pub fn init(doc: &mut Document, host: &dyn Host, max_height: u32) -> Option<Self> {
        let section = doc.query(doc.root(), &Selector::parse(".meeting-notes"))?;
        let extent = host.measure(doc, section)?;
        if extent.scroll_height <= max_height {
            return None;
        }

        doc.set_style_property(section, "max-height", &format!("{max_height}px"));
        doc.set_style_property(section, "overflow-y", "auto");

        let button = doc.create_element_from(
            Element::new("button").with_attr("class", "btn btn-sm btn-outline-primary mt-2"),
        );
        doc.set_text_content(button, VIEW_ALL);
        doc.insert_after(section, button);

        Some(Self {
            section,
            button,
            max_height,
        })
    }

    pub fn is_collapsed(&self, doc: &Document) -> bool {
        doc.style_property(self.section, "max-height").as_deref()
            == Some(format!("{}px", self.max_height).as_str())
    }

    /// Switch between the capped and full height
    pub fn toggle(&self, doc: &mut Document) {
        if self.is_collapsed(doc) {
            doc.set_style_property(self.section, "max-height", "none");
            doc.set_text_content(self.button, COLLAPSE);
        } else {
            doc.set_style_property(self.section, "max-height", &format!("{}px", self.max_height));
            doc.set_text_content(self.button, VIEW_ALL);
        }
    }
}
