//! Timeline badge classification

use crate::dom::{Document, Selector};

const TIMELINES: [&str; 4] = ["immediate", "short", "medium", "long"];

/// Timeline class for a badge label; the first keyword found wins
pub fn classify(label: &str) -> Option<&'static str> {
    let label = label.trim().to_lowercase();
    TIMELINES.into_iter().find(|t| label.contains(t))
}

/// Tag every `.timeline-badge` with its timeline class. Returns how many
/// badges were classified.
pub fn format_badges(doc: &mut Document) -> usize {
    let badges = doc.query_all(doc.root(), &Selector::parse(".timeline-badge"));
    let mut classified = 0;
    for badge in badges {
        if let Some(class) = classify(&doc.text_content(badge)) {
            doc.add_class(badge, class);
            classified += 1;
        }
    }
    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("  Immediate "), Some("immediate"));
        assert_eq!(classify("Short-term"), Some("short"));
        assert_eq!(classify("Medium / long"), Some("medium"));
        assert_eq!(classify("LONG TERM"), Some("long"));
        assert_eq!(classify("TBD"), None);
    }
}
