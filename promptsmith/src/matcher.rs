//! Topic identification by keyword.
//!
//! Restrictive on purpose: the first topic in catalog order with any whole-word keyword
//! match wins. There is no scoring, so a later topic matching more keywords still loses.

use crate::catalog::{builtin, Catalog, TopicDefinition};

impl Catalog {
    /// Returns the first topic (catalog order) whose keywords occur in `text` as whole
    /// words or phrases, ignoring case. Keywords are tried in declared order.
    ///
    /// Total over any input: empty or unrelated text returns `None`.
    pub fn identify(&self, text: &str) -> Option<&TopicDefinition> {
        if text.is_empty() {
            return None;
        }
        let normalized = text.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.patterns.iter().any(|p| p.is_match(&normalized)))
            .map(|entry| &entry.topic)
    }
}

/// [`Catalog::identify`] over the [`builtin`] catalog.
pub fn identify_topic(text: &str) -> Option<&'static TopicDefinition> {
    builtin().identify(text)
}
