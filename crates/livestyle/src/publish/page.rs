//! In-memory page stylesheet.

use crate::error::SinkError;

use super::sink::StyleSink;

/// A stylesheet holding one rule per selector.
///
/// Rules keep the position at which their selector was first inserted, so
/// updating a rule never reorders the sheet.
///
/// # Example
///
/// ```rust
/// use livestyle::{PageStyleSheet, StyleSink};
///
/// let mut sheet = PageStyleSheet::new();
/// sheet.upsert(".a", "color: #000000;").unwrap();
/// sheet.upsert(".b", "font-size: 12px;").unwrap();
/// sheet.upsert(".a", "color: #ffffff;").unwrap();
///
/// assert_eq!(sheet.len(), 2);
/// assert_eq!(sheet.to_css(), ".a { color: #ffffff; }\n.b { font-size: 12px; }");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStyleSheet {
    rules: Vec<(String, String)>,
}

impl PageStyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the declaration block stored for `selector`.
    pub fn rule(&self, selector: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, body)| body.as_str())
    }

    /// Iterates over `(selector, body)` pairs in sheet order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(s, b)| (s.as_str(), b.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Renders the sheet as CSS text, one rule per line.
    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(|(selector, body)| format!("{} {{ {} }}", selector, body))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StyleSink for PageStyleSheet {
    fn upsert(&mut self, selector: &str, body: &str) -> Result<(), SinkError> {
        match self.rules.iter_mut().find(|(s, _)| s == selector) {
            Some((_, existing)) => {
                existing.clear();
                existing.push_str(body);
            }
            None => self.rules.push((selector.to_string(), body.to_string())),
        }
        Ok(())
    }

    fn remove(&mut self, selector: &str) -> Result<(), SinkError> {
        self.rules.retain(|(s, _)| s != selector);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut sheet = PageStyleSheet::new();
        sheet.upsert(".a", "color: #000000;").unwrap();
        sheet.upsert(".a", "color: #111111;").unwrap();
        sheet.upsert(".a", "color: #222222;").unwrap();

        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.rule(".a"), Some("color: #222222;"));
    }

    #[test]
    fn test_update_keeps_position() {
        let mut sheet = PageStyleSheet::new();
        sheet.upsert(".a", "color: #000000;").unwrap();
        sheet.upsert(".b", "color: #111111;").unwrap();
        sheet.upsert(".a", "color: #222222;").unwrap();

        let selectors: Vec<_> = sheet.rules().map(|(s, _)| s).collect();
        assert_eq!(selectors, vec![".a", ".b"]);
    }

    #[test]
    fn test_remove() {
        let mut sheet = PageStyleSheet::new();
        sheet.upsert(".a", "color: #000000;").unwrap();
        sheet.remove(".a").unwrap();
        sheet.remove(".missing").unwrap();

        assert!(sheet.is_empty());
        assert_eq!(sheet.rule(".a"), None);
        assert_eq!(sheet.to_css(), "");
    }
}
