//! CSS text for one managed rule.

use std::fmt;

use crate::property::StyleProperty;
use crate::store::Snapshot;

/// A selector together with its declarations in canonical order.
///
/// Compiled rules are derived from a [`Snapshot`] on every publish and never
/// stored by the controller.
///
/// # Example
///
/// ```rust
/// use livestyle::{CompiledRule, Snapshot, StyleProperty};
///
/// let snapshot = Snapshot::from_declarations([
///     (StyleProperty::Color, "#112233"),
///     (StyleProperty::FontSize, "14px"),
/// ]);
/// let rule = CompiledRule::new(".editor-text", &snapshot);
///
/// assert_eq!(rule.body(), "font-size: 14px; color: #112233;");
/// assert_eq!(rule.to_string(), ".editor-text { font-size: 14px; color: #112233; }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    selector: String,
    snapshot: Snapshot,
}

impl CompiledRule {
    pub fn new(selector: impl Into<String>, snapshot: &Snapshot) -> Self {
        Self {
            selector: selector.into(),
            snapshot: snapshot.clone(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The declarations this rule was compiled from.
    pub fn declarations(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Returns the value this rule declares for `property`.
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.snapshot.get(property)
    }

    /// True if the rule declares nothing.
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// The declaration block without selector or braces.
    pub fn body(&self) -> String {
        let mut body = String::new();
        for (property, value) in self.snapshot.iter() {
            if !body.is_empty() {
                body.push(' ');
            }
            body.push_str(property.css_name());
            body.push_str(": ");
            body.push_str(value);
            body.push(';');
        }
        body
    }
}

impl fmt::Display for CompiledRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.body();
        if body.is_empty() {
            write!(f, "{} {{ }}", self.selector)
        } else {
            write!(f, "{} {{ {} }}", self.selector, body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rule() {
        let rule = CompiledRule::new(".editor-text", &Snapshot::default());
        assert!(rule.is_empty());
        assert_eq!(rule.body(), "");
        assert_eq!(rule.to_string(), ".editor-text { }");
    }

    #[test]
    fn test_full_rule_in_canonical_order() {
        let snapshot = Snapshot::from_declarations([
            (StyleProperty::BackgroundColor, "#ffffff"),
            (StyleProperty::Color, "#000000"),
            (StyleProperty::FontSize, "12px"),
            (StyleProperty::FontFamily, "\"Times New Roman\""),
        ]);
        let rule = CompiledRule::new("#doc .body", &snapshot);
        assert_eq!(
            rule.to_string(),
            "#doc .body { font-family: \"Times New Roman\"; font-size: 12px; color: #000000; background-color: #ffffff; }"
        );
        assert_eq!(rule.get(StyleProperty::FontSize), Some("12px"));
    }
}
