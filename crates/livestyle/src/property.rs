//! The style properties an editor exposes to its controls.

use serde::{Deserialize, Serialize};

/// A CSS property driven by one editor control.
///
/// The declaration order of the variants is the canonical order in which
/// declarations are written into a rule, independent of the order in which
/// the user touched the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleProperty {
    FontFamily,
    FontSize,
    Color,
    BackgroundColor,
}

impl StyleProperty {
    /// Every property, in canonical order.
    pub const ALL: [StyleProperty; 4] = [
        StyleProperty::FontFamily,
        StyleProperty::FontSize,
        StyleProperty::Color,
        StyleProperty::BackgroundColor,
    ];

    /// The property name as written in CSS.
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::FontFamily => "font-family",
            StyleProperty::FontSize => "font-size",
            StyleProperty::Color => "color",
            StyleProperty::BackgroundColor => "background-color",
        }
    }

    /// Position of this property in the canonical order.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Looks up a property by its CSS name.
    pub fn from_css_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|property| property.css_name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_index() {
        for (i, property) in StyleProperty::ALL.iter().enumerate() {
            assert_eq!(property.index(), i);
        }
        assert!(StyleProperty::FontFamily < StyleProperty::BackgroundColor);
    }

    #[test]
    fn test_css_names() {
        assert_eq!(StyleProperty::FontFamily.css_name(), "font-family");
        assert_eq!(StyleProperty::BackgroundColor.to_string(), "background-color");
    }

    #[test]
    fn test_from_css_name() {
        assert_eq!(
            StyleProperty::from_css_name("Font-Size"),
            Some(StyleProperty::FontSize)
        );
        assert_eq!(StyleProperty::from_css_name("margin"), None);
    }

    #[test]
    fn test_serde_uses_css_names() {
        let property: StyleProperty = serde_yaml::from_str("background-color").unwrap();
        assert_eq!(property, StyleProperty::BackgroundColor);
    }
}
