//! Validators and converters for the built-in controls.

use std::ops::RangeInclusive;

use csscolorparser::Color;
use serde::{Deserialize, Serialize};

use super::value::ControlValue;
use crate::error::InvalidInput;
use crate::property::StyleProperty;

/// Accepts font families from a fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamilyValidator {
    allowed: Vec<String>,
}

impl FontFamilyValidator {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    /// Returns the allowed family matching `raw`, in its configured spelling.
    ///
    /// Matching ignores ASCII case, surrounding whitespace and surrounding
    /// quotes, so `"times new roman"` selects `Times New Roman`.
    pub fn validate(&self, raw: &ControlValue) -> Result<String, InvalidInput> {
        let ControlValue::Text(text) = raw else {
            return Err(InvalidInput::UnexpectedValue {
                property: StyleProperty::FontFamily,
                found: raw.kind(),
            });
        };
        let wanted = text.trim().trim_matches(|c: char| c == '"' || c == '\'').trim();
        self.allowed
            .iter()
            .find(|family| family.eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| InvalidInput::UnknownFontFamily {
                value: text.clone(),
                allowed: self.allowed.clone(),
            })
    }
}

/// Keywords a bare `font-family` value would be read as instead of a family.
const RESERVED_FAMILY_KEYWORDS: &[&str] = &[
    "inherit",
    "initial",
    "unset",
    "revert",
    "revert-layer",
    "default",
];

/// Formats a family name for a `font-family` declaration.
///
/// Names that are a single CSS identifier (including the generic families
/// such as `serif`) are written bare; anything else, and any name spelled
/// like a CSS-wide keyword, is written as a quoted CSS string.
///
/// ```rust
/// use livestyle::font_family_to_css;
///
/// assert_eq!(font_family_to_css("Arial"), "Arial");
/// assert_eq!(font_family_to_css("sans-serif"), "sans-serif");
/// assert_eq!(font_family_to_css("Times New Roman"), "\"Times New Roman\"");
/// assert_eq!(font_family_to_css("Inherit"), "\"Inherit\"");
/// ```
pub fn font_family_to_css(name: &str) -> String {
    let reserved = RESERVED_FAMILY_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(name));
    let mut ident = String::new();
    if !reserved && cssparser::serialize_identifier(name, &mut ident).is_ok() && ident == name {
        return ident;
    }
    let mut quoted = String::new();
    match cssparser::serialize_string(name, &mut quoted) {
        Ok(()) => quoted,
        Err(_) => format!("\"{}\"", name.replace('"', "\\\"")),
    }
}

/// Length unit appended to accepted font sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSizeUnit {
    #[default]
    Px,
    Pt,
    Em,
    Rem,
}

impl FontSizeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            FontSizeUnit::Px => "px",
            FontSizeUnit::Pt => "pt",
            FontSizeUnit::Em => "em",
            FontSizeUnit::Rem => "rem",
        }
    }
}

impl std::fmt::Display for FontSizeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts integer font sizes within an inclusive range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSizeValidator {
    range: RangeInclusive<u32>,
    unit: FontSizeUnit,
}

impl FontSizeValidator {
    pub fn new(range: RangeInclusive<u32>, unit: FontSizeUnit) -> Self {
        Self { range, unit }
    }

    pub fn range(&self) -> &RangeInclusive<u32> {
        &self.range
    }

    pub fn unit(&self) -> FontSizeUnit {
        self.unit
    }

    /// Returns the accepted size.
    ///
    /// Text values may carry the configured unit suffix (`"14px"`); any other
    /// text must be a plain integer.
    pub fn validate(&self, raw: &ControlValue) -> Result<u32, InvalidInput> {
        let value = match raw {
            ControlValue::Integer(n) => *n,
            ControlValue::Text(text) => {
                let trimmed = text.trim();
                let digits = trimmed
                    .strip_suffix(self.unit.as_str())
                    .unwrap_or(trimmed)
                    .trim_end();
                digits
                    .parse::<i64>()
                    .map_err(|_| InvalidInput::MalformedFontSize {
                        value: text.clone(),
                    })?
            }
            ControlValue::Rgb(..) => {
                return Err(InvalidInput::UnexpectedValue {
                    property: StyleProperty::FontSize,
                    found: raw.kind(),
                })
            }
        };

        u32::try_from(value)
            .ok()
            .filter(|size| self.range.contains(size))
            .ok_or(InvalidInput::FontSizeOutOfRange {
                value,
                min: *self.range.start(),
                max: *self.range.end(),
            })
    }

    /// Formats an accepted size with its unit, e.g. `14px`.
    pub fn to_css(&self, size: u32) -> String {
        format!("{}{}", size, self.unit)
    }
}

/// Parses a control value as a color for `property`.
///
/// Text is parsed as any CSS color: hex forms, named colors and the
/// functional notations.
pub fn parse_color(property: StyleProperty, raw: &ControlValue) -> Result<Color, InvalidInput> {
    match raw {
        ControlValue::Rgb(r, g, b) => Ok(Color::from_rgba8(*r, *g, *b, 255)),
        ControlValue::Text(text) => {
            text.trim()
                .parse::<Color>()
                .map_err(|e| InvalidInput::MalformedColor {
                    value: text.clone(),
                    reason: e.to_string(),
                })
        }
        ControlValue::Integer(_) => Err(InvalidInput::UnexpectedValue {
            property,
            found: raw.kind(),
        }),
    }
}

/// Formats a color as lowercase `#rrggbb`, or `#rrggbbaa` when translucent.
pub fn color_to_css(color: &Color) -> String {
    let [r, g, b, a] = color.to_rgba8();
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn families() -> FontFamilyValidator {
        FontFamilyValidator::new(["Arial", "Helvetica", "Times New Roman", "serif"])
    }

    #[test]
    fn test_font_family_exact_match() {
        let value = families().validate(&"Arial".into()).unwrap();
        assert_eq!(value, "Arial");
    }

    #[test]
    fn test_font_family_uses_configured_spelling() {
        let value = families().validate(&"  'times new roman' ".into()).unwrap();
        assert_eq!(value, "Times New Roman");
    }

    #[test]
    fn test_font_family_outside_set_rejected() {
        let err = families().validate(&"Comic Sans MS".into()).unwrap_err();
        assert!(matches!(err, InvalidInput::UnknownFontFamily { .. }));
    }

    #[test]
    fn test_font_family_wrong_kind_rejected() {
        let err = families().validate(&ControlValue::Integer(3)).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::UnexpectedValue {
                property: StyleProperty::FontFamily,
                found: "integer",
            }
        );
    }

    #[test]
    fn test_font_family_to_css_quotes_multiword_names() {
        assert_eq!(font_family_to_css("Helvetica"), "Helvetica");
        assert_eq!(font_family_to_css("monospace"), "monospace");
        assert_eq!(font_family_to_css("Courier New"), "\"Courier New\"");
        assert_eq!(font_family_to_css("8bit"), "\"8bit\"");
    }

    #[test]
    fn test_font_family_to_css_quotes_css_wide_keywords() {
        assert_eq!(font_family_to_css("inherit"), "\"inherit\"");
        assert_eq!(font_family_to_css("INITIAL"), "\"INITIAL\"");
        assert_eq!(font_family_to_css("unset"), "\"unset\"");
        assert_eq!(font_family_to_css("revert-layer"), "\"revert-layer\"");
        assert_eq!(font_family_to_css("default"), "\"default\"");
        assert_eq!(font_family_to_css("inherited"), "inherited");
    }

    fn sizes() -> FontSizeValidator {
        FontSizeValidator::new(1..=200, FontSizeUnit::Px)
    }

    #[test]
    fn test_font_size_integer() {
        assert_eq!(sizes().validate(&ControlValue::Integer(14)).unwrap(), 14);
        assert_eq!(sizes().to_css(14), "14px");
    }

    #[test]
    fn test_font_size_text_with_and_without_unit() {
        assert_eq!(sizes().validate(&"18".into()).unwrap(), 18);
        assert_eq!(sizes().validate(&" 18px ".into()).unwrap(), 18);
    }

    #[test]
    fn test_font_size_bounds_are_inclusive() {
        assert_eq!(sizes().validate(&ControlValue::Integer(1)).unwrap(), 1);
        assert_eq!(sizes().validate(&ControlValue::Integer(200)).unwrap(), 200);
        assert!(sizes().validate(&ControlValue::Integer(0)).is_err());
        assert!(sizes().validate(&ControlValue::Integer(201)).is_err());
    }

    #[test]
    fn test_font_size_negative_rejected() {
        let err = sizes().validate(&ControlValue::Integer(-5)).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::FontSizeOutOfRange {
                value: -5,
                min: 1,
                max: 200,
            }
        );
    }

    #[test]
    fn test_font_size_malformed_text_rejected() {
        let err = sizes().validate(&"14em".into()).unwrap_err();
        assert!(matches!(err, InvalidInput::MalformedFontSize { .. }));
        assert!(sizes().validate(&"large".into()).is_err());
    }

    #[test]
    fn test_font_size_other_unit() {
        let validator = FontSizeValidator::new(6..=72, FontSizeUnit::Pt);
        assert_eq!(validator.validate(&"12pt".into()).unwrap(), 12);
        assert_eq!(validator.to_css(12), "12pt");
    }

    #[test]
    fn test_color_from_rgb() {
        let rgb = ControlValue::Rgb(0x11, 0x22, 0x33);
        let color = parse_color(StyleProperty::Color, &rgb).unwrap();
        assert_eq!(color_to_css(&color), "#112233");
    }

    #[test]
    fn test_color_from_text() {
        let hex = parse_color(StyleProperty::Color, &"#112233".into()).unwrap();
        assert_eq!(color_to_css(&hex), "#112233");

        let named = parse_color(StyleProperty::Color, &"red".into()).unwrap();
        assert_eq!(color_to_css(&named), "#ff0000");

        let short = parse_color(StyleProperty::Color, &"#ABC".into()).unwrap();
        assert_eq!(color_to_css(&short), "#aabbcc");

        let func = parse_color(StyleProperty::BackgroundColor, &"rgb(0, 128, 255)".into()).unwrap();
        assert_eq!(color_to_css(&func), "#0080ff");
    }

    #[test]
    fn test_translucent_color_keeps_alpha() {
        let color = parse_color(StyleProperty::Color, &"#11223380".into()).unwrap();
        assert_eq!(color_to_css(&color), "#11223380");
    }

    #[test]
    fn test_malformed_color_rejected() {
        let err = parse_color(StyleProperty::Color, &"not-a-color".into()).unwrap_err();
        assert!(matches!(err, InvalidInput::MalformedColor { .. }));

        let err =
            parse_color(StyleProperty::BackgroundColor, &ControlValue::Integer(5)).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::UnexpectedValue {
                property: StyleProperty::BackgroundColor,
                found: "integer",
            }
        );
    }
}
