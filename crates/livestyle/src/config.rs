//! Controller configuration.
//!
//! A [`ControllerConfig`] names the selector an editor's rule targets, the
//! font families and size range its controls offer, and the declarations the
//! editor starts with. Configurations can be built in code or loaded from
//! YAML:
//!
//! ```yaml
//! selector: "#notes .editor-text"
//! font-families: [Arial, Georgia, monospace]
//! min-font-size: 8
//! max-font-size: 72
//! font-size-unit: pt
//! initial:
//!   font-family: Georgia
//!   font-size: "12"
//!   background-color: "#fdf6e3"
//! ```
//!
//! Missing keys take their [`Default`] values.

use std::collections::BTreeMap;
use std::path::Path;

use cssparser::{ParseError, Parser, ParserInput, SourcePosition, Token};
use serde::{Deserialize, Serialize};

use crate::bindings::{ControlBindings, FontFamilyValidator, FontSizeUnit, FontSizeValidator};
use crate::error::ConfigError;
use crate::property::StyleProperty;

/// Selector targeted when none is configured.
pub const DEFAULT_SELECTOR: &str = ".editor-text";

/// Font families offered when none are configured.
pub const DEFAULT_FONT_FAMILIES: &[&str] = &[
    "Arial",
    "Helvetica",
    "Times New Roman",
    "Courier New",
    "Georgia",
    "Verdana",
    "serif",
    "sans-serif",
    "monospace",
];

/// Settings for one [`StyleController`](crate::StyleController).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ControllerConfig {
    /// Selector of the managed rule.
    pub selector: String,
    /// Families the font family control may choose from.
    pub font_families: Vec<String>,
    pub min_font_size: u32,
    pub max_font_size: u32,
    pub font_size_unit: FontSizeUnit,
    /// Raw control text applied through the bindings when the editor opens.
    pub initial: BTreeMap<StyleProperty, String>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            font_families: DEFAULT_FONT_FAMILIES.iter().map(|s| s.to_string()).collect(),
            min_font_size: 1,
            max_font_size: 200,
            font_size_unit: FontSizeUnit::Px,
            initial: BTreeMap::new(),
        }
    }
}

impl ControllerConfig {
    /// Creates the default configuration for `selector`.
    pub fn for_selector(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ..Self::default()
        }
    }

    /// Sets an initial declaration, returning the updated config for chaining.
    pub fn with_initial(mut self, property: StyleProperty, value: impl Into<String>) -> Self {
        self.initial.insert(property, value.into());
        self
    }

    /// Parses and validates a YAML configuration.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    /// Checks the selector, the family set and the size range.
    ///
    /// Initial declarations are checked when a controller applies them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_selector(&self.selector) {
            return Err(ConfigError::InvalidSelector(self.selector.clone()));
        }
        if self.font_families.iter().all(|f| f.trim().is_empty()) {
            return Err(ConfigError::NoFontFamilies);
        }
        if self.min_font_size == 0 || self.min_font_size > self.max_font_size {
            return Err(ConfigError::InvalidSizeRange {
                min: self.min_font_size,
                max: self.max_font_size,
            });
        }
        Ok(())
    }

    pub fn font_family_validator(&self) -> FontFamilyValidator {
        FontFamilyValidator::new(
            self.font_families
                .iter()
                .map(|f| f.trim())
                .filter(|f| !f.is_empty()),
        )
    }

    pub fn font_size_validator(&self) -> FontSizeValidator {
        FontSizeValidator::new(
            self.min_font_size..=self.max_font_size,
            self.font_size_unit,
        )
    }

    /// Builds the standard control bindings for this configuration.
    pub fn bindings(&self) -> ControlBindings {
        ControlBindings::new(self.font_family_validator(), self.font_size_validator())
    }
}

/// A selector is usable when it is a non-empty comma-separated list whose
/// tokens cannot open, close or terminate a rule, at any nesting depth.
fn is_valid_selector(selector: &str) -> bool {
    let mut input = ParserInput::new(selector);
    let mut parser = Parser::new(&mut input);
    let mut has_tokens = false;
    let mut after_comma = false;
    loop {
        let start = parser.position();
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        if token == Token::Comma {
            if !has_tokens || after_comma {
                return false;
            }
            after_comma = true;
            continue;
        }
        if !token_is_allowed(&mut parser, start, &token) {
            return false;
        }
        has_tokens = true;
        after_comma = false;
    }
    has_tokens && !after_comma
}

/// Checks one token, descending into the block it opens.
///
/// Blocks, strings and urls must be terminated in the source; the tokenizer
/// closes them silently at end of input.
fn token_is_allowed<'i>(
    parser: &mut Parser<'i, '_>,
    start: SourcePosition,
    token: &Token<'i>,
) -> bool {
    let closer = match token {
        Token::CurlyBracketBlock
        | Token::CloseCurlyBracket
        | Token::Semicolon
        | Token::AtKeyword(_)
        | Token::BadString(_)
        | Token::BadUrl(_) => return false,
        Token::Function(_) | Token::ParenthesisBlock => ')',
        Token::SquareBracketBlock => ']',
        Token::UnquotedUrl(_) => return parser.slice_from(start).ends_with(')'),
        Token::QuotedString(_) => {
            let text = parser.slice_from(start);
            return text.len() >= 2 && text.ends_with(&text[..1]);
        }
        _ => return true,
    };
    let contents_ok = parser
        .parse_nested_block(|nested| Ok::<_, ParseError<'i, ()>>(block_is_valid(nested)))
        .unwrap_or(false);
    contents_ok && parser.slice_from(start).ends_with(closer)
}

fn block_is_valid(parser: &mut Parser<'_, '_>) -> bool {
    loop {
        let start = parser.position();
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => return true,
        };
        if !token_is_allowed(parser, start, &token) {
            return false;
        }
    }
}
