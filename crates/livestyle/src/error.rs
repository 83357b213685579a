//! Error types.

use thiserror::Error;

use crate::property::StyleProperty;

/// A control value that failed validation.
///
/// Rejected values never reach the [`RuleStore`](crate::RuleStore); the rule
/// published before the attempt stays in effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The font family is not one of the allowed families.
    #[error("font family '{value}' is not allowed (expected one of: {})", .allowed.join(", "))]
    UnknownFontFamily { value: String, allowed: Vec<String> },

    /// The font size lies outside the accepted range.
    #[error("font size {value} is out of range {min}..={max}")]
    FontSizeOutOfRange { value: i64, min: u32, max: u32 },

    /// The font size text is not an integer.
    #[error("font size '{value}' is not an integer")]
    MalformedFontSize { value: String },

    /// The color text could not be parsed as a CSS color.
    #[error("'{value}' is not a valid color: {reason}")]
    MalformedColor { value: String, reason: String },

    /// The control handed over a value of the wrong kind for this property.
    #[error("{property} does not accept {found} values")]
    UnexpectedValue {
        property: StyleProperty,
        found: &'static str,
    },
}

/// Failure reported by an injection sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("style sink failed: {message}")]
pub struct SinkError {
    pub message: String,
}

impl SinkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A publish or retract that the sink rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to publish rule for '{selector}'")]
pub struct PublishError {
    pub selector: String,
    #[source]
    pub source: SinkError,
}

/// Error returned by [`StyleController`](crate::StyleController) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Invalid(#[from] InvalidInput),
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Error opening an editor session.
#[derive(Debug, Error)]
pub enum StartError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Error loading or validating a [`ControllerConfig`](crate::ControllerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read config '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid selector '{0}'")]
    InvalidSelector(String),

    #[error("at least one font family must be allowed")]
    NoFontFamilies,

    #[error("invalid font size range {min}..={max}")]
    InvalidSizeRange { min: u32, max: u32 },

    #[error("invalid initial value for {property}")]
    InvalidInitial {
        property: StyleProperty,
        #[source]
        source: InvalidInput,
    },
}
