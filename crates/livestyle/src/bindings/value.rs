//! Values handed over by toolkit controls.

/// A decoded value from a UI control's change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    /// Chosen or typed text: a combo-box entry, a size, a CSS color string.
    Text(String),
    /// A numeric choice.
    Integer(i64),
    /// A color picker selection.
    Rgb(u8, u8, u8),
}

impl ControlValue {
    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ControlValue::Text(_) => "text",
            ControlValue::Integer(_) => "integer",
            ControlValue::Rgb(..) => "rgb",
        }
    }
}

impl From<&str> for ControlValue {
    fn from(value: &str) -> Self {
        ControlValue::Text(value.to_string())
    }
}

impl From<String> for ControlValue {
    fn from(value: String) -> Self {
        ControlValue::Text(value)
    }
}

impl From<i64> for ControlValue {
    fn from(value: i64) -> Self {
        ControlValue::Integer(value)
    }
}

impl From<i32> for ControlValue {
    fn from(value: i32) -> Self {
        ControlValue::Integer(value.into())
    }
}

impl From<u32> for ControlValue {
    fn from(value: u32) -> Self {
        ControlValue::Integer(value.into())
    }
}

impl From<(u8, u8, u8)> for ControlValue {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ControlValue::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(ControlValue::from("Arial"), ControlValue::Text("Arial".into()));
        assert_eq!(ControlValue::from(14), ControlValue::Integer(14));
        assert_eq!(ControlValue::from(14u32), ControlValue::Integer(14));
        assert_eq!(ControlValue::from((1, 2, 3)), ControlValue::Rgb(1, 2, 3));
    }

    #[test]
    fn test_kind() {
        assert_eq!(ControlValue::from("x").kind(), "text");
        assert_eq!(ControlValue::from(1i64).kind(), "integer");
        assert_eq!(ControlValue::Rgb(0, 0, 0).kind(), "rgb");
    }
}
