//! Uniform control-to-property bindings.

use std::fmt;

use super::validate::{
    color_to_css, font_family_to_css, parse_color, FontFamilyValidator, FontSizeValidator,
};
use super::value::ControlValue;
use crate::error::InvalidInput;
use crate::property::StyleProperty;

/// A control wired to one style property.
///
/// `resolve` turns a raw control value into the string stored for
/// [`property`](Control::property), or rejects it.
pub trait Control {
    fn property(&self) -> StyleProperty;

    fn resolve(&self, raw: &ControlValue) -> Result<String, InvalidInput>;
}

type Validator<T> = Box<dyn Fn(&ControlValue) -> Result<T, InvalidInput>>;
type Converter<T> = Box<dyn Fn(&T) -> String>;

/// A binding parameterized by validator, converter and target property.
///
/// # Example
///
/// ```rust
/// use livestyle::{Binding, Control, ControlValue, InvalidInput, StyleProperty};
///
/// // A color control that only offers black or white.
/// let contrast = Binding::new(
///     StyleProperty::Color,
///     |raw: &ControlValue| match raw {
///         ControlValue::Text(t) if t == "dark" => Ok("#000000"),
///         ControlValue::Text(t) if t == "light" => Ok("#ffffff"),
///         other => Err(InvalidInput::MalformedColor {
///             value: format!("{:?}", other),
///             reason: "expected dark or light".into(),
///         }),
///     },
///     |value: &&str| value.to_string(),
/// );
///
/// assert_eq!(contrast.resolve(&"dark".into()).unwrap(), "#000000");
/// assert!(contrast.resolve(&"grey".into()).is_err());
/// ```
pub struct Binding<T> {
    property: StyleProperty,
    validator: Validator<T>,
    converter: Converter<T>,
}

impl<T> Binding<T> {
    pub fn new<V, C>(property: StyleProperty, validator: V, converter: C) -> Self
    where
        V: Fn(&ControlValue) -> Result<T, InvalidInput> + 'static,
        C: Fn(&T) -> String + 'static,
    {
        Self {
            property,
            validator: Box::new(validator),
            converter: Box::new(converter),
        }
    }
}

impl<T> Control for Binding<T> {
    fn property(&self) -> StyleProperty {
        self.property
    }

    fn resolve(&self, raw: &ControlValue) -> Result<String, InvalidInput> {
        let value = (self.validator)(raw)?;
        Ok((self.converter)(&value))
    }
}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("property", &self.property)
            .finish_non_exhaustive()
    }
}

/// Binds a font family choice.
pub fn font_family(validator: FontFamilyValidator) -> Binding<String> {
    Binding::new(
        StyleProperty::FontFamily,
        move |raw: &ControlValue| validator.validate(raw),
        |family: &String| font_family_to_css(family),
    )
}

/// Binds a font size choice.
pub fn font_size(validator: FontSizeValidator) -> Binding<u32> {
    let formatter = validator.clone();
    Binding::new(
        StyleProperty::FontSize,
        move |raw: &ControlValue| validator.validate(raw),
        move |size: &u32| formatter.to_css(*size),
    )
}

/// Binds a color choice to `property`.
pub fn color(property: StyleProperty) -> Binding<csscolorparser::Color> {
    Binding::new(
        property,
        move |raw: &ControlValue| parse_color(property, raw),
        color_to_css,
    )
}

/// One binding per [`StyleProperty`].
pub struct ControlBindings {
    bindings: [Box<dyn Control>; 4],
}

impl ControlBindings {
    /// Builds the standard bindings for the four editor controls.
    pub fn new(families: FontFamilyValidator, sizes: FontSizeValidator) -> Self {
        Self {
            bindings: [
                Box::new(font_family(families)),
                Box::new(font_size(sizes)),
                Box::new(color(StyleProperty::Color)),
                Box::new(color(StyleProperty::BackgroundColor)),
            ],
        }
    }

    /// Replaces the binding for the control's property.
    pub fn replace(&mut self, control: Box<dyn Control>) {
        let index = control.property().index();
        self.bindings[index] = control;
    }

    pub fn get(&self, property: StyleProperty) -> &dyn Control {
        self.bindings[property.index()].as_ref()
    }

    /// Validates and converts `raw` with the binding for `property`.
    pub fn resolve(
        &self,
        property: StyleProperty,
        raw: &ControlValue,
    ) -> Result<String, InvalidInput> {
        self.get(property).resolve(raw)
    }
}

impl fmt::Debug for ControlBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.bindings.iter().map(|b| b.property()))
            .finish()
    }
}
