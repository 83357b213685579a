//! Validation and conversion of control values.
//!
//! Each editor control is wired to one [`StyleProperty`](crate::StyleProperty)
//! through a [`Binding`]: a validator that accepts or rejects the decoded
//! [`ControlValue`] and a converter that formats the accepted value the way
//! the [`RuleStore`](crate::RuleStore) expects it. [`ControlBindings`] holds
//! one binding per property.
//!
//! Rejected values produce [`InvalidInput`](crate::InvalidInput) and never
//! reach the store.

mod binding;
mod validate;
mod value;

pub use binding::{color, font_family, font_size, Binding, Control, ControlBindings};
pub use validate::{
    color_to_css, font_family_to_css, parse_color, FontFamilyValidator, FontSizeUnit,
    FontSizeValidator,
};
pub use value::ControlValue;
