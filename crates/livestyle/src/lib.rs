//! # livestyle - live style rules for editor controls
//!
//! `livestyle` keeps a text editor's look in sync with its style controls.
//! Font family, font size, text color and background color controls feed
//! values into a [`StyleController`], which validates them, records one
//! declaration per property and republishes a single CSS rule for the
//! editor's selector into a page stylesheet.
//!
//! ## Quick Start
//!
//! ```rust
//! use livestyle::{ControllerConfig, PageStyleSheet, StyleController};
//!
//! let mut editor = StyleController::new(ControllerConfig::default(), PageStyleSheet::new()).unwrap();
//!
//! editor.set_font_family("Arial").unwrap();
//! editor.set_font_size(14).unwrap();
//! editor.set_font_family("Helvetica").unwrap();
//!
//! assert_eq!(
//!     editor.sink().to_css(),
//!     ".editor-text { font-family: Helvetica; font-size: 14px; }"
//! );
//! ```
//!
//! ## Concepts
//!
//! - [`StyleProperty`]: the four properties, in the canonical order declarations
//!   are written
//! - [`RuleStore`]: current value per property for one editor
//! - [`ControlBindings`]: validator and converter per control; invalid values
//!   fail with [`InvalidInput`] and change nothing
//! - [`Publisher`]: compiles a [`Snapshot`] into a [`CompiledRule`] and upserts
//!   it into a [`StyleSink`], one managed rule per selector
//! - [`PageStyleSheet`]: an in-memory [`StyleSink`]
//! - [`ControllerConfig`]: selector, allowed families, size range and initial
//!   declarations, loadable from YAML
//!
//! ## Sharing a Stylesheet
//!
//! Several editors on one page can publish into the same sheet through
//! `Rc<RefCell<_>>`; each only ever touches its own selector.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use livestyle::{ControllerConfig, PageStyleSheet, StyleController};
//!
//! let sheet = Rc::new(RefCell::new(PageStyleSheet::new()));
//! let mut notes = StyleController::new(ControllerConfig::for_selector(".notes"), Rc::clone(&sheet)).unwrap();
//! let mut draft = StyleController::new(ControllerConfig::for_selector(".draft"), Rc::clone(&sheet)).unwrap();
//!
//! notes.set_color("navy").unwrap();
//! draft.set_color((255, 255, 255)).unwrap();
//!
//! assert_eq!(sheet.borrow().rule(".notes"), Some("color: #000080;"));
//! assert_eq!(sheet.borrow().rule(".draft"), Some("color: #ffffff;"));
//! ```

pub mod bindings;
pub mod config;
mod controller;
mod error;
mod property;
pub mod publish;
pub mod store;

pub use bindings::{
    font_family_to_css, Binding, Control, ControlBindings, ControlValue, FontFamilyValidator,
    FontSizeUnit, FontSizeValidator,
};
pub use config::ControllerConfig;
pub use controller::StyleController;
pub use error::{ConfigError, ControllerError, InvalidInput, PublishError, SinkError, StartError};
pub use property::StyleProperty;
pub use publish::{CompiledRule, PageStyleSheet, Publisher, StyleSink};
pub use store::{RuleStore, Snapshot};
