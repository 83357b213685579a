//! Per-editor style controller.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::bindings::{Control, ControlBindings, ControlValue};
use crate::config::ControllerConfig;
use crate::error::{ConfigError, ControllerError, InvalidInput, PublishError, StartError};
use crate::property::StyleProperty;
use crate::publish::{CompiledRule, Publisher, StyleSink};
use crate::store::{RuleStore, Snapshot};

/// Drives one editor's managed style rule.
///
/// Each control change runs to completion: the value is validated by its
/// binding, written to the [`RuleStore`], and the whole rule is republished
/// through the [`Publisher`]. Rejected values leave both the store and the
/// published rule untouched.
///
/// # Example
///
/// ```rust
/// use livestyle::{ControllerConfig, PageStyleSheet, StyleController};
///
/// let mut editor = StyleController::new(ControllerConfig::default(), PageStyleSheet::new()).unwrap();
/// editor.set_font_size(14).unwrap();
/// editor.set_color("#112233").unwrap();
/// assert!(editor.set_font_size(-5).is_err());
///
/// assert_eq!(
///     editor.sink().to_css(),
///     ".editor-text { font-size: 14px; color: #112233; }"
/// );
/// ```
#[derive(Debug)]
pub struct StyleController<S> {
    selector: String,
    store: RuleStore,
    bindings: ControlBindings,
    publisher: Publisher<S>,
    initial: BTreeMap<StyleProperty, String>,
}

impl<S: StyleSink> StyleController<S> {
    /// Opens an editor session publishing into `sink`.
    ///
    /// Initial declarations from the config are validated through the
    /// bindings and published once.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::Config`] if the config is invalid or an initial
    /// value is rejected by its binding, and [`StartError::Publish`] if the
    /// initial rule cannot be published.
    pub fn new(config: ControllerConfig, sink: S) -> Result<Self, StartError> {
        Self::with_bindings(config.bindings(), config, sink)
    }

    /// Opens an editor session with custom bindings.
    pub fn with_bindings(
        bindings: ControlBindings,
        config: ControllerConfig,
        sink: S,
    ) -> Result<Self, StartError> {
        config.validate()?;
        let mut controller = Self {
            selector: config.selector,
            store: RuleStore::new(),
            bindings,
            publisher: Publisher::new(sink),
            initial: config.initial,
        };
        controller
            .load_initial()
            .map_err(|(property, source)| ConfigError::InvalidInitial { property, source })?;
        if !controller.store.is_empty() {
            controller.publish()?;
        }
        Ok(controller)
    }

    /// Applies a control change to `property`.
    ///
    /// Returns the rule as published after the change.
    ///
    /// # Errors
    ///
    /// - [`ControllerError::Invalid`] if the binding rejects `value`; nothing
    ///   changes.
    /// - [`ControllerError::Publish`] if the sink fails; the store is rolled
    ///   back to its previous value for `property`.
    pub fn apply(
        &mut self,
        property: StyleProperty,
        value: impl Into<ControlValue>,
    ) -> Result<CompiledRule, ControllerError> {
        let raw = value.into();
        let resolved = self.bindings.resolve(property, &raw).map_err(|e| {
            warn!(selector = %self.selector, %property, error = %e, "rejected control value");
            e
        })?;

        let previous = self.store.set(property, resolved);
        match self.publish() {
            Ok(rule) => Ok(rule),
            Err(e) => {
                self.store.restore(property, previous);
                Err(e.into())
            }
        }
    }

    pub fn set_font_family(&mut self, family: &str) -> Result<CompiledRule, ControllerError> {
        self.apply(StyleProperty::FontFamily, family)
    }

    pub fn set_font_size(
        &mut self,
        size: impl Into<ControlValue>,
    ) -> Result<CompiledRule, ControllerError> {
        self.apply(StyleProperty::FontSize, size)
    }

    pub fn set_color(
        &mut self,
        color: impl Into<ControlValue>,
    ) -> Result<CompiledRule, ControllerError> {
        self.apply(StyleProperty::Color, color)
    }

    pub fn set_background_color(
        &mut self,
        color: impl Into<ControlValue>,
    ) -> Result<CompiledRule, ControllerError> {
        self.apply(StyleProperty::BackgroundColor, color)
    }

    /// Removes the declaration for `property` and republishes.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] if the sink fails; the declaration is kept.
    pub fn clear(&mut self, property: StyleProperty) -> Result<CompiledRule, PublishError> {
        let previous = self.store.unset(property);
        if previous.is_none() {
            return Ok(self.rule());
        }
        self.publish().map_err(|e| {
            self.store.restore(property, previous);
            e
        })
    }

    /// Restores the configured initial declarations and republishes.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError`] if an initial value no longer passes its
    /// binding or the sink fails; the store keeps its current declarations.
    pub fn reset(&mut self) -> Result<CompiledRule, ControllerError> {
        let saved = self.store.clone();
        self.store.clear();
        if let Err((_, invalid)) = self.load_initial() {
            self.store = saved;
            return Err(invalid.into());
        }
        self.publish().map_err(|e| {
            self.store = saved;
            e.into()
        })
    }

    /// Republishes if the store changed since the last successful publish.
    pub fn refresh(&mut self) -> Result<Option<CompiledRule>, PublishError> {
        if !self.store.is_dirty() {
            return Ok(None);
        }
        self.publish().map(Some)
    }

    /// Removes the managed rule from the sink and returns the sink.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] if the sink fails to remove the rule.
    pub fn teardown(mut self) -> Result<S, PublishError> {
        self.publisher.retract(&self.selector)?;
        debug!(selector = %self.selector, "editor torn down");
        Ok(self.publisher.into_sink())
    }

    /// The current declarations in canonical order.
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// The rule the current declarations compile to.
    pub fn rule(&self) -> CompiledRule {
        CompiledRule::new(self.selector.as_str(), &self.store.snapshot())
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    pub fn bindings(&self) -> &ControlBindings {
        &self.bindings
    }

    /// Replaces the binding for one control.
    pub fn rebind(&mut self, control: Box<dyn Control>) {
        self.bindings.replace(control);
    }

    /// The body the sink last accepted for this editor's selector.
    pub fn published(&self) -> Option<&str> {
        self.publisher.published(&self.selector)
    }

    pub fn sink(&self) -> &S {
        self.publisher.sink()
    }

    fn publish(&mut self) -> Result<CompiledRule, PublishError> {
        let rule = self.publisher.publish(&self.selector, &self.store.snapshot())?;
        self.store.mark_clean();
        Ok(rule)
    }

    fn load_initial(&mut self) -> Result<(), (StyleProperty, InvalidInput)> {
        for (property, value) in &self.initial {
            let resolved = self
                .bindings
                .resolve(*property, &ControlValue::Text(value.clone()))
                .map_err(|e| (*property, e))?;
            self.store.set(*property, resolved);
        }
        Ok(())
    }
}
