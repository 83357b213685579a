//! The injection sink interface.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::SinkError;

/// A page-level stylesheet that rules can be injected into.
///
/// Implementations keep at most one rule per selector: `upsert` replaces
/// whatever was stored for the selector before, and `remove` drops it.
/// `body` is the declaration block without braces, e.g.
/// `font-size: 14px; color: #112233;`.
pub trait StyleSink {
    /// Inserts or replaces the rule for `selector`.
    fn upsert(&mut self, selector: &str, body: &str) -> Result<(), SinkError>;

    /// Removes the rule for `selector`. Removing an absent rule is not an error.
    fn remove(&mut self, selector: &str) -> Result<(), SinkError>;
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn upsert(&mut self, selector: &str, body: &str) -> Result<(), SinkError> {
        (**self).upsert(selector, body)
    }

    fn remove(&mut self, selector: &str) -> Result<(), SinkError> {
        (**self).remove(selector)
    }
}

impl<S: StyleSink + ?Sized> StyleSink for Box<S> {
    fn upsert(&mut self, selector: &str, body: &str) -> Result<(), SinkError> {
        (**self).upsert(selector, body)
    }

    fn remove(&mut self, selector: &str) -> Result<(), SinkError> {
        (**self).remove(selector)
    }
}

/// Lets several editors on one page publish into the same stylesheet.
impl<S: StyleSink + ?Sized> StyleSink for Rc<RefCell<S>> {
    fn upsert(&mut self, selector: &str, body: &str) -> Result<(), SinkError> {
        let mut sink = self
            .try_borrow_mut()
            .map_err(|e| SinkError::new(e.to_string()))?;
        sink.upsert(selector, body)
    }

    fn remove(&mut self, selector: &str) -> Result<(), SinkError> {
        let mut sink = self
            .try_borrow_mut()
            .map_err(|e| SinkError::new(e.to_string()))?;
        sink.remove(selector)
    }
}
