//! Publishing snapshots to a sink.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::compiled::CompiledRule;
use super::sink::StyleSink;
use crate::error::PublishError;
use crate::store::Snapshot;

/// Serializes snapshots and injects them into a [`StyleSink`].
///
/// The publisher is the only writer of its managed rules. Each call to
/// [`publish`](Self::publish) makes exactly one sink call: an upsert when the
/// snapshot has declarations, a remove when it is empty.
///
/// # Example
///
/// ```rust
/// use livestyle::{PageStyleSheet, Publisher, Snapshot, StyleProperty};
///
/// let mut publisher = Publisher::new(PageStyleSheet::new());
/// let snapshot = Snapshot::from_declarations([(StyleProperty::FontSize, "14px")]);
///
/// publisher.publish(".editor-text", &snapshot).unwrap();
/// publisher.publish(".editor-text", &snapshot).unwrap();
///
/// assert_eq!(publisher.sink().len(), 1);
/// assert_eq!(publisher.sink().rule(".editor-text"), Some("font-size: 14px;"));
/// ```
#[derive(Debug)]
pub struct Publisher<S> {
    sink: S,
    /// Last body the sink accepted, per selector.
    published: HashMap<String, String>,
}

impl<S: StyleSink> Publisher<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            published: HashMap::new(),
        }
    }

    /// Compiles `snapshot` for `selector` and hands it to the sink.
    ///
    /// The rule replaces any rule previously published for `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] if the sink rejects the rule. The publisher's
    /// record of what is published is left unchanged in that case.
    pub fn publish(
        &mut self,
        selector: &str,
        snapshot: &Snapshot,
    ) -> Result<CompiledRule, PublishError> {
        let rule = CompiledRule::new(selector, snapshot);
        if rule.is_empty() {
            self.retract(selector)?;
            return Ok(rule);
        }

        let body = rule.body();
        self.sink
            .upsert(selector, &body)
            .map_err(|source| failed(selector, source))?;
        debug!(selector, declarations = snapshot.len(), "published rule");
        self.published.insert(selector.to_string(), body);
        Ok(rule)
    }

    /// Removes the managed rule for `selector` from the sink.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] if the sink fails to remove the rule.
    pub fn retract(&mut self, selector: &str) -> Result<(), PublishError> {
        self.sink
            .remove(selector)
            .map_err(|source| failed(selector, source))?;
        debug!(selector, "retracted rule");
        self.published.remove(selector);
        Ok(())
    }

    /// The body last accepted by the sink for `selector`.
    pub fn published(&self, selector: &str) -> Option<&str> {
        self.published.get(selector).map(|s| s.as_str())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

fn failed(selector: &str, source: crate::error::SinkError) -> PublishError {
    warn!(selector, error = %source, "style sink rejected rule");
    PublishError {
        selector: selector.to_string(),
        source,
    }
}
