//! Current declarations for one selector scope.

use tracing::trace;

use super::snapshot::Snapshot;
use crate::property::StyleProperty;

/// Holds the current value of each [`StyleProperty`] for one editor.
///
/// A store is created once per editor session and mutated by that editor's
/// controls. Every mutation marks the store dirty until the owner calls
/// [`RuleStore::mark_clean`] after publishing.
///
/// # Example
///
/// ```rust
/// use livestyle::{RuleStore, StyleProperty};
///
/// let mut store = RuleStore::new();
/// store.set(StyleProperty::Color, "#112233");
/// store.set(StyleProperty::FontSize, "14px");
///
/// let snapshot = store.snapshot();
/// let order: Vec<_> = snapshot.properties().collect();
/// assert_eq!(order, vec![StyleProperty::FontSize, StyleProperty::Color]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleStore {
    /// One slot per property, indexed by canonical position.
    slots: [Option<String>; 4],
    dirty: bool,
}

impl RuleStore {
    /// Creates an empty, clean store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the value for `property`, returning the previous value.
    pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        trace!(%property, %value, "store set");
        self.dirty = true;
        self.slots[property.index()].replace(value)
    }

    /// Removes the value for `property`, returning it if one was set.
    ///
    /// The store only becomes dirty when a value was actually removed.
    pub fn unset(&mut self, property: StyleProperty) -> Option<String> {
        let previous = self.slots[property.index()].take();
        if previous.is_some() {
            trace!(%property, "store unset");
            self.dirty = true;
        }
        previous
    }

    /// Puts `property` back to `value`, setting or unsetting as needed.
    ///
    /// Used to undo a mutation whose publish failed.
    pub(crate) fn restore(&mut self, property: StyleProperty, value: Option<String>) {
        self.slots[property.index()] = value;
    }

    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.slots[property.index()].as_deref()
    }

    /// Returns true if `property` has a value.
    pub fn has(&self, property: StyleProperty) -> bool {
        self.slots[property.index()].is_some()
    }

    /// Number of properties currently set.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.dirty = true;
        }
        self.slots = Default::default();
    }

    /// Returns the set declarations in canonical order.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_slots(&self.slots)
    }

    /// True when the store changed since the last [`mark_clean`](Self::mark_clean).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_store_is_empty_and_clean() {
        let store = RuleStore::new();
        assert!(store.is_empty());
        assert!(!store.is_dirty());
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_set_overwrites_and_returns_previous() {
        let mut store = RuleStore::new();
        assert_eq!(store.set(StyleProperty::FontFamily, "Arial"), None);
        assert_eq!(
            store.set(StyleProperty::FontFamily, "Helvetica"),
            Some("Arial".to_string())
        );
        assert_eq!(store.get(StyleProperty::FontFamily), Some("Helvetica"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_marks_dirty() {
        let mut store = RuleStore::new();
        store.set(StyleProperty::FontSize, "14px");
        assert!(store.is_dirty());
        store.mark_clean();
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_unset_missing_property_stays_clean() {
        let mut store = RuleStore::new();
        assert_eq!(store.unset(StyleProperty::Color), None);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_unset_removes_from_snapshot() {
        let mut store = RuleStore::new();
        store.set(StyleProperty::Color, "#112233");
        store.set(StyleProperty::FontSize, "14px");
        store.mark_clean();

        assert_eq!(store.unset(StyleProperty::Color), Some("#112233".to_string()));
        assert!(store.is_dirty());
        assert_eq!(store.snapshot().get(StyleProperty::Color), None);
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn test_snapshot_example_order() {
        let mut store = RuleStore::new();
        store.set(StyleProperty::FontSize, "14px");
        store.set(StyleProperty::Color, "#112233");

        let pairs: Vec<_> = store.snapshot().iter().map(|(p, v)| (p, v.to_string())).collect();
        assert_eq!(
            pairs,
            vec![
                (StyleProperty::FontSize, "14px".to_string()),
                (StyleProperty::Color, "#112233".to_string()),
            ]
        );
    }

    #[test]
    fn test_clear() {
        let mut store = RuleStore::new();
        store.clear();
        assert!(!store.is_dirty());

        store.set(StyleProperty::BackgroundColor, "#ffffff");
        store.mark_clean();
        store.clear();
        assert!(store.is_empty());
        assert!(store.is_dirty());
    }

    #[test]
    fn test_restore_round_trips_previous_state() {
        let mut store = RuleStore::new();
        store.set(StyleProperty::Color, "#000000");
        let previous = store.set(StyleProperty::Color, "#ffffff");
        store.restore(StyleProperty::Color, previous);
        assert_eq!(store.get(StyleProperty::Color), Some("#000000"));

        let previous = store.set(StyleProperty::FontSize, "12px");
        store.restore(StyleProperty::FontSize, previous);
        assert!(!store.has(StyleProperty::FontSize));
    }

    fn property_strategy() -> impl Strategy<Value = StyleProperty> {
        prop::sample::select(StyleProperty::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn snapshot_is_canonical_and_unique(
            ops in prop::collection::vec((property_strategy(), "[a-z0-9#]{1,8}"), 0..32)
        ) {
            let mut store = RuleStore::new();
            for (property, value) in &ops {
                store.set(*property, value.clone());
            }

            let properties: Vec<_> = store.snapshot().properties().collect();
            let mut expected = properties.clone();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(&properties, &expected);

            for (property, value) in store.snapshot().iter() {
                let last = ops.iter().rev().find(|(p, _)| *p == property).map(|(_, v)| v.as_str());
                prop_assert_eq!(Some(value), last);
            }
        }
    }
}
