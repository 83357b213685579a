//! Ordered, immutable view of a store's declarations.

use crate::property::StyleProperty;

/// The declarations of a [`RuleStore`](super::RuleStore) at one point in time.
///
/// Entries are in canonical property order and each property appears at most
/// once. Unset properties are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<(StyleProperty, String)>,
}

impl Snapshot {
    /// Builds a snapshot from declarations in any order.
    ///
    /// Entries are sorted into canonical order; when a property is repeated the
    /// last value wins.
    pub fn from_declarations<I, V>(declarations: I) -> Self
    where
        I: IntoIterator<Item = (StyleProperty, V)>,
        V: Into<String>,
    {
        let mut slots: [Option<String>; 4] = Default::default();
        for (property, value) in declarations {
            slots[property.index()] = Some(value.into());
        }
        Self::from_slots(&slots)
    }

    pub(crate) fn from_slots(slots: &[Option<String>; 4]) -> Self {
        let entries = StyleProperty::ALL
            .into_iter()
            .zip(slots.iter())
            .filter_map(|(property, value)| value.clone().map(|v| (property, v)))
            .collect();
        Self { entries }
    }

    /// Returns the value recorded for `property`.
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over `(property, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.entries.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// The properties present, in canonical order.
    pub fn properties(&self) -> impl Iterator<Item = StyleProperty> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = (StyleProperty, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (StyleProperty, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
