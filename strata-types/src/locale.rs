//! Locale-keyed field values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A field whose value varies per locale.
///
/// Serializes as a JSON object keyed by locale code, e.g.
/// `{"en-US": "a title", "de": "ein Titel"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleItem<T> {
    pub map: BTreeMap<String, T>,
}

impl<T> LocaleItem<T> {
    /// An empty locale map.
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// A map holding one value under the given locale.
    pub fn single(locale: impl Into<String>, value: T) -> Self {
        let mut map = BTreeMap::new();
        map.insert(locale.into(), value);
        Self { map }
    }

    /// The value for a locale, if set.
    pub fn get(&self, locale: &str) -> Option<&T> {
        self.map.get(locale)
    }

    /// Sets the value for a locale, returning the previous one if any.
    pub fn set(&mut self, locale: impl Into<String>, value: T) -> Option<T> {
        self.map.insert(locale.into(), value)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<T> Default for LocaleItem<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<BTreeMap<String, T>> for LocaleItem<T> {
    fn from(map: BTreeMap<String, T>) -> Self {
        Self { map }
    }
}

impl<T> FromIterator<(String, T)> for LocaleItem<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}
