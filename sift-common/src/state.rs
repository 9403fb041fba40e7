//! Canonical filter state
//!
//! An insertion-ordered string map. Every transformation consumes the state
//! and returns a new one so callers can keep the previous value around for
//! change detection.

use crate::value::FilterValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from filter key to value
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState(IndexMap<String, FilterValue>);

impl FilterState {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    /// Get a string value, `None` for missing keys and non-string values.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(FilterValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set a key. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Shallow merge: every key of `other` overwrites the same key here.
    pub fn merge(mut self, other: &FilterState) -> Self {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
        self
    }

    /// Deep merge: like [`merge`](Self::merge), but when both sides hold a
    /// map under the same key the maps are merged recursively.
    pub fn merge_deep(mut self, other: &FilterState) -> Self {
        for (key, value) in &other.0 {
            if let (Some(FilterValue::Map(existing)), FilterValue::Map(incoming)) =
                (self.0.get_mut(key), value)
            {
                let current = std::mem::take(existing);
                *existing = current.merge_deep(incoming);
                continue;
            }
            self.0.insert(key.clone(), value.clone());
        }
        self
    }

    /// Drop every listed key, keeping the order of the rest.
    pub fn without<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in keys {
            self.0.shift_remove(key.as_ref());
        }
        self
    }

    pub fn map_values(self, f: impl Fn(FilterValue) -> FilterValue) -> Self {
        Self(self.0.into_iter().map(|(k, v)| (k, f(v))).collect())
    }

    pub fn retain(mut self, f: impl Fn(&str, &FilterValue) -> bool) -> Self {
        self.0.retain(|k, v| f(k, v));
        self
    }
}

impl<K, V> FromIterator<(K, V)> for FilterState
where
    K: Into<String>,
    V: Into<FilterValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut state = FilterState::new();
        for (key, value) in iter {
            state.insert(key, value);
        }
        state
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for FilterState
where
    K: Into<String>,
    V: Into<FilterValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a FilterState {
    type Item = (&'a String, &'a FilterValue);
    type IntoIter = indexmap::map::Iter<'a, String, FilterValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
