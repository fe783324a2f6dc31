//! Raw configuration sources
//!
//! A [`ConfigSource`] is one layer of raw key/value pairs. The binder receives
//! an ordered slice of them, highest precedence first.

use std::collections::{BTreeMap, HashMap};

/// One named layer of raw string settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSource {
    name: String,
    values: BTreeMap<String, String>,
}

impl ConfigSource {
    /// Creates an empty source
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    /// Creates a source from key/value pairs
    pub fn from_pairs<K, V, I>(name: impl Into<String>, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            name: name.into(),
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Adds a value, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Source name used in diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Iterates entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, String>> for ConfigSource {
    fn from(values: HashMap<String, String>) -> Self {
        Self::from_pairs("map", values)
    }
}

impl From<BTreeMap<String, String>> for ConfigSource {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self {
            name: "map".to_string(),
            values,
        }
    }
}
