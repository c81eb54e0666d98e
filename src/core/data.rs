//! Key/value data attached to a record

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Unordered string mapping used for message templating
///
/// Iteration order is unspecified; [`Data::render_sorted`] and `Display`
/// are deterministic (sorted by key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Data {
    fields: HashMap<String, String>,
}

impl Data {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Build from alternating keys and values
    ///
    /// A later duplicate key overwrites the earlier value.
    ///
    /// # Panics
    ///
    /// Panics if `values` has odd length.
    pub fn from_pairs<S: AsRef<str>>(values: &[S]) -> Self {
        assert!(
            values.len() % 2 == 0,
            "number of items provided for Data must be even, got {}",
            values.len()
        );

        let fields = values
            .chunks_exact(2)
            .map(|pair| (pair[0].as_ref().to_string(), pair[1].as_ref().to_string()))
            .collect();

        Self { fields }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pairs ordered by key
    pub fn sorted_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs
    }

    /// Render as `key:value` pairs separated by spaces, sorted by key
    pub fn render_sorted(&self) -> String {
        self.sorted_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Replace every `{key}` occurrence in `message` with its value
    pub fn interpolate(&self, message: &str) -> String {
        // Sorted so that overlapping substitutions resolve the same way every time
        self.sorted_pairs()
            .into_iter()
            .fold(message.to_string(), |acc, (k, v)| {
                acc.replace(&format!("{{{}}}", k), v)
            })
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_sorted())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Data {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
