//! Insertion-ordered search space mapping.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;

/// An ordered mapping from parameter name to [`Distribution`].
///
/// Literal values are stored as [`Distribution::Constant`]. Entries keep the
/// order in which they were inserted; inserting an existing name replaces the
/// value in place.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchSpace {
    entries: Vec<(String, Distribution)>,
}

impl SearchSpace {
    /// Creates an empty space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `name`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Distribution>) -> Option<Distribution> {
        let name = name.into();
        let value = value.into();
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            return Some(core::mem::replace(slot, value));
        }
        self.entries.push((name, value));
        None
    }

    /// Looks up `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Distribution> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Whether `name` is present.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Parameter names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Distribution)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the space is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every distribution label in the space, in entry order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for (_, value) in &self.entries {
            value.collect_labels(&mut out);
        }
        out
    }
}

impl IntoIterator for SearchSpace {
    type Item = (String, Distribution);
    type IntoIter = std::vec::IntoIter<(String, Distribution)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
