//! Hierarchical naming scopes for distribution labels.
//!
//! Every labelled node in a composed search must carry a label that is unique
//! across the whole search; the consuming optimizer keys its sampler state by
//! label. Uniqueness across independently built spaces is the caller's
//! responsibility: give each space its own base name.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A naming scope deriving leaf labels from a base name and an optional
/// family tag.
///
/// # Examples
///
/// ```
/// use forest_space::Namespace;
///
/// let ns = Namespace::new("clf").child("random_forest").tagged("rfc_");
/// assert_eq!(ns.leaf("max_depth"), "clf.random_forest.rfc_max_depth");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Namespace {
    base: String,
    tag: String,
}

impl Namespace {
    /// Creates a scope rooted at `base` with no tag.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            tag: String::new(),
        }
    }

    /// Returns the scope `"{base}.{child}"`. The tag is not inherited.
    #[must_use]
    pub fn child(&self, child: &str) -> Self {
        Self::new(format!("{}.{child}", self.base))
    }

    /// Returns this scope with `tag` prepended to every leaf name.
    #[must_use]
    pub fn tagged(&self, tag: &str) -> Self {
        Self {
            base: self.base.clone(),
            tag: tag.to_owned(),
        }
    }

    /// The base name.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The family tag, empty if none.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The label for parameter `param`: `"{base}.{tag}{param}"`.
    #[must_use]
    pub fn leaf(&self, param: &str) -> String {
        format!("{}.{}{param}", self.base, self.tag)
    }
}
