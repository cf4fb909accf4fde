#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]

//! Declarative hyperparameter search spaces for tree-ensemble estimators:
//! random forests and extremely randomized trees, each as classifier and
//! regressor.
//!
//! A family entry point validates the caller's explicit overrides, fills
//! every other hyperparameter with a default [`Distribution`], and returns a
//! [`DeferredCall`] binding the resulting [`SearchSpace`] to the estimator's
//! constructor. Nothing is sampled and no estimator is built here; an
//! external optimizer walks the returned graph.
//!
//! # Getting Started
//!
//! ```
//! use forest_space::prelude::*;
//!
//! let call = random_forest_classifier(
//!     "clf",
//!     &ForestConfig::new().n_estimators(200).max_features("sqrt"),
//! )
//! .unwrap();
//!
//! assert_eq!(call.estimator(), Estimator::RandomForestClassifier);
//! assert_eq!(call.kwargs().get("n_estimators"), Some(&Distribution::constant(200)));
//! assert!(call.labels().contains(&"clf.rfc_max_depth"));
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Distribution`] | How one hyperparameter is sampled; constants included. |
//! | [`SearchSpace`] | Ordered mapping from parameter name to distribution. |
//! | [`Namespace`] | Derives unique leaf labels from a base name and family tag. |
//! | [`ForestConfig`] | Explicit overrides supplied by the caller. |
//! | [`Validator`](validate::Validator) | Rules checked against explicit overrides before construction. |
//! | [`DeferredCall`] | Pending estimator construction, resolved by the consumer. |
//!
//! # Label uniqueness
//!
//! Every labelled node must be unique across the whole search that consumes
//! it. Entry points guarantee this within one call and across families
//! sharing a base name (through the family tag). Across calls it is up to
//! the caller to pick distinct base names.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on values, distributions, spaces and deferred calls | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) on rejected overrides and built spaces | off |

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod config;
mod distribution;
mod error;
mod estimator;
pub mod forest;
mod namespace;
mod param;
mod space;
pub mod validate;

pub use config::ForestConfig;
pub use distribution::{
    CategoricalDistribution, Distribution, LogUniformIntDistribution, RandIntDistribution,
    UniformDistribution, WeightedDistribution,
};
pub use error::{Error, Result};
pub use estimator::{DeferredCall, Estimator, EstimatorFactory, Task, unresolved};
pub use namespace::Namespace;
pub use param::ParamValue;
pub use space::SearchSpace;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use forest_space::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ForestConfig;
    pub use crate::distribution::Distribution;
    pub use crate::error::{Error, Result};
    pub use crate::estimator::{DeferredCall, Estimator, EstimatorFactory, Task};
    pub use crate::forest::{
        extra_trees_classifier, extra_trees_regressor, forest_classifiers, forest_regressors,
        random_forest_classifier, random_forest_regressor,
    };
    pub use crate::namespace::Namespace;
    pub use crate::param::ParamValue;
    pub use crate::space::SearchSpace;
    pub use crate::validate::{Rule, Validator};
}
