//! Search spaces for random forest and extra trees estimators.
//!
//! Four entry points, one per family, each returning a [`DeferredCall`] bound
//! to the family's constructor:
//!
//! | Entry point | Constructor | Leaf tag |
//! |---|---|---|
//! | [`random_forest_classifier`] | `sklearn_RandomForestClassifier` | `rfc_` |
//! | [`random_forest_regressor`] | `sklearn_RandomForestRegressor` | `rfr_` |
//! | [`extra_trees_classifier`] | `sklearn_ExtraTreesClassifier` | `etc_` |
//! | [`extra_trees_regressor`] | `sklearn_ExtraTreesRegressor` | `etr_` |
//!
//! [`forest_classifiers`] and [`forest_regressors`] return both families of a
//! task under `"{name}.random_forest"` and `"{name}.extra_trees"`, for
//! searches that also choose the family.
//!
//! # Examples
//!
//! ```
//! use forest_space::ForestConfig;
//! use forest_space::forest::random_forest_classifier;
//!
//! let call = random_forest_classifier("clf", &ForestConfig::new().n_estimators(100)).unwrap();
//! assert_eq!(call.kwargs().len(), 17);
//! assert!(call.labels().contains(&"clf.rfc_max_depth"));
//! ```

pub mod hp;
mod space;

pub use space::{forest_hp_space, forest_validator};

use crate::config::ForestConfig;
use crate::error::Result;
use crate::estimator::{DeferredCall, Estimator};
use crate::namespace::Namespace;

/// Builds the search space of `estimator` under base name `name`.
///
/// # Errors
///
/// Returns any validation or cross-parameter error from [`forest_hp_space`].
pub fn forest_estimator(estimator: Estimator, name: &str, config: &ForestConfig) -> Result<DeferredCall> {
    let ns = Namespace::new(name).tagged(estimator.tag());
    let mut kwargs = forest_hp_space(&ns, config)?;
    let criterion = match config.get("criterion") {
        Some(value) if value.is_truthy() => value.clone(),
        _ => hp::criterion(estimator, &ns.leaf("criterion")),
    };
    kwargs.insert("criterion", criterion);
    trace_debug!(
        name,
        estimator = estimator.constructor(),
        n_params = kwargs.len(),
        "search space built"
    );
    Ok(DeferredCall::new(estimator, kwargs))
}

/// Random forest classifier space. Criterion defaults to `"gini"`/`"entropy"`.
///
/// # Errors
///
/// See [`forest_hp_space`].
pub fn random_forest_classifier(name: &str, config: &ForestConfig) -> Result<DeferredCall> {
    forest_estimator(Estimator::RandomForestClassifier, name, config)
}

/// Random forest regressor space. Criterion defaults to
/// `"squared_error"`/`"absolute_error"`.
///
/// # Errors
///
/// See [`forest_hp_space`].
pub fn random_forest_regressor(name: &str, config: &ForestConfig) -> Result<DeferredCall> {
    forest_estimator(Estimator::RandomForestRegressor, name, config)
}

/// Extra trees classifier space.
///
/// # Errors
///
/// See [`forest_hp_space`].
pub fn extra_trees_classifier(name: &str, config: &ForestConfig) -> Result<DeferredCall> {
    forest_estimator(Estimator::ExtraTreesClassifier, name, config)
}

/// Extra trees regressor space.
///
/// # Errors
///
/// See [`forest_hp_space`].
pub fn extra_trees_regressor(name: &str, config: &ForestConfig) -> Result<DeferredCall> {
    forest_estimator(Estimator::ExtraTreesRegressor, name, config)
}

/// Default random forest and extra trees classifier spaces.
///
/// # Errors
///
/// Never fails with the default configuration; the `Result` mirrors the
/// single-family entry points.
pub fn forest_classifiers(name: &str) -> Result<Vec<DeferredCall>> {
    let ns = Namespace::new(name);
    let config = ForestConfig::new();
    Ok(vec![
        random_forest_classifier(ns.child("random_forest").base(), &config)?,
        extra_trees_classifier(ns.child("extra_trees").base(), &config)?,
    ])
}

/// Default random forest and extra trees regressor spaces.
///
/// # Errors
///
/// Never fails with the default configuration; the `Result` mirrors the
/// single-family entry points.
pub fn forest_regressors(name: &str) -> Result<Vec<DeferredCall>> {
    let ns = Namespace::new(name);
    let config = ForestConfig::new();
    Ok(vec![
        random_forest_regressor(ns.child("random_forest").base(), &config)?,
        extra_trees_regressor(ns.child("extra_trees").base(), &config)?,
    ])
}
