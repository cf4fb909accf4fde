//! The shared search space of all four forest families.

use super::hp;
use crate::config::ForestConfig;
use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::namespace::Namespace;
use crate::param::ParamValue;
use crate::space::SearchSpace;
use crate::validate::{Rule, Validator};

const POSITIVE_PARAMS: &[&str] = &[
    "n_estimators",
    "max_depth",
    "min_samples_split",
    "min_samples_leaf",
    "max_features",
    "max_leaf_nodes",
    "min_impurity_decrease",
];

fn unknown_max_features(value: &ParamValue) -> bool {
    value
        .as_str()
        .is_some_and(|s| !matches!(s, "auto" | "sqrt" | "log2"))
}

fn non_positive_float(value: &ParamValue) -> bool {
    value
        .as_float()
        .is_some_and(|f| f.partial_cmp(&0.0) != Some(core::cmp::Ordering::Greater))
}

fn negative_float(value: &ParamValue) -> bool {
    value.as_float().is_some_and(|f| f < 0.0)
}

/// The validation stack applied to every forest override.
///
/// Only float-typed overrides are range checked; integers and `None` pass
/// through untouched.
#[must_use]
pub fn forest_validator() -> Validator {
    Validator::new()
        .rule(Rule::new(
            &["max_features"],
            unknown_max_features,
            "value must be in ['auto', 'sqrt', 'log2']",
        ))
        .wrap(Validator::new().rule(Rule::new(
            POSITIVE_PARAMS,
            non_positive_float,
            "parameter value must be greater than 0",
        )))
        .wrap(Validator::new().rule(Rule::new(
            &["ccp_alpha"],
            negative_float,
            "parameter value must be non-negative",
        )))
}

/// Builds the forest search space under `ns`.
///
/// Validates the explicit overrides in `config`, enforces that out-of-bag
/// scoring and `max_samples` are only used with bootstrapping, then fills
/// every parameter from its override or its generated default. The returned
/// space is unevaluated. `criterion` is left to the family entry point.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if an override fails validation and
/// [`Error::InvalidCombination`] if `bootstrap` is `false` while `oob_score`
/// or `max_samples` is set.
pub fn forest_hp_space(ns: &Namespace, config: &ForestConfig) -> Result<SearchSpace> {
    forest_validator().guard(config, || compose(ns, config))
}

fn compose(ns: &Namespace, config: &ForestConfig) -> Result<SearchSpace> {
    check_bootstrap(config)?;

    let or_generate = |name: &str, generate: fn(&str) -> Distribution| match config.get(name) {
        Some(value) if value.is_truthy() => value.clone(),
        _ => generate(&ns.leaf(name)),
    };
    let none_generate = |name: &str, generate: fn(&str) -> Distribution| match config.get(name) {
        Some(value) if !value.is_none() => value.clone(),
        _ => generate(&ns.leaf(name)),
    };
    let literal = |name: &str, default: ParamValue| {
        config
            .get(name)
            .cloned()
            .unwrap_or(Distribution::Constant(default))
    };

    let mut space = SearchSpace::new();
    space.insert("n_estimators", or_generate("n_estimators", hp::n_estimators));
    space.insert("max_depth", none_generate("max_depth", hp::max_depth));
    space.insert("min_samples_split", or_generate("min_samples_split", hp::min_samples_split));
    space.insert("min_samples_leaf", or_generate("min_samples_leaf", hp::min_samples_leaf));
    space.insert(
        "min_weight_fraction_leaf",
        or_generate("min_weight_fraction_leaf", hp::min_weight_fraction_leaf),
    );
    space.insert("max_features", or_generate("max_features", hp::max_features));
    space.insert("max_leaf_nodes", none_generate("max_leaf_nodes", hp::max_leaf_nodes));
    space.insert(
        "min_impurity_decrease",
        or_generate("min_impurity_decrease", hp::min_impurity_decrease),
    );
    space.insert("bootstrap", none_generate("bootstrap", hp::bootstrap));
    space.insert("oob_score", literal("oob_score", ParamValue::Bool(false)));
    space.insert("n_jobs", literal("n_jobs", ParamValue::Int(1)));
    space.insert("random_state", none_generate("random_state", hp::random_state));
    space.insert("verbose", literal("verbose", ParamValue::Bool(false)));
    space.insert("warm_start", literal("warm_start", ParamValue::Bool(false)));
    space.insert("ccp_alpha", literal("ccp_alpha", ParamValue::Float(0.0)));
    space.insert("max_samples", literal("max_samples", ParamValue::None));
    Ok(space)
}

fn check_bootstrap(config: &ForestConfig) -> Result<()> {
    let bootstrap_off = config
        .get("bootstrap")
        .and_then(Distribution::as_constant)
        .is_some_and(|v| *v == ParamValue::Bool(false));
    if !bootstrap_off {
        return Ok(());
    }
    let uses_bootstrap = ["oob_score", "max_samples"]
        .into_iter()
        .any(|name| config.get(name).is_some_and(Distribution::is_truthy));
    if uses_bootstrap {
        trace_debug!("oob_score or max_samples set without bootstrap");
        return Err(Error::InvalidCombination {
            reason: "'oob_score' and 'max_samples' require 'bootstrap' to be true",
        });
    }
    Ok(())
}
