//! Default distributions for each forest hyperparameter.
//!
//! Every generator takes the label of the node it creates and returns a
//! [`Distribution`]. Nested nodes derive their labels from it
//! (`"{label}.gt1"`, `"{label}.frac"`).

use crate::distribution::Distribution;
use crate::estimator::Estimator;
use crate::param::ParamValue;

/// Split criterion for the classifier families.
#[must_use]
pub fn classifier_criterion(label: &str) -> Distribution {
    Distribution::choice(label, ["gini", "entropy"])
}

/// Split criterion for the random forest regressor.
///
/// `"poisson"` is left out: it requires non-negative targets.
#[must_use]
pub fn random_forest_regressor_criterion(label: &str) -> Distribution {
    Distribution::choice(label, ["squared_error", "absolute_error"])
}

/// Split criterion for the extra trees regressor.
#[must_use]
pub fn extra_trees_regressor_criterion(label: &str) -> Distribution {
    Distribution::choice(label, ["squared_error", "absolute_error"])
}

/// The criterion generator for `estimator`.
#[must_use]
pub fn criterion(estimator: Estimator, label: &str) -> Distribution {
    match estimator {
        Estimator::RandomForestClassifier | Estimator::ExtraTreesClassifier => {
            classifier_criterion(label)
        }
        Estimator::RandomForestRegressor => random_forest_regressor_criterion(label),
        Estimator::ExtraTreesRegressor => extra_trees_regressor_criterion(label),
    }
}

/// Integers 10 to 3000 on a log scale.
#[must_use]
pub fn n_estimators(label: &str) -> Distribution {
    Distribution::log_uniform_int(label, 9.5, 3000.5, 1.0)
}

/// Mostly unlimited depth, sometimes shallow trees.
#[must_use]
pub fn max_depth(label: &str) -> Distribution {
    Distribution::weighted(
        label,
        [
            (0.7, Distribution::Constant(ParamValue::None)),
            (0.1, Distribution::constant(2)),
            (0.1, Distribution::constant(3)),
            (0.1, Distribution::constant(4)),
        ],
    )
}

#[must_use]
pub fn min_samples_split(label: &str) -> Distribution {
    Distribution::weighted(label, [(0.95, 2), (0.05, 3)])
}

/// Either `1` or a log-uniform integer in 2..=50 labelled `"{label}.gt1"`.
#[must_use]
pub fn min_samples_leaf(label: &str) -> Distribution {
    Distribution::choice(
        label,
        [
            Distribution::constant(1),
            Distribution::log_uniform_int(format!("{label}.gt1"), 1.5, 50.5, 1.0),
        ],
    )
}

/// Always `0.0`; the label is unused.
#[must_use]
pub fn min_weight_fraction_leaf(_label: &str) -> Distribution {
    Distribution::constant(0.0)
}

/// `"sqrt"`, `"log2"`, all features, or a fraction labelled `"{label}.frac"`.
#[must_use]
pub fn max_features(label: &str) -> Distribution {
    Distribution::weighted(
        label,
        [
            (0.2, Distribution::constant("sqrt")),
            (0.1, Distribution::constant("log2")),
            (0.1, Distribution::Constant(ParamValue::None)),
            (0.6, Distribution::uniform(format!("{label}.frac"), 0.0, 1.0)),
        ],
    )
}

#[must_use]
pub fn max_leaf_nodes(label: &str) -> Distribution {
    Distribution::weighted(
        label,
        [
            (0.85, Distribution::Constant(ParamValue::None)),
            (0.05, Distribution::constant(5)),
            (0.05, Distribution::constant(10)),
            (0.05, Distribution::constant(15)),
        ],
    )
}

#[must_use]
pub fn min_impurity_decrease(label: &str) -> Distribution {
    Distribution::weighted(label, [(0.85, 0.0), (0.05, 0.01), (0.05, 0.02), (0.05, 0.05)])
}

#[must_use]
pub fn bootstrap(label: &str) -> Distribution {
    Distribution::choice(label, [true, false])
}

/// Seeds 0 to 4.
#[must_use]
pub fn random_state(label: &str) -> Distribution {
    Distribution::rand_int(label, 5)
}
