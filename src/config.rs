//! Explicit overrides for a forest search space.

use crate::distribution::Distribution;
use crate::param::ParamValue;

macro_rules! overrides {
    ($($(#[$doc:meta])* $field:ident),* $(,)?) => {
        /// Explicit overrides for the forest family entry points.
        ///
        /// Every field is optional; an unset field is filled with the generated
        /// default distribution. A setter accepts anything convertible into a
        /// [`Distribution`]: an integer, float, string, bool,
        /// [`ParamValue::None`], or a full distribution to search over.
        ///
        /// # Defaulting
        ///
        /// `n_estimators`, `min_samples_split`, `min_samples_leaf`,
        /// `min_weight_fraction_leaf`, `max_features`,
        /// `min_impurity_decrease` and `criterion` treat a falsy constant
        /// (`None`, `false`, `0`, `0.0`, `""`) the same as an unset field and
        /// fall back to the generated distribution. `max_depth`,
        /// `max_leaf_nodes`, `bootstrap` and `random_state` only fall back on
        /// `None`, so `bootstrap(false)` is honored.
        ///
        /// # Examples
        ///
        /// ```
        /// use forest_space::{ForestConfig, ParamValue};
        ///
        /// let config = ForestConfig::new()
        ///     .n_estimators(200)
        ///     .max_depth(ParamValue::None)
        ///     .max_features("sqrt")
        ///     .bootstrap(true)
        ///     .oob_score(true);
        /// assert!(config.get("n_estimators").is_some());
        /// ```
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct ForestConfig {
            $($field: Option<Distribution>,)*
        }

        impl ForestConfig {
            /// Names of every overridable parameter, in declaration order.
            pub const PARAMS: &'static [&'static str] = &[$(stringify!($field)),*];

            $(
                $(#[$doc])*
                #[must_use]
                pub fn $field(mut self, value: impl Into<Distribution>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            /// Returns the override for `name`, if one was set.
            #[must_use]
            pub fn get(&self, name: &str) -> Option<&Distribution> {
                match name {
                    $(stringify!($field) => self.$field.as_ref(),)*
                    _ => None,
                }
            }

            /// Every override that was set, in declaration order.
            pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Distribution)> {
                [$((stringify!($field), self.$field.as_ref())),*]
                    .into_iter()
                    .filter_map(|(name, value)| value.map(|v| (name, v)))
            }
        }
    };
}

overrides! {
    /// Number of trees.
    n_estimators,
    /// Maximum tree depth; `None` means unlimited.
    max_depth,
    /// Minimum samples required to split an internal node.
    min_samples_split,
    /// Minimum samples required at a leaf.
    min_samples_leaf,
    /// Minimum weighted fraction of the sample weights at a leaf.
    min_weight_fraction_leaf,
    /// Features considered per split: `"sqrt"`, `"log2"`, `None`, or a fraction.
    max_features,
    /// Maximum number of leaves; `None` means unlimited.
    max_leaf_nodes,
    /// Minimum impurity decrease required for a split.
    min_impurity_decrease,
    /// Whether trees are built on bootstrap samples.
    bootstrap,
    /// Whether to score on out-of-bag samples. Defaults to `false`.
    oob_score,
    /// Parallel jobs for the estimator. Defaults to `1`.
    n_jobs,
    /// Estimator seed.
    random_state,
    /// Estimator verbosity. Defaults to `false`.
    verbose,
    /// Whether to reuse a previous fit. Defaults to `false`.
    warm_start,
    /// Cost-complexity pruning parameter. Defaults to `0.0`.
    ccp_alpha,
    /// Bootstrap sample size. Defaults to `None`.
    max_samples,
    /// Split quality measure; the default depends on the estimator family.
    criterion,
}

impl ForestConfig {
    /// Creates a config with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constant overrides only, in declaration order. Validation rules are
    /// evaluated against these.
    #[must_use]
    pub fn explicit(&self) -> Vec<(&'static str, &ParamValue)> {
        self.iter()
            .filter_map(|(name, value)| value.as_constant().map(|v| (name, v)))
            .collect()
    }
}
