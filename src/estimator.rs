//! Estimator families and deferred construction.
//!
//! Building a search space never instantiates an estimator. Each family entry
//! point returns a [`DeferredCall`]: the estimator identifier plus the
//! (still unsampled) argument space. The external optimizer resolves the
//! distributions and hands the flat result to an [`EstimatorFactory`].

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::param::ParamValue;
use crate::space::SearchSpace;

/// Whether an estimator predicts classes or continuous targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Task {
    /// Predicts discrete classes.
    Classification,
    /// Predicts continuous targets.
    Regression,
}

/// The tree-ensemble estimator families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Estimator {
    /// Random forest classifier.
    RandomForestClassifier,
    /// Random forest regressor.
    RandomForestRegressor,
    /// Extremely randomized trees classifier.
    ExtraTreesClassifier,
    /// Extremely randomized trees regressor.
    ExtraTreesRegressor,
}

impl Estimator {
    /// All families, classifiers first.
    pub const ALL: [Estimator; 4] = [
        Self::RandomForestClassifier,
        Self::ExtraTreesClassifier,
        Self::RandomForestRegressor,
        Self::ExtraTreesRegressor,
    ];

    /// The tag prefixed to every leaf label of this family.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::RandomForestClassifier => "rfc_",
            Self::RandomForestRegressor => "rfr_",
            Self::ExtraTreesClassifier => "etc_",
            Self::ExtraTreesRegressor => "etr_",
        }
    }

    /// The constructor identifier the deferred call is bound to.
    #[must_use]
    pub fn constructor(self) -> &'static str {
        match self {
            Self::RandomForestClassifier => "sklearn_RandomForestClassifier",
            Self::RandomForestRegressor => "sklearn_RandomForestRegressor",
            Self::ExtraTreesClassifier => "sklearn_ExtraTreesClassifier",
            Self::ExtraTreesRegressor => "sklearn_ExtraTreesRegressor",
        }
    }

    /// The task this family solves.
    #[must_use]
    pub fn task(self) -> Task {
        match self {
            Self::RandomForestClassifier | Self::ExtraTreesClassifier => Task::Classification,
            Self::RandomForestRegressor | Self::ExtraTreesRegressor => Task::Regression,
        }
    }
}

impl core::fmt::Display for Estimator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.constructor())
    }
}

/// The constructor capability consumed by [`DeferredCall::construct`].
///
/// Implemented by whatever actually trains models. It receives the fully
/// resolved, flat keyword mapping.
pub trait EstimatorFactory {
    /// The estimator object produced.
    type Model;

    /// Instantiates `estimator` with `params`.
    ///
    /// # Errors
    ///
    /// Implementations return [`Error::Estimator`] when the estimator cannot
    /// be constructed.
    fn build(&self, estimator: Estimator, params: &BTreeMap<String, ParamValue>) -> Result<Self::Model>;
}

/// A pending estimator construction.
///
/// Holds the estimator identifier and its keyword space. Nothing is sampled
/// or instantiated until [`construct`](Self::construct) is called by the
/// consumer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeferredCall {
    estimator: Estimator,
    kwargs: SearchSpace,
}

impl DeferredCall {
    /// Binds `kwargs` to `estimator`.
    #[must_use]
    pub fn new(estimator: Estimator, kwargs: SearchSpace) -> Self {
        Self { estimator, kwargs }
    }

    /// The bound estimator.
    #[must_use]
    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    /// The keyword space.
    #[must_use]
    pub fn kwargs(&self) -> &SearchSpace {
        &self.kwargs
    }

    /// Consumes the call, returning its keyword space.
    #[must_use]
    pub fn into_kwargs(self) -> SearchSpace {
        self.kwargs
    }

    /// Every distribution label in the call.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.kwargs.labels()
    }

    /// Resolves every keyword and builds the estimator.
    ///
    /// Constants are taken as-is; every other entry is passed to `resolve`,
    /// which stands in for the optimizer's sampler.
    ///
    /// # Errors
    ///
    /// Returns the first error from `resolve`, or the factory's error.
    pub fn construct<F, R>(&self, factory: &F, mut resolve: R) -> Result<F::Model>
    where
        F: EstimatorFactory,
        R: FnMut(&Distribution) -> Result<ParamValue>,
    {
        let mut params = BTreeMap::new();
        for (name, value) in self.kwargs.iter() {
            let resolved = match value.as_constant() {
                Some(v) => v.clone(),
                None => resolve(value)?,
            };
            params.insert(name.to_owned(), resolved);
        }
        factory.build(self.estimator, &params)
    }
}

/// Resolver that refuses every distribution. Useful for spaces whose entries
/// are all constants.
///
/// # Errors
///
/// Always returns [`Error::Unresolved`] naming the distribution's label.
pub fn unresolved(distribution: &Distribution) -> Result<ParamValue> {
    Err(Error::Unresolved {
        label: distribution.label().unwrap_or_default().to_owned(),
    })
}
