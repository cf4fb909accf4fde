//! Validation of explicit overrides.
//!
//! A [`Validator`] is an ordered list of [`Rule`]s checked against the
//! constant overrides a caller supplied, before any distribution is built.
//! Generated defaults are never validated; they are not sampled yet.

use crate::config::ForestConfig;
use crate::error::{Error, Result};
use crate::param::ParamValue;

/// A predicate over the explicit values of a set of parameters.
///
/// The predicate returns `true` when a value is **invalid**.
#[derive(Clone, Copy)]
pub struct Rule {
    params: &'static [&'static str],
    rejects: fn(&ParamValue) -> bool,
    reason: &'static str,
}

impl core::fmt::Debug for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rule")
            .field("params", &self.params)
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

impl Rule {
    /// Creates a rule rejecting any value of `params` for which `rejects`
    /// returns `true`.
    #[must_use]
    pub const fn new(
        params: &'static [&'static str],
        rejects: fn(&ParamValue) -> bool,
        reason: &'static str,
    ) -> Self {
        Self {
            params,
            rejects,
            reason,
        }
    }

    /// The parameters this rule inspects.
    #[must_use]
    pub fn params(&self) -> &'static [&'static str] {
        self.params
    }

    /// Checks every explicit value this rule covers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for the first covered parameter
    /// whose value is rejected.
    pub fn check(&self, explicit: &[(&str, &ParamValue)]) -> Result<()> {
        for &param in self.params {
            let Some(&(_, value)) = explicit.iter().find(|(name, _)| *name == param) else {
                continue;
            };
            if (self.rejects)(value) {
                trace_debug!(param, %value, "override rejected");
                return Err(Error::InvalidParameter {
                    name: param.to_owned(),
                    value: value.to_string(),
                    reason: self.reason,
                });
            }
        }
        Ok(())
    }
}

/// An ordered stack of [`Rule`]s.
///
/// # Examples
///
/// ```
/// use forest_space::validate::{Rule, Validator};
/// use forest_space::{ForestConfig, ParamValue};
///
/// let validator = Validator::new().rule(Rule::new(
///     &["n_jobs"],
///     |v| matches!(v, ParamValue::Int(n) if *n == 0),
///     "n_jobs must not be zero",
/// ));
///
/// let ok = validator.guard(&ForestConfig::new().n_jobs(2), || Ok(1));
/// assert!(ok.is_ok());
/// let err = validator.guard(&ForestConfig::new().n_jobs(0), || Ok(1));
/// assert!(err.is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Validator {
    rules: Vec<Rule>,
}

impl Validator {
    /// Creates an empty validator that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Rules are checked in the order they were added.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Stacks `inner` beneath this validator: this validator's rules run
    /// first, then `inner`'s.
    #[must_use]
    pub fn wrap(mut self, inner: Validator) -> Self {
        self.rules.extend(inner.rules);
        self
    }

    /// The rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Checks every rule against `explicit`.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::InvalidParameter`] raised by any rule.
    pub fn check(&self, explicit: &[(&str, &ParamValue)]) -> Result<()> {
        self.rules.iter().try_for_each(|rule| rule.check(explicit))
    }

    /// Validates the constant overrides in `config`, then runs `build`.
    ///
    /// `build` is not called if any rule fails.
    ///
    /// # Errors
    ///
    /// Returns a validation error, or whatever `build` returns.
    pub fn guard<T>(&self, config: &ForestConfig, build: impl FnOnce() -> Result<T>) -> Result<T> {
        self.check(&config.explicit())?;
        build()
    }
}
