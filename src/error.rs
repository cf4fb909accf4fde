/// Errors raised while building a search space or constructing an estimator
/// from one.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when an explicit override fails a validation rule.
    #[error("invalid parameter '{name}' with value '{value}': {reason}")]
    InvalidParameter {
        /// The name of the offending parameter.
        name: String,
        /// The offending value, rendered for display.
        value: String,
        /// What the value must satisfy.
        reason: &'static str,
    },

    /// Returned when explicit overrides contradict each other.
    #[error("invalid combination of parameters: {reason}")]
    InvalidCombination {
        /// Which parameters conflict and why.
        reason: &'static str,
    },

    /// Returned when a resolver cannot produce a value for a distribution.
    #[error("no value resolved for '{label}'")]
    Unresolved {
        /// The label of the distribution left unresolved.
        label: String,
    },

    /// Returned by an [`EstimatorFactory`](crate::EstimatorFactory) when the
    /// estimator cannot be constructed.
    #[error("estimator construction failed: {0}")]
    Estimator(String),
}

/// A specialized `Result` type for search-space construction.
pub type Result<T> = core::result::Result<T, Error>;
