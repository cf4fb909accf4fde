//! Distribution descriptions.
//!
//! A [`Distribution`] describes how one hyperparameter is sampled; it never
//! samples anything itself. Literal values are represented as
//! [`Distribution::Constant`], so a search space maps every parameter name to
//! a `Distribution` and choices can nest further distributions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::param::ParamValue;

/// Uniform choice among a finite set of options.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategoricalDistribution {
    /// Unique label of the choice node.
    pub label: String,
    /// The options, each possibly a nested distribution.
    pub choices: Vec<Distribution>,
}

/// Choice among options with explicit, proportional weights.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightedDistribution {
    /// Unique label of the choice node.
    pub label: String,
    /// `(weight, option)` pairs. Weights need not sum to one.
    pub choices: Vec<(f64, Distribution)>,
}

/// Integer sampled on a log scale between `low` and `high`, quantized to `step`.
///
/// Bounds are given in the natural (not logarithmic) domain.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogUniformIntDistribution {
    /// Unique label of the node.
    pub label: String,
    /// Lower bound (inclusive, before quantization).
    pub low: f64,
    /// Upper bound (inclusive, before quantization).
    pub high: f64,
    /// Quantization step.
    pub step: f64,
}

/// Continuous uniform range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UniformDistribution {
    /// Unique label of the node.
    pub label: String,
    /// Lower bound.
    pub low: f64,
    /// Upper bound.
    pub high: f64,
}

/// Uniform integer in `[0, upper)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RandIntDistribution {
    /// Unique label of the node.
    pub label: String,
    /// Exclusive upper bound.
    pub upper: i64,
}

/// Enum wrapping all distribution types.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Distribution {
    /// A fixed value.
    Constant(ParamValue),
    /// Uniform choice.
    Categorical(CategoricalDistribution),
    /// Weighted choice.
    WeightedChoice(WeightedDistribution),
    /// Quantized log-uniform integer.
    LogUniformInt(LogUniformIntDistribution),
    /// Continuous uniform.
    Uniform(UniformDistribution),
    /// Uniform integer from zero.
    RandInt(RandIntDistribution),
}

impl Distribution {
    /// Wraps a literal value.
    #[must_use]
    pub fn constant(value: impl Into<ParamValue>) -> Self {
        Self::Constant(value.into())
    }

    /// Uniform choice among `choices`.
    #[must_use]
    pub fn choice<I, D>(label: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Distribution>,
    {
        Self::Categorical(CategoricalDistribution {
            label: label.into(),
            choices: choices.into_iter().map(Into::into).collect(),
        })
    }

    /// Weighted choice over `(weight, option)` pairs.
    #[must_use]
    pub fn weighted<I, D>(label: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = (f64, D)>,
        D: Into<Distribution>,
    {
        Self::WeightedChoice(WeightedDistribution {
            label: label.into(),
            choices: choices.into_iter().map(|(w, d)| (w, d.into())).collect(),
        })
    }

    /// Quantized log-uniform integer.
    #[must_use]
    pub fn log_uniform_int(label: impl Into<String>, low: f64, high: f64, step: f64) -> Self {
        Self::LogUniformInt(LogUniformIntDistribution {
            label: label.into(),
            low,
            high,
            step,
        })
    }

    /// Continuous uniform range.
    #[must_use]
    pub fn uniform(label: impl Into<String>, low: f64, high: f64) -> Self {
        Self::Uniform(UniformDistribution {
            label: label.into(),
            low,
            high,
        })
    }

    /// Uniform integer in `[0, upper)`.
    #[must_use]
    pub fn rand_int(label: impl Into<String>, upper: i64) -> Self {
        Self::RandInt(RandIntDistribution {
            label: label.into(),
            upper,
        })
    }

    /// The label of this node, or `None` for constants.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Constant(_) => None,
            Self::Categorical(d) => Some(&d.label),
            Self::WeightedChoice(d) => Some(&d.label),
            Self::LogUniformInt(d) => Some(&d.label),
            Self::Uniform(d) => Some(&d.label),
            Self::RandInt(d) => Some(&d.label),
        }
    }

    /// Returns the literal if this is a [`Distribution::Constant`].
    #[must_use]
    pub fn as_constant(&self) -> Option<&ParamValue> {
        match self {
            Self::Constant(v) => Some(v),
            _ => None,
        }
    }

    /// Whether this node is a constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Truthiness of an override: constants follow [`ParamValue::is_truthy`],
    /// any other distribution is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        self.as_constant().is_none_or(ParamValue::is_truthy)
    }

    /// Whether this node is the constant `None`.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::Constant(ParamValue::None))
    }

    /// Every label in this node and its nested options, depth-first.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_labels(&mut out);
        out
    }

    pub(crate) fn collect_labels<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(label) = self.label() {
            out.push(label);
        }
        match self {
            Self::Categorical(d) => {
                for choice in &d.choices {
                    choice.collect_labels(out);
                }
            }
            Self::WeightedChoice(d) => {
                for (_, choice) in &d.choices {
                    choice.collect_labels(out);
                }
            }
            Self::Constant(_) | Self::LogUniformInt(_) | Self::Uniform(_) | Self::RandInt(_) => {}
        }
    }
}

impl From<ParamValue> for Distribution {
    fn from(value: ParamValue) -> Self {
        Self::Constant(value)
    }
}

macro_rules! impl_from_literal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Distribution {
                fn from(value: $ty) -> Self {
                    Self::Constant(value.into())
                }
            }
        )*
    };
}

impl_from_literal!(bool, i32, i64, u32, f64, &str, String);

impl<T: Into<ParamValue>> From<Option<T>> for Distribution {
    fn from(value: Option<T>) -> Self {
        Self::Constant(value.into())
    }
}
