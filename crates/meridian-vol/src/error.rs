//! Error types for volatility surface construction.

use meridian_core::CoreError;
use meridian_math::MathError;
use thiserror::Error;

/// A specialized Result type for volatility operations.
pub type VolResult<T> = Result<T, VolError>;

/// Error types for volatility operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VolError {
    /// Error from the core crate (dates, day counts).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Error from the math crate (interpolation).
    #[error(transparent)]
    Math(#[from] MathError),

    /// A surface needs at least one point.
    #[error("Empty point set: a surface needs at least one point")]
    EmptyPointSet,

    /// The same (strike, tenor) node was supplied twice.
    #[error("Duplicate surface node at strike {strike}, tenor {tenor}")]
    NonIncreasingPoints {
        /// Strike of the repeated node.
        strike: f64,
        /// Tenor of the repeated node.
        tenor: f64,
    },

    /// A volatility that must be non-negative is negative.
    #[error("Negative {what}: {value}")]
    NegativeRateOrVol {
        /// What the value represents.
        what: String,
        /// The offending value.
        value: f64,
    },

    /// A volatility looks like a percentage rather than a decimal.
    #[error("Implausible volatility {value}: expected a decimal such as 0.12, not a percentage")]
    ImplausibleVolUnits {
        /// The offending value.
        value: f64,
    },

    /// The points do not cover every (strike, tenor) combination.
    #[error("Incomplete grid: no volatility at strike {strike}, tenor {tenor}")]
    IncompleteGrid {
        /// Strike of the first missing node.
        strike: f64,
        /// Tenor of the first missing node.
        tenor: f64,
    },

    /// A value is not finite or otherwise out of its domain.
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of the problem.
        reason: String,
    },
}

impl VolError {
    /// Creates a negative volatility error.
    #[must_use]
    pub fn negative(what: impl Into<String>, value: f64) -> Self {
        Self::NegativeRateOrVol {
            what: what.into(),
            value,
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}
