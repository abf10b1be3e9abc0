//! Error types for curve operations.
//!
//! Covers point validation, bootstrap failures and repricing checks. Errors
//! from the core and math crates pass through unchanged.

use meridian_core::types::Date;
use meridian_core::CoreError;
use meridian_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Error from the core crate (dates, day counts).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Error from the math crate (interpolation, solvers).
    #[error(transparent)]
    Math(#[from] MathError),

    /// A curve needs at least one point.
    #[error("Empty point set: a curve needs at least one point")]
    EmptyPointSet,

    /// A bootstrap needs at least one instrument.
    #[error("Empty instrument set: nothing to bootstrap")]
    EmptyInstrumentSet,

    /// Curve times are not strictly increasing.
    #[error("Non-increasing curve times at index {index}: {prev:.6} >= {current:.6}")]
    NonIncreasingPoints {
        /// Index where the violation occurred.
        index: usize,
        /// Previous time.
        prev: f64,
        /// Offending time.
        current: f64,
    },

    /// A rate or volatility that must be non-negative is negative.
    #[error("Negative {what}: {value}")]
    NegativeRateOrVol {
        /// What the value represents.
        what: String,
        /// The offending value.
        value: f64,
    },

    /// A value is not finite or otherwise out of its domain.
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of the problem.
        reason: String,
    },

    /// Invalid curve instrument.
    #[error("Invalid instrument: {reason}")]
    InvalidInstrument {
        /// Description of the problem.
        reason: String,
    },

    /// Two instruments share a maturity but quote different values.
    #[error("Instruments mature on the same date {maturity} with conflicting quotes: {first} vs {second}")]
    UnsortableInstrument {
        /// Shared maturity date.
        maturity: Date,
        /// Description of the first instrument.
        first: String,
        /// Description of the second instrument.
        second: String,
    },

    /// The solver could not find a zero rate reproducing an instrument.
    #[error(
        "Bootstrap failed for {instrument} after {iterations} iterations (residual: {residual:.2e})"
    )]
    BootstrapNonConvergence {
        /// Description of the instrument.
        instrument: String,
        /// Iterations spent.
        iterations: u32,
        /// Last residual seen.
        residual: f64,
    },

    /// One or more instruments missed the repricing tolerance.
    #[error("Repricing failed for {count} instruments (max error: {max_error:.2e}): {instruments}")]
    RepricingFailed {
        /// Number of failed instruments.
        count: usize,
        /// Largest absolute error.
        max_error: f64,
        /// Failed instrument descriptions.
        instruments: String,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {reason}")]
    Config {
        /// Description of the problem.
        reason: String,
    },
}

impl CurveError {
    /// Creates a negative rate or vol error.
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

    /// Creates an invalid instrument error.
    #[must_use]
    pub fn invalid_instrument(reason: impl Into<String>) -> Self {
        Self::InvalidInstrument {
            reason: reason.into(),
        }
    }

    /// Creates a non-convergence error.
    #[must_use]
    pub fn non_convergence(instrument: impl Into<String>, iterations: u32, residual: f64) -> Self {
        Self::BootstrapNonConvergence {
            instrument: instrument.into(),
            iterations,
            residual,
        }
    }

    /// Creates a repricing failed error.
    #[must_use]
    pub fn repricing_failed(count: usize, max_error: f64, instruments: &[String]) -> Self {
        Self::RepricingFailed {
            count,
            max_error,
            instruments: instruments.join(", "),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::negative("flat rate", -0.01);
        assert!(err.to_string().contains("flat rate"));

        let err = CurveError::non_convergence("Swap 5Y @ 4.000%", 100, 1e-3);
        let msg = err.to_string();
        assert!(msg.contains("Swap 5Y"));
        assert!(msg.contains("100 iterations"));
    }

    #[test]
    fn test_repricing_failed_lists_instruments() {
        let ids = vec!["Deposit 3M".to_string(), "Swap 2Y".to_string()];
        let err = CurveError::repricing_failed(2, 1e-4, &ids);
        assert!(err.to_string().contains("Deposit 3M, Swap 2Y"));
    }

    #[test]
    fn test_core_error_is_transparent() {
        let core = CoreError::unsupported_convention("ACT/999");
        let err: CurveError = core.clone().into();
        assert_eq!(err.to_string(), core.to_string());
        assert_eq!(err, CurveError::Core(core));
    }

    #[test]
    fn test_math_error_is_transparent() {
        let err: CurveError = MathError::not_implemented("Flat").into();
        assert!(matches!(err, CurveError::Math(MathError::NotImplemented { .. })));
    }
}
