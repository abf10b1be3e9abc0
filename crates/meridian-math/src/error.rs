//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// No data points were supplied.
    #[error("Empty point set: at least one point is required")]
    EmptyPointSet,

    /// The x values are not strictly increasing.
    #[error("x values must be strictly increasing: x[{index}] = {current} follows {prev}")]
    NonIncreasingPoints {
        /// Index of the offending point.
        index: usize,
        /// The preceding x value.
        prev: f64,
        /// The offending x value.
        current: f64,
    },

    /// The requested method exists as a selector but has no implementation.
    #[error("Interpolation method '{method}' is not implemented")]
    NotImplemented {
        /// Name of the method.
        method: String,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Invalid bracket for root-finding.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// Matrix is singular (not invertible).
    #[error("Singular matrix: cannot solve")]
    SingularMatrix,

    /// Division by zero or near-zero value.
    #[error("Division by zero or near-zero value: {value:.2e}")]
    DivisionByZero {
        /// The near-zero value.
        value: f64,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a not implemented error.
    #[must_use]
    pub fn not_implemented(method: impl Into<String>) -> Self {
        Self::NotImplemented {
            method: method.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-6);
        assert!(err.to_string().contains("100 iterations"));
    }

    #[test]
    fn test_non_increasing_display() {
        let err = MathError::NonIncreasingPoints {
            index: 2,
            prev: 1.0,
            current: 0.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("x[2]"));
        assert!(msg.contains("0.5"));
    }

    #[test]
    fn test_not_implemented_display() {
        let err = MathError::not_implemented("Log-Linear");
        assert!(err.to_string().contains("Log-Linear"));
    }
}
