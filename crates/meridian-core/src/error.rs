//! Error types for the Meridian core crate.
//!
//! Every failure in date handling or day count calculation is reported
//! through [`CoreError`] together with the offending input.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for date and day count operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A calendar date could not be constructed or parsed.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// The end of a date range precedes its start.
    #[error("Invalid date range: end {end} precedes start {start}")]
    InvalidDateRange {
        /// Start of the range.
        start: Date,
        /// End of the range.
        end: Date,
    },

    /// No day count convention is registered under the requested name.
    #[error("Unsupported day count convention: '{name}'")]
    UnsupportedConvention {
        /// The identifier that was looked up.
        name: String,
    },

    /// A tenor string such as `3M` or `10Y` could not be parsed.
    #[error("Invalid tenor '{tenor}': {reason}")]
    InvalidTenor {
        /// The tenor text.
        tenor: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid date range error.
    #[must_use]
    pub fn invalid_date_range(start: Date, end: Date) -> Self {
        Self::InvalidDateRange { start, end }
    }

    /// Creates an unsupported convention error.
    #[must_use]
    pub fn unsupported_convention(name: impl Into<String>) -> Self {
        Self::UnsupportedConvention { name: name.into() }
    }

    /// Creates an invalid tenor error.
    #[must_use]
    pub fn invalid_tenor(tenor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTenor {
            tenor: tenor.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_date_range_display() {
        let start = Date::from_ymd(2025, 6, 15).unwrap();
        let end = Date::from_ymd(2025, 6, 1).unwrap();
        let err = CoreError::invalid_date_range(start, end);
        let msg = err.to_string();
        assert!(msg.contains("2025-06-01"));
        assert!(msg.contains("2025-06-15"));
    }

    #[test]
    fn test_unsupported_convention_display() {
        let err = CoreError::unsupported_convention("ACT/999");
        assert!(err.to_string().contains("ACT/999"));
    }
}
