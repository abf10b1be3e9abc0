//! Compounding conventions for quoting zero rates.
//!
//! Curves store continuously compounded zero rates. [`Compounding`] converts
//! them to the equivalent simple or periodically compounded rate for display.
//!
//! # Example
//!
//! ```rust
//! use meridian_curves::Compounding;
//!
//! let df_continuous = Compounding::Continuous.discount_factor(0.05, 2.0);
//! let df_annual = Compounding::Annual.discount_factor(0.05, 2.0);
//!
//! // Continuous compounding gives a lower discount factor
//! assert!(df_continuous < df_annual);
//! ```

use meridian_core::types::Frequency;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compounding convention of a quoted rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Simple interest: `DF = 1 / (1 + r·t)`
    Simple,
    /// Once a year
    Annual,
    /// Twice a year
    SemiAnnual,
    /// Four times a year
    Quarterly,
    /// Twelve times a year
    Monthly,
    /// Continuous: `DF = exp(-r·t)`
    #[default]
    Continuous,
}

impl Compounding {
    /// Compounding periods per year, `None` for simple and continuous.
    #[must_use]
    pub fn periods_per_year_opt(&self) -> Option<u32> {
        match self {
            Compounding::Simple | Compounding::Continuous => None,
            Compounding::Annual => Some(1),
            Compounding::SemiAnnual => Some(2),
            Compounding::Quarterly => Some(4),
            Compounding::Monthly => Some(12),
        }
    }

    /// Discount factor for `rate` over `t` years.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        match self.periods_per_year_opt() {
            Some(n) => {
                let n = f64::from(n);
                (1.0 + rate / n).powf(-n * t)
            }
            None if *self == Compounding::Simple => 1.0 / (1.0 + rate * t),
            None => (-rate * t).exp(),
        }
    }

    /// Rate under this convention implied by a discount factor over `t` years.
    ///
    /// Returns 0 for `t <= 0` or a non-positive discount factor.
    #[must_use]
    pub fn zero_rate(&self, df: f64, t: f64) -> f64 {
        if t <= 0.0 || df <= 0.0 {
            return 0.0;
        }
        match self.periods_per_year_opt() {
            Some(n) => {
                let n = f64::from(n);
                n * (df.powf(-1.0 / (n * t)) - 1.0)
            }
            None if *self == Compounding::Simple => (1.0 / df - 1.0) / t,
            None => -df.ln() / t,
        }
    }

    /// Converts `rate` from this convention to `target` over `t` years.
    #[must_use]
    pub fn convert_to(&self, rate: f64, target: Compounding, t: f64) -> f64 {
        if *self == target {
            return rate;
        }
        target.zero_rate(self.discount_factor(rate, t), t)
    }

    /// Converts a continuously compounded rate to this convention.
    #[must_use]
    pub fn from_continuous(&self, rate: f64, t: f64) -> f64 {
        Compounding::Continuous.convert_to(rate, *self, t)
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Simple => "Simple",
            Compounding::Annual => "Annual",
            Compounding::SemiAnnual => "Semi-Annual",
            Compounding::Quarterly => "Quarterly",
            Compounding::Monthly => "Monthly",
            Compounding::Continuous => "Continuous",
        };
        write!(f, "{name}")
    }
}

impl From<Frequency> for Compounding {
    fn from(freq: Frequency) -> Self {
        match freq {
            Frequency::Annual => Compounding::Annual,
            Frequency::SemiAnnual => Compounding::SemiAnnual,
            Frequency::Quarterly => Compounding::Quarterly,
            Frequency::Monthly => Compounding::Monthly,
        }
    }
}
