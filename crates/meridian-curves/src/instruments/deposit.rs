//! Money market deposit instrument.
//!
//! A deposit is the simplest bootstrap instrument and anchors the short end
//! of the curve (ON to 12M).

use serde::{Deserialize, Serialize};

use meridian_core::daycounts::DayCountConvention;
use meridian_core::types::Date;

use super::{CurveInstrument, InstrumentType};
use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

fn default_day_count() -> DayCountConvention {
    DayCountConvention::Act360
}

/// Money market deposit from the curve reference date to maturity.
///
/// Quoted as a simple rate:
///
/// ```text
/// rate = (1 / DF(T) − 1) / τ(ref, T)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    maturity: Date,
    rate: f64,
    #[serde(default = "default_day_count")]
    day_count: DayCountConvention,
}

impl Deposit {
    /// Creates a deposit accruing on Act/360.
    #[must_use]
    pub fn new(maturity: Date, rate: f64) -> Self {
        Self {
            maturity,
            rate,
            day_count: default_day_count(),
        }
    }

    /// Sets the accrual day count.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Returns the quoted simple rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the accrual day count.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }
}

impl CurveInstrument for Deposit {
    fn maturity(&self) -> Date {
        self.maturity
    }

    fn quote(&self) -> f64 {
        self.rate
    }

    fn instrument_type(&self) -> InstrumentType {
        InstrumentType::Deposit
    }

    fn model_quote(&self, curve: &dyn Curve) -> CurveResult<f64> {
        let tau = self
            .day_count
            .year_fraction_f64(curve.reference_date(), self.maturity)?;
        if tau <= 0.0 {
            return Err(CurveError::invalid_instrument(format!(
                "{}: zero accrual period",
                self.description()
            )));
        }
        let df = curve.discount_factor(self.maturity)?;
        Ok((1.0 / df - 1.0) / tau)
    }

    fn rate_guess(&self) -> f64 {
        self.rate
    }

    fn description(&self) -> String {
        format!("Deposit {} @ {:.4}%", self.maturity, self.rate * 100.0)
    }
}
