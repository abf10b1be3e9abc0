//! Interest rate futures.
//!
//! A future locks in a simple forward rate between its start and maturity
//! dates and is quoted as a price: `100 × (1 − forward)`. No convexity
//! adjustment is applied.

use serde::{Deserialize, Serialize};

use meridian_core::daycounts::DayCountConvention;
use meridian_core::types::Date;

use super::{CurveInstrument, InstrumentType};
use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

fn default_day_count() -> DayCountConvention {
    DayCountConvention::Act360
}

/// Interest rate future on the period `[start, maturity]`.
///
/// ```text
/// forward = (DF(S) / DF(T) − 1) / τ(S, T)
/// price   = 100 × (1 − forward)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateFuture {
    start: Date,
    maturity: Date,
    price: f64,
    #[serde(default = "default_day_count")]
    day_count: DayCountConvention,
}

impl RateFuture {
    /// Creates a future accruing on Act/360.
    #[must_use]
    pub fn new(start: Date, maturity: Date, price: f64) -> Self {
        Self {
            start,
            maturity,
            price,
            day_count: default_day_count(),
        }
    }

    /// Sets the accrual day count.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Returns the start of the forward period.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the quoted price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Forward rate implied by the quoted price.
    #[must_use]
    pub fn implied_rate(&self) -> f64 {
        (100.0 - self.price) / 100.0
    }

    /// Returns the accrual day count.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }
}

impl CurveInstrument for RateFuture {
    fn maturity(&self) -> Date {
        self.maturity
    }

    fn quote(&self) -> f64 {
        self.price
    }

    fn instrument_type(&self) -> InstrumentType {
        InstrumentType::Future
    }

    fn model_quote(&self, curve: &dyn Curve) -> CurveResult<f64> {
        let tau = self.day_count.year_fraction_f64(self.start, self.maturity)?;
        let df_start = curve.discount_factor(self.start)?;
        let df_end = curve.discount_factor(self.maturity)?;
        let forward = (df_start / df_end - 1.0) / tau;
        Ok(100.0 * (1.0 - forward))
    }

    fn rate_guess(&self) -> f64 {
        self.implied_rate()
    }

    fn validate(&self, reference_date: Date) -> CurveResult<()> {
        if !self.price.is_finite() {
            return Err(CurveError::invalid_instrument(format!(
                "{}: price is not finite",
                self.description()
            )));
        }
        if self.start < reference_date {
            return Err(CurveError::invalid_instrument(format!(
                "{}: start precedes the reference date {reference_date}",
                self.description()
            )));
        }
        if self.maturity <= self.start {
            return Err(CurveError::invalid_instrument(format!(
                "{}: maturity must be after start",
                self.description()
            )));
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!(
            "Future {}/{} @ {:.3}",
            self.start, self.maturity, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::ZeroCurve;
    use approx::assert_relative_eq;
    use meridian_core::types::Currency;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_model_price_on_flat_curve() {
        let today = date(2025, 1, 2);
        let future = RateFuture::new(date(2025, 3, 19), date(2025, 6, 18), 95.5);
        let curve = ZeroCurve::flat(Currency::USD, today, 0.045).unwrap();

        let t1 = 76.0 / 365.0;
        let t2 = 167.0 / 365.0;
        let forward = ((0.045_f64 * (t2 - t1)).exp() - 1.0) / (91.0 / 360.0);
        assert_relative_eq!(
            future.model_quote(&curve).unwrap(),
            100.0 * (1.0 - forward),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_implied_rate() {
        let future = RateFuture::new(date(2025, 3, 19), date(2025, 6, 18), 95.25);
        assert_relative_eq!(future.implied_rate(), 0.0475, epsilon = 1e-14);
    }

    #[test]
    fn test_validate() {
        let today = date(2025, 1, 2);
        assert!(RateFuture::new(date(2025, 3, 19), date(2025, 6, 18), 95.0)
            .validate(today)
            .is_ok());
        assert!(RateFuture::new(date(2024, 12, 18), date(2025, 3, 19), 95.0)
            .validate(today)
            .is_err());
        assert!(RateFuture::new(date(2025, 6, 18), date(2025, 6, 18), 95.0)
            .validate(today)
            .is_err());
    }
}
