//! Par interest rate swap.
//!
//! Swaps build the medium-to-long end of the curve. The floating leg is
//! assumed to price at par, so the quote is the fixed rate that sets the
//! fixed leg to `1 − DF(T)`.

use serde::{Deserialize, Serialize};

use meridian_core::daycounts::DayCountConvention;
use meridian_core::types::{Date, Frequency};

use super::{CurveInstrument, InstrumentType};
use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

fn default_day_count() -> DayCountConvention {
    DayCountConvention::Thirty360
}

/// Par swap effective at the curve reference date.
///
/// ```text
/// rate = (1 − DF(T)) / Σ τ_i × DF(t_i)
/// ```
///
/// where `t_i` runs over the fixed-leg payment dates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swap {
    maturity: Date,
    rate: f64,
    #[serde(default)]
    frequency: Frequency,
    #[serde(default = "default_day_count")]
    day_count: DayCountConvention,
}

impl Swap {
    /// Creates an annual 30/360 par swap.
    #[must_use]
    pub fn new(maturity: Date, rate: f64) -> Self {
        Self {
            maturity,
            rate,
            frequency: Frequency::Annual,
            day_count: default_day_count(),
        }
    }

    /// Sets the fixed-leg payment frequency.
    #[must_use]
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the fixed-leg day count.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Returns the quoted par rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the fixed-leg frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the fixed-leg day count.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Fixed-leg annuity `Σ τ_i × DF(t_i)`.
    pub fn annuity(&self, curve: &dyn Curve) -> CurveResult<f64> {
        let start = curve.reference_date();
        let dates = fixed_leg_schedule(start, self.maturity, self.frequency)?;

        let mut annuity = 0.0;
        let mut previous = start;
        for date in dates {
            let tau = self.day_count.year_fraction_f64(previous, date)?;
            annuity += tau * curve.discount_factor(date)?;
            previous = date;
        }
        Ok(annuity)
    }
}

impl CurveInstrument for Swap {
    fn maturity(&self) -> Date {
        self.maturity
    }

    fn quote(&self) -> f64 {
        self.rate
    }

    fn instrument_type(&self) -> InstrumentType {
        InstrumentType::Swap
    }

    fn model_quote(&self, curve: &dyn Curve) -> CurveResult<f64> {
        let annuity = self.annuity(curve)?;
        if annuity <= 0.0 {
            return Err(CurveError::invalid_instrument(format!(
                "{}: fixed leg has no accrual",
                self.description()
            )));
        }
        let df = curve.discount_factor(self.maturity)?;
        Ok((1.0 - df) / annuity)
    }

    fn rate_guess(&self) -> f64 {
        let n = f64::from(self.frequency.periods_per_year());
        n * (self.rate / n).ln_1p()
    }

    fn description(&self) -> String {
        format!(
            "Swap {} @ {:.4}% ({})",
            self.maturity,
            self.rate * 100.0,
            self.frequency
        )
    }
}

/// Fixed-leg payment dates from `start` (exclusive) to `maturity` (inclusive).
///
/// Each regular date is `start` plus a whole number of periods, so month-end
/// clamping never accumulates. A short final period ends on `maturity`.
///
/// # Errors
///
/// Returns `CoreError::InvalidDate` if a date overflows the calendar.
pub fn fixed_leg_schedule(start: Date, maturity: Date, frequency: Frequency) -> CurveResult<Vec<Date>> {
    let step = i32::try_from(frequency.months_per_period())
        .map_err(|_| CurveError::invalid_value("period length out of range"))?;

    let mut dates = Vec::new();
    let mut periods = 1;
    loop {
        let date = start.add_months(step * periods)?;
        if date >= maturity {
            break;
        }
        dates.push(date);
        periods += 1;
    }
    dates.push(maturity);
    Ok(dates)
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
    fn test_schedule_annual() {
        let dates = fixed_leg_schedule(date(2025, 1, 2), date(2028, 1, 2), Frequency::Annual).unwrap();
        assert_eq!(
            dates,
            vec![date(2026, 1, 2), date(2027, 1, 2), date(2028, 1, 2)]
        );
    }

    #[test]
    fn test_schedule_no_month_end_drift() {
        let dates =
            fixed_leg_schedule(date(2025, 1, 31), date(2025, 7, 31), Frequency::Monthly).unwrap();
        assert_eq!(dates[0], date(2025, 2, 28));
        assert_eq!(dates[1], date(2025, 3, 31));
        assert_eq!(dates.last(), Some(&date(2025, 7, 31)));
        assert_eq!(dates.len(), 6);
    }

    #[test]
    fn test_schedule_short_final_period() {
        let dates =
            fixed_leg_schedule(date(2025, 1, 2), date(2026, 4, 2), Frequency::SemiAnnual).unwrap();
        assert_eq!(
            dates,
            vec![date(2025, 7, 2), date(2026, 1, 2), date(2026, 4, 2)]
        );
    }

    #[test]
    fn test_single_period_swap_matches_deposit_formula() {
        let today = date(2025, 1, 2);
        let maturity = date(2026, 1, 2);
        let curve = ZeroCurve::flat(Currency::USD, today, 0.04).unwrap();
        let swap = Swap::new(maturity, 0.04).with_day_count(DayCountConvention::Act365);

        // One annual period of exactly 365 days
        let df = (-0.04_f64).exp();
        assert_relative_eq!(swap.model_quote(&curve).unwrap(), (1.0 - df) / df, epsilon = 1e-14);
    }

    #[test]
    fn test_par_rate_on_flat_curve() {
        let today = date(2025, 1, 2);
        let curve = ZeroCurve::flat(Currency::USD, today, 0.03).unwrap();
        let swap = Swap::new(date(2030, 1, 2), 0.03);
        let par = swap.model_quote(&curve).unwrap();
        // Annual par rate of a flat continuous curve is close to e^r - 1
        assert_relative_eq!(par, 0.03_f64.exp() - 1.0, epsilon = 2e-4);
    }

    #[test]
    fn test_rate_guess_is_continuous_equivalent() {
        let swap = Swap::new(date(2030, 1, 2), 0.05).with_frequency(Frequency::SemiAnnual);
        assert_relative_eq!(swap.rate_guess(), 2.0 * (1.025_f64).ln(), epsilon = 1e-14);
    }
}
