//! Core trait for term structure queries.
//!
//! [`Curve`] is the view instruments price against. An implementor supplies
//! its reference date, the mapping from dates to its time axis and a
//! continuously compounded zero rate per time; discount factors and forwards
//! follow from those.

use meridian_core::types::Date;

use crate::compounding::Compounding;
use crate::error::{CurveError, CurveResult};

/// A continuously compounded zero rate term structure.
pub trait Curve: Send + Sync {
    /// Returns the date at which `t = 0`.
    fn reference_date(&self) -> Date;

    /// Maps a date to the curve's time axis in years.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateRange` if `date` precedes the reference date.
    fn time_to(&self, date: Date) -> CurveResult<f64>;

    /// Continuously compounded zero rate at time `t`.
    fn zero_rate_at(&self, t: f64) -> f64;

    /// Discount factor at time `t`: `exp(-r(t)·t)`.
    fn discount_factor_at(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        (-self.zero_rate_at(t) * t).exp()
    }

    /// Continuously compounded zero rate to `date`.
    fn zero_rate(&self, date: Date) -> CurveResult<f64> {
        Ok(self.zero_rate_at(self.time_to(date)?))
    }

    /// Discount factor to `date`.
    fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        Ok(self.discount_factor_at(self.time_to(date)?))
    }

    /// Zero rate to `date` quoted under `compounding`.
    fn zero_rate_with(&self, date: Date, compounding: Compounding) -> CurveResult<f64> {
        let t = self.time_to(date)?;
        Ok(compounding.from_continuous(self.zero_rate_at(t), t))
    }

    /// Continuously compounded forward rate between two dates.
    ///
    /// Equal dates are priced as a one-day forward.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateRange` if `end` precedes `start` or `start`
    /// precedes the reference date, and `InvalidDate` for equal dates on the
    /// last representable day.
    fn forward_rate(&self, start: Date, end: Date) -> CurveResult<f64> {
        if end < start {
            return Err(CurveError::Core(meridian_core::CoreError::invalid_date_range(
                start, end,
            )));
        }
        let t1 = self.time_to(start)?;
        let t2 = if end == start {
            self.time_to(end.add_days(1)?)?
        } else {
            self.time_to(end)?
        };
        if t2 <= t1 {
            return Ok(self.zero_rate_at(t1));
        }
        let r1 = self.zero_rate_at(t1);
        let r2 = self.zero_rate_at(t2);
        Ok((r2 * t2 - r1 * t1) / (t2 - t1))
    }
}
