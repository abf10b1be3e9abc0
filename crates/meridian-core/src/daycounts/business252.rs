//! Business/252 day count convention.

use rust_decimal::Decimal;

use super::{ensure_ordered, DayCount};
use crate::error::CoreResult;
use crate::types::Date;

/// Business/252 day count convention.
///
/// Counts the weekdays in `[start, end)` and divides by 252. Only Saturdays
/// and Sundays are excluded: there is no holiday calendar, so fractions are
/// slightly larger than a market that observes public holidays would quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Business252;

impl DayCount for Business252 {
    fn name(&self) -> &'static str {
        "BUS/252"
    }

    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<Decimal> {
        ensure_ordered(start, end)?;
        Ok(Decimal::from(self.day_count(start, end)) / Decimal::from(252))
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        if end < start {
            -end.weekdays_until(&start)
        } else {
            start.weekdays_until(&end)
        }
    }
}
