//! Actual/Actual day count convention, weighted-average-year variant.

use rust_decimal::Decimal;

use super::{ensure_ordered, DayCount};
use crate::error::CoreResult;
use crate::types::{days_in_year, Date};

/// Actual/Actual day count convention with a day-weighted average year length.
///
/// Within a single calendar year the fraction is actual days over that year's
/// length (365 or 366). Over several years the interval is split at each
/// 1 January; the days of every segment are summed, the lengths of the
/// calendar years that contribute at least one day are summed, and
///
/// $$\text{Year Fraction} = \frac{\text{Total Days}}{\text{Total Year Length} / \text{Years}}$$
///
/// This is neither ISDA nor ICMA Act/Act: the denominator is the average
/// length of the spanned years, not a per-segment basis. A full calendar year
/// gives exactly 1 whether or not it is a leap year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActAct;

impl DayCount for ActAct {
    fn name(&self) -> &'static str {
        "ACT/ACT"
    }

    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<Decimal> {
        ensure_ordered(start, end)?;
        if start == end {
            return Ok(Decimal::ZERO);
        }

        let mut total_days: i64 = 0;
        let mut total_length: i64 = 0;
        let mut years: i64 = 0;

        let mut current = start;
        while current < end {
            let next_year = current.start_of_next_year()?;
            let segment_end = if next_year < end { next_year } else { end };
            let days = current.days_between(&segment_end);

            if days > 0 {
                total_days += days;
                total_length += i64::from(days_in_year(current.year()));
                years += 1;
            }
            current = segment_end;
        }

        // total_days / (total_length / years)
        Ok(Decimal::from(total_days) * Decimal::from(years) / Decimal::from(total_length))
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_full_non_leap_year_is_one() {
        let yf = ActAct.year_fraction(date(2023, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(yf, dec!(1));
    }

    #[test]
    fn test_full_leap_year_is_one() {
        let yf = ActAct.year_fraction(date(2024, 1, 1), date(2025, 1, 1)).unwrap();
        assert_eq!(yf, dec!(1));
    }

    #[test]
    fn test_same_year_uses_that_years_length() {
        let leap = ActAct.year_fraction(date(2024, 1, 1), date(2024, 3, 1)).unwrap();
        assert_eq!(leap, dec!(60) / dec!(366));

        let plain = ActAct.year_fraction(date(2023, 1, 1), date(2023, 3, 1)).unwrap();
        assert_eq!(plain, dec!(59) / dec!(365));
    }

    #[test]
    fn test_multi_year_weighted_denominator() {
        // 2023-07-01 .. 2025-07-01: 184 days in 2023, 366 in 2024, 181 in 2025
        let yf = ActAct.year_fraction(date(2023, 7, 1), date(2025, 7, 1)).unwrap();
        let total_days = dec!(184) + dec!(366) + dec!(181);
        let average_length = (dec!(365) + dec!(366) + dec!(365)) / dec!(3);
        assert_eq!(yf.round_dp(20), (total_days / average_length).round_dp(20));
    }

    #[test]
    fn test_differs_from_simple_ratio_across_leap_year() {
        let yf = ActAct.year_fraction(date(2023, 7, 1), date(2024, 7, 1)).unwrap();
        assert_ne!(yf, dec!(366) / dec!(365));
        // 184 + 182 days over the mean of 365 and 366
        assert_eq!(yf.round_dp(20), (dec!(366) / dec!(365.5)).round_dp(20));
    }

    #[test]
    fn test_same_day_is_zero() {
        let d = date(2024, 2, 29);
        assert_eq!(ActAct.year_fraction(d, d).unwrap(), Decimal::ZERO);
    }
}
