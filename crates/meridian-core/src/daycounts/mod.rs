//! Day count conventions.
//!
//! A day count convention turns a pair of dates into a year fraction. The
//! fraction feeds both accrual of instrument cash flows and the time axis of
//! a curve.
//!
//! # Supported Conventions
//!
//! - [`Act365`]: Actual/365 Fixed
//! - [`Act360`]: Actual/360, money market
//! - [`ActAct`]: Actual/Actual with a day-weighted average year length
//! - [`Thirty360`]: 30/360 with the 31st rolled back to the 30th
//! - [`Business252`]: weekdays over 252, no holiday calendar
//!
//! # Usage
//!
//! ```rust
//! use meridian_core::daycounts::{DayCount, DayCountConvention};
//! use meridian_core::types::Date;
//!
//! let dc = DayCountConvention::lookup("ACT/360").unwrap().to_day_count();
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 4, 1).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 90);
//! assert_eq!(dc.year_fraction(start, end).unwrap().to_string(), "0.25");
//! ```

mod act360;
mod act365;
mod actact;
mod business252;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365;
pub use actact::ActAct;
pub use business252::Business252;
pub use thirty360::Thirty360;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations are stateless and thread-safe. The year fraction between
/// `start` and `end` is only defined for `end >= start`.
pub trait DayCount: Send + Sync {
    /// Returns the canonical name of the convention (e.g. "ACT/360").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDateRange` if `end` precedes `start`.
    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<Decimal>;

    /// Returns the number of days between two dates under this convention.
    ///
    /// Actual conventions count calendar days, 30/360 uses 30-day months and
    /// Business/252 counts weekdays. Negative when `end < start`.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Year fraction as `f64`, for use on a numeric time axis.
    fn year_fraction_f64(&self, start: Date, end: Date) -> CoreResult<f64> {
        let yf = self.year_fraction(start, end)?;
        yf.to_f64()
            .ok_or_else(|| CoreError::invalid_date(format!("year fraction {yf} is not representable")))
    }
}

/// Fails with `InvalidDateRange` when `end < start`.
pub(crate) fn ensure_ordered(start: Date, end: Date) -> CoreResult<()> {
    if end < start {
        Err(CoreError::invalid_date_range(start, end))
    } else {
        Ok(())
    }
}

/// Registry of the supported day count conventions.
///
/// Selects a convention at runtime and converts it to a boxed trait object.
/// Serializes as the canonical name.
///
/// # Example
///
/// ```rust
/// use meridian_core::daycounts::DayCountConvention;
///
/// let convention: DayCountConvention = "30/360".parse().unwrap();
/// assert_eq!(convention, DayCountConvention::Thirty360);
/// assert!(DayCountConvention::lookup("ACT/999").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayCountConvention {
    /// Actual/365 Fixed
    #[default]
    Act365,

    /// Actual/360
    Act360,

    /// Actual/Actual, day-weighted average year length
    ActAct,

    /// 30/360
    Thirty360,

    /// Business/252
    Business252,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Act365 => Box::new(Act365),
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::ActAct => Box::new(ActAct),
            DayCountConvention::Thirty360 => Box::new(Thirty360),
            DayCountConvention::Business252 => Box::new(Business252),
        }
    }

    /// Returns the canonical name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365 => "ACT/365",
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::ActAct => "ACT/ACT",
            DayCountConvention::Thirty360 => "30/360",
            DayCountConvention::Business252 => "BUS/252",
        }
    }

    /// Returns all registered conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act365,
            DayCountConvention::Act360,
            DayCountConvention::ActAct,
            DayCountConvention::Thirty360,
            DayCountConvention::Business252,
        ]
    }

    /// Looks up a convention by name or alias (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedConvention` for an unknown identifier.
    pub fn lookup(name: &str) -> CoreResult<Self> {
        name.parse()
    }

    /// Year fraction under this convention, without boxing.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDateRange` if `end` precedes `start`.
    pub fn year_fraction(&self, start: Date, end: Date) -> CoreResult<Decimal> {
        match self {
            DayCountConvention::Act365 => Act365.year_fraction(start, end),
            DayCountConvention::Act360 => Act360.year_fraction(start, end),
            DayCountConvention::ActAct => ActAct.year_fraction(start, end),
            DayCountConvention::Thirty360 => Thirty360.year_fraction(start, end),
            DayCountConvention::Business252 => Business252.year_fraction(start, end),
        }
    }

    /// Year fraction as `f64`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDateRange` if `end` precedes `start`.
    pub fn year_fraction_f64(&self, start: Date, end: Date) -> CoreResult<f64> {
        self.to_day_count().year_fraction_f64(start, end)
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    /// Parses a convention from its canonical name, enum-style name or a
    /// common alias such as "ACTUAL/360" or "BOND".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACTUAL/365 FIXED"
            | "ACT365" | "ACT365FIXED" => Ok(DayCountConvention::Act365),

            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),

            "ACT/ACT" | "ACTUAL/ACTUAL" | "ACTACT" => Ok(DayCountConvention::ActAct),

            "30/360" | "30/360 US" | "BOND" | "THIRTY360" => Ok(DayCountConvention::Thirty360),

            "BUS/252" | "BUSINESS/252" | "BD/252" | "BUSINESS252" => {
                Ok(DayCountConvention::Business252)
            }

            _ => Err(CoreError::unsupported_convention(s)),
        }
    }
}

impl TryFrom<String> for DayCountConvention {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayCountConvention> for String {
    fn from(convention: DayCountConvention) -> Self {
        convention.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_convention_enum() {
        for convention in DayCountConvention::all() {
            let dc = convention.to_day_count();
            assert_eq!(dc.name(), convention.name());

            let yf = dc.year_fraction(date(2025, 1, 1), date(2025, 7, 1)).unwrap();

            // All conventions should give roughly half a year
            assert!(yf > dec!(0.4) && yf < dec!(0.6), "{convention}: {yf}");
        }
    }

    #[test]
    fn test_lookup_roundtrip() {
        for convention in DayCountConvention::all() {
            assert_eq!(DayCountConvention::lookup(convention.name()).unwrap(), *convention);
        }
    }

    #[test]
    fn test_lookup_aliases() {
        assert_eq!(
            DayCountConvention::lookup("actual/360").unwrap(),
            DayCountConvention::Act360
        );
        assert_eq!(
            DayCountConvention::lookup("Act365Fixed").unwrap(),
            DayCountConvention::Act365
        );
        assert_eq!(
            DayCountConvention::lookup(" bond ").unwrap(),
            DayCountConvention::Thirty360
        );
    }

    #[test]
    fn test_lookup_unknown() {
        let err = DayCountConvention::lookup("ACT/999").unwrap_err();
        assert_eq!(
            err,
            CoreError::UnsupportedConvention {
                name: "ACT/999".to_string()
            }
        );
    }

    #[test]
    fn test_reversed_range_fails_for_every_convention() {
        let start = date(2025, 6, 15);
        let end = date(2025, 6, 1);
        for convention in DayCountConvention::all() {
            let err = convention.year_fraction(start, end).unwrap_err();
            assert_eq!(err, CoreError::invalid_date_range(start, end));
        }
    }

    #[test]
    fn test_act360_over_act365_ratio() {
        let start = date(2025, 3, 10);
        let end = date(2026, 9, 22);
        let a360 = DayCountConvention::Act360.year_fraction(start, end).unwrap();
        let a365 = DayCountConvention::Act365.year_fraction(start, end).unwrap();
        assert_eq!((a360 / a365).round_dp(20), (dec!(365) / dec!(360)).round_dp(20));
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&DayCountConvention::Thirty360).unwrap();
        assert_eq!(json, "\"30/360\"");
        let parsed: DayCountConvention = serde_json::from_str("\"act/360\"").unwrap();
        assert_eq!(parsed, DayCountConvention::Act360);
        assert!(serde_json::from_str::<DayCountConvention>("\"ACT/999\"").is_err());
    }

    #[test]
    fn test_year_fraction_f64() {
        let yf = DayCountConvention::Act360
            .year_fraction_f64(date(2025, 1, 1), date(2025, 4, 1))
            .unwrap();
        assert!((yf - 0.25).abs() < 1e-15);
    }

    fn arb_date() -> impl Strategy<Value = Date> {
        (0i64..36_500).prop_map(|offset| date(1990, 1, 1).add_days(offset).unwrap())
    }

    proptest! {
        #[test]
        fn prop_year_fraction_non_negative(a in arb_date(), b in arb_date()) {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            for convention in DayCountConvention::all() {
                let yf = convention.year_fraction(start, end).unwrap();
                prop_assert!(yf >= Decimal::ZERO, "{} gave {}", convention, yf);
            }
        }

        #[test]
        fn prop_reversed_dates_fail(a in arb_date(), days in 1i64..5_000) {
            let end = a;
            let start = a.add_days(days).unwrap();
            for convention in DayCountConvention::all() {
                prop_assert!(convention.year_fraction(start, end).is_err());
            }
        }
    }
}
