//! Market tenors such as `ON`, `1W`, `3M` or `10Y`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// Unit of a [`Tenor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TenorUnit {
    /// Calendar days (`ON` is one day)
    Days,
    /// Weeks of seven calendar days
    Weeks,
    /// Calendar months, end-of-month clamped
    Months,
    /// Calendar years
    Years,
}

/// A market tenor: a count of days, weeks, months or years.
///
/// # Example
///
/// ```rust
/// use meridian_core::types::{Date, Tenor};
///
/// let tenor: Tenor = "3M".parse().unwrap();
/// let spot = Date::from_ymd(2025, 1, 31).unwrap();
/// assert_eq!(tenor.add_to(spot).unwrap(), Date::from_ymd(2025, 4, 30).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tenor {
    count: u32,
    unit: TenorUnit,
}

impl Tenor {
    /// Overnight (one calendar day).
    pub const ON: Tenor = Tenor::days(1);

    /// Creates a tenor of `count` days.
    #[must_use]
    pub const fn days(count: u32) -> Self {
        Self {
            count,
            unit: TenorUnit::Days,
        }
    }

    /// Creates a tenor of `count` weeks.
    #[must_use]
    pub const fn weeks(count: u32) -> Self {
        Self {
            count,
            unit: TenorUnit::Weeks,
        }
    }

    /// Creates a tenor of `count` months.
    #[must_use]
    pub const fn months(count: u32) -> Self {
        Self {
            count,
            unit: TenorUnit::Months,
        }
    }

    /// Creates a tenor of `count` years.
    #[must_use]
    pub const fn years(count: u32) -> Self {
        Self {
            count,
            unit: TenorUnit::Years,
        }
    }

    /// Returns the number of units.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns the unit.
    #[must_use]
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Approximate length in years (days over 365, months over 12).
    #[must_use]
    pub fn as_years(&self) -> f64 {
        let n = f64::from(self.count);
        match self.unit {
            TenorUnit::Days => n / 365.0,
            TenorUnit::Weeks => 7.0 * n / 365.0,
            TenorUnit::Months => n / 12.0,
            TenorUnit::Years => n,
        }
    }

    /// Returns the date this tenor after `start`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_to(&self, start: Date) -> CoreResult<Date> {
        let count = i32::try_from(self.count)
            .map_err(|_| CoreError::invalid_tenor(self.to_string(), "count out of range"))?;
        match self.unit {
            TenorUnit::Days => start.add_days(i64::from(count)),
            TenorUnit::Weeks => start.add_days(7 * i64::from(count)),
            TenorUnit::Months => start.add_months(count),
            TenorUnit::Years => start.add_years(count),
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Tenor::ON {
            return write!(f, "ON");
        }
        let suffix = match self.unit {
            TenorUnit::Days => 'D',
            TenorUnit::Weeks => 'W',
            TenorUnit::Months => 'M',
            TenorUnit::Years => 'Y',
        };
        write!(f, "{}{suffix}", self.count)
    }
}

impl std::str::FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_uppercase();
        if matches!(text.as_str(), "ON" | "O/N") {
            return Ok(Tenor::ON);
        }

        let Some(suffix) = text.chars().last() else {
            return Err(CoreError::invalid_tenor(s, "empty tenor"));
        };
        let unit = match suffix {
            'D' => TenorUnit::Days,
            'W' => TenorUnit::Weeks,
            'M' => TenorUnit::Months,
            'Y' => TenorUnit::Years,
            _ => return Err(CoreError::invalid_tenor(s, "unit must be one of D, W, M, Y")),
        };

        let count: u32 = text[..text.len() - 1]
            .parse()
            .map_err(|_| CoreError::invalid_tenor(s, "count is not a whole number"))?;
        if count == 0 {
            return Err(CoreError::invalid_tenor(s, "count must be positive"));
        }

        Ok(Self { count, unit })
    }
}

impl TryFrom<String> for Tenor {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tenor> for String {
    fn from(tenor: Tenor) -> Self {
        tenor.to_string()
    }
}
