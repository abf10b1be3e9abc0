//! Currency codes and FX currency pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// ISO 4217 currency codes for the markets curves are built in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum Currency {
    /// United States Dollar
    #[default]
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
    /// Canadian Dollar
    CAD,
    /// Australian Dollar
    AUD,
    /// New Zealand Dollar
    NZD,
    /// Swedish Krona
    SEK,
    /// Norwegian Krone
    NOK,
}

impl Currency {
    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::NZD => "NZD",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
        }
    }

    /// Parses a currency from its 3-letter code (case-insensitive).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CHF" => Some(Currency::CHF),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "NZD" => Some(Currency::NZD),
            "SEK" => Some(Currency::SEK),
            "NOK" => Some(Currency::NOK),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An FX currency pair such as `EURUSD` (base `EUR`, quote `USD`).
///
/// Identifies a volatility surface the same way a [`Currency`] identifies a
/// zero curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Base (foreign) currency.
    pub base: Currency,
    /// Quote (domestic) currency.
    pub quote: Currency,
}

impl CurrencyPair {
    /// Creates a currency pair.
    #[must_use]
    pub fn new(base: Currency, quote: Currency) -> Self {
        Self { base, quote }
    }

    /// Returns the six-letter market code, e.g. `EURUSD`.
    #[must_use]
    pub fn code(&self) -> String {
        format!("{}{}", self.base.code(), self.quote.code())
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.quote)
    }
}

impl std::str::FromStr for CurrencyPair {
    type Err = CoreError;

    /// Parses `EURUSD`, `EUR/USD` or `eur-usd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: String = s.chars().filter(char::is_ascii_alphabetic).collect();
        if letters.len() != 6 {
            return Err(unknown_pair(s));
        }

        let base = Currency::from_code(&letters[..3]).ok_or_else(|| unknown_pair(s))?;
        let quote = Currency::from_code(&letters[3..]).ok_or_else(|| unknown_pair(s))?;
        Ok(Self::new(base, quote))
    }
}

fn unknown_pair(s: &str) -> CoreError {
    CoreError::unsupported_convention(format!("currency pair '{s}'"))
}
