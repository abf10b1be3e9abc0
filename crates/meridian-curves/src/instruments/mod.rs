//! Curve instruments for yield curve bootstrap.
//!
//! Each instrument implements [`CurveInstrument`], which prices its market
//! quote off any [`Curve`]. The bootstrapper solves for the zero rate that
//! makes the model quote match the market quote.
//!
//! # Available Instruments
//!
//! - [`Deposit`]: money market deposit quoted as a simple rate
//! - [`RateFuture`]: interest rate future quoted as `100 × (1 − forward)`
//! - [`Swap`]: fixed-for-floating swap quoted as a par fixed rate
//!
//! [`MarketInstrument`] wraps the three in one serializable enum.

mod deposit;
mod future;
mod swap;

pub use deposit::Deposit;
pub use future::RateFuture;
pub use swap::{fixed_leg_schedule, Swap};

use serde::{Deserialize, Serialize};

use meridian_core::types::Date;

use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

/// Instrument type classification.
///
/// Orders money market before futures before swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InstrumentType {
    /// Money market deposit
    Deposit,
    /// Interest rate future
    Future,
    /// Par interest rate swap
    Swap,
}

impl std::fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Future => write!(f, "Future"),
            Self::Swap => write!(f, "Swap"),
        }
    }
}

/// Trait for instruments a curve can be bootstrapped from.
pub trait CurveInstrument: Send + Sync {
    /// Final date of the instrument, where its curve knot is placed.
    fn maturity(&self) -> Date;

    /// Market quote: a rate for deposits and swaps, a price for futures.
    fn quote(&self) -> f64;

    /// Returns the instrument type.
    fn instrument_type(&self) -> InstrumentType;

    /// Quote implied by `curve`, in the same units as [`quote`](Self::quote).
    fn model_quote(&self, curve: &dyn Curve) -> CurveResult<f64>;

    /// Rough continuously compounded rate implied by the quote alone.
    ///
    /// Seeds the solver for the first knot of a bootstrap.
    fn rate_guess(&self) -> f64;

    /// Checks the instrument against the curve's reference date.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInstrument` for a non-finite quote or a maturity on
    /// or before `reference_date`.
    fn validate(&self, reference_date: Date) -> CurveResult<()> {
        if !self.quote().is_finite() {
            return Err(CurveError::invalid_instrument(format!(
                "{}: quote is not finite",
                self.description()
            )));
        }
        if self.maturity() <= reference_date {
            return Err(CurveError::invalid_instrument(format!(
                "{}: maturity must be after the reference date {reference_date}",
                self.description()
            )));
        }
        Ok(())
    }

    /// Human-readable identifier used in reports and errors.
    fn description(&self) -> String {
        format!("{} maturing {}", self.instrument_type(), self.maturity())
    }
}

/// A market instrument of any supported type.
///
/// Serializes with a `type` tag:
///
/// ```json
/// { "type": "Deposit", "maturity": "2025-04-02", "rate": 0.043 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MarketInstrument {
    /// Money market deposit
    Deposit(Deposit),
    /// Interest rate future
    Future(RateFuture),
    /// Par swap
    Swap(Swap),
}

impl MarketInstrument {
    /// Creates a deposit with default conventions.
    #[must_use]
    pub fn deposit(maturity: Date, rate: f64) -> Self {
        Self::Deposit(Deposit::new(maturity, rate))
    }

    /// Creates a future with default conventions.
    #[must_use]
    pub fn future(start: Date, maturity: Date, price: f64) -> Self {
        Self::Future(RateFuture::new(start, maturity, price))
    }

    /// Creates a swap with default conventions.
    #[must_use]
    pub fn swap(maturity: Date, rate: f64) -> Self {
        Self::Swap(Swap::new(maturity, rate))
    }

    fn inner(&self) -> &dyn CurveInstrument {
        match self {
            Self::Deposit(deposit) => deposit,
            Self::Future(future) => future,
            Self::Swap(swap) => swap,
        }
    }
}

impl CurveInstrument for MarketInstrument {
    fn maturity(&self) -> Date {
        self.inner().maturity()
    }

    fn quote(&self) -> f64 {
        self.inner().quote()
    }

    fn instrument_type(&self) -> InstrumentType {
        self.inner().instrument_type()
    }

    fn model_quote(&self, curve: &dyn Curve) -> CurveResult<f64> {
        self.inner().model_quote(curve)
    }

    fn rate_guess(&self) -> f64 {
        self.inner().rate_guess()
    }

    fn validate(&self, reference_date: Date) -> CurveResult<()> {
        self.inner().validate(reference_date)
    }

    fn description(&self) -> String {
        self.inner().description()
    }
}

impl From<Deposit> for MarketInstrument {
    fn from(deposit: Deposit) -> Self {
        Self::Deposit(deposit)
    }
}

impl From<RateFuture> for MarketInstrument {
    fn from(future: RateFuture) -> Self {
        Self::Future(future)
    }
}

impl From<Swap> for MarketInstrument {
    fn from(swap: Swap) -> Self {
        Self::Swap(swap)
    }
}
