//! Curve construction entry points.
//!
//! The free functions cover the three ways to build a [`ZeroCurve`]. A
//! [`CurveSpec`] names one of them as data, so a set of curves can be
//! described in JSON and built together with [`build_curves`].

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use meridian_core::types::{Currency, Date};
use meridian_math::interpolation::InterpolationMethod;

use crate::bootstrap::CurveBootstrapper;
use crate::config::BootstrapConfig;
use crate::curves::{CurvePoint, ZeroCurve};
use crate::error::CurveResult;
use crate::instruments::MarketInstrument;

/// Builds a curve through the given points.
///
/// # Errors
///
/// See [`ZeroCurve::new`].
pub fn create_zero_curve(
    currency: Currency,
    reference_date: Date,
    points: Vec<CurvePoint>,
    method: InterpolationMethod,
) -> CurveResult<ZeroCurve> {
    ZeroCurve::new(currency, reference_date, points, method)
}

/// Builds a curve with one rate everywhere.
///
/// # Errors
///
/// See [`ZeroCurve::flat`].
pub fn create_flat_curve(currency: Currency, reference_date: Date, rate: f64) -> CurveResult<ZeroCurve> {
    ZeroCurve::flat(currency, reference_date, rate)
}

/// Bootstraps a curve from market instruments with default settings.
///
/// # Errors
///
/// See [`CurveBootstrapper::bootstrap`].
pub fn bootstrap_curve(
    currency: Currency,
    reference_date: Date,
    instruments: Vec<MarketInstrument>,
    method: InterpolationMethod,
) -> CurveResult<ZeroCurve> {
    CurveBootstrapper::new(currency, reference_date)
        .with_interpolation(method)
        .add_instruments(instruments)
        .bootstrap()
}

/// Description of a curve to build.
///
/// ```json
/// {
///   "kind": "Bootstrap",
///   "currency": "USD",
///   "reference_date": "2025-01-02",
///   "instruments": [
///     { "type": "Deposit", "maturity": "2025-04-02", "rate": 0.043 },
///     { "type": "Swap", "maturity": "2030-01-02", "rate": 0.039 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CurveSpec {
    /// Curve through explicit points.
    Points {
        /// Curve currency.
        currency: Currency,
        /// Reference date.
        reference_date: Date,
        /// Knots in increasing time.
        points: Vec<CurvePoint>,
        /// Interpolation between knots.
        #[serde(default)]
        method: InterpolationMethod,
    },
    /// Flat curve.
    Flat {
        /// Curve currency.
        currency: Currency,
        /// Reference date.
        reference_date: Date,
        /// Continuously compounded rate.
        rate: f64,
    },
    /// Curve bootstrapped from instruments.
    Bootstrap {
        /// Curve currency.
        currency: Currency,
        /// Reference date.
        reference_date: Date,
        /// Input instruments in any order.
        instruments: Vec<MarketInstrument>,
        /// Bootstrap settings.
        #[serde(default)]
        config: BootstrapConfig,
    },
}

impl CurveSpec {
    /// Returns the currency of the curve to build.
    #[must_use]
    pub fn currency(&self) -> Currency {
        match self {
            Self::Points { currency, .. }
            | Self::Flat { currency, .. }
            | Self::Bootstrap { currency, .. } => *currency,
        }
    }

    /// Builds the curve.
    ///
    /// # Errors
    ///
    /// Whatever the selected constructor returns.
    pub fn build(&self) -> CurveResult<ZeroCurve> {
        match self {
            Self::Points {
                currency,
                reference_date,
                points,
                method,
            } => create_zero_curve(*currency, *reference_date, points.clone(), *method),
            Self::Flat {
                currency,
                reference_date,
                rate,
            } => create_flat_curve(*currency, *reference_date, *rate),
            Self::Bootstrap {
                currency,
                reference_date,
                instruments,
                config,
            } => CurveBootstrapper::new(*currency, *reference_date)
                .with_config(*config)
                .add_instruments(instruments.iter().cloned())
                .bootstrap(),
        }
    }
}

/// Builds independent curves in parallel.
///
/// Returns one result per spec, in input order. A failure in one spec does
/// not affect the others.
pub fn build_curves(specs: &[CurveSpec]) -> Vec<CurveResult<ZeroCurve>> {
    let results: Vec<CurveResult<ZeroCurve>> = specs.par_iter().map(CurveSpec::build).collect();
    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(curves = specs.len(), failed, "built curve set");
    results
}
