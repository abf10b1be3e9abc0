//! Surfaces generated from ATM volatility, risk reversal and butterfly.
//!
//! Each node uses the quadratic smile
//!
//! ```text
//! vol(δ) = atm + rr·δ + bf·δ²
//! ```
//!
//! on a fixed set of deltas and tenors. Strikes are placed at `100 + 100·δ`.
//! This is a labelled approximation that assumes an ATM strike of 100; there
//! is no delta-to-strike solve.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use meridian_core::types::{CurrencyPair, Date};
use meridian_math::interpolation::InterpolationMethod;

use crate::error::{VolError, VolResult};
use crate::surface::{validate_vol, validate_vol_level, SurfaceKind, VolatilitySurface};

/// Deltas of the generated smile.
pub const SMILE_DELTAS: [f64; 5] = [-0.10, -0.25, 0.0, 0.25, 0.10];

/// Tenors of the generated smile in years: 1M, 3M, 6M and 1Y.
pub const SMILE_TENORS: [f64; 4] = [1.0 / 12.0, 0.25, 0.5, 1.0];

/// Strike assumed for the ATM node.
pub const ATM_STRIKE: f64 = 100.0;

/// 25-delta smile quotes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VolSmileParameters {
    /// 25-delta risk reversal, the skew term.
    pub risk_reversal_25d: f64,
    /// 25-delta butterfly, the curvature term.
    pub butterfly_25d: f64,
}

impl VolSmileParameters {
    /// Creates smile parameters.
    #[must_use]
    pub fn new(risk_reversal_25d: f64, butterfly_25d: f64) -> Self {
        Self {
            risk_reversal_25d,
            butterfly_25d,
        }
    }

    /// Returns the smile vol at `delta` around `atm_vol`.
    #[must_use]
    pub fn vol_at_delta(&self, atm_vol: f64, delta: f64) -> f64 {
        atm_vol + self.risk_reversal_25d * delta + self.butterfly_25d * delta * delta
    }
}

/// Approximate strike for a delta.
#[must_use]
pub fn strike_for_delta(delta: f64) -> f64 {
    ATM_STRIKE + delta * ATM_STRIKE
}

/// Builds a linearly interpolated surface from ATM vol and smile quotes.
///
/// Every tenor row carries the same smile.
///
/// # Errors
///
/// - `InvalidValue` for a non-finite ATM vol or smile parameter
/// - `NegativeRateOrVol` for a negative ATM vol or a negative generated vol
/// - `ImplausibleVolUnits` for an ATM vol above 10
pub fn create_vol_surface_from_smile(
    pair: CurrencyPair,
    reference_date: Date,
    atm_vol: f64,
    smile: VolSmileParameters,
) -> VolResult<VolatilitySurface> {
    validate_vol_level("ATM volatility", atm_vol)?;
    for (name, value) in [
        ("risk reversal", smile.risk_reversal_25d),
        ("butterfly", smile.butterfly_25d),
    ] {
        if !value.is_finite() {
            return Err(VolError::invalid_value(format!("{name} {value} is not finite")));
        }
    }

    let mut nodes: Vec<(f64, f64)> = SMILE_DELTAS
        .iter()
        .map(|&delta| (strike_for_delta(delta), smile.vol_at_delta(atm_vol, delta)))
        .collect();
    nodes.sort_by(|a, b| a.0.total_cmp(&b.0));
    for &(strike, vol) in &nodes {
        validate_vol(&format!("smile volatility at strike {strike}"), vol)?;
    }

    let strikes: Vec<f64> = nodes.iter().map(|&(strike, _)| strike).collect();
    let vols = Array2::from_shape_fn((SMILE_TENORS.len(), nodes.len()), |(_, j)| nodes[j].1);

    VolatilitySurface::from_grid(
        pair,
        reference_date,
        SurfaceKind::Smile,
        strikes,
        SMILE_TENORS.to_vec(),
        vols,
        InterpolationMethod::Linear,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use meridian_core::types::Currency;

    fn usdjpy() -> CurrencyPair {
        CurrencyPair::new(Currency::USD, Currency::JPY)
    }

    fn today() -> Date {
        Date::from_ymd(2025, 1, 2).unwrap()
    }

    #[test]
    fn test_smile_layout() {
        let smile = VolSmileParameters::new(-0.02, 0.01);
        let surface = create_vol_surface_from_smile(usdjpy(), today(), 0.10, smile).unwrap();

        assert_eq!(surface.kind(), SurfaceKind::Smile);
        assert_eq!(surface.strikes(), &[75.0, 90.0, 100.0, 110.0, 125.0]);
        assert_eq!(surface.tenors(), &SMILE_TENORS);
        assert_eq!(surface.grid().unwrap().dim(), (4, 5));
    }

    #[test]
    fn test_atm_strike_returns_atm_vol_at_every_tenor() {
        let smile = VolSmileParameters::new(0.015, 0.004);
        let surface = create_vol_surface_from_smile(usdjpy(), today(), 0.095, smile).unwrap();
        for tenor in SMILE_TENORS {
            assert_eq!(surface.volatility(100.0, tenor).unwrap(), 0.095);
        }
    }

    #[test]
    fn test_wing_vols() {
        let smile = VolSmileParameters::new(-0.02, 0.01);
        let surface = create_vol_surface_from_smile(usdjpy(), today(), 0.10, smile).unwrap();

        // δ = -0.25 sits at strike 75, δ = +0.25 at 125.
        let low = 0.10 + 0.02 * 0.25 + 0.01 * 0.0625;
        let high = 0.10 - 0.02 * 0.25 + 0.01 * 0.0625;
        assert_relative_eq!(surface.volatility(75.0, 0.5).unwrap(), low, epsilon = 1e-15);
        assert_relative_eq!(surface.volatility(125.0, 0.5).unwrap(), high, epsilon = 1e-15);
        // Flat beyond the outer strikes.
        assert_relative_eq!(surface.volatility(50.0, 2.0).unwrap(), low, epsilon = 1e-15);
    }

    #[test]
    fn test_atm_validation() {
        let smile = VolSmileParameters::default();
        assert!(matches!(
            create_vol_surface_from_smile(usdjpy(), today(), -0.1, smile),
            Err(VolError::NegativeRateOrVol { .. })
        ));
        assert_eq!(
            create_vol_surface_from_smile(usdjpy(), today(), 12.0, smile).unwrap_err(),
            VolError::ImplausibleVolUnits { value: 12.0 }
        );
        assert!(matches!(
            create_vol_surface_from_smile(
                usdjpy(),
                today(),
                0.1,
                VolSmileParameters::new(f64::INFINITY, 0.0)
            ),
            Err(VolError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_negative_generated_vol() {
        // 0.01 - 0.25 * 0.2 < 0 at δ = -0.25.
        let smile = VolSmileParameters::new(0.2, 0.0);
        let err = create_vol_surface_from_smile(usdjpy(), today(), 0.01, smile).unwrap_err();
        assert!(matches!(err, VolError::NegativeRateOrVol { .. }));
    }

    #[test]
    fn test_zero_smile_is_flat() {
        let surface =
            create_vol_surface_from_smile(usdjpy(), today(), 0.2, VolSmileParameters::default())
                .unwrap();
        for (k, t) in [(60.0, 0.01), (95.0, 0.3), (130.0, 3.0)] {
            assert_eq!(surface.volatility(k, t).unwrap(), 0.2);
        }
    }

    #[test]
    fn test_parameters_from_json() {
        let smile: VolSmileParameters =
            serde_json::from_str(r#"{ "risk_reversal_25d": -0.01, "butterfly_25d": 0.003 }"#)
                .unwrap();
        assert_eq!(smile, VolSmileParameters::new(-0.01, 0.003));
    }
}
