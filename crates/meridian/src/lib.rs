//! # Meridian
//!
//! Zero curve and volatility surface construction.
//!
//! This crate re-exports the public API of the workspace crates:
//!
//! - [`meridian_core`]: dates, currencies, tenors and day count conventions
//! - [`meridian_math`]: interpolation and root finding
//! - [`meridian_curves`]: zero curves, instruments and the bootstrapper
//! - [`meridian_vol`]: volatility surfaces
//!
//! ## Quick Start
//!
//! ```rust
//! use meridian::prelude::*;
//!
//! let today = Date::from_ymd(2025, 1, 2).unwrap();
//!
//! let curve = bootstrap_curve(
//!     Currency::EUR,
//!     today,
//!     vec![
//!         MarketInstrument::deposit(today.add_months(6).unwrap(), 0.025),
//!         MarketInstrument::swap(today.add_years(5).unwrap(), 0.024),
//!     ],
//!     InterpolationMethod::CubicSpline,
//! )
//! .unwrap();
//! assert!(curve.zero_rate(today.add_years(2).unwrap()).unwrap() > 0.0);
//!
//! let surface = create_flat_vol_surface(
//!     CurrencyPair::new(Currency::EUR, Currency::USD),
//!     today,
//!     0.075,
//! )
//! .unwrap();
//! assert_eq!(surface.volatility(1.10, 0.5).unwrap(), 0.075);
//! ```

#![warn(missing_docs)]

pub use meridian_core;
pub use meridian_curves;
pub use meridian_math;
pub use meridian_vol;

pub use meridian_core::{
    CoreError, CoreResult, Currency, CurrencyPair, Date, DayCount, DayCountConvention, Frequency,
    Tenor,
};
pub use meridian_curves::{Curve, CurveError, CurveResult, ZeroCurve};
pub use meridian_math::{MathError, MathResult};
pub use meridian_vol::{VolError, VolResult, VolatilitySurface};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use meridian_core::prelude::*;
    pub use meridian_curves::prelude::*;
    pub use meridian_vol::prelude::*;
}
