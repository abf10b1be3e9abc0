//! Curve bootstrap.
//!
//! The sequential bootstrapper walks the instruments in maturity order and
//! solves one zero rate per maturity, holding the earlier knots fixed. With a
//! non-local interpolation such as the cubic spline, later knots move the
//! curve under earlier instruments, so the sequential pass is followed by
//! refinement passes that re-solve every knot against the full curve.
//!
//! # Example
//!
//! ```rust
//! use meridian_core::types::{Currency, Date};
//! use meridian_curves::bootstrap::CurveBootstrapper;
//! use meridian_curves::instruments::MarketInstrument;
//! use meridian_curves::traits::Curve;
//!
//! let today = Date::from_ymd(2025, 1, 2).unwrap();
//! let curve = CurveBootstrapper::new(Currency::USD, today)
//!     .add_instrument(MarketInstrument::deposit(today.add_months(3).unwrap(), 0.043))
//!     .add_instrument(MarketInstrument::swap(today.add_years(2).unwrap(), 0.040))
//!     .add_instrument(MarketInstrument::swap(today.add_years(5).unwrap(), 0.038))
//!     .bootstrap()
//!     .unwrap();
//!
//! assert_eq!(curve.points().len(), 3);
//! assert!(curve.discount_factor(today.add_years(5).unwrap()).unwrap() < 1.0);
//! ```

mod sequential;

pub use sequential::CurveBootstrapper;
