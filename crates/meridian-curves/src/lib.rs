//! # Meridian Curves
//!
//! Zero curve construction for the Meridian term structure library.
//!
//! This crate provides:
//!
//! - **Curve Trait**: [`Curve`] for discount factor, zero rate and forward
//!   queries by date or time
//! - **Zero Curve**: point-supplied or flat continuously compounded curves
//! - **Instruments**: deposits, futures and par swaps
//! - **Bootstrap**: sequential bootstrapping with repricing validation
//! - **Construction**: entry points and a serializable [`CurveSpec`] table
//!
//! ## Quick Start
//!
//! ```rust
//! use meridian_curves::prelude::*;
//!
//! let today = Date::from_ymd(2025, 1, 2).unwrap();
//! let curve = bootstrap_curve(
//!     Currency::USD,
//!     today,
//!     vec![
//!         MarketInstrument::deposit(today.add_months(3).unwrap(), 0.043),
//!         MarketInstrument::swap(today.add_years(2).unwrap(), 0.040),
//!         MarketInstrument::swap(today.add_years(10).unwrap(), 0.041),
//!     ],
//!     InterpolationMethod::Linear,
//! )
//! .unwrap();
//!
//! let df = curve.discount_factor(today.add_years(5).unwrap()).unwrap();
//! assert!(df > 0.0 && df < 1.0);
//! ```
//!
//! [`Curve`]: traits::Curve
//! [`CurveSpec`]: construction::CurveSpec

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]

pub mod bootstrap;
pub mod compounding;
pub mod config;
pub mod construction;
pub mod curves;
pub mod error;
pub mod instruments;
pub mod repricing;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::CurveBootstrapper;
    pub use crate::compounding::Compounding;
    pub use crate::config::BootstrapConfig;
    pub use crate::construction::{
        bootstrap_curve, build_curves, create_flat_curve, create_zero_curve, CurveSpec,
    };
    pub use crate::curves::{CurvePoint, ZeroCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::instruments::{
        CurveInstrument, Deposit, InstrumentType, MarketInstrument, RateFuture, Swap,
    };
    pub use crate::repricing::{BootstrapResult, RepricingCheck, RepricingReport};
    pub use crate::traits::Curve;

    pub use meridian_core::types::{Currency, Date, Frequency};
    pub use meridian_core::DayCountConvention;
    pub use meridian_math::interpolation::InterpolationMethod;
}

pub use compounding::Compounding;
pub use curves::{CurvePoint, ZeroCurve};
pub use error::{CurveError, CurveResult};
pub use traits::Curve;
