//! # Meridian Vol
//!
//! Volatility surface construction for the Meridian term structure library.
//!
//! This crate provides:
//!
//! - **Interpolated surfaces**: a rectangular grid of market quotes,
//!   interpolated per axis
//! - **Flat surfaces**: one volatility everywhere
//! - **Smile surfaces**: a grid generated from ATM vol, 25-delta risk
//!   reversal and butterfly
//!
//! ## Quick Start
//!
//! ```rust
//! use meridian_vol::prelude::*;
//!
//! let today = Date::from_ymd(2025, 1, 2).unwrap();
//! let pair = CurrencyPair::new(Currency::EUR, Currency::USD);
//! let surface = create_vol_surface_from_smile(
//!     pair,
//!     today,
//!     0.08,
//!     VolSmileParameters::new(-0.005, 0.002),
//! )
//! .unwrap();
//!
//! assert_eq!(surface.volatility(100.0, 0.5).unwrap(), 0.08);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod smile;
pub mod surface;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{VolError, VolResult};
    pub use crate::smile::{create_vol_surface_from_smile, VolSmileParameters};
    pub use crate::surface::{
        create_flat_vol_surface, create_interpolated_vol_surface, SurfaceKind, VolSurfacePoint,
        VolatilitySurface,
    };

    pub use meridian_core::types::{Currency, CurrencyPair, Date};
    pub use meridian_math::interpolation::InterpolationMethod;
}

pub use error::{VolError, VolResult};
pub use smile::{create_vol_surface_from_smile, VolSmileParameters};
pub use surface::{
    create_flat_vol_surface, create_interpolated_vol_surface, SurfaceKind, VolSurfacePoint,
    VolatilitySurface,
};
