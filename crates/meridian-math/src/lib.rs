//! # Meridian Math
//!
//! Numerical building blocks for the Meridian term structure library.
//!
//! This crate provides:
//!
//! - **Interpolation**: Linear (flat extrapolation) and natural cubic spline
//!   (boundary polynomial extrapolation) behind a common [`Interpolator`] trait
//! - **Linear Algebra**: Tridiagonal solver used by the spline
//! - **Solvers**: Bisection and a Newton-seeded bisection with bracket search
//!
//! [`Interpolator`]: interpolation::Interpolator

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::match_same_arms)]

pub mod error;
pub mod interpolation;
pub mod linear_algebra;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{
        CubicSpline, ExtrapolationPolicy, InterpolationMethod, Interpolator, LinearInterpolator,
    };
    pub use crate::solvers::{bisection, newton_bisection, BracketConfig, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
