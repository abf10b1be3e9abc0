//! Interpolation methods for curve and surface construction.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: piecewise linear, flat beyond the data
//! - [`CubicSpline`]: natural cubic spline, boundary cubic beyond the data
//!
//! | Method | Smoothness | Extrapolation |
//! |--------|------------|---------------|
//! | Linear | C0 | Flat at the nearest boundary value |
//! | Cubic Spline | C2 | Boundary segment's polynomial |
//!
//! [`InterpolationMethod`] selects a method at runtime. `Flat` and
//! `LogLinear` are recognised names without an implementation and fail with
//! [`MathError::NotImplemented`] rather than silently falling back.

mod cubic_spline;
mod linear;

pub use cubic_spline::CubicSpline;
pub use linear::LinearInterpolator;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MathError, MathResult};

/// What an interpolator does outside `[min_x, max_x]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtrapolationPolicy {
    /// Holds the nearest boundary value constant.
    Flat,
    /// Keeps evaluating the polynomial of the boundary segment.
    BoundaryPolynomial,
}

/// Trait for interpolation methods.
///
/// Every method is defined on the whole real line: queries outside the data
/// range follow the method's [`ExtrapolationPolicy`].
pub trait Interpolator: Send + Sync + fmt::Debug {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> f64;

    /// Returns the first derivative at x.
    ///
    /// Used to derive instantaneous forward rates from zero rates.
    fn derivative(&self, x: f64) -> f64;

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Returns the extrapolation behaviour outside the data range.
    fn extrapolation(&self) -> ExtrapolationPolicy;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Interpolation method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterpolationMethod {
    /// Piecewise linear with flat extrapolation.
    #[default]
    Linear,

    /// Natural cubic spline with boundary polynomial extrapolation.
    CubicSpline,

    /// Piecewise constant. Not implemented.
    Flat,

    /// Linear on the logarithm of the values. Not implemented.
    LogLinear,
}

impl InterpolationMethod {
    /// Builds an interpolator through the given points.
    ///
    /// # Errors
    ///
    /// - `NotImplemented` for [`Flat`](Self::Flat) and [`LogLinear`](Self::LogLinear)
    /// - `EmptyPointSet`, `NonIncreasingPoints` or `InvalidInput` for bad points
    pub fn build(&self, xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Box<dyn Interpolator>> {
        match self {
            Self::Linear => Ok(Box::new(LinearInterpolator::new(xs, ys)?)),
            Self::CubicSpline => Ok(Box::new(CubicSpline::new(xs, ys)?)),
            Self::Flat | Self::LogLinear => Err(MathError::not_implemented(self.to_string())),
        }
    }

    /// Returns true if [`build`](Self::build) can construct this method.
    #[must_use]
    pub fn is_implemented(&self) -> bool {
        matches!(self, Self::Linear | Self::CubicSpline)
    }

    /// Returns true if a change to one knot moves the curve everywhere.
    #[must_use]
    pub fn is_non_local(&self) -> bool {
        matches!(self, Self::CubicSpline)
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Linear => "Linear",
            Self::CubicSpline => "Cubic Spline",
            Self::Flat => "Flat",
            Self::LogLinear => "Log-Linear",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for InterpolationMethod {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(['-', '_', ' '], "").as_str() {
            "LINEAR" => Ok(Self::Linear),
            "CUBICSPLINE" | "SPLINE" | "CUBIC" => Ok(Self::CubicSpline),
            "FLAT" => Ok(Self::Flat),
            "LOGLINEAR" => Ok(Self::LogLinear),
            _ => Err(MathError::invalid_input(format!(
                "unknown interpolation method '{s}'"
            ))),
        }
    }
}

/// Checks that `xs` and `ys` describe a usable point set.
pub(crate) fn validate_points(xs: &[f64], ys: &[f64]) -> MathResult<()> {
    if xs.is_empty() {
        return Err(MathError::EmptyPointSet);
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if let Some(i) = xs.iter().zip(ys).position(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "point {i} is not finite: ({}, {})",
            xs[i], ys[i]
        )));
    }
    for i in 1..xs.len() {
        if xs[i] <= xs[i - 1] {
            return Err(MathError::NonIncreasingPoints {
                index: i,
                prev: xs[i - 1],
                current: xs[i],
            });
        }
    }
    Ok(())
}

/// Finds the index i such that xs[i] <= x < xs[i+1], clamped to the
/// first and last segments. Requires at least two points.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => (i.saturating_sub(1)).min(xs.len() - 2),
    }
}
