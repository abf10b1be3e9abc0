//! Natural cubic spline interpolation.

use crate::error::MathResult;
use crate::interpolation::{find_segment, validate_points, ExtrapolationPolicy, Interpolator};
use crate::linear_algebra::solve_tridiagonal;

/// Natural cubic spline interpolation.
///
/// Constructs a smooth curve through data points using piecewise cubic
/// polynomials with continuous first and second derivatives. "Natural" means
/// the second derivative is zero at both end points.
///
/// The second derivatives are solved once at construction; each query is a
/// closed-form evaluation. Outside the data range the cubic of the boundary
/// segment keeps being evaluated. One point gives a constant, two points give
/// the straight line through them.
///
/// # Example
///
/// ```rust
/// use meridian_math::interpolation::{CubicSpline, Interpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 4.0, 9.0];
///
/// let spline = CubicSpline::new(xs, ys).unwrap();
/// assert!((spline.interpolate(2.0) - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are no points, the lengths differ, a value is
    /// not finite, or the x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_points(&xs, &ys)?;
        let y2s = compute_second_derivatives(&xs, &ys)?;
        Ok(Self { xs, ys, y2s })
    }

    /// Returns the second derivative at each knot.
    #[must_use]
    pub fn second_derivatives(&self) -> &[f64] {
        &self.y2s
    }

    /// Segment index and the spline weights `(h, a, b)` at x.
    fn weights(&self, x: f64) -> (usize, f64, f64, f64) {
        let i = find_segment(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;
        (i, h, a, b)
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> f64 {
        if self.xs.len() == 1 {
            return self.ys[0];
        }

        let (i, h, a, b) = self.weights(x);
        let y2_lo = self.y2s[i];
        let y2_hi = self.y2s[i + 1];

        a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * y2_lo + (b * b * b - b) * y2_hi) * (h * h) / 6.0
    }

    fn derivative(&self, x: f64) -> f64 {
        if self.xs.len() == 1 {
            return 0.0;
        }

        let (i, h, a, b) = self.weights(x);
        let y2_lo = self.y2s[i];
        let y2_hi = self.y2s[i + 1];

        (self.ys[i + 1] - self.ys[i]) / h - (3.0 * a * a - 1.0) * h * y2_lo / 6.0
            + (3.0 * b * b - 1.0) * h * y2_hi / 6.0
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    fn extrapolation(&self) -> ExtrapolationPolicy {
        ExtrapolationPolicy::BoundaryPolynomial
    }
}

/// Computes the knot second derivatives of a natural cubic spline.
///
/// For interior knots `1..n-1`:
///
/// ```text
/// h[i-1] M[i-1] + 2 (h[i-1] + h[i]) M[i] + h[i] M[i+1]
///     = 6 ((y[i+1] - y[i]) / h[i] - (y[i] - y[i-1]) / h[i-1])
/// ```
///
/// with `M[0] = M[n-1] = 0`.
fn compute_second_derivatives(xs: &[f64], ys: &[f64]) -> MathResult<Vec<f64>> {
    let n = xs.len();
    let mut y2s = vec![0.0; n];
    if n < 3 {
        return Ok(y2s);
    }

    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let m = n - 2;

    let lower: Vec<f64> = (2..n - 1).map(|i| h[i - 1]).collect();
    let diag: Vec<f64> = (1..n - 1).map(|i| 2.0 * (h[i - 1] + h[i])).collect();
    let upper: Vec<f64> = (1..n - 2).map(|i| h[i]).collect();
    let rhs: Vec<f64> = (1..n - 1)
        .map(|i| 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]))
        .collect();

    let interior = solve_tridiagonal(&lower, &diag, &upper, &rhs)?;
    y2s[1..=m].copy_from_slice(&interior);

    Ok(y2s)
}
