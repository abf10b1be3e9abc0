//! Linear interpolation.

use crate::error::MathResult;
use crate::interpolation::{find_segment, validate_points, ExtrapolationPolicy, Interpolator};

/// Linear interpolation between data points.
///
/// Consecutive points are joined with straight lines. Outside the data range
/// the nearest boundary value is held constant. A single point gives a
/// constant function.
///
/// # Example
///
/// ```rust
/// use meridian_math::interpolation::{LinearInterpolator, Interpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 4.0, 9.0];
///
/// let interp = LinearInterpolator::new(xs, ys).unwrap();
/// assert_eq!(interp.interpolate(1.5), 2.5);
/// assert_eq!(interp.interpolate(10.0), 9.0);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
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
        Ok(Self { xs, ys })
    }

    fn last(&self) -> usize {
        self.xs.len() - 1
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> f64 {
        let last = self.last();
        if last == 0 || x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[last] {
            return self.ys[last];
        }

        let i = find_segment(&self.xs, x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let t = (x - x0) / (x1 - x0);
        y0 + t * (y1 - y0)
    }

    fn derivative(&self, x: f64) -> f64 {
        let last = self.last();
        if last == 0 || x < self.xs[0] || x > self.xs[last] {
            return 0.0;
        }

        let i = find_segment(&self.xs, x);
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.last()]
    }

    fn extrapolation(&self) -> ExtrapolationPolicy {
        ExtrapolationPolicy::Flat
    }
}
