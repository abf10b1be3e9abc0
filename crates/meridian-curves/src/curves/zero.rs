//! Zero-coupon yield curve.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use meridian_core::daycounts::DayCountConvention;
use meridian_core::types::{Currency, Date};
use meridian_core::CoreError;
use meridian_math::interpolation::{InterpolationMethod, Interpolator};

use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

/// A knot of a zero curve: time in years and continuously compounded rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Time from the reference date in years.
    pub time: f64,
    /// Continuously compounded zero rate.
    pub rate: f64,
}

impl CurvePoint {
    /// Creates a curve point.
    #[must_use]
    pub fn new(time: f64, rate: f64) -> Self {
        Self { time, rate }
    }
}

impl From<(f64, f64)> for CurvePoint {
    fn from((time, rate): (f64, f64)) -> Self {
        Self { time, rate }
    }
}

/// A zero curve storing continuously compounded rates against time.
///
/// Discount factors follow `DF(t) = exp(-r(t)·t)`, so `DF(0) = 1` for any
/// rate. Between knots the rate comes from the curve's interpolation method;
/// outside the knots it follows that method's extrapolation policy.
///
/// # Example
///
/// ```rust
/// use meridian_core::types::{Currency, Date};
/// use meridian_curves::curves::{CurvePoint, ZeroCurve};
/// use meridian_curves::traits::Curve;
/// use meridian_math::interpolation::InterpolationMethod;
///
/// let today = Date::from_ymd(2025, 1, 2).unwrap();
/// let curve = ZeroCurve::new(
///     Currency::USD,
///     today,
///     vec![CurvePoint::new(1.0, 0.04), CurvePoint::new(2.0, 0.05)],
///     InterpolationMethod::Linear,
/// )
/// .unwrap();
///
/// assert!((curve.zero_rate_at(1.5) - 0.045).abs() < 1e-12);
/// assert_eq!(curve.discount_factor(today).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct ZeroCurve {
    currency: Currency,
    reference_date: Date,
    day_count: DayCountConvention,
    points: Vec<CurvePoint>,
    interpolation: InterpolationMethod,
    interpolator: Arc<dyn Interpolator>,
}

impl ZeroCurve {
    /// Creates a curve from points, using Act/365 for the time axis.
    ///
    /// # Errors
    ///
    /// - `EmptyPointSet` for no points
    /// - `InvalidValue` for a negative or non-finite time or a non-finite rate
    /// - `NonIncreasingPoints` if times are not strictly increasing
    /// - `Math(NotImplemented)` for an unsupported interpolation method
    pub fn new(
        currency: Currency,
        reference_date: Date,
        points: Vec<CurvePoint>,
        interpolation: InterpolationMethod,
    ) -> CurveResult<Self> {
        Self::with_day_count(
            currency,
            reference_date,
            points,
            interpolation,
            DayCountConvention::Act365,
        )
    }

    /// Creates a curve from points with an explicit time-axis day count.
    ///
    /// # Errors
    ///
    /// Same as [`ZeroCurve::new`].
    pub fn with_day_count(
        currency: Currency,
        reference_date: Date,
        points: Vec<CurvePoint>,
        interpolation: InterpolationMethod,
        day_count: DayCountConvention,
    ) -> CurveResult<Self> {
        validate_points(&points)?;

        let times: Vec<f64> = points.iter().map(|p| p.time).collect();
        let rates: Vec<f64> = points.iter().map(|p| p.rate).collect();
        let interpolator: Arc<dyn Interpolator> = Arc::from(interpolation.build(times, rates)?);

        Ok(Self {
            currency,
            reference_date,
            day_count,
            points,
            interpolation,
            interpolator,
        })
    }

    /// Creates a curve returning `rate` for every query.
    ///
    /// # Errors
    ///
    /// - `NegativeRateOrVol` if `rate < 0`
    /// - `InvalidValue` if `rate` is not finite
    pub fn flat(currency: Currency, reference_date: Date, rate: f64) -> CurveResult<Self> {
        if !rate.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "flat rate must be finite, got {rate}"
            )));
        }
        if rate < 0.0 {
            return Err(CurveError::negative("flat rate", rate));
        }
        Self::new(
            currency,
            reference_date,
            vec![CurvePoint::new(0.0, rate)],
            InterpolationMethod::Linear,
        )
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the time-axis day count.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Returns the knots.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Returns the interpolation method.
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMethod {
        self.interpolation
    }

    /// Time of the last knot.
    #[must_use]
    pub fn max_time(&self) -> f64 {
        self.interpolator.max_x()
    }

    /// Instantaneous forward rate at time `t`: `r(t) + t·r'(t)`.
    #[must_use]
    pub fn instantaneous_forward(&self, t: f64) -> f64 {
        let t = t.max(0.0);
        self.interpolator.interpolate(t) + t * self.interpolator.derivative(t)
    }
}

impl Curve for ZeroCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn time_to(&self, date: Date) -> CurveResult<f64> {
        if date < self.reference_date {
            return Err(CoreError::invalid_date_range(self.reference_date, date).into());
        }
        Ok(self
            .day_count
            .to_day_count()
            .year_fraction_f64(self.reference_date, date)?)
    }

    fn zero_rate_at(&self, t: f64) -> f64 {
        self.interpolator.interpolate(t)
    }
}

fn validate_points(points: &[CurvePoint]) -> CurveResult<()> {
    if points.is_empty() {
        return Err(CurveError::EmptyPointSet);
    }

    for (i, point) in points.iter().enumerate() {
        if !point.time.is_finite() || point.time < 0.0 {
            return Err(CurveError::invalid_value(format!(
                "curve time at index {i} must be finite and non-negative, got {}",
                point.time
            )));
        }
        if !point.rate.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "zero rate at index {i} must be finite, got {}",
                point.rate
            )));
        }
    }

    for (i, pair) in points.windows(2).enumerate() {
        if pair[1].time <= pair[0].time {
            return Err(CurveError::NonIncreasingPoints {
                index: i + 1,
                prev: pair[0].time,
                current: pair[1].time,
            });
        }
    }

    Ok(())
}
