//! Volatility surfaces over strike and tenor.
//!
//! A grid surface stores vols in an `Array2` with one row per tenor and one
//! column per strike. A query interpolates each tenor row across strike, then
//! interpolates the resulting column across tenor, both with the surface's
//! [`InterpolationMethod`]. With the default linear method this is bilinear
//! interpolation with flat extrapolation on both axes.

use std::fmt;
use std::sync::Arc;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use meridian_core::daycounts::DayCountConvention;
use meridian_core::types::{CurrencyPair, Date};
use meridian_math::interpolation::{InterpolationMethod, Interpolator};

use crate::error::{VolError, VolResult};

/// Largest volatility accepted as a decimal quote.
pub const MAX_DECIMAL_VOL: f64 = 10.0;

/// A single market volatility quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolSurfacePoint {
    /// Strike.
    pub strike: f64,
    /// Time to expiry in years.
    pub tenor: f64,
    /// Volatility as a decimal.
    pub vol: f64,
}

impl VolSurfacePoint {
    /// Creates a surface point.
    #[must_use]
    pub fn new(strike: f64, tenor: f64, vol: f64) -> Self {
        Self { strike, tenor, vol }
    }
}

impl From<(f64, f64, f64)> for VolSurfacePoint {
    fn from((strike, tenor, vol): (f64, f64, f64)) -> Self {
        Self { strike, tenor, vol }
    }
}

/// How a surface was constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// Grid of market quotes.
    Interpolated,
    /// One volatility everywhere.
    Flat,
    /// Grid generated from ATM vol, risk reversal and butterfly.
    Smile,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Interpolated => "Interpolated",
            Self::Flat => "Flat",
            Self::Smile => "Smile",
        };
        write!(f, "{name}")
    }
}

/// Rectangular vol grid with one strike interpolator per tenor row.
///
/// Both implemented methods are linear in the node values, so a tenor
/// interpolation of any column is the column dotted with the interpolants
/// of the unit vectors. Those are built once in `tenor_basis`. The linear
/// method skips them and reads the two bracketing rows directly.
#[derive(Debug, Clone)]
struct Grid {
    strikes: Vec<f64>,
    tenors: Vec<f64>,
    vols: Array2<f64>,
    method: InterpolationMethod,
    rows: Vec<Arc<dyn Interpolator>>,
    /// Empty for the linear method and for a single tenor.
    tenor_basis: Vec<Arc<dyn Interpolator>>,
}

impl Grid {
    fn new(
        strikes: Vec<f64>,
        tenors: Vec<f64>,
        vols: Array2<f64>,
        method: InterpolationMethod,
    ) -> VolResult<Self> {
        let rows = vols
            .rows()
            .into_iter()
            .map(|row| {
                let interpolator: Arc<dyn Interpolator> =
                    Arc::from(method.build(strikes.clone(), row.to_vec())?);
                Ok(interpolator)
            })
            .collect::<VolResult<Vec<_>>>()?;

        let tenor_basis = if method == InterpolationMethod::Linear || tenors.len() == 1 {
            Vec::new()
        } else {
            (0..tenors.len())
                .map(|i| {
                    let unit = (0..tenors.len()).map(|j| if i == j { 1.0 } else { 0.0 }).collect();
                    let interpolator: Arc<dyn Interpolator> =
                        Arc::from(method.build(tenors.clone(), unit)?);
                    Ok(interpolator)
                })
                .collect::<VolResult<Vec<_>>>()?
        };

        Ok(Self {
            strikes,
            tenors,
            vols,
            method,
            rows,
            tenor_basis,
        })
    }

    fn volatility(&self, strike: f64, tenor: f64) -> f64 {
        let vol = if self.tenor_basis.is_empty() {
            self.linear_in_tenor(strike, tenor)
        } else {
            self.rows
                .iter()
                .zip(&self.tenor_basis)
                .map(|(row, basis)| row.interpolate(strike) * basis.interpolate(tenor))
                .sum()
        };
        // A spline can overshoot below zero outside the quoted range.
        vol.max(0.0)
    }

    /// Linear across tenor between the two bracketing rows, flat outside.
    fn linear_in_tenor(&self, strike: f64, tenor: f64) -> f64 {
        let last = self.tenors.len() - 1;
        if tenor <= self.tenors[0] {
            return self.rows[0].interpolate(strike);
        }
        if tenor >= self.tenors[last] {
            return self.rows[last].interpolate(strike);
        }

        let i = self.tenors.partition_point(|t| *t <= tenor) - 1;
        let (t0, t1) = (self.tenors[i], self.tenors[i + 1]);
        let v0 = self.rows[i].interpolate(strike);
        let v1 = self.rows[i + 1].interpolate(strike);

        let w = (tenor - t0) / (t1 - t0);
        v0 + w * (v1 - v0)
    }
}

#[derive(Debug, Clone)]
enum SurfaceData {
    Flat(f64),
    Grid(Grid),
}

/// A volatility surface for one currency pair.
///
/// # Example
///
/// ```rust
/// use meridian_core::types::{Currency, CurrencyPair, Date};
/// use meridian_vol::surface::{VolSurfacePoint, VolatilitySurface};
///
/// let today = Date::from_ymd(2025, 1, 2).unwrap();
/// let pair = CurrencyPair::new(Currency::EUR, Currency::USD);
/// let surface = VolatilitySurface::from_points(
///     pair,
///     today,
///     vec![
///         VolSurfacePoint::new(90.0, 0.5, 0.12),
///         VolSurfacePoint::new(110.0, 0.5, 0.10),
///         VolSurfacePoint::new(90.0, 1.0, 0.14),
///         VolSurfacePoint::new(110.0, 1.0, 0.12),
///     ],
/// )
/// .unwrap();
///
/// assert!((surface.volatility(100.0, 0.75).unwrap() - 0.12).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct VolatilitySurface {
    pair: CurrencyPair,
    reference_date: Date,
    kind: SurfaceKind,
    data: SurfaceData,
}

impl VolatilitySurface {
    /// Builds a linearly interpolated surface from market quotes.
    ///
    /// # Errors
    ///
    /// See [`from_points_with_method`](Self::from_points_with_method).
    pub fn from_points(
        pair: CurrencyPair,
        reference_date: Date,
        points: Vec<VolSurfacePoint>,
    ) -> VolResult<Self> {
        Self::from_points_with_method(pair, reference_date, points, InterpolationMethod::Linear)
    }

    /// Builds a surface from market quotes with the given interpolation.
    ///
    /// The quotes may arrive in any order but must cover every combination
    /// of the distinct strikes and tenors exactly once.
    ///
    /// # Errors
    ///
    /// - `EmptyPointSet` for no points
    /// - `InvalidValue` for a non-positive or non-finite strike or tenor, or
    ///   a non-finite vol
    /// - `NegativeRateOrVol` for a negative vol
    /// - `NonIncreasingPoints` for a repeated (strike, tenor) node
    /// - `IncompleteGrid` when a node is missing
    /// - `Math(NotImplemented)` for an unimplemented method
    pub fn from_points_with_method(
        pair: CurrencyPair,
        reference_date: Date,
        points: Vec<VolSurfacePoint>,
        method: InterpolationMethod,
    ) -> VolResult<Self> {
        if points.is_empty() {
            return Err(VolError::EmptyPointSet);
        }
        for point in &points {
            validate_axis("strike", point.strike)?;
            validate_axis("tenor", point.tenor)?;
            validate_vol("volatility", point.vol)?;
        }

        let strikes = distinct_sorted(points.iter().map(|p| p.strike));
        let tenors = distinct_sorted(points.iter().map(|p| p.tenor));
        let shape = (tenors.len(), strikes.len());
        let mut vols = Array2::from_elem(shape, f64::NAN);
        let mut filled = Array2::from_elem(shape, false);

        for point in &points {
            let node = (
                tenors.partition_point(|t| *t < point.tenor),
                strikes.partition_point(|s| *s < point.strike),
            );
            if filled[node] {
                return Err(VolError::NonIncreasingPoints {
                    strike: point.strike,
                    tenor: point.tenor,
                });
            }
            filled[node] = true;
            vols[node] = point.vol;
        }

        if let Some(((i, j), _)) = filled.indexed_iter().find(|(_, present)| !**present) {
            return Err(VolError::IncompleteGrid {
                strike: strikes[j],
                tenor: tenors[i],
            });
        }

        Self::from_grid(
            pair,
            reference_date,
            SurfaceKind::Interpolated,
            strikes,
            tenors,
            vols,
            method,
        )
    }

    /// Builds a surface with one volatility at every strike and tenor.
    ///
    /// # Errors
    ///
    /// - `InvalidValue` for a non-finite vol
    /// - `NegativeRateOrVol` for a negative vol
    /// - `ImplausibleVolUnits` for a vol above [`MAX_DECIMAL_VOL`]
    pub fn flat(pair: CurrencyPair, reference_date: Date, vol: f64) -> VolResult<Self> {
        validate_vol_level("flat volatility", vol)?;
        info!(%pair, %reference_date, vol, "built flat vol surface");
        Ok(Self {
            pair,
            reference_date,
            kind: SurfaceKind::Flat,
            data: SurfaceData::Flat(vol),
        })
    }

    /// Builds a surface from a validated rectangular grid.
    ///
    /// `vols` has one row per tenor and one column per strike. Both axes
    /// must be strictly increasing.
    pub(crate) fn from_grid(
        pair: CurrencyPair,
        reference_date: Date,
        kind: SurfaceKind,
        strikes: Vec<f64>,
        tenors: Vec<f64>,
        vols: Array2<f64>,
        method: InterpolationMethod,
    ) -> VolResult<Self> {
        let grid = Grid::new(strikes, tenors, vols, method)?;
        info!(
            %pair,
            %reference_date,
            %kind,
            strikes = grid.strikes.len(),
            tenors = grid.tenors.len(),
            %method,
            "built vol surface"
        );
        debug!(strikes = ?grid.strikes, tenors = ?grid.tenors, "vol surface axes");
        Ok(Self {
            pair,
            reference_date,
            kind,
            data: SurfaceData::Grid(grid),
        })
    }

    /// Returns the volatility at a strike and a tenor in years.
    ///
    /// # Errors
    ///
    /// `InvalidValue` for a non-finite strike, or a tenor that is negative or
    /// not finite.
    pub fn volatility(&self, strike: f64, tenor: f64) -> VolResult<f64> {
        if !strike.is_finite() {
            return Err(VolError::invalid_value(format!("strike {strike} is not finite")));
        }
        if !tenor.is_finite() || tenor < 0.0 {
            return Err(VolError::invalid_value(format!(
                "tenor must be a non-negative number of years, got {tenor}"
            )));
        }

        match &self.data {
            SurfaceData::Flat(vol) => Ok(*vol),
            SurfaceData::Grid(grid) => Ok(grid.volatility(strike, tenor)),
        }
    }

    /// Returns the volatility at a strike for an expiry date.
    ///
    /// The tenor is measured Act/365 from the reference date.
    ///
    /// # Errors
    ///
    /// `Core(InvalidDateRange)` for an expiry before the reference date.
    pub fn volatility_at(&self, strike: f64, expiry: Date) -> VolResult<f64> {
        let tenor = DayCountConvention::Act365.year_fraction_f64(self.reference_date, expiry)?;
        self.volatility(strike, tenor)
    }

    /// Returns the currency pair.
    #[must_use]
    pub fn pair(&self) -> CurrencyPair {
        self.pair
    }

    /// Returns the reference date.
    #[must_use]
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Returns how the surface was built.
    #[must_use]
    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    /// Returns the strike axis. Empty for a flat surface.
    #[must_use]
    pub fn strikes(&self) -> &[f64] {
        match &self.data {
            SurfaceData::Flat(_) => &[],
            SurfaceData::Grid(grid) => &grid.strikes,
        }
    }

    /// Returns the tenor axis in years. Empty for a flat surface.
    #[must_use]
    pub fn tenors(&self) -> &[f64] {
        match &self.data {
            SurfaceData::Flat(_) => &[],
            SurfaceData::Grid(grid) => &grid.tenors,
        }
    }

    /// Returns the vol grid, tenors by strikes. `None` for a flat surface.
    #[must_use]
    pub fn grid(&self) -> Option<&Array2<f64>> {
        match &self.data {
            SurfaceData::Flat(_) => None,
            SurfaceData::Grid(grid) => Some(&grid.vols),
        }
    }

    /// Returns the interpolation method. Linear for a flat surface.
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMethod {
        match &self.data {
            SurfaceData::Flat(_) => InterpolationMethod::Linear,
            SurfaceData::Grid(grid) => grid.method,
        }
    }
}

/// Builds a linearly interpolated surface from market quotes.
///
/// # Errors
///
/// See [`VolatilitySurface::from_points_with_method`].
pub fn create_interpolated_vol_surface(
    pair: CurrencyPair,
    reference_date: Date,
    points: Vec<VolSurfacePoint>,
) -> VolResult<VolatilitySurface> {
    VolatilitySurface::from_points(pair, reference_date, points)
}

/// Builds a surface with one volatility everywhere.
///
/// # Errors
///
/// See [`VolatilitySurface::flat`].
pub fn create_flat_vol_surface(
    pair: CurrencyPair,
    reference_date: Date,
    vol: f64,
) -> VolResult<VolatilitySurface> {
    VolatilitySurface::flat(pair, reference_date, vol)
}

/// Rejects a non-finite or negative vol.
pub(crate) fn validate_vol(what: &str, vol: f64) -> VolResult<()> {
    if !vol.is_finite() {
        return Err(VolError::invalid_value(format!("{what} {vol} is not finite")));
    }
    if vol < 0.0 {
        return Err(VolError::negative(what, vol));
    }
    Ok(())
}

/// Like [`validate_vol`], and also rejects percentage-style quotes.
pub(crate) fn validate_vol_level(what: &str, vol: f64) -> VolResult<()> {
    validate_vol(what, vol)?;
    if vol > MAX_DECIMAL_VOL {
        return Err(VolError::ImplausibleVolUnits { value: vol });
    }
    Ok(())
}

fn validate_axis(what: &str, value: f64) -> VolResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(VolError::invalid_value(format!(
            "{what} must be a positive number, got {value}"
        )))
    }
}

fn distinct_sorted(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use meridian_core::types::Currency;
    use meridian_core::CoreError;
    use meridian_math::MathError;

    fn eurusd() -> CurrencyPair {
        CurrencyPair::new(Currency::EUR, Currency::USD)
    }

    fn today() -> Date {
        Date::from_ymd(2025, 1, 2).unwrap()
    }

    fn quotes() -> Vec<VolSurfacePoint> {
        vec![
            (110.0, 1.0, 0.12).into(),
            (90.0, 0.5, 0.12).into(),
            (110.0, 0.5, 0.10).into(),
            (90.0, 1.0, 0.14).into(),
        ]
    }

    #[test]
    fn test_bilinear_interior() {
        let surface = create_interpolated_vol_surface(eurusd(), today(), quotes()).unwrap();
        assert_eq!(surface.kind(), SurfaceKind::Interpolated);
        assert_eq!(surface.strikes(), &[90.0, 110.0]);
        assert_eq!(surface.tenors(), &[0.5, 1.0]);

        assert_relative_eq!(surface.volatility(90.0, 0.5).unwrap(), 0.12);
        assert_relative_eq!(surface.volatility(100.0, 0.5).unwrap(), 0.11);
        assert_relative_eq!(surface.volatility(100.0, 0.75).unwrap(), 0.12);
        assert_relative_eq!(surface.volatility(95.0, 0.875).unwrap(), 0.13);
    }

    #[test]
    fn test_flat_extrapolation_on_both_axes() {
        let surface = create_interpolated_vol_surface(eurusd(), today(), quotes()).unwrap();
        assert_relative_eq!(surface.volatility(50.0, 0.5).unwrap(), 0.12);
        assert_relative_eq!(surface.volatility(200.0, 1.0).unwrap(), 0.12);
        assert_relative_eq!(surface.volatility(110.0, 0.0).unwrap(), 0.10);
        assert_relative_eq!(surface.volatility(90.0, 30.0).unwrap(), 0.14);
        assert_relative_eq!(surface.volatility(10.0, 0.01).unwrap(), 0.12);
    }

    #[test]
    fn test_grid_layout() {
        let surface = create_interpolated_vol_surface(eurusd(), today(), quotes()).unwrap();
        let grid = surface.grid().unwrap();
        assert_eq!(grid.dim(), (2, 2));
        assert_eq!(grid[[0, 1]], 0.10);
        assert_eq!(grid[[1, 0]], 0.14);
    }

    #[test]
    fn test_single_point_surface_is_constant() {
        let surface =
            create_interpolated_vol_surface(eurusd(), today(), vec![(100.0, 1.0, 0.2).into()])
                .unwrap();
        for (k, t) in [(50.0, 0.1), (100.0, 1.0), (150.0, 5.0)] {
            assert_relative_eq!(surface.volatility(k, t).unwrap(), 0.2);
        }
    }

    #[test]
    fn test_rejects_bad_points() {
        let err = create_interpolated_vol_surface(eurusd(), today(), Vec::new()).unwrap_err();
        assert_eq!(err, VolError::EmptyPointSet);

        let err = create_interpolated_vol_surface(
            eurusd(),
            today(),
            vec![(100.0, 1.0, -0.1).into()],
        )
        .unwrap_err();
        assert!(matches!(err, VolError::NegativeRateOrVol { .. }));

        let err = create_interpolated_vol_surface(
            eurusd(),
            today(),
            vec![(100.0, 1.0, f64::NAN).into()],
        )
        .unwrap_err();
        assert!(matches!(err, VolError::InvalidValue { .. }));

        let err = create_interpolated_vol_surface(
            eurusd(),
            today(),
            vec![(100.0, 0.0, 0.1).into()],
        )
        .unwrap_err();
        assert!(matches!(err, VolError::InvalidValue { .. }));
    }

    #[test]
    fn test_duplicate_node() {
        let mut points = quotes();
        points.push((90.0, 0.5, 0.13).into());
        let err = create_interpolated_vol_surface(eurusd(), today(), points).unwrap_err();
        assert_eq!(
            err,
            VolError::NonIncreasingPoints {
                strike: 90.0,
                tenor: 0.5
            }
        );
    }

    #[test]
    fn test_incomplete_grid() {
        let mut points = quotes();
        points.retain(|p| !(p.strike == 110.0 && p.tenor == 1.0));
        let err = create_interpolated_vol_surface(eurusd(), today(), points).unwrap_err();
        assert_eq!(
            err,
            VolError::IncompleteGrid {
                strike: 110.0,
                tenor: 1.0
            }
        );
    }

    #[test]
    fn test_unimplemented_method() {
        let err = VolatilitySurface::from_points_with_method(
            eurusd(),
            today(),
            quotes(),
            InterpolationMethod::LogLinear,
        )
        .unwrap_err();
        assert!(matches!(err, VolError::Math(MathError::NotImplemented { .. })));
    }

    #[test]
    fn test_spline_passes_through_nodes() {
        let points: Vec<VolSurfacePoint> = [80.0, 90.0, 100.0, 110.0, 120.0]
            .iter()
            .flat_map(|&k| {
                [0.25, 0.5, 1.0].into_iter().map(move |t| {
                    let m = (k - 100.0) / 100.0;
                    VolSurfacePoint::new(k, t, 0.10 + 0.5 * m * m + 0.01 * t)
                })
            })
            .collect();
        let surface = VolatilitySurface::from_points_with_method(
            eurusd(),
            today(),
            points.clone(),
            InterpolationMethod::CubicSpline,
        )
        .unwrap();

        assert_eq!(surface.interpolation(), InterpolationMethod::CubicSpline);
        for p in points {
            assert_relative_eq!(
                surface.volatility(p.strike, p.tenor).unwrap(),
                p.vol,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_spline_across_tenor_matches_column_spline() {
        let tenors = [0.25, 0.5, 1.0, 2.0];
        let points: Vec<VolSurfacePoint> = [90.0, 100.0, 110.0]
            .iter()
            .flat_map(|&k| {
                tenors.into_iter().map(move |t| {
                    VolSurfacePoint::new(k, t, 0.10 + 0.0004 * (k - 100.0).powi(2) / t.sqrt())
                })
            })
            .collect();
        let surface = VolatilitySurface::from_points_with_method(
            eurusd(),
            today(),
            points,
            InterpolationMethod::CubicSpline,
        )
        .unwrap();

        for strike in [85.0, 95.0, 104.0] {
            let column = tenors
                .iter()
                .map(|&t| surface.volatility(strike, t).unwrap())
                .collect();
            let expected = InterpolationMethod::CubicSpline
                .build(tenors.to_vec(), column)
                .unwrap();
            for tenor in [0.3, 0.75, 1.6, 2.5] {
                assert_relative_eq!(
                    surface.volatility(strike, tenor).unwrap(),
                    expected.interpolate(tenor).max(0.0),
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_linear_across_three_tenors() {
        let points: Vec<VolSurfacePoint> = [(0.5, 0.10), (1.0, 0.14), (2.0, 0.12)]
            .into_iter()
            .flat_map(|(t, v)| [90.0, 110.0].map(|k| VolSurfacePoint::new(k, t, v)))
            .collect();
        let surface = create_interpolated_vol_surface(eurusd(), today(), points).unwrap();

        assert_eq!(surface.volatility(100.0, 1.0).unwrap(), 0.14);
        assert_relative_eq!(surface.volatility(100.0, 0.75).unwrap(), 0.12, epsilon = 1e-15);
        assert_relative_eq!(surface.volatility(100.0, 1.5).unwrap(), 0.13, epsilon = 1e-15);
        assert_eq!(surface.volatility(100.0, 0.1).unwrap(), 0.10);
        assert_eq!(surface.volatility(100.0, 5.0).unwrap(), 0.12);
    }

    #[test]
    fn test_flat_surface() {
        let surface = create_flat_vol_surface(eurusd(), today(), 0.15).unwrap();
        assert_eq!(surface.kind(), SurfaceKind::Flat);
        assert!(surface.strikes().is_empty());
        assert!(surface.grid().is_none());
        assert_eq!(surface.volatility(1.0, 0.0).unwrap(), 0.15);
        assert_eq!(surface.volatility(1e6, 50.0).unwrap(), 0.15);
    }

    #[test]
    fn test_flat_surface_validation() {
        let err = create_flat_vol_surface(eurusd(), today(), -0.01).unwrap_err();
        assert!(matches!(err, VolError::NegativeRateOrVol { .. }));

        let err = create_flat_vol_surface(eurusd(), today(), 15.0).unwrap_err();
        assert_eq!(err, VolError::ImplausibleVolUnits { value: 15.0 });

        assert!(create_flat_vol_surface(eurusd(), today(), 0.0).is_ok());
        assert!(create_flat_vol_surface(eurusd(), today(), 10.0).is_ok());
    }

    #[test]
    fn test_query_validation() {
        let surface = create_flat_vol_surface(eurusd(), today(), 0.15).unwrap();
        assert!(matches!(
            surface.volatility(f64::NAN, 1.0),
            Err(VolError::InvalidValue { .. })
        ));
        assert!(matches!(
            surface.volatility(100.0, -0.5),
            Err(VolError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_volatility_at_date() {
        let surface = create_interpolated_vol_surface(eurusd(), today(), quotes()).unwrap();
        let expiry = today().add_days(365).unwrap();
        assert_relative_eq!(surface.volatility_at(90.0, expiry).unwrap(), 0.14);

        let err = surface.volatility_at(90.0, today().add_days(-1).unwrap()).unwrap_err();
        assert!(matches!(err, VolError::Core(CoreError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_accessors() {
        let surface = create_flat_vol_surface(eurusd(), today(), 0.1).unwrap();
        assert_eq!(surface.pair().code(), "EURUSD");
        assert_eq!(surface.reference_date(), today());
        assert_eq!(SurfaceKind::Smile.to_string(), "Smile");
    }
}
