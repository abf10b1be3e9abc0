//! Sequential bootstrap algorithm.
//!
//! Solves one continuously compounded zero rate per instrument maturity so
//! that the instrument reprices to its market quote, using the knots solved
//! before it.

use tracing::{debug, info, warn};

use meridian_core::types::{Currency, Date};
use meridian_math::interpolation::InterpolationMethod;
use meridian_math::solvers::{newton_bisection, SolverResult};
use meridian_math::MathError;

use crate::config::BootstrapConfig;
use crate::curves::{CurvePoint, ZeroCurve};
use crate::error::{CurveError, CurveResult};
use crate::instruments::{CurveInstrument, MarketInstrument};
use crate::repricing::{validate_curve_repricing, BootstrapResult, BuildTimer};

/// Sequential bootstrapper for zero curves.
///
/// 1. Sorts instruments by maturity, dropping exact duplicates.
/// 2. For each instrument, solves for the zero rate at its maturity with
///    [`newton_bisection`], pricing against a trial curve made of the knots
///    solved so far plus the trial knot.
/// 3. For non-local interpolation, repeats the solve for every knot against
///    the full curve until the largest knot change is below
///    `refinement_tolerance`.
///
/// # Example
///
/// ```rust
/// use meridian_core::types::{Currency, Date};
/// use meridian_curves::bootstrap::CurveBootstrapper;
/// use meridian_curves::instruments::MarketInstrument;
/// use meridian_math::interpolation::InterpolationMethod;
///
/// let today = Date::from_ymd(2025, 1, 2).unwrap();
/// let result = CurveBootstrapper::new(Currency::EUR, today)
///     .with_interpolation(InterpolationMethod::CubicSpline)
///     .add_instrument(MarketInstrument::deposit(today.add_months(6).unwrap(), 0.030))
///     .add_instrument(MarketInstrument::swap(today.add_years(2).unwrap(), 0.028))
///     .add_instrument(MarketInstrument::swap(today.add_years(10).unwrap(), 0.031))
///     .bootstrap_validated()
///     .unwrap();
///
/// assert!(result.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct CurveBootstrapper {
    currency: Currency,
    reference_date: Date,
    instruments: Vec<MarketInstrument>,
    config: BootstrapConfig,
}

impl CurveBootstrapper {
    /// Creates a bootstrapper with the default configuration.
    #[must_use]
    pub fn new(currency: Currency, reference_date: Date) -> Self {
        Self {
            currency,
            reference_date,
            instruments: Vec::new(),
            config: BootstrapConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the interpolation method.
    #[must_use]
    pub fn with_interpolation(mut self, method: InterpolationMethod) -> Self {
        self.config.interpolation = method;
        self
    }

    /// Adds an instrument.
    #[must_use]
    pub fn add_instrument(mut self, instrument: impl Into<MarketInstrument>) -> Self {
        self.instruments.push(instrument.into());
        self
    }

    /// Adds several instruments.
    #[must_use]
    pub fn add_instruments(mut self, instruments: impl IntoIterator<Item = MarketInstrument>) -> Self {
        self.instruments.extend(instruments);
        self
    }

    /// Returns the instruments in insertion order.
    #[must_use]
    pub fn instruments(&self) -> &[MarketInstrument] {
        &self.instruments
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Builds the curve.
    ///
    /// # Errors
    ///
    /// - `Config` for an invalid configuration
    /// - `EmptyInstrumentSet` with no instruments
    /// - `InvalidInstrument` for a bad quote or a maturity not after the
    ///   reference date
    /// - `UnsortableInstrument` for equal maturities with different quotes
    /// - `BootstrapNonConvergence` if a knot cannot be solved or refinement
    ///   does not settle within `max_passes`
    pub fn bootstrap(&self) -> CurveResult<ZeroCurve> {
        self.config.validate()?;
        let instruments = self.prepare_instruments()?;
        let times = self.knot_times(&instruments)?;

        let mut knots: Vec<CurvePoint> = Vec::with_capacity(instruments.len());
        for (instrument, &t) in instruments.iter().zip(&times) {
            let guess = knots.last().map_or_else(|| instrument.rate_guess(), |p| p.rate);
            knots.push(CurvePoint::new(t, guess));

            let k = knots.len() - 1;
            let solved = self.solve_knot(instrument, &knots, k)?;
            knots[k].rate = solved.root;

            debug!(
                instrument = %instrument.description(),
                time = t,
                rate = solved.root,
                iterations = solved.iterations,
                "solved curve knot"
            );
        }

        let mut passes = 1;
        if self.config.interpolation.is_non_local() {
            let mut max_change = f64::INFINITY;
            while max_change >= self.config.refinement_tolerance {
                if passes >= self.config.max_passes {
                    warn!(
                        currency = %self.currency,
                        passes,
                        max_change,
                        "curve refinement did not converge"
                    );
                    return Err(CurveError::non_convergence(
                        format!("{} curve refinement", self.currency),
                        passes,
                        max_change,
                    ));
                }
                max_change = self.refine(&instruments, &mut knots)?;
                passes += 1;
                debug!(pass = passes, max_change, "refinement pass");
            }
        }

        info!(
            currency = %self.currency,
            knots = knots.len(),
            passes,
            interpolation = %self.config.interpolation,
            "bootstrapped zero curve"
        );

        ZeroCurve::with_day_count(
            self.currency,
            self.reference_date,
            knots,
            self.config.interpolation,
            self.config.day_count,
        )
    }

    /// Builds the curve and reprices every instrument off it.
    ///
    /// Instruments missing their tolerance are logged and reported, not
    /// rejected.
    ///
    /// # Errors
    ///
    /// Same as [`bootstrap`](Self::bootstrap).
    pub fn bootstrap_validated(&self) -> CurveResult<BootstrapResult<ZeroCurve>> {
        let timer = BuildTimer::start();
        let curve = self.bootstrap()?;
        let report =
            validate_curve_repricing(&curve, &self.instruments, self.config.repricing_tolerance)?;

        for check in report.failed_checks() {
            warn!(
                instrument = %check.instrument_id,
                market = check.market_quote,
                model = check.model_quote,
                error = check.error,
                tolerance = check.tolerance,
                "instrument missed repricing tolerance"
            );
        }

        Ok(BootstrapResult::new(curve, report, timer.elapsed()))
    }

    /// Builds the curve, failing if any instrument misses its tolerance.
    ///
    /// # Errors
    ///
    /// `RepricingFailed` in addition to the errors of
    /// [`bootstrap`](Self::bootstrap).
    pub fn bootstrap_validated_strict(&self) -> CurveResult<ZeroCurve> {
        let result = self.bootstrap_validated()?;
        if result.is_valid() {
            return Ok(result.into_curve());
        }

        let report = &result.repricing_report;
        Err(CurveError::repricing_failed(
            report.failed_count(),
            report.max_error(),
            &report.failed_instruments(),
        ))
    }

    /// Validates, sorts and de-duplicates the instruments.
    ///
    /// Only identical instruments are merged. Any other pair sharing a
    /// maturity would need two different rates at one knot.
    fn prepare_instruments(&self) -> CurveResult<Vec<MarketInstrument>> {
        if self.instruments.is_empty() {
            return Err(CurveError::EmptyInstrumentSet);
        }
        for instrument in &self.instruments {
            instrument.validate(self.reference_date)?;
        }

        let mut sorted = self.instruments.clone();
        sorted.sort_by_key(CurveInstrument::maturity);

        let mut unique: Vec<MarketInstrument> = Vec::with_capacity(sorted.len());
        for instrument in sorted {
            if let Some(previous) = unique.last() {
                if previous.maturity() == instrument.maturity() {
                    if previous == &instrument {
                        debug!(
                            instrument = %instrument.description(),
                            "dropping duplicate instrument"
                        );
                        continue;
                    }
                    return Err(CurveError::UnsortableInstrument {
                        maturity: instrument.maturity(),
                        first: previous.description(),
                        second: instrument.description(),
                    });
                }
            }
            unique.push(instrument);
        }
        Ok(unique)
    }

    /// Maps each maturity to the curve time axis.
    fn knot_times(&self, instruments: &[MarketInstrument]) -> CurveResult<Vec<f64>> {
        let mut times = Vec::with_capacity(instruments.len());
        let mut previous = 0.0;
        for instrument in instruments {
            let t = self
                .config
                .day_count
                .year_fraction_f64(self.reference_date, instrument.maturity())?;
            if t <= previous {
                return Err(CurveError::invalid_instrument(format!(
                    "{}: maturity maps to curve time {t}, not after the previous knot at {previous} under {}",
                    instrument.description(),
                    self.config.day_count
                )));
            }
            times.push(t);
            previous = t;
        }
        Ok(times)
    }

    /// Re-solves every knot against the full curve, returning the largest
    /// change.
    fn refine(&self, instruments: &[MarketInstrument], knots: &mut [CurvePoint]) -> CurveResult<f64> {
        let mut max_change = 0.0_f64;
        for (k, instrument) in instruments.iter().enumerate() {
            let solved = self.solve_knot(instrument, knots, k)?;
            max_change = max_change.max((solved.root - knots[k].rate).abs());
            knots[k].rate = solved.root;
        }
        Ok(max_change)
    }

    /// Solves for the rate of knot `k` so that `instrument` reprices,
    /// starting from the rate currently stored there.
    fn solve_knot(
        &self,
        instrument: &MarketInstrument,
        knots: &[CurvePoint],
        k: usize,
    ) -> CurveResult<SolverResult> {
        let objective = |rate: f64| {
            let mut trial = knots.to_vec();
            trial[k].rate = rate;
            self.trial_curve(trial)
                .and_then(|curve| instrument.model_quote(&curve))
                .map_or(f64::NAN, |model| model - instrument.quote())
        };

        newton_bisection(
            objective,
            knots[k].rate,
            &self.config.bracket_config(),
            &self.config.solver_config(),
        )
        .map_err(|err| self.non_convergence(instrument, &err))
    }

    fn trial_curve(&self, knots: Vec<CurvePoint>) -> CurveResult<ZeroCurve> {
        ZeroCurve::with_day_count(
            self.currency,
            self.reference_date,
            knots,
            self.config.interpolation,
            self.config.day_count,
        )
    }

    fn non_convergence(&self, instrument: &MarketInstrument, err: &MathError) -> CurveError {
        let (iterations, residual) = match *err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => (iterations, residual),
            MathError::InvalidBracket { fa, fb, .. } => {
                (self.config.max_bracket_expansions, fa.abs().min(fb.abs()))
            }
            _ => (0, f64::NAN),
        };
        warn!(
            instrument = %instrument.description(),
            iterations,
            residual,
            error = %err,
            "failed to solve curve knot"
        );
        CurveError::non_convergence(instrument.description(), iterations, residual)
    }
}
