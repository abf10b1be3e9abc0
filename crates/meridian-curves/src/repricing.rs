//! Repricing validation for bootstrapped curves.
//!
//! After a bootstrap every input instrument is priced off the finished curve
//! and its model quote compared with the market quote. The comparison is
//! collected in a [`RepricingReport`].
//!
//! # Example
//!
//! ```rust,ignore
//! let result = CurveBootstrapper::new(Currency::USD, today)
//!     .add_instruments(instruments)
//!     .bootstrap_validated()?;
//!
//! if !result.is_valid() {
//!     for check in result.failed_checks() {
//!         eprintln!("{check}");
//!     }
//! }
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use crate::error::CurveResult;
use crate::instruments::CurveInstrument;
pub use crate::instruments::InstrumentType;
use crate::traits::Curve;

/// Default repricing tolerances per instrument type, in quote units.
pub mod tolerances {
    use super::InstrumentType;

    /// Deposit rate tolerance
    pub const DEPOSIT: f64 = 1e-9;

    /// Futures price tolerance (price points, 1e-6 is 1e-8 in rate)
    pub const FUTURE: f64 = 1e-6;

    /// Swap par rate tolerance
    pub const SWAP: f64 = 1e-8;

    /// Relaxed tolerance for testing
    pub const RELAXED: f64 = 1e-3;

    /// Returns the default tolerance for an instrument type.
    #[must_use]
    pub fn for_instrument(inst_type: InstrumentType) -> f64 {
        match inst_type {
            InstrumentType::Deposit => DEPOSIT,
            InstrumentType::Future => FUTURE,
            InstrumentType::Swap => SWAP,
        }
    }
}

/// Result of repricing a single instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct RepricingCheck {
    /// Instrument description.
    pub instrument_id: String,
    /// Instrument type.
    pub instrument_type: InstrumentType,
    /// Market quote.
    pub market_quote: f64,
    /// Quote implied by the curve.
    pub model_quote: f64,
    /// Absolute difference.
    pub error: f64,
    /// Tolerance applied.
    pub tolerance: f64,
    /// Whether `error <= tolerance`.
    pub passed: bool,
}

impl RepricingCheck {
    /// Creates a check from market and model quotes.
    #[must_use]
    pub fn new(
        instrument_id: String,
        instrument_type: InstrumentType,
        market_quote: f64,
        model_quote: f64,
        tolerance: f64,
    ) -> Self {
        let error = (model_quote - market_quote).abs();
        let passed = error <= tolerance;
        Self {
            instrument_id,
            instrument_type,
            market_quote,
            model_quote,
            error,
            tolerance,
            passed,
        }
    }

    /// Reprices `instrument` off `curve`.
    ///
    /// Uses `tolerance` when given, otherwise the type default from
    /// [`tolerances::for_instrument`].
    pub fn from_instrument(
        instrument: &dyn CurveInstrument,
        curve: &dyn Curve,
        tolerance: Option<f64>,
    ) -> CurveResult<Self> {
        let model_quote = instrument.model_quote(curve)?;
        let tolerance =
            tolerance.unwrap_or_else(|| tolerances::for_instrument(instrument.instrument_type()));
        Ok(Self::new(
            instrument.description(),
            instrument.instrument_type(),
            instrument.quote(),
            model_quote,
            tolerance,
        ))
    }
}

impl fmt::Display for RepricingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "✓" } else { "✗" };
        write!(
            f,
            "{} {} | Model: {:.8} | Error: {:.2e} (tol: {:.2e})",
            status, self.instrument_id, self.model_quote, self.error, self.tolerance
        )
    }
}

/// Summary of all repricing checks for a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct RepricingReport {
    checks: Vec<RepricingCheck>,
    max_error: f64,
    rms_error: f64,
    passed_count: usize,
}

impl RepricingReport {
    /// Creates a report from individual checks.
    #[must_use]
    pub fn new(checks: Vec<RepricingCheck>) -> Self {
        let max_error = checks.iter().map(|c| c.error).fold(0.0_f64, f64::max);
        let rms_error = if checks.is_empty() {
            0.0
        } else {
            let sum_sq: f64 = checks.iter().map(|c| c.error * c.error).sum();
            (sum_sq / checks.len() as f64).sqrt()
        };
        let passed_count = checks.iter().filter(|c| c.passed).count();

        Self {
            checks,
            max_error,
            rms_error,
            passed_count,
        }
    }

    /// True when every instrument passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.passed_count == self.checks.len()
    }

    /// Returns all checks.
    #[must_use]
    pub fn checks(&self) -> &[RepricingCheck] {
        &self.checks
    }

    /// Largest absolute error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    /// Root-mean-square error.
    #[must_use]
    pub fn rms_error(&self) -> f64 {
        self.rms_error
    }

    /// Number of passed checks.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.passed_count
    }

    /// Number of failed checks.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.checks.len() - self.passed_count
    }

    /// Returns the failed checks.
    #[must_use]
    pub fn failed_checks(&self) -> Vec<&RepricingCheck> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }

    /// Descriptions of the failed instruments.
    #[must_use]
    pub fn failed_instruments(&self) -> Vec<String> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.instrument_id.clone())
            .collect()
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Repricing Report")?;
        writeln!(f, "================")?;
        writeln!(f, "Status: {}", if self.is_valid() { "PASSED" } else { "FAILED" })?;
        writeln!(f, "Instruments: {}/{} passed", self.passed_count, self.checks.len())?;
        writeln!(f, "Max Error: {:.2e}", self.max_error)?;
        writeln!(f, "RMS Error: {:.2e}", self.rms_error)?;

        if !self.checks.is_empty() {
            writeln!(f)?;
            writeln!(f, "Details:")?;
            for check in &self.checks {
                writeln!(f, "  {check}")?;
            }
        }
        Ok(())
    }
}

/// A bootstrapped curve with its repricing report.
#[derive(Debug, Clone)]
pub struct BootstrapResult<C> {
    /// The curve.
    pub curve: C,
    /// Repricing of the input instruments.
    pub repricing_report: RepricingReport,
    /// Wall time spent building and validating.
    pub build_duration: Duration,
}

impl<C> BootstrapResult<C> {
    /// Creates a result.
    #[must_use]
    pub fn new(curve: C, repricing_report: RepricingReport, build_duration: Duration) -> Self {
        Self {
            curve,
            repricing_report,
            build_duration,
        }
    }

    /// True when every instrument repriced within tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.repricing_report.is_valid()
    }

    /// Largest repricing error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.repricing_report.max_error()
    }

    /// Failed checks.
    #[must_use]
    pub fn failed_checks(&self) -> Vec<&RepricingCheck> {
        self.repricing_report.failed_checks()
    }

    /// Returns the curve regardless of validity.
    #[must_use]
    pub fn into_curve(self) -> C {
        self.curve
    }
}

impl<C> fmt::Display for BootstrapResult<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bootstrap Result")?;
        writeln!(f, "Build time: {:?}", self.build_duration)?;
        writeln!(f)?;
        write!(f, "{}", self.repricing_report)
    }
}

/// Reprices every instrument off `curve`.
pub fn validate_curve_repricing<I: CurveInstrument>(
    curve: &dyn Curve,
    instruments: &[I],
    tolerance: Option<f64>,
) -> CurveResult<RepricingReport> {
    let checks = instruments
        .iter()
        .map(|inst| RepricingCheck::from_instrument(inst, curve, tolerance))
        .collect::<CurveResult<Vec<_>>>()?;
    Ok(RepricingReport::new(checks))
}

/// Wall-clock timer for curve builds.
#[derive(Debug)]
pub struct BuildTimer {
    start: Instant,
}

impl BuildTimer {
    /// Starts the timer.
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time since start.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::ZeroCurve;
    use crate::instruments::MarketInstrument;
    use meridian_core::types::{Currency, Date};

    #[test]
    fn test_repricing_check_passed() {
        let check = RepricingCheck::new(
            "Deposit 3M".to_string(),
            InstrumentType::Deposit,
            0.04,
            0.04 + 1e-10,
            tolerances::DEPOSIT,
        );
        assert!(check.passed);
        assert!(check.to_string().starts_with('✓'));
    }

    #[test]
    fn test_repricing_check_failed() {
        let check = RepricingCheck::new(
            "Swap 5Y".to_string(),
            InstrumentType::Swap,
            0.04,
            0.0401,
            tolerances::SWAP,
        );
        assert!(!check.passed);
        assert!((check.error - 1e-4).abs() < 1e-12);
    }

    #[test]
    fn test_report_statistics() {
        let report = RepricingReport::new(vec![
            RepricingCheck::new("A".into(), InstrumentType::Deposit, 0.0, 3e-4, 1e-3),
            RepricingCheck::new("B".into(), InstrumentType::Swap, 0.0, 4e-4, 1e-3),
            RepricingCheck::new("C".into(), InstrumentType::Swap, 0.0, 2e-3, 1e-3),
        ]);

        assert!(!report.is_valid());
        assert_eq!(report.passed_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.failed_instruments(), vec!["C".to_string()]);
        assert!((report.max_error() - 2e-3).abs() < 1e-15);
        let rms = ((9e-8 + 16e-8 + 4e-6) / 3.0_f64).sqrt();
        assert!((report.rms_error() - rms).abs() < 1e-15);
        assert!(report.to_string().contains("FAILED"));
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = RepricingReport::new(Vec::new());
        assert!(report.is_valid());
        assert_eq!(report.max_error(), 0.0);
    }

    #[test]
    fn test_validate_curve_repricing_against_flat_curve() {
        let today = Date::from_ymd(2025, 1, 2).unwrap();
        let curve = ZeroCurve::flat(Currency::USD, today, 0.04).unwrap();
        let instruments = vec![
            MarketInstrument::deposit(today.add_days(90).unwrap(), 0.04),
            MarketInstrument::swap(today.add_years(2).unwrap(), 0.041),
        ];

        let report = validate_curve_repricing(&curve, &instruments, Some(1e-2)).unwrap();
        assert_eq!(report.checks().len(), 2);
        assert!(report.is_valid());

        let strict = validate_curve_repricing(&curve, &instruments, None).unwrap();
        assert!(!strict.is_valid());
    }

    #[test]
    fn test_tolerance_lookup() {
        assert_eq!(tolerances::for_instrument(InstrumentType::Future), tolerances::FUTURE);
    }
}
