//! Bootstrap configuration.
//!
//! [`BootstrapConfig`] is plain data with serde support so it can be loaded
//! from JSON. Missing fields take their defaults.
//!
//! ```rust
//! use meridian_curves::config::BootstrapConfig;
//! use meridian_math::interpolation::InterpolationMethod;
//!
//! let config = BootstrapConfig::from_json(r#"{ "interpolation": "CubicSpline" }"#).unwrap();
//! assert_eq!(config.interpolation, InterpolationMethod::CubicSpline);
//! assert_eq!(config.max_iterations, 100);
//! ```

use serde::{Deserialize, Serialize};

use meridian_core::daycounts::DayCountConvention;
use meridian_math::interpolation::InterpolationMethod;
use meridian_math::solvers::{BracketConfig, SolverConfig};

use crate::error::{CurveError, CurveResult};

/// Settings for [`CurveBootstrapper`](crate::bootstrap::CurveBootstrapper).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Interpolation of zero rates between knots.
    pub interpolation: InterpolationMethod,
    /// Day count of the curve time axis.
    pub day_count: DayCountConvention,
    /// Absolute tolerance of the per-knot root search.
    pub tolerance: f64,
    /// Bisection iteration cap per knot.
    pub max_iterations: u32,
    /// Bracket expansions allowed before a knot is declared unsolvable.
    pub max_bracket_expansions: u32,
    /// Largest knot change accepted as converged in a refinement pass.
    pub refinement_tolerance: f64,
    /// Cap on sequential plus refinement passes.
    pub max_passes: u32,
    /// Repricing tolerance overriding the per-type defaults.
    pub repricing_tolerance: Option<f64>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationMethod::Linear,
            day_count: DayCountConvention::Act365,
            tolerance: 1e-12,
            max_iterations: 100,
            max_bracket_expansions: 40,
            refinement_tolerance: 1e-10,
            max_passes: 50,
            repricing_tolerance: None,
        }
    }
}

impl BootstrapConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Config` for malformed JSON or invalid values.
    pub fn from_json(json: &str) -> CurveResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CurveError::config(format!("malformed bootstrap config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field for a usable value.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Config` naming the first offending field.
    pub fn validate(&self) -> CurveResult<()> {
        if !self.interpolation.is_implemented() {
            return Err(CurveError::config(format!(
                "interpolation '{}' is not implemented",
                self.interpolation
            )));
        }
        ensure_positive("tolerance", self.tolerance)?;
        ensure_positive("refinement_tolerance", self.refinement_tolerance)?;
        if let Some(tolerance) = self.repricing_tolerance {
            ensure_positive("repricing_tolerance", tolerance)?;
        }
        if self.max_iterations == 0 {
            return Err(CurveError::config("max_iterations must be at least 1"));
        }
        if self.max_passes == 0 {
            return Err(CurveError::config("max_passes must be at least 1"));
        }
        Ok(())
    }

    /// Solver settings for a single knot.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }

    /// Bracket search settings for a single knot.
    #[must_use]
    pub fn bracket_config(&self) -> BracketConfig {
        BracketConfig {
            max_expansions: self.max_bracket_expansions,
            ..BracketConfig::default()
        }
    }
}

fn ensure_positive(field: &str, value: f64) -> CurveResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CurveError::config(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = BootstrapConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.interpolation, InterpolationMethod::Linear);
        assert_eq!(config.day_count, DayCountConvention::Act365);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config =
            BootstrapConfig::from_json(r#"{ "day_count": "ACT/360", "max_passes": 5 }"#).unwrap();
        assert_eq!(config.day_count, DayCountConvention::Act360);
        assert_eq!(config.max_passes, 5);
        assert_eq!(config.tolerance, 1e-12);
    }

    #[test]
    fn test_rejects_invalid_values() {
        for json in [
            r#"{ "tolerance": 0.0 }"#,
            r#"{ "tolerance": -1e-8 }"#,
            r#"{ "max_iterations": 0 }"#,
            r#"{ "max_passes": 0 }"#,
            r#"{ "repricing_tolerance": -1.0 }"#,
            r#"{ "interpolation": "LogLinear" }"#,
            r#"{ "day_count": "ACT/999" }"#,
            "not json",
        ] {
            let err = BootstrapConfig::from_json(json).unwrap_err();
            assert!(matches!(err, CurveError::Config { .. }), "{json}: {err}");
        }
    }

    #[test]
    fn test_roundtrip_json() {
        let config = BootstrapConfig {
            interpolation: InterpolationMethod::CubicSpline,
            repricing_tolerance: Some(1e-7),
            ..BootstrapConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(BootstrapConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_bracket_config_carries_expansions() {
        let config = BootstrapConfig {
            max_bracket_expansions: 7,
            ..BootstrapConfig::default()
        };
        assert_eq!(config.bracket_config().max_expansions, 7);
        assert_eq!(config.solver_config().max_iterations, 100);
    }
}
