//! Newton-seeded bisection.

use tracing::trace;

use crate::error::{MathError, MathResult};
use crate::solvers::{bisection, SolverConfig, SolverResult};

/// Bracket search parameters for [`newton_bisection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketConfig {
    /// Smallest half-width of the initial bracket around the Newton estimate.
    pub initial_width: f64,
    /// Factor applied to the half-width on each expansion.
    pub growth: f64,
    /// Maximum number of expansions before giving up.
    pub max_expansions: u32,
    /// Step used for the central-difference derivative.
    pub derivative_step: f64,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            initial_width: 1e-4,
            growth: 2.0,
            max_expansions: 40,
            derivative_step: 1e-7,
        }
    }
}

/// Finds a root starting from an initial guess.
///
/// 1. Takes one Newton step from `initial_guess` using a central-difference
///    derivative (skipped when the derivative is zero or not finite).
/// 2. Centres a bracket on the Newton estimate with half-width
///    `max(|step|, initial_width)` and multiplies the half-width by `growth`
///    until the end points change sign, at most `max_expansions` times.
/// 3. Refines the root by [`bisection`] within `config`.
///
/// # Errors
///
/// - `InvalidBracket` if no sign change is found
/// - `ConvergenceFailed` if bisection exhausts its iterations
pub fn newton_bisection<F>(
    f: F,
    initial_guess: f64,
    bracket: &BracketConfig,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let f0 = f(initial_guess);
    if !f0.is_finite() {
        return Err(MathError::invalid_input(format!(
            "objective is not finite at the initial guess {initial_guess}"
        )));
    }
    if f0.abs() < config.tolerance {
        return Ok(SolverResult {
            root: initial_guess,
            iterations: 0,
            residual: f0,
        });
    }

    let h = bracket.derivative_step;
    let slope = (f(initial_guess + h) - f(initial_guess - h)) / (2.0 * h);
    let step = if slope.is_finite() && slope.abs() > f64::EPSILON {
        -f0 / slope
    } else {
        0.0
    };
    let center = if step.is_finite() { initial_guess + step } else { initial_guess };

    let f_center = f(center);
    if f_center.abs() < config.tolerance {
        return Ok(SolverResult {
            root: center,
            iterations: 1,
            residual: f_center,
        });
    }

    let mut width = step.abs().max(bracket.initial_width);
    let mut lo = center - width;
    let mut hi = center + width;
    let mut f_lo = f(lo);
    let mut f_hi = f(hi);

    let mut expansions = 0;
    while !brackets_root(f_lo, f_hi) {
        if expansions >= bracket.max_expansions {
            return Err(MathError::InvalidBracket {
                a: lo,
                b: hi,
                fa: f_lo,
                fb: f_hi,
            });
        }
        width *= bracket.growth;
        lo = center - width;
        hi = center + width;
        f_lo = f(lo);
        f_hi = f(hi);
        expansions += 1;
        trace!(lo, hi, expansions, "widened root bracket");
    }

    let result = bisection(&f, lo, hi, config)?;
    Ok(SolverResult {
        iterations: result.iterations + 1,
        ..result
    })
}

fn brackets_root(fa: f64, fb: f64) -> bool {
    fa.is_finite() && fb.is_finite() && fa * fb <= 0.0
}
