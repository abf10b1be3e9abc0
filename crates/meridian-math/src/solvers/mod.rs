//! Root-finding algorithms.
//!
//! - [`bisection`]: simple and reliable bracketing method
//! - [`newton_bisection`]: one Newton step (numerical derivative) seeds a
//!   bracket that is widened geometrically, then bisection refines the root
//!
//! Both have hard iteration caps and never loop unbounded.
//!
//! # Example
//!
//! ```rust
//! use meridian_math::solvers::{newton_bisection, BracketConfig, SolverConfig};
//!
//! // Continuously compounded rate that gives a discount factor of 0.95 at 2Y
//! let f = |r: f64| (-r * 2.0).exp() - 0.95;
//!
//! let result = newton_bisection(f, 0.01, &BracketConfig::default(), &SolverConfig::default())
//!     .unwrap();
//! assert!((result.root - (-(0.95f64).ln() / 2.0)).abs() < 1e-10);
//! ```

mod bisection;
mod newton_bisection;

pub use bisection::bisection;
pub use newton_bisection::{newton_bisection, BracketConfig};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance on the residual and on the bracket half-width.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations performed.
    pub iterations: u32,
    /// Function value at the root.
    pub residual: f64,
}
