//! Curve implementations.
//!
//! - [`ZeroCurve`]: continuously compounded zero rates against time, either
//!   point-supplied or flat

mod zero;

pub use zero::{CurvePoint, ZeroCurve};
