//! # Meridian Core
//!
//! Core types and day count conventions for the Meridian term structure
//! library.
//!
//! - **Types**: `Date`, `Currency`, `CurrencyPair`, `Frequency`, `Tenor`
//! - **Day Count Conventions**: ACT/365, ACT/360, ACT/ACT, 30/360, BUS/252
//!   and a registry to look them up by name
//!
//! ## Example
//!
//! ```rust
//! use meridian_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let start = Date::from_ymd(2023, 1, 31).unwrap();
//! let end = Date::from_ymd(2023, 2, 28).unwrap();
//!
//! let dc = DayCountConvention::Thirty360.to_day_count();
//! assert_eq!(dc.year_fraction(start, end).unwrap(), dec!(28) / dec!(360));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::similar_names)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Currency, CurrencyPair, Date, Frequency, Tenor};
}

// Re-export commonly used types at crate root
pub use daycounts::{DayCount, DayCountConvention};
pub use error::{CoreError, CoreResult};
pub use types::{Currency, CurrencyPair, Date, Frequency, Tenor};
