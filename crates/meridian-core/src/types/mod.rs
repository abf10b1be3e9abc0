//! Domain types shared across the workspace.

mod currency;
mod date;
mod frequency;
mod tenor;

pub use currency::{Currency, CurrencyPair};
pub use date::{days_in_year, is_leap_year, Date};
pub use frequency::Frequency;
pub use tenor::{Tenor, TenorUnit};
