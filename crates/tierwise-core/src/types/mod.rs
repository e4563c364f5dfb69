//! Domain types for accrual calculations.
//!
//! - [`Date`]: Calendar date with clamping month arithmetic
//! - [`DateRange`]: Inclusive date interval
//! - [`NumericRange`]: Closed numeric interval with optional bounds
//! - [`AccrualInterval`]: Accrual reset frequency

mod date;
mod date_range;
mod interval;
mod numeric_range;

pub use date::Date;
pub use date_range::DateRange;
pub use interval::AccrualInterval;
pub use numeric_range::NumericRange;
