//! Accrual-period decipherment.
//!
//! An accrual period is the span over which productivity accumulates
//! against tier thresholds before resetting. [`AccrualPeriodDecipher`] turns
//! a reporting window and an [`AccrualInterval`](crate::types::AccrualInterval)
//! into those periods, the calendar months they touch, and any uncovered
//! gaps.

mod decipher;

pub use decipher::AccrualPeriodDecipher;
