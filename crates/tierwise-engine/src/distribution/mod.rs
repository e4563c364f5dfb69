//! Distribution result types.
//!
//! All of these are immutable values produced by
//! [`BundleDistributor`](crate::BundleDistributor) or by the aggregation
//! helpers. Month sequences always carry one entry per month of the
//! decipherer that produced them; `None` means "no data", which is kept
//! distinct from zero activity at every layer.

mod bundle;
mod period;
mod tier;

pub use bundle::{period_total, BundleDistribution};
pub use period::AccrualPeriodDistribution;
pub use tier::{TierDistribution, TieredAccrualPeriodDistribution};

use rust_decimal::Decimal;

/// Adds two optional amounts, treating a missing side as zero unless both
/// are missing.
pub(crate) fn null_aware_add(a: Option<Decimal>, b: Option<Decimal>) -> Option<Decimal> {
    match (a, b) {
        (None, None) => None,
        (a, b) => Some(a.unwrap_or_default() + b.unwrap_or_default()),
    }
}

/// Sum of the present amounts, or `None` when every amount is missing.
pub(crate) fn null_aware_total<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Option<Decimal>>,
{
    values.into_iter().fold(None, null_aware_add)
}
