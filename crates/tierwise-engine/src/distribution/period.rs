//! Flattened per-period month distributions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tierwise_core::{Date, DateRange};

use super::{null_aware_add, null_aware_total};

/// Converted amounts of one accrual period with its tiers summed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualPeriodDistribution {
    accrual_period: DateRange,
    month_distribution: Vec<Option<Decimal>>,
}

impl AccrualPeriodDistribution {
    /// Creates a flattened distribution.
    #[must_use]
    pub fn new(accrual_period: DateRange, month_distribution: Vec<Option<Decimal>>) -> Self {
        Self {
            accrual_period,
            month_distribution,
        }
    }

    /// The accrual period.
    #[must_use]
    pub fn accrual_period(&self) -> &DateRange {
        &self.accrual_period
    }

    /// Converted amounts per month.
    #[must_use]
    pub fn month_distribution(&self) -> &[Option<Decimal>] {
        &self.month_distribution
    }

    /// Sum of the converted amounts, `None` if no month has data.
    #[must_use]
    pub fn total(&self) -> Option<Decimal> {
        null_aware_total(self.month_distribution.iter().copied())
    }

    /// Folds `floor` into every month at or after the month of `anchor`.
    ///
    /// `months` is the month grid both this distribution and `floor` were
    /// computed against. Earlier months are kept as they are. Folding is
    /// null-aware, so a month stays `None` only when both sides are `None`.
    #[must_use]
    pub fn apply_floor(&self, anchor: Date, months: &[Date], floor: &[Option<Decimal>]) -> Self {
        let anchor_month = anchor.start_of_month();

        let month_distribution = self
            .month_distribution
            .iter()
            .zip(months)
            .zip(floor)
            .map(|((own, month), carried)| {
                if *month >= anchor_month {
                    null_aware_add(*own, *carried)
                } else {
                    *own
                }
            })
            .collect();

        Self::new(self.accrual_period, month_distribution)
    }
}
