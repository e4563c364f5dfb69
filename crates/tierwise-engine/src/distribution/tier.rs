//! Per-tier month distributions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tierwise_core::{DateRange, NumericRange};

use super::{null_aware_add, null_aware_total};

/// Month-by-month amounts that fell inside one tier band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDistribution {
    bounds: NumericRange,
    conversion_factor: Option<Decimal>,
    month_distribution: Vec<Option<Decimal>>,
}

impl TierDistribution {
    /// Creates a tier distribution.
    #[must_use]
    pub fn new(
        bounds: NumericRange,
        conversion_factor: Option<Decimal>,
        month_distribution: Vec<Option<Decimal>>,
    ) -> Self {
        Self {
            bounds,
            conversion_factor,
            month_distribution,
        }
    }

    /// A placeholder tier with no bounds, no factor and `month_count` empty months.
    #[must_use]
    pub fn empty(month_count: usize) -> Self {
        Self::new(NumericRange::unbounded(), None, vec![None; month_count])
    }

    /// The (prorated) tier band.
    #[must_use]
    pub fn bounds(&self) -> &NumericRange {
        &self.bounds
    }

    /// Multiplier applied to this tier's raw amounts.
    #[must_use]
    pub fn conversion_factor(&self) -> Option<Decimal> {
        self.conversion_factor
    }

    /// Raw amounts per month.
    #[must_use]
    pub fn month_distribution(&self) -> &[Option<Decimal>] {
        &self.month_distribution
    }

    /// Sum of the raw amounts, `None` if no month has data.
    #[must_use]
    pub fn total(&self) -> Option<Decimal> {
        null_aware_total(self.month_distribution.iter().copied())
    }

    /// Raw amounts multiplied by the conversion factor.
    ///
    /// A missing factor converts every month to `None`.
    #[must_use]
    pub fn converted_month_distribution(&self) -> Vec<Option<Decimal>> {
        self.month_distribution
            .iter()
            .map(|amount| Some((*amount)? * self.conversion_factor?))
            .collect()
    }

    /// Sum of the converted amounts, `None` if no month has data.
    #[must_use]
    pub fn converted_total(&self) -> Option<Decimal> {
        null_aware_total(self.converted_month_distribution())
    }
}

/// All tier distributions of one accrual period, ordered by ascending bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredAccrualPeriodDistribution {
    accrual_period: DateRange,
    tier_distributions: Vec<TierDistribution>,
}

impl TieredAccrualPeriodDistribution {
    /// Creates a tiered distribution.
    #[must_use]
    pub fn new(accrual_period: DateRange, tier_distributions: Vec<TierDistribution>) -> Self {
        Self {
            accrual_period,
            tier_distributions,
        }
    }

    /// The accrual period.
    #[must_use]
    pub fn accrual_period(&self) -> &DateRange {
        &self.accrual_period
    }

    /// Tier distributions, lowest tier first.
    #[must_use]
    pub fn tier_distributions(&self) -> &[TierDistribution] {
        &self.tier_distributions
    }

    /// Month-wise sum of every tier's converted amounts.
    ///
    /// A month is `None` only when every tier is `None` for it.
    #[must_use]
    pub fn converted_month_totals(&self) -> Vec<Option<Decimal>> {
        let mut tiers = self.tier_distributions.iter();
        let Some(first) = tiers.next() else {
            return Vec::new();
        };

        tiers.fold(first.converted_month_distribution(), |running, tier| {
            running
                .into_iter()
                .zip(tier.converted_month_distribution())
                .map(|(a, b)| null_aware_add(a, b))
                .collect()
        })
    }
}
