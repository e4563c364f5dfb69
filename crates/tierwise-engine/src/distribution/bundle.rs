//! Bundle-level distributions and their aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tierwise_core::{Date, DateRange, NumericRange, TierwiseError, TierwiseResult};

use super::{null_aware_total, AccrualPeriodDistribution, TieredAccrualPeriodDistribution};

/// The result of distributing productivity against one tier schedule.
///
/// Holds both the per-tier breakdown and the flattened converted amounts for
/// every accrual period of [`distribution_period`](Self::distribution_period).
/// A distribution without a conversion range is a placeholder for a period
/// no tier schedule covered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleDistribution {
    distribution_period: DateRange,
    conversion_range: Option<NumericRange>,
    months: Vec<Date>,
    tiered_distributions: Vec<TieredAccrualPeriodDistribution>,
    flattened_distributions: Vec<AccrualPeriodDistribution>,
}

impl BundleDistribution {
    /// Creates a bundle distribution.
    ///
    /// `months` is the month grid every month sequence inside was computed
    /// against.
    #[must_use]
    pub fn new(
        distribution_period: DateRange,
        conversion_range: Option<NumericRange>,
        months: Vec<Date>,
        tiered_distributions: Vec<TieredAccrualPeriodDistribution>,
        flattened_distributions: Vec<AccrualPeriodDistribution>,
    ) -> Self {
        Self {
            distribution_period,
            conversion_range,
            months,
            tiered_distributions,
            flattened_distributions,
        }
    }

    /// The date range this distribution covers.
    #[must_use]
    pub fn distribution_period(&self) -> &DateRange {
        &self.distribution_period
    }

    /// Smallest and largest conversion factor, `None` for placeholders.
    #[must_use]
    pub fn conversion_range(&self) -> Option<&NumericRange> {
        self.conversion_range.as_ref()
    }

    /// First day of every month in the grid.
    #[must_use]
    pub fn months(&self) -> &[Date] {
        &self.months
    }

    /// Per-tier breakdown for each accrual period.
    #[must_use]
    pub fn tiered_distributions(&self) -> &[TieredAccrualPeriodDistribution] {
        &self.tiered_distributions
    }

    /// Converted amounts for each accrual period with tiers summed.
    #[must_use]
    pub fn flattened_distributions(&self) -> &[AccrualPeriodDistribution] {
        &self.flattened_distributions
    }

    /// True for gap placeholders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversion_range.is_none()
    }

    /// Null-aware sum of every flattened distribution's total.
    #[must_use]
    pub fn total(&self) -> Option<Decimal> {
        null_aware_total(
            self.flattened_distributions
                .iter()
                .map(AccrualPeriodDistribution::total),
        )
    }

    /// Chains successive distributions so each one starts from where the
    /// previous one left off.
    ///
    /// The first distribution is returned unchanged. Every later one has the
    /// last flattened month values of its (already aggregated) predecessor
    /// folded into its flattened distributions, from the month of the first
    /// distribution's start onwards.
    ///
    /// # Errors
    ///
    /// Returns `TierwiseError::InvalidArgument` if `distributions` is empty or
    /// the distributions were computed against different month grids.
    pub fn aggregate_distributions(
        distributions: &[BundleDistribution],
    ) -> TierwiseResult<Vec<BundleDistribution>> {
        let Some((first, rest)) = distributions.split_first() else {
            return Err(TierwiseError::invalid_argument(
                "distributions",
                "at least one distribution is required",
            ));
        };

        if let Some(other) = rest.iter().find(|d| d.months != first.months) {
            return Err(TierwiseError::invalid_argument(
                "distributions",
                format!(
                    "distribution for {} uses a different month grid than {}",
                    other.distribution_period, first.distribution_period
                ),
            ));
        }

        let anchor = first.distribution_period.start();
        tracing::debug!(
            count = distributions.len(),
            anchor = %anchor,
            "Aggregating bundle distributions"
        );

        let mut aggregated = Vec::with_capacity(distributions.len());
        aggregated.push(first.clone());

        for distribution in rest {
            let floor = aggregated
                .last()
                .and_then(|previous: &BundleDistribution| previous.flattened_distributions.last())
                .map_or_else(
                    || vec![None; first.months.len()],
                    |last| last.month_distribution().to_vec(),
                );
            aggregated.push(distribution.apply_floor(anchor, &floor));
        }

        Ok(aggregated)
    }

    fn apply_floor(&self, anchor: Date, floor: &[Option<Decimal>]) -> Self {
        let flattened_distributions = self
            .flattened_distributions
            .iter()
            .map(|flattened| flattened.apply_floor(anchor, &self.months, floor))
            .collect();

        Self {
            flattened_distributions,
            ..self.clone()
        }
    }
}

/// Null-aware grand total over a set of distributions.
#[must_use]
pub fn period_total(distributions: &[BundleDistribution]) -> Option<Decimal> {
    null_aware_total(distributions.iter().map(BundleDistribution::total))
}
