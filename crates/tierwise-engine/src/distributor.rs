//! Tiered distribution of productivity over accrual periods.

use std::iter;

use rust_decimal::Decimal;

use tierwise_config::DistributionConfig;
use tierwise_core::{
    AccrualPeriodDecipher, Date, DateRange, NumericRange, TierwiseError, TierwiseResult,
};

use crate::distribution::{
    AccrualPeriodDistribution, BundleDistribution, TierDistribution,
    TieredAccrualPeriodDistribution,
};
use crate::parallel::maybe_parallel_map;
use crate::schedule::TierBundle;
use crate::values::{month_sums, ProductivityEntry};

// =============================================================================
// DISTRIBUTOR
// =============================================================================

/// Distributes dated productivity into tier bands.
///
/// Tier thresholds are stated per full year. For every accrual period they
/// are scaled by the fraction of a year's worth of report periods the
/// accrual period covers, so a quarter sees a quarter of each threshold.
/// Within a period, productivity accumulates month by month and each month's
/// increment is split across the tiers its running total passes through.
///
/// # Example
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use tierwise_core::prelude::*;
/// use tierwise_engine::{BundleDistributor, ProductivityEntry};
///
/// let window = DateRange::from_ymd((2019, 1, 1), (2019, 12, 31)).unwrap();
/// let decipher = AccrualPeriodDecipher::new(window, AccrualInterval::Quarterly).unwrap();
/// let distributor = BundleDistributor::new(&decipher);
///
/// let january = DateRange::from_ymd((2019, 1, 1), (2019, 1, 31)).unwrap();
/// let values = ProductivityEntry::daily(&january, dec!(100));
///
/// let result = distributor
///     .distribute(&values, &[dec!(2400)], &[dec!(1), dec!(2)], &window, false)
///     .unwrap();
///
/// // A quarter's share of the 2400 threshold is 600.
/// let first = &result.tiered_distributions()[0];
/// assert_eq!(first.tier_distributions()[0].total(), Some(dec!(600)));
/// assert_eq!(first.tier_distributions()[1].total(), Some(dec!(2500)));
/// ```
#[derive(Debug, Clone)]
pub struct BundleDistributor<'a> {
    decipher: &'a AccrualPeriodDecipher,
    config: DistributionConfig,
}

impl<'a> BundleDistributor<'a> {
    /// Creates a distributor over `decipher` with the default configuration,
    /// adopting the decipherer's interval.
    #[must_use]
    pub fn new(decipher: &'a AccrualPeriodDecipher) -> Self {
        Self {
            decipher,
            config: DistributionConfig::default().with_interval(decipher.interval()),
        }
    }

    /// Creates a builder.
    #[must_use]
    pub fn builder() -> BundleDistributorBuilder<'a> {
        BundleDistributorBuilder::new()
    }

    /// Sets the configuration.
    ///
    /// # Errors
    ///
    /// Returns `TierwiseError::InvalidArgument` if the configured interval
    /// differs from the decipherer's.
    pub fn with_config(mut self, config: DistributionConfig) -> TierwiseResult<Self> {
        check_interval(self.decipher, &config)?;
        self.config = config;
        Ok(self)
    }

    /// The decipherer periods and months come from.
    #[must_use]
    pub fn decipher(&self) -> &'a AccrualPeriodDecipher {
        self.decipher
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &DistributionConfig {
        &self.config
    }

    /// Distributes `values` over the accrual periods of `bundle_period`.
    ///
    /// `tier_boundaries` holds N thresholds separating N + 1 tiers and
    /// `conversion_factors` one factor per tier, lowest tier first.
    ///
    /// # Errors
    ///
    /// Returns `TierwiseError::TierScheduleMismatch` if there is not exactly
    /// one more factor than boundaries. Calendar errors from the decipherer
    /// are propagated.
    pub fn distribute(
        &self,
        values: &[ProductivityEntry],
        tier_boundaries: &[Decimal],
        conversion_factors: &[Decimal],
        bundle_period: &DateRange,
        cumulative: bool,
    ) -> TierwiseResult<BundleDistribution> {
        if conversion_factors.len() != tier_boundaries.len() + 1 {
            return Err(TierwiseError::tier_schedule_mismatch(
                tier_boundaries.len(),
                conversion_factors.len(),
            ));
        }

        let accrual_periods = self
            .decipher
            .decipher_accrual_periods(bundle_period, cumulative)?;
        let report_periods = self.decipher.report_accrual_periods()?;

        let mut boundaries = tier_boundaries.to_vec();
        boundaries.sort();

        tracing::debug!(
            period = %bundle_period,
            cumulative,
            accrual_periods = accrual_periods.len(),
            tiers = conversion_factors.len(),
            values = values.len(),
            "Distributing bundle"
        );

        let tiered_distributions = maybe_parallel_map(&accrual_periods, &self.config, |ap| {
            self.distribute_period(ap, values, &boundaries, conversion_factors, &report_periods)
        });

        let flattened_distributions = maybe_parallel_map(&tiered_distributions, &self.config, |t| {
            AccrualPeriodDistribution::new(*t.accrual_period(), t.converted_month_totals())
        });

        let conversion_range = conversion_factors
            .iter()
            .min()
            .zip(conversion_factors.iter().max())
            .map(|(min, max)| NumericRange::bounded(*min, *max));

        let distribution = BundleDistribution::new(
            *bundle_period,
            conversion_range,
            self.decipher.month_start_dates().to_vec(),
            tiered_distributions,
            flattened_distributions,
        );

        tracing::debug!(
            period = %bundle_period,
            total = ?distribution.total(),
            "Bundle distributed"
        );

        Ok(distribution)
    }

    /// Distributes `values` over `bundle_period` using the configured
    /// cumulative mode.
    pub fn distribute_configured(
        &self,
        values: &[ProductivityEntry],
        tier_boundaries: &[Decimal],
        conversion_factors: &[Decimal],
        bundle_period: &DateRange,
    ) -> TierwiseResult<BundleDistribution> {
        self.distribute(
            values,
            tier_boundaries,
            conversion_factors,
            bundle_period,
            self.config.cumulative,
        )
    }

    /// Distributes `values` once per bundle that overlaps the decipher
    /// window, each over its effective range clipped to the window.
    ///
    /// Results follow bundle order.
    pub fn distribute_bundles(
        &self,
        values: &[ProductivityEntry],
        bundles: &[TierBundle],
        cumulative: bool,
    ) -> TierwiseResult<Vec<BundleDistribution>> {
        let window = self.decipher.date_window();

        bundles
            .iter()
            .filter_map(|bundle| bundle.clip_to(window).map(|period| (bundle, period)))
            .map(|(bundle, period)| {
                self.distribute(
                    values,
                    &bundle.tier_boundaries(),
                    &bundle.conversion_factors(),
                    &period,
                    cumulative,
                )
            })
            .collect()
    }

    /// Pads `distributions` with empty placeholders wherever they leave the
    /// decipher window uncovered.
    ///
    /// The result is ordered by distribution period end. Without gaps the
    /// input comes back unchanged.
    pub fn fill_distribution_gaps(
        &self,
        distributions: Vec<BundleDistribution>,
        cumulative: bool,
    ) -> TierwiseResult<Vec<BundleDistribution>> {
        let covered: Vec<DateRange> = distributions
            .iter()
            .map(|d| *d.distribution_period())
            .collect();
        let gaps = self.decipher.decipher_gaps(&covered);

        if gaps.is_empty() {
            return Ok(distributions);
        }

        tracing::debug!(
            distributions = distributions.len(),
            gaps = gaps.len(),
            "Filling distribution gaps"
        );

        let placeholders = gaps
            .iter()
            .map(|gap| self.empty_distribution(gap, cumulative))
            .collect::<TierwiseResult<Vec<_>>>()?;

        let mut filled: Vec<BundleDistribution> =
            distributions.into_iter().chain(placeholders).collect();
        filled.sort_by_key(|d| d.distribution_period().end());
        Ok(filled)
    }

    /// A placeholder distribution for `period`: one unbounded tier without a
    /// factor per accrual period, and no data anywhere.
    pub fn empty_distribution(
        &self,
        period: &DateRange,
        cumulative: bool,
    ) -> TierwiseResult<BundleDistribution> {
        let month_count = self.decipher.month_count();
        let accrual_periods = self.decipher.decipher_accrual_periods(period, cumulative)?;

        let tiered_distributions = accrual_periods
            .iter()
            .map(|ap| {
                TieredAccrualPeriodDistribution::new(*ap, vec![TierDistribution::empty(month_count)])
            })
            .collect();
        let flattened_distributions = accrual_periods
            .iter()
            .map(|ap| AccrualPeriodDistribution::new(*ap, vec![None; month_count]))
            .collect();

        Ok(BundleDistribution::new(
            *period,
            None,
            self.decipher.month_start_dates().to_vec(),
            tiered_distributions,
            flattened_distributions,
        ))
    }

    /// Share of a full year's thresholds that applies to `accrual_period`.
    fn proration_ratio(&self, accrual_period: &DateRange, report_periods: &[DateRange]) -> Decimal {
        let dividend = Decimal::from(self.decipher.interval().dividend());

        report_periods
            .iter()
            .filter(|rap| rap.overlaps(accrual_period))
            .fold(Decimal::ZERO, |ratio, rap| {
                ratio
                    + Decimal::from(accrual_period.overlap_days(rap))
                        / Decimal::from(rap.length_days())
                        / dividend
            })
    }

    fn distribute_period(
        &self,
        accrual_period: &DateRange,
        values: &[ProductivityEntry],
        boundaries: &[Decimal],
        conversion_factors: &[Decimal],
        report_periods: &[DateRange],
    ) -> TieredAccrualPeriodDistribution {
        let ratio = self.proration_ratio(accrual_period, report_periods);
        tracing::trace!(period = %accrual_period, %ratio, "Prorating tier boundaries");

        let scaled: Vec<Decimal> = boundaries.iter().map(|b| b * ratio).collect();
        let lowers = iter::once(None).chain(scaled.iter().copied().map(Some));
        let uppers = scaled.iter().copied().map(Some).chain(iter::once(None));

        let sums = month_sums(values, accrual_period);

        let tier_distributions = lowers
            .zip(uppers)
            .zip(conversion_factors)
            .map(|((lower, upper), factor)| {
                let bounds = NumericRange::new(lower, upper);
                let months = self.project_months(&sums, &bounds);
                TierDistribution::new(bounds, Some(*factor), months)
            })
            .collect();

        TieredAccrualPeriodDistribution::new(*accrual_period, tier_distributions)
    }

    /// Runs the period's months through one tier and places the results on
    /// the decipher month grid. Months off the grid are dropped.
    fn project_months(
        &self,
        sums: &[(Date, Option<Decimal>)],
        bounds: &NumericRange,
    ) -> Vec<Option<Decimal>> {
        let mut months = vec![None; self.decipher.month_count()];

        let amounts = sums.iter().scan(Decimal::ZERO, |running, (month, sum)| {
            let amount = sum.map(|increment| {
                let before = *running;
                *running += increment;
                tier_amount(bounds, before, *running)
            });
            Some((*month, amount))
        });

        for (month, amount) in amounts {
            if let Some(slot) = self
                .decipher
                .month_index(month)
                .and_then(|index| months.get_mut(index))
            {
                *slot = amount;
            }
        }

        months
    }
}

fn check_interval(
    decipher: &AccrualPeriodDecipher,
    config: &DistributionConfig,
) -> TierwiseResult<()> {
    if config.interval == decipher.interval() {
        Ok(())
    } else {
        Err(TierwiseError::invalid_argument(
            "config",
            format!(
                "configured interval {} does not match decipher interval {}",
                config.interval,
                decipher.interval()
            ),
        ))
    }
}

/// Part of the move from `before` to `after` that lies inside `bounds`.
///
/// Negative when the running total falls through the tier.
fn tier_amount(bounds: &NumericRange, before: Decimal, after: Decimal) -> Decimal {
    let traversed = NumericRange::bounded(before.min(after), before.max(after));
    if !traversed.overlaps(bounds) {
        return Decimal::ZERO;
    }

    let top = bounds.upper().map_or(after, |upper| after.min(upper));
    let bottom = bounds.lower().map_or(before, |lower| before.max(lower));
    top - bottom
}

// =============================================================================
// BUILDER
// =============================================================================

/// Builder for [`BundleDistributor`].
#[derive(Debug, Clone, Default)]
pub struct BundleDistributorBuilder<'a> {
    decipher: Option<&'a AccrualPeriodDecipher>,
    config: Option<DistributionConfig>,
}

impl<'a> BundleDistributorBuilder<'a> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decipherer.
    #[must_use]
    pub fn decipher(mut self, decipher: &'a AccrualPeriodDecipher) -> Self {
        self.decipher = Some(decipher);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: DistributionConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the distributor.
    ///
    /// # Errors
    ///
    /// Returns `TierwiseError::InvalidArgument` if no decipherer was set or
    /// the configured interval differs from the decipherer's.
    pub fn build(self) -> TierwiseResult<BundleDistributor<'a>> {
        let decipher = self.decipher.ok_or_else(|| {
            TierwiseError::invalid_argument("decipher", "an accrual period decipher is required")
        })?;

        let distributor = BundleDistributor::new(decipher);
        match self.config {
            Some(config) => distributor.with_config(config),
            None => Ok(distributor),
        }
    }
}
