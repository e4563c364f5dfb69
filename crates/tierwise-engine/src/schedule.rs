//! Tier schedules as they are configured per person.
//!
//! A [`TierBundle`] is a set of [`Tier`]s valid over an effective date range.
//! The distributor works on plain boundary and factor lists; the bundle
//! derives both from its tiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tierwise_core::{Date, DateRange};

/// One tier of a schedule.
///
/// The tier without a lower bound is the base tier, starting at minus
/// infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Productivity level at which this tier begins.
    pub lower_bound: Option<Decimal>,
    /// Multiplier applied to productivity inside this tier.
    pub conversion_factor: Decimal,
}

impl Tier {
    /// Creates a tier.
    #[must_use]
    pub fn new(lower_bound: Option<Decimal>, conversion_factor: Decimal) -> Self {
        Self {
            lower_bound,
            conversion_factor,
        }
    }

    /// Creates the base tier.
    #[must_use]
    pub fn base(conversion_factor: Decimal) -> Self {
        Self::new(None, conversion_factor)
    }
}

/// A tier schedule with its effective date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBundle {
    /// First day the schedule applies.
    pub effective_from: Date,
    /// Last day the schedule applies, open-ended when `None`.
    #[serde(default)]
    pub effective_to: Option<Date>,
    /// Tiers in any order.
    #[serde(default)]
    pub tiers: Vec<Tier>,
}

impl TierBundle {
    /// Creates a bundle without tiers.
    #[must_use]
    pub fn new(effective_from: Date, effective_to: Option<Date>) -> Self {
        Self {
            effective_from,
            effective_to,
            tiers: Vec::new(),
        }
    }

    /// Adds a tier.
    #[must_use]
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tiers.push(tier);
        self
    }

    fn ordered_tiers(&self) -> Vec<&Tier> {
        let mut tiers: Vec<&Tier> = self.tiers.iter().collect();
        // `None < Some(_)`, so the base tier sorts first.
        tiers.sort_by_key(|tier| tier.lower_bound);
        tiers
    }

    /// Thresholds separating the tiers, ascending.
    ///
    /// The lowest tier contributes no threshold; any further tier missing a
    /// lower bound is treated as starting at zero.
    #[must_use]
    pub fn tier_boundaries(&self) -> Vec<Decimal> {
        self.ordered_tiers()
            .into_iter()
            .skip(1)
            .map(|tier| tier.lower_bound.unwrap_or_default())
            .collect()
    }

    /// Conversion factors, lowest tier first.
    #[must_use]
    pub fn conversion_factors(&self) -> Vec<Decimal> {
        self.ordered_tiers()
            .into_iter()
            .map(|tier| tier.conversion_factor)
            .collect()
    }

    /// True if any tier has an explicit lower bound.
    #[must_use]
    pub fn has_bounded_tier(&self) -> bool {
        self.tiers.iter().any(|tier| tier.lower_bound.is_some())
    }

    /// The part of the effective range inside `window`.
    ///
    /// An open-ended bundle runs to the window end.
    #[must_use]
    pub fn clip_to(&self, window: &DateRange) -> Option<DateRange> {
        let end = self.effective_to.unwrap_or_else(|| window.end());
        let effective = DateRange::new(self.effective_from, end).ok()?;
        effective.intersection(window)
    }
}

/// Splits every bundle's effective range into month-bounded segments.
///
/// Bundles are taken in effective-from order. An open-ended bundle runs to
/// the day before the next bundle begins, or to `as_of` when it is the last.
/// Segments are inclusive; a bundle ending before it starts yields nothing.
#[must_use]
pub fn month_segments(bundles: &[TierBundle], as_of: Date) -> Vec<DateRange> {
    let mut ordered: Vec<&TierBundle> = bundles.iter().collect();
    ordered.sort_by_key(|bundle| bundle.effective_from);

    let mut segments = Vec::new();
    for (i, bundle) in ordered.iter().enumerate() {
        let end = bundle.effective_to.unwrap_or_else(|| {
            ordered
                .get(i + 1)
                .map_or(as_of, |next| next.effective_from - 1)
        });

        let mut start = bundle.effective_from;
        while start <= end {
            let month_end = start.end_of_month();
            let segment_end = end.min(month_end);
            if let Ok(segment) = DateRange::new(start, segment_end) {
                segments.push(segment);
            }
            start = month_end + 1;
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn three_tier_bundle() -> TierBundle {
        TierBundle::new(date(2019, 1, 1), Some(date(2019, 12, 31)))
            .with_tier(Tier::new(Some(dec!(7200)), dec!(50)))
            .with_tier(Tier::base(dec!(10)))
            .with_tier(Tier::new(Some(dec!(2400)), dec!(30)))
    }

    #[test]
    fn test_boundaries_and_factors_follow_lower_bound_order() {
        let bundle = three_tier_bundle();
        assert_eq!(bundle.tier_boundaries(), vec![dec!(2400), dec!(7200)]);
        assert_eq!(bundle.conversion_factors(), vec![dec!(10), dec!(30), dec!(50)]);
        assert!(bundle.has_bounded_tier());
    }

    #[test]
    fn test_single_base_tier() {
        let bundle = TierBundle::new(date(2019, 1, 1), None).with_tier(Tier::base(dec!(10)));
        assert!(bundle.tier_boundaries().is_empty());
        assert_eq!(bundle.conversion_factors(), vec![dec!(10)]);
        assert!(!bundle.has_bounded_tier());
    }

    #[test]
    fn test_clip_to() {
        let window = DateRange::from_ymd((2019, 3, 1), (2019, 6, 30)).unwrap();

        let open = TierBundle::new(date(2019, 1, 1), None);
        assert_eq!(open.clip_to(&window), Some(window));

        let inside = TierBundle::new(date(2019, 4, 1), Some(date(2019, 4, 30)));
        assert_eq!(
            inside.clip_to(&window),
            Some(DateRange::from_ymd((2019, 4, 1), (2019, 4, 30)).unwrap())
        );

        let before = TierBundle::new(date(2018, 1, 1), Some(date(2018, 12, 31)));
        assert_eq!(before.clip_to(&window), None);
    }

    #[test]
    fn test_month_segments_open_ended_runs_to_next_bundle() {
        let bundles = vec![
            TierBundle::new(date(2019, 3, 1), None),
            TierBundle::new(date(2019, 1, 15), None),
        ];
        let segments = month_segments(&bundles, date(2019, 3, 10));

        assert_eq!(
            segments,
            vec![
                DateRange::from_ymd((2019, 1, 15), (2019, 1, 31)).unwrap(),
                DateRange::from_ymd((2019, 2, 1), (2019, 2, 28)).unwrap(),
                DateRange::from_ymd((2019, 3, 1), (2019, 3, 10)).unwrap(),
            ]
        );
    }

    #[test]
    fn test_month_segments_closed_bundle() {
        let bundles = vec![TierBundle::new(date(2019, 11, 20), Some(date(2020, 1, 1)))];
        let segments = month_segments(&bundles, date(2030, 1, 1));

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2], DateRange::from_ymd((2020, 1, 1), (2020, 1, 1)).unwrap());
    }
}
