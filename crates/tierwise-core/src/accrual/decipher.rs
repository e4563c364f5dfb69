//! Accrual-period decipherer.

use serde::{Deserialize, Serialize};

use crate::error::TierwiseResult;
use crate::types::{AccrualInterval, Date, DateRange};

/// Slices a reporting window into interval-aligned accrual periods.
///
/// Period boundaries recur every [`AccrualInterval::months`] months from the
/// window start (`start + k * months` for any integer `k`), so any range
/// handed to [`decipher_accrual_periods`](Self::decipher_accrual_periods) is
/// split on the same grid no matter where it begins.
///
/// Everything here is derived once at construction; the decipherer is an
/// immutable value afterwards.
///
/// # Example
///
/// ```rust
/// use tierwise_core::{AccrualInterval, AccrualPeriodDecipher, Date, DateRange};
///
/// let window = DateRange::from_ymd((2019, 1, 17), (2020, 1, 16)).unwrap();
/// let decipher = AccrualPeriodDecipher::new(window, AccrualInterval::Monthly).unwrap();
///
/// let periods = decipher.decipher_accrual_periods(&window, false).unwrap();
/// assert_eq!(periods[0], DateRange::from_ymd((2019, 1, 17), (2019, 2, 16)).unwrap());
/// assert_eq!(decipher.month_start_dates().len(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualPeriodDecipher {
    date_window: DateRange,
    interval: AccrualInterval,
    reset_dates: Vec<Date>,
    month_start_dates: Vec<Date>,
}

impl AccrualPeriodDecipher {
    /// Creates a decipherer for `date_window` resetting every `interval`.
    ///
    /// # Errors
    ///
    /// Returns `TierwiseError::InvalidDate` if the month grid runs out of the
    /// representable calendar.
    pub fn new(date_window: DateRange, interval: AccrualInterval) -> TierwiseResult<Self> {
        let step = interval.months() as i32;

        let mut reset_dates = Vec::new();
        let mut k = 0;
        loop {
            let reset = date_window.start().add_months(k * step)?;
            if reset > date_window.end() {
                break;
            }
            reset_dates.push(reset);
            k += 1;
        }

        let mut month_start_dates = Vec::new();
        let last_month = date_window.end().start_of_month();
        let mut month = date_window.start().start_of_month();
        while month <= last_month {
            month_start_dates.push(month);
            month = month.add_months(1)?;
        }

        Ok(Self {
            date_window,
            interval,
            reset_dates,
            month_start_dates,
        })
    }

    /// The reporting window.
    #[must_use]
    pub fn date_window(&self) -> &DateRange {
        &self.date_window
    }

    /// The accrual interval.
    #[must_use]
    pub fn interval(&self) -> AccrualInterval {
        self.interval
    }

    /// Dates inside the window at which a new accrual period begins.
    ///
    /// The window start is always the first reset date.
    #[must_use]
    pub fn reset_dates(&self) -> &[Date] {
        &self.reset_dates
    }

    /// First day of every calendar month the window touches, ascending.
    #[must_use]
    pub fn month_start_dates(&self) -> &[Date] {
        &self.month_start_dates
    }

    /// Number of calendar months the window touches.
    #[must_use]
    pub fn month_count(&self) -> usize {
        self.month_start_dates.len()
    }

    /// Position of `date`'s calendar month within [`month_start_dates`](Self::month_start_dates).
    #[must_use]
    pub fn month_index(&self, date: Date) -> Option<usize> {
        let first = self.month_start_dates.first()?;
        let offset = usize::try_from(first.months_between(&date)).ok()?;
        (offset < self.month_start_dates.len()).then_some(offset)
    }

    /// Last day of the final full interval that begins inside the window.
    ///
    /// This is the last reset date plus one interval, minus a day. It may
    /// fall after the window end when the window stops mid-interval.
    pub fn last_full_interval_end(&self) -> TierwiseResult<Date> {
        let last_reset = self
            .reset_dates
            .last()
            .copied()
            .unwrap_or_else(|| self.date_window.start());
        Ok(last_reset.add_months(self.interval.months() as i32)? - 1)
    }

    /// Full-length, disjoint accrual periods from the window start through
    /// [`last_full_interval_end`](Self::last_full_interval_end).
    ///
    /// These are the reference periods tier thresholds are prorated against.
    pub fn report_accrual_periods(&self) -> TierwiseResult<Vec<DateRange>> {
        let reference = DateRange::new(self.date_window.start(), self.last_full_interval_end()?)?;
        self.decipher_accrual_periods(&reference, false)
    }

    /// Splits `window` into successive accrual periods on the reset grid.
    ///
    /// With `cumulative` set, every period starts at `window.start()` and only
    /// the end advances. The final period is clipped to `window.end()`.
    pub fn decipher_accrual_periods(
        &self,
        window: &DateRange,
        cumulative: bool,
    ) -> TierwiseResult<Vec<DateRange>> {
        let mut k = self.grid_index(window.start())?;
        let mut start = window.start();
        let mut periods = Vec::new();

        loop {
            let next_start = self.grid_date(k + 1)?;
            let end = (next_start - 1).min(window.end());
            let period_start = if cumulative { window.start() } else { start };
            periods.push(DateRange::spanning(period_start, end));

            if end >= window.end() {
                break;
            }
            start = next_start;
            k += 1;
        }

        Ok(periods)
    }

    /// Maximal sub-ranges of the window not covered by any of `existing`.
    ///
    /// `existing` may be unsorted; any part of it outside the window is
    /// ignored.
    #[must_use]
    pub fn decipher_gaps(&self, existing: &[DateRange]) -> Vec<DateRange> {
        let mut covered: Vec<DateRange> = existing
            .iter()
            .filter_map(|period| period.intersection(&self.date_window))
            .collect();
        covered.sort_by_key(DateRange::start);

        let window_end = self.date_window.end();
        let mut gaps = Vec::new();
        let mut cursor = Some(self.date_window.start());

        for period in covered {
            let Some(next_uncovered) = cursor else { break };
            if period.start() > next_uncovered {
                gaps.push(DateRange::spanning(next_uncovered, period.start() - 1));
            }
            if period.end() >= next_uncovered {
                cursor = (period.end() < window_end).then(|| period.end() + 1);
            }
        }

        if let Some(next_uncovered) = cursor {
            gaps.push(DateRange::spanning(next_uncovered, window_end));
        }

        gaps
    }

    /// Start of the `k`-th period on the reset grid (negative `k` lies before
    /// the window).
    fn grid_date(&self, k: i32) -> TierwiseResult<Date> {
        self.date_window
            .start()
            .add_months(k * self.interval.months() as i32)
    }

    /// The `k` whose grid period contains `date`.
    fn grid_index(&self, date: Date) -> TierwiseResult<i32> {
        let step = self.interval.months() as i32;
        let mut k = self.date_window.start().months_between(&date).div_euclid(step);
        while self.grid_date(k)? > date {
            k -= 1;
        }
        while self.grid_date(k + 1)? <= date {
            k += 1;
        }
        Ok(k)
    }
}
