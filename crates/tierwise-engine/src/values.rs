//! Dated productivity input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tierwise_core::{Date, DateRange};

/// One recorded amount of productivity.
///
/// A date may carry several entries. An entry without an amount still marks
/// its month as having data; it counts as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductivityEntry {
    /// Day the productivity was recorded.
    pub date: Date,
    /// Recorded amount, if any.
    pub amount: Option<Decimal>,
}

impl ProductivityEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(date: Date, amount: Option<Decimal>) -> Self {
        Self { date, amount }
    }

    /// One entry of `amount` on every day of `range`.
    #[must_use]
    pub fn daily(range: &DateRange, amount: Decimal) -> Vec<Self> {
        (0..range.length_days())
            .map(|offset| Self::new(range.start() + offset, Some(amount)))
            .collect()
    }
}

impl From<(Date, Option<Decimal>)> for ProductivityEntry {
    fn from((date, amount): (Date, Option<Decimal>)) -> Self {
        Self::new(date, amount)
    }
}

impl From<(Date, Decimal)> for ProductivityEntry {
    fn from((date, amount): (Date, Decimal)) -> Self {
        Self::new(date, Some(amount))
    }
}

/// Month sums of the entries inside `period`, one per calendar month from the
/// month of `period.start()` through the month of `period.end()`.
///
/// A month without entries is `None`.
pub(crate) fn month_sums(
    entries: &[ProductivityEntry],
    period: &DateRange,
) -> Vec<(Date, Option<Decimal>)> {
    let mut sums: Vec<(Date, Option<Decimal>)> = Vec::new();
    let mut month = period.start().start_of_month();
    let last = period.end().start_of_month();
    while month <= last {
        sums.push((month, None));
        month = month.end_of_month() + 1;
    }

    let first = period.start().start_of_month();
    for entry in entries.iter().filter(|e| period.contains(e.date)) {
        let Ok(index) = usize::try_from(first.months_between(&entry.date)) else {
            continue;
        };
        if let Some((_, sum)) = sums.get_mut(index) {
            *sum = Some(sum.unwrap_or_default() + entry.amount.unwrap_or_default());
        }
    }

    sums
}
