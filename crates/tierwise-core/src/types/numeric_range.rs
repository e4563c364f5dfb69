//! Optionally-bounded numeric interval.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed numeric interval whose bounds may be open-ended.
///
/// A `None` lower bound stands for negative infinity and a `None` upper
/// bound for positive infinity. Tier bands are expressed as these ranges,
/// with the first tier unbounded below and the last unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NumericRange {
    lower: Option<Decimal>,
    upper: Option<Decimal>,
}

impl NumericRange {
    /// Creates a range from optional bounds.
    #[must_use]
    pub fn new(lower: Option<Decimal>, upper: Option<Decimal>) -> Self {
        Self { lower, upper }
    }

    /// Creates a range bounded on both sides.
    #[must_use]
    pub fn bounded(lower: Decimal, upper: Decimal) -> Self {
        Self::new(Some(lower), Some(upper))
    }

    /// The range covering every value.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Lower bound, `None` when unbounded below.
    #[must_use]
    pub fn lower(&self) -> Option<Decimal> {
        self.lower
    }

    /// Upper bound, `None` when unbounded above.
    #[must_use]
    pub fn upper(&self) -> Option<Decimal> {
        self.upper
    }

    /// Returns true if both bounds are missing.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    /// Returns true if the two closed intervals intersect.
    ///
    /// Touching endpoints count as overlapping.
    #[must_use]
    pub fn overlaps(&self, other: &NumericRange) -> bool {
        at_or_below(self.lower, other.upper) && at_or_below(other.lower, self.upper)
    }

    /// Rounds both bounds to `dp` decimal places (banker's rounding).
    #[must_use]
    pub fn round_dp(&self, dp: u32) -> Self {
        Self::new(
            self.lower.map(|v| v.round_dp(dp)),
            self.upper.map(|v| v.round_dp(dp)),
        )
    }
}

/// `lower <= upper`, where a missing lower is -inf and a missing upper is +inf.
fn at_or_below(lower: Option<Decimal>, upper: Option<Decimal>) -> bool {
    match (lower, upper) {
        (Some(lower), Some(upper)) => lower <= upper,
        _ => true,
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            Some(lower) => write!(f, "[{lower}, ")?,
            None => write!(f, "(-inf, ")?,
        }
        match self.upper {
            Some(upper) => write!(f, "{upper}]"),
            None => write!(f, "+inf)"),
        }
    }
}
