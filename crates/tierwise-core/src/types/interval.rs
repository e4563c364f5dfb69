//! Accrual interval type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TierwiseError;

/// How often accrued compensation resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AccrualInterval {
    /// Resets once a year (12 months).
    #[default]
    Annual,
    /// Resets twice a year (6 months).
    SemiAnnual,
    /// Resets every quarter (3 months).
    Quarterly,
    /// Resets every month.
    Monthly,
}

impl AccrualInterval {
    /// All intervals, longest first.
    pub const ALL: [AccrualInterval; 4] = [
        AccrualInterval::Annual,
        AccrualInterval::SemiAnnual,
        AccrualInterval::Quarterly,
        AccrualInterval::Monthly,
    ];

    /// Returns the number of months per accrual period.
    #[must_use]
    pub fn months(&self) -> u32 {
        match self {
            AccrualInterval::Annual => 12,
            AccrualInterval::SemiAnnual => 6,
            AccrualInterval::Quarterly => 3,
            AccrualInterval::Monthly => 1,
        }
    }

    /// Returns the number of accrual periods per year (`12 / months`).
    #[must_use]
    pub fn dividend(&self) -> u32 {
        12 / self.months()
    }

    /// Parses an interval, falling back to [`AccrualInterval::Annual`] when
    /// the text is missing or unrecognised.
    #[must_use]
    pub fn parse_or_default(s: Option<&str>) -> Self {
        s.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for AccrualInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccrualInterval::Annual => "Annual",
            AccrualInterval::SemiAnnual => "Semi-Annual",
            AccrualInterval::Quarterly => "Quarterly",
            AccrualInterval::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

impl FromStr for AccrualInterval {
    type Err = TierwiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" | "annually" | "yearly" => Ok(AccrualInterval::Annual),
            "semiannual" | "semi-annual" | "semi_annual" => Ok(AccrualInterval::SemiAnnual),
            "quarterly" => Ok(AccrualInterval::Quarterly),
            "monthly" => Ok(AccrualInterval::Monthly),
            _ => Err(TierwiseError::invalid_argument(
                "accrual_interval",
                format!("unknown interval '{s}'"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_and_dividend() {
        let expected = [(12, 1), (6, 2), (3, 4), (1, 12)];
        for (interval, (months, dividend)) in AccrualInterval::ALL.iter().zip(expected) {
            assert_eq!(interval.months(), months);
            assert_eq!(interval.dividend(), dividend);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("QUARTERLY".parse::<AccrualInterval>().unwrap(), AccrualInterval::Quarterly);
        assert_eq!("SemiAnnual".parse::<AccrualInterval>().unwrap(), AccrualInterval::SemiAnnual);
        assert_eq!(" monthly ".parse::<AccrualInterval>().unwrap(), AccrualInterval::Monthly);
        assert!("weekly".parse::<AccrualInterval>().is_err());
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(AccrualInterval::parse_or_default(None), AccrualInterval::Annual);
        assert_eq!(AccrualInterval::parse_or_default(Some("bogus")), AccrualInterval::Annual);
        assert_eq!(
            AccrualInterval::parse_or_default(Some("monthly")),
            AccrualInterval::Monthly
        );
    }
}
