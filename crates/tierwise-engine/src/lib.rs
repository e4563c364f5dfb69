//! # Tierwise Engine
//!
//! Tiered productivity distribution for the Tierwise compensation engine.
//!
//! Given dated productivity, a tier schedule (thresholds plus one conversion
//! factor per tier) and an [`AccrualPeriodDecipher`](tierwise_core::AccrualPeriodDecipher),
//! the engine:
//!
//! - Prorates the yearly thresholds to each accrual period
//! - Splits each month's productivity across the tiers its running total
//!   passes through
//! - Converts each tier with its factor and flattens tiers into one amount
//!   per month and period
//! - Pads uncovered parts of the window with empty placeholders and chains
//!   successive schedules together
//!
//! Months without data stay `None` throughout; they are never confused with
//! zero productivity.
//!
//! ## Example
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use tierwise_engine::prelude::*;
//!
//! let window = DateRange::from_ymd((2019, 1, 1), (2019, 12, 31)).unwrap();
//! let decipher = AccrualPeriodDecipher::new(window, AccrualInterval::Annual).unwrap();
//! let distributor = BundleDistributor::new(&decipher);
//!
//! let days = DateRange::from_ymd((2019, 1, 1), (2019, 1, 10)).unwrap();
//! let values = ProductivityEntry::daily(&days, dec!(100));
//!
//! let result = distributor
//!     .distribute(&values, &[], &[dec!(10)], &window, false)
//!     .unwrap();
//! assert_eq!(result.total(), Some(dec!(10000)));
//! ```
//!
//! ## Features
//!
//! - `parallel`: evaluate accrual periods with rayon once the configured
//!   threshold is reached

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]

pub mod distribution;
pub mod distributor;
pub mod parallel;
pub mod schedule;
pub mod values;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::distribution::{
        period_total, AccrualPeriodDistribution, BundleDistribution, TierDistribution,
        TieredAccrualPeriodDistribution,
    };
    pub use crate::distributor::{BundleDistributor, BundleDistributorBuilder};
    pub use crate::schedule::{month_segments, Tier, TierBundle};
    pub use crate::values::ProductivityEntry;

    pub use tierwise_config::DistributionConfig;
    pub use tierwise_core::prelude::*;
}

// Re-export commonly used types at crate root
pub use distribution::{
    period_total, AccrualPeriodDistribution, BundleDistribution, TierDistribution,
    TieredAccrualPeriodDistribution,
};
pub use distributor::{BundleDistributor, BundleDistributorBuilder};
pub use schedule::{month_segments, Tier, TierBundle};
pub use values::ProductivityEntry;
