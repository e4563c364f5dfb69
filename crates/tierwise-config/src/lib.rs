//! Tierwise Configuration Layer
//!
//! This crate provides the run settings for the Tierwise distribution
//! engine: which accrual interval to decipher with, whether accrual periods
//! accumulate from a common start, and when per-period work may run in
//! parallel.
//!
//! # Example
//!
//! ```rust
//! use tierwise_config::{DistributionConfig, Validate};
//! use tierwise_core::{AccrualInterval, DateRange};
//!
//! let config = DistributionConfig::from_toml_str(r#"
//!     name = "QUARTERLY.YTD"
//!     interval = "Quarterly"
//!     cumulative = true
//! "#).unwrap();
//! assert!(config.is_valid());
//!
//! let window = DateRange::from_ymd((2019, 1, 1), (2019, 12, 31)).unwrap();
//! let decipher = config.decipher(window).unwrap();
//! assert_eq!(decipher.interval(), AccrualInterval::Quarterly);
//! ```
//!
//! # Standard Configurations
//!
//! - `ANNUAL` - annual accrual, disjoint periods (the summary default)
//! - `MONTHLY.YTD` - monthly accrual, year-to-date growing periods

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod distribution;
mod error;

pub use distribution::DistributionConfig;
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::distribution::DistributionConfig;
    pub use crate::error::{ConfigError, ConfigResult, Validate};
}
