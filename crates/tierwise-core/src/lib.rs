//! # Tierwise Core
//!
//! Core types for the Tierwise tiered compensation engine.
//!
//! This crate provides the calendar and numeric building blocks that the
//! distribution engine is expressed in:
//!
//! - **Types**: [`Date`], [`DateRange`], [`NumericRange`], [`AccrualInterval`]
//! - **Accrual**: [`AccrualPeriodDecipher`], which slices a reporting window
//!   into interval-aligned accrual periods and locates coverage gaps
//!
//! ## Example
//!
//! ```rust
//! use tierwise_core::prelude::*;
//!
//! let window = DateRange::from_ymd((2019, 1, 1), (2019, 12, 31)).unwrap();
//! let decipher = AccrualPeriodDecipher::new(window, AccrualInterval::Quarterly).unwrap();
//!
//! let periods = decipher.decipher_accrual_periods(&window, false).unwrap();
//! assert_eq!(periods.len(), 4);
//! assert_eq!(decipher.month_start_dates().len(), 12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]

pub mod accrual;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accrual::AccrualPeriodDecipher;
    pub use crate::error::{TierwiseError, TierwiseResult};
    pub use crate::types::{AccrualInterval, Date, DateRange, NumericRange};
}

// Re-export commonly used types at crate root
pub use accrual::AccrualPeriodDecipher;
pub use error::{TierwiseError, TierwiseResult};
pub use types::{AccrualInterval, Date, DateRange, NumericRange};
