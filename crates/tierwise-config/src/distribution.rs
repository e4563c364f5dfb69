//! Distribution run configuration.

use serde::{Deserialize, Serialize};

use tierwise_core::{AccrualInterval, AccrualPeriodDecipher, DateRange, TierwiseResult};

use crate::error::{ConfigResult, Validate, ValidationError};

// =============================================================================
// DISTRIBUTION CONFIGURATION
// =============================================================================

/// Settings for a tiered distribution run.
///
/// Controls how the reporting window is deciphered into accrual periods and
/// whether per-period work may be spread across threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// Configuration name/identifier.
    pub name: String,

    /// Description of this configuration.
    #[serde(default)]
    pub description: Option<String>,

    /// How often accrued productivity resets.
    #[serde(default)]
    pub interval: AccrualInterval,

    /// Whether accrual periods grow from a common start instead of being
    /// disjoint.
    #[serde(default)]
    pub cumulative: bool,

    /// Evaluate accrual periods in parallel (requires the engine's
    /// `parallel` feature).
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Minimum accrual period count before parallel evaluation kicks in.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel() -> bool {
    true
}

fn default_parallel_threshold() -> usize {
    24
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self::annual()
    }
}

impl DistributionConfig {
    /// Creates a configuration with default settings under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            interval: AccrualInterval::Annual,
            cumulative: false,
            parallel: default_parallel(),
            parallel_threshold: default_parallel_threshold(),
        }
    }

    /// Annual accrual over disjoint periods.
    #[must_use]
    pub fn annual() -> Self {
        Self::new("ANNUAL").with_description("Annual accrual, disjoint periods")
    }

    /// Monthly accrual evaluated against year-to-date running totals.
    #[must_use]
    pub fn monthly_year_to_date() -> Self {
        Self::new("MONTHLY.YTD")
            .with_interval(AccrualInterval::Monthly)
            .with_cumulative(true)
            .with_description("Monthly accrual, growing year-to-date periods")
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the accrual interval.
    #[must_use]
    pub fn with_interval(mut self, interval: AccrualInterval) -> Self {
        self.interval = interval;
        self
    }

    /// Sets cumulative mode.
    #[must_use]
    pub fn with_cumulative(mut self, cumulative: bool) -> Self {
        self.cumulative = cumulative;
        self
    }

    /// Sets whether to use parallel evaluation.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the parallel evaluation threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if `period_count` accrual periods should be evaluated in
    /// parallel.
    #[must_use]
    pub fn should_parallelize(&self, period_count: usize) -> bool {
        self.parallel && period_count >= self.parallel_threshold
    }

    /// Builds a decipherer for `window` using this configuration's interval.
    pub fn decipher(&self, window: DateRange) -> TierwiseResult<AccrualPeriodDecipher> {
        AccrualPeriodDecipher::new(window, self.interval)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a TOML configuration.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Serializes to pretty-printed TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Validate for DistributionConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        if self.parallel_threshold == 0 {
            errors.push(ValidationError::with_rule(
                "parallel_threshold",
                "Parallel threshold must be at least 1",
                "min_threshold",
            ));
        }

        errors
    }
}
