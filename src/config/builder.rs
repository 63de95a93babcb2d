//! Builder API for calculator configuration.

use super::error::ConfigError;
use super::CalculatorConfig;
use crate::format::{NumberFormat, NumberLocale};
use std::time::Duration;

/// Builder for [`CalculatorConfig`] with a fluent API.
///
/// Unset fields keep their defaults. [`ConfigBuilder::build`] validates
/// the result and reports every violation at once.
pub struct ConfigBuilder {
    config: CalculatorConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }

    /// Set the number locale
    pub fn locale(mut self, locale: NumberLocale) -> Self {
        self.config.number_format.locale = locale;
        self
    }

    /// Set the whole number format at once
    pub fn number_format(mut self, format: NumberFormat) -> Self {
        self.config.number_format = format;
        self
    }

    /// Set fractional digits kept before trimming
    pub fn max_fraction_digits(mut self, digits: usize) -> Self {
        self.config.number_format.max_fraction_digits = digits;
        self
    }

    /// Set how long highlights stay visible
    pub fn pulse_duration(mut self, duration: Duration) -> Self {
        self.config.pulse_duration = duration;
        self
    }

    /// Set how many transitions the session keeps
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Build the configuration.
    /// Returns an error listing every violated rule.
    pub fn build(self) -> Result<CalculatorConfig, ConfigError> {
        if let Err(err) = self.config.validate() {
            tracing::debug!(error = %err, "Rejected calculator configuration");
            return Err(err);
        }
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
