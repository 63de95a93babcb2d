//! Calculator configuration with validation that reports every problem.
//!
//! Configuration is built in code through [`ConfigBuilder`]; there is no
//! file or environment layer. Building runs every rule in [`rules`] using
//! Stillwater's `Validation`, so a bad configuration is reported in one
//! pass rather than one error at a time.
//!
//! # Example
//!
//! ```rust
//! use chaincalc::config::ConfigBuilder;
//! use chaincalc::format::NumberLocale;
//! use std::time::Duration;
//!
//! let config = ConfigBuilder::new()
//!     .locale(NumberLocale::de_de())
//!     .pulse_duration(Duration::from_millis(250))
//!     .history_limit(16)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.number_format.locale.decimal_separator, ',');
//! ```

pub mod builder;
pub mod error;
pub mod rules;

pub use builder::ConfigBuilder;
pub use error::{ConfigError, ConfigViolation};

use crate::format::NumberFormat;
use crate::view::DEFAULT_PULSE_DURATION;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;

/// Default number of transitions a session keeps.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Settings for a calculator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// How results and operands are rendered
    pub number_format: NumberFormat,
    /// How long an operator/equals highlight stays visible
    pub pulse_duration: Duration,
    /// Transitions kept in the session history; `0` disables recording
    pub history_limit: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            number_format: NumberFormat::default(),
            pulse_duration: DEFAULT_PULSE_DURATION,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl CalculatorConfig {
    /// Run all validation rules against this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match rules::validate(self) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(ConfigError::Invalid {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }
}
