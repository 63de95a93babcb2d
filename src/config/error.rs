//! Configuration error types.

use std::time::Duration;
use thiserror::Error;

/// A single rule a configuration breaks.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Group and decimal separators are both {0:?}")]
    SeparatorsCollide(char),

    #[error("Separator {0:?} would be read as part of a number")]
    NumericSeparator(char),

    #[error("Fraction digits ({requested}) exceed the maximum of {max}")]
    TooManyFractionDigits { requested: usize, max: usize },

    #[error("Pulse duration must be non-zero")]
    ZeroPulseDuration,

    #[error("Pulse duration ({requested:?}) exceeds the maximum of {max:?}")]
    PulseTooLong { requested: Duration, max: Duration },
}

/// Errors returned when building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every rule the configuration breaks, in rule order
    #[error(
        "Invalid calculator configuration ({} violation(s)): {}",
        .violations.len(),
        summary(.violations)
    )]
    Invalid { violations: Vec<ConfigViolation> },
}

fn summary(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
