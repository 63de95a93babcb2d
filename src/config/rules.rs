//! Validation rules for calculator configuration using Validation.

use super::error::ConfigViolation;
use super::CalculatorConfig;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Largest supported fractional precision for `f64` results.
pub const MAX_FRACTION_DIGITS: usize = 15;

/// Longest pulse a host may configure.
pub const MAX_PULSE_DURATION: Duration = Duration::from_secs(10);

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn is_numeric(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '-'
}

/// Check every rule, accumulating ALL violations.
/// Returns Validation::Success(()) if all checks pass.
pub fn validate(config: &CalculatorConfig) -> Check {
    let locale = &config.number_format.locale;
    let max_fraction_digits = config.number_format.max_fraction_digits;

    let checks = vec![
        check(locale.group_separator != locale.decimal_separator, || {
            ConfigViolation::SeparatorsCollide(locale.group_separator)
        }),
        check(!is_numeric(locale.group_separator), || {
            ConfigViolation::NumericSeparator(locale.group_separator)
        }),
        check(!is_numeric(locale.decimal_separator), || {
            ConfigViolation::NumericSeparator(locale.decimal_separator)
        }),
        check(max_fraction_digits <= MAX_FRACTION_DIGITS, || {
            ConfigViolation::TooManyFractionDigits {
                requested: max_fraction_digits,
                max: MAX_FRACTION_DIGITS,
            }
        }),
        check(!config.pulse_duration.is_zero(), || {
            ConfigViolation::ZeroPulseDuration
        }),
        check(config.pulse_duration <= MAX_PULSE_DURATION, || {
            ConfigViolation::PulseTooLong {
                requested: config.pulse_duration,
                max: MAX_PULSE_DURATION,
            }
        }),
    ];

    // Accumulate ALL failures using all_vec
    Validation::all_vec(checks).map(|_| ())
}
