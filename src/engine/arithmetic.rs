//! Operand parsing and binary arithmetic.

use crate::core::OperatorKind;

/// Apply `op` to `a` and `b` with IEEE-754 semantics.
///
/// Division by zero is not trapped: it yields `±inf` or `NaN`, which the
/// formatter shows as an error.
pub fn calculate(a: f64, op: OperatorKind, b: f64) -> f64 {
    match op {
        OperatorKind::Add => a + b,
        OperatorKind::Sub => a - b,
        OperatorKind::Mul => a * b,
        OperatorKind::Div => a / b,
    }
}

/// Parse the input buffer as an operand.
///
/// Anything other than a finite decimal literal (`-?digits[.digits]`, at
/// least one digit) counts as no entry and parses as `0`.
///
/// ```rust
/// use chaincalc::engine::parse_number;
///
/// assert_eq!(parse_number("12.5"), 12.5);
/// assert_eq!(parse_number("-.5"), -0.5);
/// assert_eq!(parse_number(""), 0.0);
/// assert_eq!(parse_number("-"), 0.0);
/// assert_eq!(parse_number("inf"), 0.0);
/// ```
pub fn parse_number(text: &str) -> f64 {
    if !is_decimal_literal(text) {
        return 0.0;
    }
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let mut digits = 0usize;
    let mut dots = 0usize;
    for ch in unsigned.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_covers_each_operator() {
        assert_eq!(calculate(7.0, OperatorKind::Add, 3.0), 10.0);
        assert_eq!(calculate(7.0, OperatorKind::Sub, 3.0), 4.0);
        assert_eq!(calculate(7.0, OperatorKind::Mul, 3.0), 21.0);
        assert_eq!(calculate(9.0, OperatorKind::Div, 3.0), 3.0);
    }

    #[test]
    fn division_by_zero_is_not_trapped() {
        assert_eq!(calculate(8.0, OperatorKind::Div, 0.0), f64::INFINITY);
        assert_eq!(calculate(-8.0, OperatorKind::Div, 0.0), f64::NEG_INFINITY);
        assert!(calculate(0.0, OperatorKind::Div, 0.0).is_nan());
    }

    #[test]
    fn parse_number_accepts_partial_decimals() {
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number(".25"), 0.25);
        assert_eq!(parse_number("007"), 7.0);
        assert_eq!(parse_number("-42"), -42.0);
    }

    #[test]
    fn parse_number_coerces_non_numbers_to_zero() {
        for text in ["", "-", ".", "-.", "1.2.3", "--1", "1e5", "NaN", "infinity", " 1"] {
            assert_eq!(parse_number(text), 0.0, "input {text:?}");
        }
    }

    #[test]
    fn parse_number_rejects_overflow() {
        let huge = "9".repeat(400);
        assert_eq!(parse_number(&huge), 0.0);
    }
}
