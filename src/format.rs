//! Locale-aware number formatting for the display.
//!
//! Formatting never touches engine state; it only turns an accumulator
//! value into text.

use serde::{Deserialize, Serialize};

/// Text shown in place of any non-finite value.
pub const ERROR_TEXT: &str = "Error";

/// Separators used when rendering numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    pub group_separator: char,
    pub decimal_separator: char,
    /// Digits per group in the integer part. `0` disables grouping.
    pub group_size: usize,
}

impl NumberLocale {
    pub const fn en_us() -> Self {
        Self {
            group_separator: ',',
            decimal_separator: '.',
            group_size: 3,
        }
    }

    pub const fn de_de() -> Self {
        Self {
            group_separator: '.',
            decimal_separator: ',',
            group_size: 3,
        }
    }

    /// French grouping uses a narrow no-break space.
    pub const fn fr_fr() -> Self {
        Self {
            group_separator: '\u{202f}',
            decimal_separator: ',',
            group_size: 3,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::en_us()
    }
}

/// How results are rendered: locale plus fractional precision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub locale: NumberLocale,
    /// Non-integers are rounded to this many fractional digits before
    /// trailing zeros are stripped.
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            locale: NumberLocale::default(),
            max_fraction_digits: 8,
        }
    }
}

/// Render `value` for the display.
///
/// ```rust
/// use chaincalc::format::{format_number, NumberFormat};
///
/// let format = NumberFormat::default();
/// assert_eq!(format_number(1234567.0, &format), "1,234,567");
/// assert_eq!(format_number(0.1 + 0.2, &format), "0.3");
/// assert_eq!(format_number(f64::NAN, &format), "Error");
/// ```
pub fn format_number(value: f64, format: &NumberFormat) -> String {
    if !value.is_finite() {
        return ERROR_TEXT.to_string();
    }

    let plain = if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let prec = format.max_fraction_digits;
        let fixed = if is_exact_tie(value, prec) {
            // The value has exactly `prec + 1` fractional digits, the last a 5.
            round_tie_away(&format!("{value:.digits$}", digits = prec + 1))
        } else {
            format!("{value:.prec$}")
        };
        trim_fraction(&fixed).to_string()
    };

    let (negative, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let locale = &format.locale;
    let mut out = String::with_capacity(plain.len() + plain.len() / 3);
    // Zero never carries a sign, including values that round to zero.
    if negative && int_part.bytes().chain(frac_part.unwrap_or("").bytes()).any(|b| b != b'0') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.group_separator, locale.group_size));
    if let Some(frac_part) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

/// `true` if `value` lies exactly halfway between two decimals with
/// `precision` fractional digits.
///
/// That holds when the lowest set bit of `value` is `2^-(precision + 1)`:
/// then `2 * value * 10^precision` is an odd integer.
fn is_exact_tie(value: f64, precision: usize) -> bool {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };
    if mantissa == 0 {
        return false;
    }
    let lowest_bit = exponent + i64::from(mantissa.trailing_zeros());
    i64::try_from(precision).is_ok_and(|precision| lowest_bit == -precision - 1)
}

/// Drop the trailing `5` of an exact decimal and round the rest away
/// from zero.
fn round_tie_away(exact: &str) -> String {
    let mut chars: Vec<char> = exact.chars().collect();
    chars.pop();
    for ch in chars.iter_mut().rev() {
        match *ch {
            '9' => *ch = '0',
            '0'..='8' => {
                *ch = char::from(*ch as u8 + 1);
                return chars.into_iter().collect();
            }
            _ => {}
        }
    }
    let first_digit = usize::from(chars.first() == Some(&'-'));
    chars.insert(first_digit, '1');
    chars.into_iter().collect()
}

fn trim_fraction(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}

fn group_digits(digits: &str, separator: char, size: usize) -> String {
    if size == 0 || digits.len() <= size {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / size);
    let lead = digits.len() % size;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + size - lead) % size == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
