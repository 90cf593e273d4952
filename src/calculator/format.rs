//! Number formatting for calculator output.
//!
//! Whole values print without a trailing fractional part, other values are
//! rounded to ten decimal places with trailing zeros trimmed.

/// Whole values at or above this magnitude are printed as decimals.
const INTEGER_DISPLAY_LIMIT: f64 = 1e15;

/// Format a number for display, optionally with thousand separators.
pub fn format_number(value: f64, separators: bool) -> String {
    if let Some(message) = non_finite(value) {
        return message.to_string();
    }

    let plain = format_plain(value);
    if separators {
        add_separators(&plain)
    } else {
        plain
    }
}

/// Format a number without separators (used for the clipboard).
pub fn format_plain(value: f64) -> String {
    if let Some(message) = non_finite(value) {
        return message.to_string();
    }

    if value.fract() == 0.0 && value.abs() < INTEGER_DISPLAY_LIMIT {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.10}", value);
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("Not a Number")
    } else if value.is_infinite() {
        Some(if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        })
    } else {
        None
    }
}

/// Insert thousand separators into the integer part of a plain number.
fn add_separators(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (int_part, dec_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    let mut result = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    let grouped: String = result.chars().rev().collect();
    format!("{}{}{}", sign, grouped, dec_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_have_no_fraction() {
        assert_eq!(format_number(5.0, false), "5");
        assert_eq!(format_number(-12.0, false), "-12");
        assert_eq!(format_number(0.0, false), "0");
        assert_eq!(format_number(-0.0, false), "0");
    }

    #[test]
    fn test_decimal_result() {
        assert_eq!(format_number(2.5, false), "2.5");
        assert_eq!(format_number(0.1 + 0.2, false), "0.3");
        assert!(format_number(1.0 / 3.0, false).starts_with("0.333"));
        assert_eq!(format_number(-1e-12, false), "0");
    }

    #[test]
    fn test_thousand_separators() {
        assert_eq!(format_number(1_000_000.0, true), "1,000,000");
        assert_eq!(format_number(-1234.5, true), "-1,234.5");
        assert_eq!(format_number(999.0, true), "999");
        assert_eq!(format_number(1_000_000.0, false), "1000000");
    }

    #[test]
    fn test_large_whole_numbers_fall_back_to_decimal() {
        assert_eq!(format_plain(1e15), "1000000000000000");
        assert_eq!(format_plain(120.0), "120");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_number(f64::NAN, true), "Not a Number");
        assert_eq!(format_number(f64::INFINITY, false), "Infinity");
        assert_eq!(format_plain(f64::NEG_INFINITY), "-Infinity");
    }
}
