//! Numeric word formatting
//!
//! Every number the post-processor writes goes through [`format_value`], so
//! all values in a program share one precision and one rounding rule.

use plasmapost_core::Parameters;

/// Format a value as fixed point with exactly `precision` fractional digits
///
/// Values that round to zero are written without a sign.
pub fn format_value(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision, value);
    match formatted.strip_prefix('-') {
        Some(magnitude) if magnitude.chars().all(|c| c == '0' || c == '.') => {
            magnitude.to_string()
        }
        _ => formatted,
    }
}

/// Format one address word, e.g. `X10.000`
pub fn format_word(letter: impl std::fmt::Display, value: f64, precision: usize) -> String {
    format!("{}{}", letter, format_value(value, precision))
}

/// Format every parameter as a word, space separated, in insertion order
pub fn format_parameter_list(parameters: &Parameters, precision: usize) -> String {
    parameters
        .iter()
        .map(|(key, value)| format_word(key, *value, precision))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_digits() {
        assert_eq!(format_value(10.0, 3), "10.000");
        assert_eq!(format_value(1.5, 2), "1.50");
        assert_eq!(format_value(2.0, 0), "2");
        assert_eq!(format_value(0.123456789, 6), "0.123457");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_value(-0.0, 3), "0.000");
        assert_eq!(format_value(-0.0001, 3), "0.000");
        assert_eq!(format_value(-0.4, 0), "0");
        assert_eq!(format_value(-0.5001, 0), "-1");
        assert_eq!(format_value(-1.26, 1), "-1.3");
    }

    #[test]
    fn test_parameter_list_order() {
        let mut params = Parameters::new();
        params.insert("Q".to_string(), 2.0);
        params.insert("A".to_string(), 1.5);
        assert_eq!(format_parameter_list(&params, 2), "Q2.00 A1.50");
        assert_eq!(format_parameter_list(&Parameters::new(), 2), "");
    }
}
