use crate::error::{DashboardError, Result};

/// Strict variant of [`parse_amount`]: same stripping rules, but malformed
/// or negative text is an error instead of 0. Used where a caller wants to
/// reject input (e.g. form validation) rather than degrade it.
pub fn parse_amount_strict(text: &str) -> Result<f64> {
    let trimmed = text.trim();

    let remainder = match trimmed.chars().next() {
        Some(first) if !first.is_ascii_digit() && first != '.' && first != '-' => {
            trimmed[first.len_utf8()..].trim_start()
        }
        _ => trimmed,
    };

    let value = remainder
        .parse::<f64>()
        .map_err(|_| DashboardError::AmountParse(text.to_string()))?;

    if value < 0.0 {
        return Err(DashboardError::AmountParse(text.to_string()));
    }

    Ok(value)
}

/// Extracts a numeric amount from a display-formatted currency string.
///
/// Strips one leading non-numeric currency marker (e.g. `$`, `€`) and parses
/// the remainder as a decimal number. Malformed or absent input yields 0.0
/// rather than an error, so a single bad cell never aborts aggregation of
/// the remaining rows. Negative values also contribute 0: amounts are always
/// treated as non-negative for aggregation.
///
/// Thousands separators and alternate decimal marks are not recognized.
pub fn parse_amount(text: &str) -> f64 {
    parse_amount_strict(text).unwrap_or(0.0)
}

/// Formats an amount to two decimal places for display.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_amount("45.50"), 45.50);
        assert_eq!(parse_amount("30"), 30.0);
    }

    #[test]
    fn test_parse_strips_leading_symbol() {
        assert_eq!(parse_amount("$45.50"), 45.50);
        assert_eq!(parse_amount("€12.00"), 12.0);
        assert_eq!(parse_amount("$ 45.50"), 45.50);
    }

    #[test]
    fn test_parse_malformed_contributes_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("$"), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("$12,345.00"), 0.0);
    }

    #[test]
    fn test_parse_negative_contributes_zero() {
        assert_eq!(parse_amount("-5.00"), 0.0);
        assert_eq!(parse_amount("$-5.00"), 0.0);
    }

    #[test]
    fn test_strict_parse_rejects_what_lenient_zeroes() {
        assert!(parse_amount_strict("abc").is_err());
        assert!(parse_amount_strict("-5.00").is_err());
        assert_eq!(parse_amount_strict("$45.50").unwrap(), 45.50);
    }

    #[test]
    fn test_format_two_decimals() {
        assert_eq!(format_amount(50.0), "50.00");
        assert_eq!(format_amount(70.125), "70.13");
        assert_eq!(format_amount(0.0), "0.00");
    }
}
