//! Numeral parsing and width-constrained formatting
//!
//! Width policy, applied to computed results and to the display read-out:
//!
//! 1. The shortest round-trip decimal rendering, if it fits the width.
//! 2. Otherwise the value rounded to `significant_digits`, trailing zeros
//!    stripped, if that fits.
//! 3. Otherwise exponential notation with `exponent_precision` mantissa
//!    digits (`1.235e+9`).

use crate::core::{CalcError, CalcResult, DisplayConfig};

/// Parses an operand, rejecting anything that is not a finite number
///
/// A well-formed numeral too large for `f64` is an [`CalcError::Overflow`];
/// `inf` and `NaN` spellings are malformed.
pub fn parse_numeral(text: &str) -> CalcResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(value) if value.is_infinite() && text.bytes().any(|b| b.is_ascii_digit()) => {
            Err(CalcError::Overflow)
        }
        _ => Err(CalcError::MalformedNumeral(text.to_string())),
    }
}

/// Plain decimal rendering with no width handling
///
/// Negative zero renders as `0`.
#[must_use]
pub fn stringify(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Formats a computed result for a display of `config.width` characters
#[must_use]
pub fn format_result(value: f64, config: &DisplayConfig) -> String {
    let plain = stringify(value);
    if plain.len() <= config.width {
        return plain;
    }

    let rounded = stringify(round_significant(value, config.significant_digits));
    if rounded.len() <= config.width {
        return rounded;
    }

    to_exponential(value, config.exponent_precision)
}

/// Presentation form of an entered or stored numeral
///
/// Values within the width are shown exactly as typed, including a
/// trailing decimal point. Wider values go through [`format_result`].
#[must_use]
pub fn display_text(current: &str, config: &DisplayConfig) -> String {
    if current.len() <= config.width {
        return current.to_string();
    }
    match parse_numeral(current) {
        Ok(value) => format_result(value, config),
        Err(CalcError::Overflow) => digits_to_exponential(current, config.exponent_precision)
            .unwrap_or_else(|| current.chars().take(config.width).collect()),
        Err(_) => current.chars().take(config.width).collect(),
    }
}

/// Exponential notation for a typed decimal numeral beyond `f64` range
///
/// The exponent comes from the integer digit count; only the leading
/// digits are parsed for the mantissa.
fn digits_to_exponential(text: &str, precision: usize) -> Option<String> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    if !digits.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));
    let int = int.trim_start_matches('0');
    let exponent = i64::try_from(int.len().checked_sub(1)?).ok()?;

    let leading: String = int.chars().chain(frac.chars()).take(17).collect();
    let mantissa: f64 = format!("{}.{}", &leading[..1], &leading[1..]).parse().ok()?;
    let raw = format!("{mantissa:.precision$e}");
    let (mantissa, carry) = raw.split_once('e')?;
    let exponent = exponent + carry.parse::<i64>().ok()?;
    Some(format!("{sign}{mantissa}e+{exponent}"))
}

/// Rounds to `digits` significant digits
fn round_significant(value: f64, digits: usize) -> f64 {
    let precision = digits.saturating_sub(1);
    format!("{value:.precision$e}").parse().unwrap_or(value)
}

/// Exponential notation with an explicit exponent sign
fn to_exponential(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        format_result(value, &DisplayConfig::default())
    }

    // ===== parse_numeral =====

    #[test]
    fn test_parse_plain_numerals() {
        assert_eq!(parse_numeral("0"), Ok(0.0));
        assert_eq!(parse_numeral("-12.5"), Ok(-12.5));
        assert_eq!(parse_numeral("0."), Ok(0.0));
        assert_eq!(parse_numeral("-0."), Ok(0.0));
        assert_eq!(parse_numeral("1.235e+9"), Ok(1.235e9));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_numeral("1.2.3"),
            Err(CalcError::MalformedNumeral(_))
        ));
        assert!(parse_numeral("").is_err());
        assert!(parse_numeral("-").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(
            parse_numeral("inf"),
            Err(CalcError::MalformedNumeral(_))
        ));
        assert!(matches!(
            parse_numeral("NaN"),
            Err(CalcError::MalformedNumeral(_))
        ));
    }

    #[test]
    fn test_parse_numeral_beyond_range_overflows() {
        let huge = "9".repeat(320);
        assert_eq!(parse_numeral(&huge), Err(CalcError::Overflow));
        assert_eq!(parse_numeral(&format!("-{huge}.5")), Err(CalcError::Overflow));
    }

    #[test]
    fn test_display_of_numeral_beyond_range() {
        let config = DisplayConfig::default();
        let huge = "9".repeat(320);
        assert_eq!(display_text(&huge, &config), "1.000e+320");

        let mut typed = String::from("-12346");
        typed.push_str(&"0".repeat(310));
        assert_eq!(display_text(&typed, &config), "-1.235e+314");
    }

    // ===== stringify =====

    #[test]
    fn test_stringify_integers_have_no_fraction() {
        assert_eq!(stringify(6.0), "6");
        assert_eq!(stringify(-42.0), "-42");
    }

    #[test]
    fn test_stringify_negative_zero() {
        assert_eq!(stringify(-0.0), "0");
    }

    #[test]
    fn test_stringify_fraction() {
        assert_eq!(stringify(0.5), "0.5");
        assert_eq!(stringify(0.07), "0.07");
    }

    // ===== format_result =====

    #[test]
    fn test_format_short_values_untouched() {
        assert_eq!(fmt(20.0), "20");
        assert_eq!(fmt(-3.25), "-3.25");
    }

    #[test]
    fn test_format_nine_characters_untouched() {
        assert_eq!(fmt(1.2345678), "1.2345678");
        assert_eq!(fmt(123456789.0), "123456789");
    }

    #[test]
    fn test_format_ten_characters_rounded() {
        assert_eq!(fmt(1.23456789), "1.23457");
        assert_eq!(fmt(-1.2345678), "-1.23457");
    }

    #[test]
    fn test_format_float_noise_removed() {
        assert_eq!(fmt(0.1 + 0.2), "0.3");
        assert_eq!(fmt(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn test_format_large_falls_back_to_exponential() {
        assert_eq!(fmt(1234567890.0), "1.235e+9");
        assert_eq!(fmt(1e21), "1.000e+21");
    }

    #[test]
    fn test_format_rounding_fits_after_reduction() {
        // 6 significant digits of 123456789.5 fit in nine characters
        assert_eq!(fmt(123456789.5), "123457000");
    }

    #[test]
    fn test_format_tiny_falls_back_to_exponential() {
        assert_eq!(fmt(0.000000123456), "1.235e-7");
    }

    #[test]
    fn test_format_negative_exponential() {
        assert_eq!(fmt(-9876543210.0), "-9.877e+9");
    }

    #[test]
    fn test_format_respects_width() {
        let wide = DisplayConfig::default().with_width(12);
        assert_eq!(format_result(1234567890.0, &wide), "1234567890");
    }

    // ===== display_text =====

    #[test]
    fn test_display_keeps_trailing_point() {
        let config = DisplayConfig::default();
        assert_eq!(display_text("12.", &config), "12.");
        assert_eq!(display_text("0.", &config), "0.");
    }

    #[test]
    fn test_display_reformats_long_entry() {
        let config = DisplayConfig::default();
        assert_eq!(display_text("1234567890", &config), "1.235e+9");
        assert_eq!(display_text("0.333333333333", &config), "0.333333");
    }

    #[test]
    fn test_display_truncates_unparseable() {
        let config = DisplayConfig::default();
        assert_eq!(display_text("not-a-number!", &config), "not-a-num");
    }
}
