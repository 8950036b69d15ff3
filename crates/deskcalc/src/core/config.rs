//! Display width configuration

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Width policy used by result formatting and the display read-out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum characters shown before a value is reformatted
    pub width: usize,
    /// Significant digits kept when a value is too wide
    pub significant_digits: usize,
    /// Mantissa digits after the point in exponential notation
    pub exponent_precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            significant_digits: Self::DEFAULT_SIGNIFICANT_DIGITS,
            exponent_precision: Self::DEFAULT_EXPONENT_PRECISION,
        }
    }
}

impl DisplayConfig {
    /// Nine characters fit the desktop display
    pub const DEFAULT_WIDTH: usize = 9;
    /// Default rounding for over-wide values
    pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;
    /// Default exponential mantissa precision
    pub const DEFAULT_EXPONENT_PRECISION: usize = 3;

    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display width
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the significant digits used for rounding
    #[must_use]
    pub const fn with_significant_digits(mut self, digits: usize) -> Self {
        self.significant_digits = digits;
        self
    }

    /// Sets the exponential mantissa precision
    #[must_use]
    pub const fn with_exponent_precision(mut self, precision: usize) -> Self {
        self.exponent_precision = precision;
        self
    }

    /// Checks that the policy can render at least a single-digit exponent
    pub fn validate(&self) -> CalcResult<()> {
        if self.width == 0 {
            return Err(CalcError::InvalidConfig("width must be positive".into()));
        }
        if self.significant_digits == 0 {
            return Err(CalcError::InvalidConfig(
                "significant_digits must be positive".into(),
            ));
        }
        // "d.<precision>e+d" is the shortest exponential form
        let shortest_exponent = self.exponent_precision + 5;
        if self.width < shortest_exponent {
            return Err(CalcError::InvalidConfig(format!(
                "width {} cannot hold exponential notation with precision {} (needs {})",
                self.width, self.exponent_precision, shortest_exponent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = DisplayConfig::default();
        assert_eq!(config.width, 9);
        assert_eq!(config.significant_digits, 6);
        assert_eq!(config.exponent_precision, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = DisplayConfig::new()
            .with_width(12)
            .with_significant_digits(8)
            .with_exponent_precision(4);
        assert_eq!(config.width, 12);
        assert_eq!(config.significant_digits, 8);
        assert_eq!(config.exponent_precision, 4);
    }

    #[test]
    fn test_validate_zero_width() {
        let config = DisplayConfig::new().with_width(0);
        assert!(matches!(
            config.validate(),
            Err(CalcError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_zero_digits() {
        let config = DisplayConfig::new().with_significant_digits(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_too_narrow_for_exponent() {
        let config = DisplayConfig::new().with_width(7);
        assert!(config.validate().is_err());
        let config = DisplayConfig::new().with_width(7).with_exponent_precision(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: DisplayConfig = serde_json::from_str(r#"{"width": 12}"#).unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.significant_digits, 6);
    }
}
