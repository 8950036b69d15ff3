//! Input token vocabulary
//!
//! Pointer clicks and key presses map 1:1 onto these tokens.

use crate::core::Operation;
use serde::{Deserialize, Serialize};

/// One unit of calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// A digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// One of the four binary operators
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// All clear
    Clear,
    /// Negate the current value
    ToggleSign,
    /// Divide the current value by one hundred
    Percent,
}

impl Token {
    /// Parses a token name (`7`, `decimal`, `add`, `toggle-sign`, ...)
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let token = match name {
            "decimal" => Self::Decimal,
            "equals" => Self::Equals,
            "clear" => Self::Clear,
            "toggle-sign" => Self::ToggleSign,
            "percent" => Self::Percent,
            _ => {
                if let Some(op) = Operation::from_name(name) {
                    Self::Operator(op)
                } else {
                    Self::single_digit(name)?
                }
            }
        };
        Some(token)
    }

    /// Maps a keyboard key name to a token
    ///
    /// There is no keyboard shortcut for [`Token::ToggleSign`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "." => Some(Self::Decimal),
            "Enter" | "=" => Some(Self::Equals),
            "Escape" | "c" | "C" => Some(Self::Clear),
            "%" => Some(Self::Percent),
            _ => {
                let mut chars = key.chars();
                let (Some(ch), None) = (chars.next(), chars.next()) else {
                    return None;
                };
                Operation::from_key(ch)
                    .map(Self::Operator)
                    .or_else(|| Self::single_digit(key))
            }
        }
    }

    /// Canonical token name
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => "decimal".to_string(),
            Self::Operator(op) => op.name().to_string(),
            Self::Equals => "equals".to_string(),
            Self::Clear => "clear".to_string(),
            Self::ToggleSign => "toggle-sign".to_string(),
            Self::Percent => "percent".to_string(),
        }
    }

    /// Keypad label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// All tokens in the vocabulary
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut tokens: Vec<Self> = (0..=9).map(Self::Digit).collect();
        tokens.push(Self::Decimal);
        tokens.extend(Operation::ALL.into_iter().map(Self::Operator));
        tokens.extend([Self::Equals, Self::Clear, Self::ToggleSign, Self::Percent]);
        tokens
    }

    fn single_digit(text: &str) -> Option<Self> {
        match text.as_bytes() {
            [b @ b'0'..=b'9'] => Some(Self::Digit(b - b'0')),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}
