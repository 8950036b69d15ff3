//! Binary arithmetic operations
//!
//! Type-safe operator enum: the engine can only ever hold one of the four
//! keypad operators.

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// A pending binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operations in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the keypad label
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Returns the token name (`add`, `subtract`, `multiply`, `divide`)
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Parses a token name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Parses the ASCII keyboard character for an operator
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operation to `lhs` and `rhs`
    ///
    /// A right operand of exactly zero fails a division. Results that
    /// leave the finite range are rejected instead of displayed.
    pub fn apply(&self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
