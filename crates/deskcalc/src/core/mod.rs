//! Core calculator module
//!
//! The engine is a flat state holder. Every keypad or keyboard token is a
//! transition on a single [`CalculatorState`].

pub mod config;
pub mod engine;
pub mod format;
mod operations;
pub mod state;

pub use config::DisplayConfig;
pub use engine::ArithmeticEngine;
pub use operations::Operation;
pub use state::{CalculatorState, Phase};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a right operand of exactly zero
    #[error("Division by zero")]
    DivisionByZero,
    /// An operand could not be parsed as a number
    #[error("Malformed numeral: {0:?}")]
    MalformedNumeral(String),
    /// Finite operands produced an infinite or NaN result
    #[error("Overflow: result exceeds the representable range")]
    Overflow,
    /// Display configuration rejected by validation
    #[error("Invalid display configuration: {0}")]
    InvalidConfig(String),
}

impl CalcError {
    /// Returns true if the engine reset itself to the cleared state
    /// when this error was raised
    #[must_use]
    pub const fn resets_engine(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }

    /// Message shown to the user by a rendering surface
    #[must_use]
    pub fn user_message(&self) -> String {
        format!("Error: {self}")
    }
}
