//! deskcalc - desktop-style calculator engine
//!
//! The calculator is a single state machine, [`ArithmeticEngine`], fed by
//! a small token vocabulary. Rendering is left to a collaborator; the
//! [`view`] module provides one backed by a mock DOM.
//!
//! Operators chain left to right with no precedence, and results are
//! squeezed into a nine-character display.
//!
//! # Example
//!
//! ```rust
//! use deskcalc::prelude::*;
//!
//! let mut engine = ArithmeticEngine::new();
//! for name in ["2", "add", "3", "multiply", "4", "equals"] {
//!     engine.apply_str(name).unwrap();
//! }
//! assert_eq!(engine.display_text(), "20");
//!
//! // Division by zero resets the engine
//! for name in ["5", "divide", "0"] {
//!     engine.apply_str(name).unwrap();
//! }
//! assert_eq!(engine.apply(Token::Equals), Err(CalcError::DivisionByZero));
//! assert_eq!(engine.display_text(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod input;
pub mod view;

pub use crate::core::{ArithmeticEngine, CalcError, CalcResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::format::{format_result, parse_numeral};
    pub use crate::core::{
        ArithmeticEngine, CalcError, CalcResult, CalculatorState, DisplayConfig, Operation, Phase,
    };
    pub use crate::input::{Keypad, KeypadButton, Token};
    pub use crate::view::{CalculatorView, DomElement, DomEvent, MockDom};
}
