//! Arithmetic engine
//!
//! Left-to-right evaluation without precedence: selecting an operator
//! while another one is pending with a freshly typed right operand
//! evaluates the pending one first, so `2 + 3 × 4 =` gives `20`.

use crate::core::format::{display_text, format_result, parse_numeral, stringify};
use crate::core::{CalcError, CalcResult, CalculatorState, DisplayConfig, Operation, Phase};
use crate::input::Token;
use tracing::{debug, trace, warn};

/// The calculator state machine
#[derive(Debug, Clone, Default)]
pub struct ArithmeticEngine {
    state: CalculatorState,
    config: DisplayConfig,
}

impl ArithmeticEngine {
    /// Creates an engine in the cleared state with the default display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a validated display configuration
    pub fn with_config(config: DisplayConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(Self {
            state: CalculatorState::new(),
            config,
        })
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Display configuration
    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Current state-machine node
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Text for the rendering surface
    #[must_use]
    pub fn display_text(&self) -> String {
        display_text(&self.state.current_input, &self.config)
    }

    /// Operator to highlight, if one is genuinely pending
    #[must_use]
    pub fn active_operator(&self) -> Option<Operation> {
        self.state.pending_operator
    }

    /// Applies one input token
    pub fn apply(&mut self, token: Token) -> CalcResult<()> {
        debug!(%token, phase = ?self.phase(), "applying token");
        match token {
            Token::Digit(d) => {
                self.input_digit(d);
                Ok(())
            }
            Token::Decimal => {
                self.input_decimal_point();
                Ok(())
            }
            Token::Operator(op) => self.set_operator(op),
            Token::Equals => self.evaluate(),
            Token::Clear => {
                self.clear();
                Ok(())
            }
            Token::ToggleSign => {
                self.toggle_sign();
                Ok(())
            }
            Token::Percent => self.percent(),
        }
    }

    /// Applies a token by name; unknown names are ignored
    pub fn apply_str(&mut self, name: &str) -> CalcResult<()> {
        match Token::parse(name) {
            Some(token) => self.apply(token),
            None => {
                trace!(name, "ignoring unrecognized token");
                Ok(())
            }
        }
    }

    /// Enters a digit; values above 9 are ignored
    pub fn input_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            trace!(digit, "ignoring out-of-range digit");
            return;
        };

        if self.state.awaiting_fresh_entry {
            self.state.current_input = ch.to_string();
            self.state.awaiting_fresh_entry = false;
        } else if self.state.current_input == "0" {
            self.state.current_input = ch.to_string();
        } else {
            self.state.current_input.push(ch);
        }
    }

    /// Enters a decimal point; a second point is ignored
    pub fn input_decimal_point(&mut self) {
        if self.state.awaiting_fresh_entry {
            self.state.current_input = "0.".to_string();
            self.state.awaiting_fresh_entry = false;
        } else if !self.state.current_input.contains('.') {
            self.state.current_input.push('.');
        }
    }

    /// Selects an operator, evaluating a pending one first if the user
    /// has typed its right operand
    ///
    /// If the chained evaluation divides by zero the engine clears, `op`
    /// is still selected against the cleared `0`, and the error is
    /// returned. Other errors leave the state and the old operator alone.
    pub fn set_operator(&mut self, op: Operation) -> CalcResult<()> {
        if self.state.pending_operator.is_some() && !self.state.awaiting_fresh_entry {
            debug!(next = %op, "chaining pending operation");
            if let Err(err) = self.evaluate() {
                if err.resets_engine() {
                    self.state.capture(op);
                }
                return Err(err);
            }
        }
        self.state.capture(op);
        Ok(())
    }

    /// Evaluates the pending operation; no-op when nothing is pending
    pub fn evaluate(&mut self) -> CalcResult<()> {
        let (Some(op), Some(previous)) = (
            self.state.pending_operator,
            self.state.previous_input.as_deref(),
        ) else {
            return Ok(());
        };

        let lhs = parse_numeral(previous).inspect_err(|e| warn!(%e, "left operand rejected"))?;
        let rhs = parse_numeral(&self.state.current_input)
            .inspect_err(|e| warn!(%e, "right operand rejected"))?;

        let result = match op.apply(lhs, rhs) {
            Ok(result) => result,
            Err(CalcError::DivisionByZero) => {
                warn!(lhs, "division by zero, clearing");
                self.clear();
                return Err(CalcError::DivisionByZero);
            }
            Err(e) => {
                warn!(%e, lhs, rhs, %op, "result rejected");
                return Err(e);
            }
        };

        self.state.current_input = format_result(result, &self.config);
        self.state.release();
        self.state.awaiting_fresh_entry = true;
        debug!(%op, lhs, rhs, display = %self.state.current_input, "evaluated");
        Ok(())
    }

    /// Adds or strips a leading minus; no-op on `0`
    pub fn toggle_sign(&mut self) {
        let current = &mut self.state.current_input;
        if current.as_str() == "0" {
            return;
        }
        if current.starts_with('-') {
            current.remove(0);
        } else {
            current.insert(0, '-');
        }
    }

    /// Divides the current value by one hundred
    pub fn percent(&mut self) -> CalcResult<()> {
        let value = parse_numeral(&self.state.current_input)
            .inspect_err(|e| warn!(%e, "percent operand rejected"))?;
        self.state.current_input = stringify(value / 100.0);
        Ok(())
    }

    /// Returns to the startup state
    pub fn clear(&mut self) {
        self.state = CalculatorState::new();
    }
}
