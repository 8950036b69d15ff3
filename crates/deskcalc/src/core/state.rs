//! Calculator state
//!
//! Exactly one instance exists per running calculator. It is created in
//! its cleared form and mutated in place by the engine.

use crate::core::Operation;
use serde::{Deserialize, Serialize};

/// Text of the cleared display
pub const INITIAL_INPUT: &str = "0";

/// The four attributes the engine transitions over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Value being entered or displayed
    pub current_input: String,
    /// Left-hand operand captured when an operator was selected
    pub previous_input: Option<String>,
    /// Operator waiting for its right-hand operand
    pub pending_operator: Option<Operation>,
    /// The next digit starts a new number
    pub awaiting_fresh_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the cleared state
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_input: INITIAL_INPUT.to_string(),
            previous_input: None,
            pending_operator: None,
            awaiting_fresh_entry: false,
        }
    }

    /// Returns true if this is the startup state
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        *self == Self::new()
    }

    /// Captures the current input as the left operand of `op`
    pub(crate) fn capture(&mut self, op: Operation) {
        self.previous_input = Some(self.current_input.clone());
        self.pending_operator = Some(op);
        self.awaiting_fresh_entry = true;
    }

    /// Drops the pending operation, keeping the current input
    pub(crate) fn release(&mut self) {
        self.previous_input = None;
        self.pending_operator = None;
    }

    /// Which state-machine node these attributes encode
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.pending_operator, self.awaiting_fresh_entry) {
            (Some(_), true) => Phase::OperatorPending,
            (Some(_), false) => Phase::OperandEntered,
            (None, _) if self.is_cleared() => Phase::Idle,
            (None, _) => Phase::OperandEntered,
        }
    }

    /// Checks the structural invariants of the state
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let paired = self.pending_operator.is_some() == self.previous_input.is_some();
        let points = self.current_input.matches('.').count();
        paired && points <= 1 && !self.current_input.is_empty()
    }
}

/// Node of the calculator state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Cleared, nothing entered yet
    Idle,
    /// A value is on the display and may still be extended or evaluated
    OperandEntered,
    /// An operator was just selected; the next digit starts the right operand
    OperatorPending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_cleared() {
        let state = CalculatorState::new();
        assert_eq!(state.current_input, "0");
        assert!(state.previous_input.is_none());
        assert!(state.pending_operator.is_none());
        assert!(!state.awaiting_fresh_entry);
        assert!(state.is_cleared());
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn test_phase_idle() {
        assert_eq!(CalculatorState::new().phase(), Phase::Idle);
    }

    #[test]
    fn test_phase_operand_entered() {
        let mut state = CalculatorState::new();
        state.current_input = "42".into();
        assert_eq!(state.phase(), Phase::OperandEntered);
    }

    #[test]
    fn test_capture_moves_to_operator_pending() {
        let mut state = CalculatorState::new();
        state.current_input = "7".into();
        state.capture(Operation::Add);
        assert_eq!(state.previous_input.as_deref(), Some("7"));
        assert_eq!(state.pending_operator, Some(Operation::Add));
        assert_eq!(state.phase(), Phase::OperatorPending);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_release_clears_pair() {
        let mut state = CalculatorState::new();
        state.capture(Operation::Divide);
        state.release();
        assert!(state.previous_input.is_none());
        assert!(state.pending_operator.is_none());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_inconsistent_pairing_detected() {
        let mut state = CalculatorState::new();
        state.pending_operator = Some(Operation::Add);
        assert!(!state.is_consistent());
    }

    #[test]
    fn test_serialize_snapshot() {
        let mut state = CalculatorState::new();
        state.capture(Operation::Multiply);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["pending_operator"], "multiply");
        assert_eq!(json["awaiting_fresh_entry"], true);
    }

    #[test]
    fn test_phase_serde_kebab() {
        let json = serde_json::to_string(&Phase::OperatorPending).unwrap();
        assert_eq!(json, "\"operator-pending\"");
    }
}
