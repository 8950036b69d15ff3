//! Keypad layout
//!
//! Mirrors the desktop calculator's button grid. Each button carries the
//! token it feeds to the engine and the element id a rendering surface
//! uses for it.

use super::Token;

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The token this button produces
    pub token: Token,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns the button spans
    pub span: usize,
}

impl KeypadButton {
    /// Creates a single-column button
    #[must_use]
    pub fn new(token: Token, row: usize, col: usize) -> Self {
        Self::wide(token, row, col, 1)
    }

    /// Creates a button spanning `span` columns
    #[must_use]
    pub fn wide(token: Token, row: usize, col: usize, span: usize) -> Self {
        Self {
            token,
            id: element_id(token),
            row,
            col,
            span,
        }
    }

    /// Whether the button covers grid cell (`row`, `col`)
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }

    /// Whether this is one of the four operator buttons
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self.token, Token::Operator(_))
    }
}

/// Element ID for the button producing `token`
#[must_use]
pub fn element_id(token: Token) -> String {
    format!("btn-{}", token.name())
}

/// Calculator keypad
///
/// Layout:
/// ```text
/// [ AC ] [ +/- ] [ % ] [ ÷ ]
/// [ 7  ] [ 8   ] [ 9 ] [ × ]
/// [ 4  ] [ 5   ] [ 6 ] [ − ]
/// [ 1  ] [ 2   ] [ 3 ] [ + ]
/// [    0       ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use crate::core::Operation::{Add, Divide, Multiply, Subtract};

        let buttons = vec![
            KeypadButton::new(Token::Clear, 0, 0),
            KeypadButton::new(Token::ToggleSign, 0, 1),
            KeypadButton::new(Token::Percent, 0, 2),
            KeypadButton::new(Token::Operator(Divide), 0, 3),
            KeypadButton::new(Token::Digit(7), 1, 0),
            KeypadButton::new(Token::Digit(8), 1, 1),
            KeypadButton::new(Token::Digit(9), 1, 2),
            KeypadButton::new(Token::Operator(Multiply), 1, 3),
            KeypadButton::new(Token::Digit(4), 2, 0),
            KeypadButton::new(Token::Digit(5), 2, 1),
            KeypadButton::new(Token::Digit(6), 2, 2),
            KeypadButton::new(Token::Operator(Subtract), 2, 3),
            KeypadButton::new(Token::Digit(1), 3, 0),
            KeypadButton::new(Token::Digit(2), 3, 1),
            KeypadButton::new(Token::Digit(3), 3, 2),
            KeypadButton::new(Token::Operator(Add), 3, 3),
            KeypadButton::wide(Token::Digit(0), 4, 0, 2),
            KeypadButton::new(Token::Decimal, 4, 2),
            KeypadButton::new(Token::Equals, 4, 3),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button producing `token`
    #[must_use]
    pub fn find_by_token(&self, token: Token) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.token == token)
    }

    /// Resolves a click on an element to its token
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Token> {
        self.find_by_id(element_id).map(|b| b.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    #[test]
    fn test_keypad_has_every_token() {
        let keypad = Keypad::new();
        assert_eq!(keypad.buttons().len(), 19);
        for token in Token::all() {
            assert!(keypad.find_by_token(token).is_some(), "missing {token}");
        }
    }

    #[test]
    fn test_grid_bounds() {
        let keypad = Keypad::default();
        assert!(keypad.button_at(4, 3).is_some());
        assert!(keypad.button_at(5, 0).is_none());
        assert!(keypad.button_at(0, 4).is_none());
    }

    #[test]
    fn test_element_ids() {
        assert_eq!(element_id(Token::Digit(7)), "btn-7");
        assert_eq!(element_id(Token::Decimal), "btn-decimal");
        assert_eq!(element_id(Token::Operator(Operation::Add)), "btn-add");
        assert_eq!(element_id(Token::ToggleSign), "btn-toggle-sign");
    }

    #[test]
    fn test_top_row() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_at(0, 0).unwrap().token, Token::Clear);
        assert_eq!(keypad.button_at(0, 1).unwrap().token, Token::ToggleSign);
        assert_eq!(keypad.button_at(0, 2).unwrap().token, Token::Percent);
        assert_eq!(
            keypad.button_at(0, 3).unwrap().token,
            Token::Operator(Operation::Divide)
        );
    }

    #[test]
    fn test_operator_column() {
        let keypad = Keypad::new();
        let column: Vec<Token> = (0..4)
            .map(|row| keypad.button_at(row, 3).unwrap().token)
            .collect();
        let expected: Vec<Token> = Operation::ALL.into_iter().map(Token::Operator).collect();
        assert_eq!(column, expected);
    }

    #[test]
    fn test_zero_spans_two_columns() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_at(4, 0).unwrap().token, Token::Digit(0));
        assert_eq!(keypad.button_at(4, 1).unwrap().token, Token::Digit(0));
        assert_eq!(keypad.button_at(4, 2).unwrap().token, Token::Decimal);
        assert_eq!(keypad.button_at(4, 3).unwrap().token, Token::Equals);
    }

    #[test]
    fn test_button_at_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.button_at(5, 0).is_none());
        assert!(keypad.button_at(0, 4).is_none());
    }

    #[test]
    fn test_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("btn-9"), Some(Token::Digit(9)));
        assert_eq!(keypad.handle_click("btn-unknown"), None);
    }

    #[test]
    fn test_is_operator() {
        let keypad = Keypad::new();
        let operators = keypad.buttons().iter().filter(|b| b.is_operator()).count();
        assert_eq!(operators, 4);
    }
}
