//! Calculator view
//!
//! Binds an [`ArithmeticEngine`] to a [`MockDom`]: events come in as
//! clicks and key presses, and after each one the display text, its font
//! size and the operator highlight are re-rendered from engine state.

use super::dom::{DomElement, DomEvent, MockDom};
use crate::core::{ArithmeticEngine, CalcResult, Operation};
use crate::input::{element_id, Keypad, Token};
use tracing::{debug, trace};

/// ID of the display element
pub const DISPLAY_ID: &str = "display-text";

/// Class marking the highlighted operator button
pub const ACTIVE_CLASS: &str = "active";

/// Font size for a display string of `len` characters
#[must_use]
pub const fn font_size_for(len: usize) -> &'static str {
    if len > 7 {
        "36px"
    } else if len > 6 {
        "42px"
    } else {
        "48px"
    }
}

/// Rendering surface for the calculator
#[derive(Debug)]
pub struct CalculatorView {
    engine: ArithmeticEngine,
    keypad: Keypad,
    dom: MockDom,
}

impl Default for CalculatorView {
    fn default() -> Self {
        Self::new(ArithmeticEngine::new())
    }
}

impl CalculatorView {
    /// Builds the calculator document around `engine` and renders it once
    #[must_use]
    pub fn new(engine: ArithmeticEngine) -> Self {
        let keypad = Keypad::new();
        let mut dom = MockDom::new();

        dom.register_element(
            DomElement::new("div")
                .with_id(DISPLAY_ID)
                .with_class("display-text"),
        );
        for button in keypad.buttons() {
            let elem = DomElement::new("button")
                .with_id(&button.id)
                .with_text(&button.token.label())
                .with_class("btn");
            let elem = match button.token {
                Token::Digit(d) => elem.with_attr("data-number", &d.to_string()),
                token if button.is_operator() => elem
                    .with_class("operator")
                    .with_attr("data-action", &token.name()),
                token => elem.with_attr("data-action", &token.name()),
            };
            dom.register_element(elem);
        }

        let mut view = Self {
            engine,
            keypad,
            dom,
        };
        view.render();
        view
    }

    /// The engine behind the view
    #[must_use]
    pub fn engine(&self) -> &ArithmeticEngine {
        &self.engine
    }

    /// The rendered document
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Text currently shown on the display
    #[must_use]
    pub fn display(&self) -> &str {
        self.dom.get_element_text(DISPLAY_ID).unwrap_or_default()
    }

    /// Font size currently applied to the display
    #[must_use]
    pub fn display_font_size(&self) -> Option<&str> {
        self.dom
            .get_element(DISPLAY_ID)
            .and_then(|e| e.style_value("font-size"))
    }

    /// The operator button carrying the highlight, if any
    #[must_use]
    pub fn highlighted_operator(&self) -> Option<&str> {
        self.dom
            .query_class(ACTIVE_CLASS)
            .next()
            .map(|e| e.id.as_str())
    }

    /// Handles one event and re-renders
    ///
    /// Events that resolve to no token are recorded and otherwise ignored.
    /// A division by zero is reported through an alert before the
    /// cleared state is rendered; the error is also returned.
    pub fn dispatch(&mut self, event: DomEvent) -> CalcResult<()> {
        let token = match &event {
            DomEvent::Click { element_id } => self.keypad.handle_click(element_id),
            DomEvent::KeyDown { key } => Token::from_key(key),
        };
        self.dom.record_event(event);

        let Some(token) = token else {
            trace!("event maps to no token");
            return Ok(());
        };

        let outcome = self.engine.apply(token);
        if let Err(err) = &outcome {
            if err.resets_engine() {
                debug!(%err, "alerting user");
                self.dom.alert(&err.user_message());
            }
        }
        self.render();
        outcome
    }

    /// Clicks the button for `token`
    pub fn press(&mut self, token: Token) -> CalcResult<()> {
        self.dispatch(DomEvent::click(&element_id(token)))
    }

    /// Types a keyboard key
    pub fn key(&mut self, key: &str) -> CalcResult<()> {
        self.dispatch(DomEvent::key_down(key))
    }

    fn render(&mut self) {
        let text = self.engine.display_text();
        if let Some(display) = self.dom.get_element_mut(DISPLAY_ID) {
            display.set_text(&text);
            display.set_style("font-size", font_size_for(text.chars().count()));
        }

        for button in self.dom.query_class_mut("operator") {
            button.remove_class(ACTIVE_CLASS);
        }
        if let Some(op) = self.engine.active_operator() {
            self.highlight(op);
        }
    }

    fn highlight(&mut self, op: Operation) {
        let Some(button) = self.keypad.find_by_token(Token::Operator(op)) else {
            return;
        };
        if let Some(elem) = self.dom.get_element_mut(&button.id) {
            elem.add_class(ACTIVE_CLASS);
        }
    }
}
