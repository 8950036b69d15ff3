//! Rendering surface
//!
//! A mock DOM stands in for the browser so the full click-to-display loop
//! runs without web bindings.

mod calculator_view;
mod dom;

pub use calculator_view::{font_size_for, CalculatorView, ACTIVE_CLASS, DISPLAY_ID};
pub use dom::{DomElement, DomEvent, MockDom};
