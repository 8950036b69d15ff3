//! Input side: the token vocabulary and the keypad that produces it

mod keypad;
mod token;

pub use keypad::{element_id, Keypad, KeypadButton};
pub use token::Token;
