//! Calculator engine for a four-function keypad.
//!
//! This module provides:
//! - The event and operator types forwarded by the keypad
//! - An immutable state snapshot with a total transition function
//! - Binary evaluation and result formatting
//! - Copying results to the clipboard

mod clipboard;
mod engine;
mod evaluation;
mod event;
mod state;

pub use clipboard::copy_display;
pub use evaluation::{CalcResult, ERROR_DISPLAY, evaluate, format_result};
pub use event::{CalculatorEvent, Operator};
pub use state::{CalculatorState, DisplayState, MAX_OPERAND_LEN};
