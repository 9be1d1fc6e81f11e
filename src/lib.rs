//! A four-function keypad calculator.
//!
//! The [`calculator`] module holds the engine: a state snapshot that
//! consumes [`CalculatorEvent`]s and exposes a [`DisplayState`] to render.
//! The [`keypad`] module turns key labels and scripts into events.

pub mod calculator;
pub mod config;
pub mod error;
pub mod keypad;

pub use calculator::{CalculatorEvent, CalculatorState, DisplayState, Operator};
pub use error::{CalcpadError, Result};
