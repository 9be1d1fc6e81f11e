//! The calculator transition function.
//!
//! `apply` accepts every event in every state. Events that cannot take
//! effect leave the state unchanged and are only logged.

use super::evaluation::{CalcResult, evaluate};
use super::event::{CalculatorEvent, Operator};
use super::state::{CalculatorState, DisplayState, MAX_OPERAND_LEN, display_text};
use tracing::trace;

impl CalculatorState {
    /// Apply an event, returning the next state.
    pub fn apply(&self, event: &CalculatorEvent) -> CalculatorState {
        let mut next = self.clone();
        match *event {
            CalculatorEvent::Digit(digit) => next.enter_digit(digit),
            CalculatorEvent::Operator(op) => next.enter_operator(op),
            CalculatorEvent::Decimal => next.enter_decimal(),
            CalculatorEvent::Calculate => next.calculate(),
            CalculatorEvent::Clear => next.clear_last(),
            CalculatorEvent::AllClear => next = CalculatorState::default(),
        }
        next
    }

    /// Apply a sequence of events in order.
    pub fn apply_all<'a>(&self, events: impl IntoIterator<Item = &'a CalculatorEvent>) -> Self {
        events
            .into_iter()
            .fold(self.clone(), |state, event| state.apply(event))
    }

    fn enter_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            trace!(?digit, "ignoring non-digit key");
            return;
        }

        let target = self.active_operand_mut();
        if target.len() >= MAX_OPERAND_LEN {
            trace!(len = target.len(), "operand full, ignoring digit");
            return;
        }
        if target.as_str() == "0" {
            target.clear();
        }
        target.push(digit);

        self.display.current_input = self.active_operand().to_string();
    }

    fn enter_decimal(&mut self) {
        let target = self.active_operand_mut();
        if target.contains('.') {
            trace!("operand already has a decimal point");
            return;
        }
        if target.is_empty() {
            target.push('0');
        }
        target.push('.');

        self.display.current_input = self.active_operand().to_string();
    }

    fn enter_operator(&mut self, op: Operator) {
        if self.operand1.is_empty() {
            trace!(%op, "no first operand, ignoring operator");
            return;
        }

        self.operator = Some(op);
        self.display = DisplayState {
            current_input: display_text(&self.operand2),
            full_expression: format!("{} {}", self.operand1, op.symbol()),
        };
    }

    fn calculate(&mut self) {
        let Some(op) = self.operator else {
            trace!("no pending operator, nothing to calculate");
            return;
        };
        if self.operand1.is_empty() || self.operand2.is_empty() {
            trace!("missing operand, nothing to calculate");
            return;
        }
        let Some(result) = evaluate(&self.operand1, op, &self.operand2) else {
            trace!(
                operand1 = %self.operand1,
                operand2 = %self.operand2,
                "operands do not parse, ignoring calculate"
            );
            return;
        };

        *self = CalculatorState::default();
        match result {
            CalcResult::Success { display, .. } => {
                self.display.current_input = display.clone();
                self.operand1 = display;
            }
            CalcResult::Error { message } => {
                self.display.current_input = message;
            }
        }
    }

    fn clear_last(&mut self) {
        if !self.operand2.is_empty() {
            self.operand2.pop();
            self.display.current_input = display_text(&self.operand2);
        } else if self.operator.is_some() {
            self.operator = None;
            self.display = DisplayState {
                current_input: display_text(&self.operand1),
                full_expression: String::new(),
            };
        } else if !self.operand1.is_empty() {
            self.operand1.pop();
            self.display.current_input = display_text(&self.operand1);
        }
    }
}
