//! Engine state and the display snapshot handed to the view.

use super::event::Operator;
use serde::{Deserialize, Serialize};

/// Longest operand buffer that typing can produce.
pub const MAX_OPERAND_LEN: usize = 12;

/// Text shown for an empty operand buffer.
pub(crate) const EMPTY_DISPLAY: &str = "0";

/// What the presentation layer renders: the active input and the running
/// expression, each on its own line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    pub current_input: String,
    pub full_expression: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            current_input: EMPTY_DISPLAY.to_string(),
            full_expression: String::new(),
        }
    }
}

/// Immutable calculator snapshot.
///
/// Each event produces a replacement value through
/// [`CalculatorState::apply`](crate::calculator::CalculatorState::apply).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculatorState {
    pub(crate) operand1: String,
    pub(crate) operand2: String,
    pub(crate) operator: Option<Operator>,
    pub(crate) display: DisplayState,
}

impl CalculatorState {
    /// The initial all-clear state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operand1(&self) -> &str {
        &self.operand1
    }

    pub fn operand2(&self) -> &str {
        &self.operand2
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn current_input(&self) -> &str {
        &self.display.current_input
    }

    pub fn full_expression(&self) -> &str {
        &self.display.full_expression
    }

    /// Check if the state is indistinguishable from a fresh session.
    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }

    /// The buffer typing currently appends to.
    pub(crate) fn active_operand(&self) -> &str {
        if self.operator.is_some() {
            &self.operand2
        } else {
            &self.operand1
        }
    }

    pub(crate) fn active_operand_mut(&mut self) -> &mut String {
        if self.operator.is_some() {
            &mut self.operand2
        } else {
            &mut self.operand1
        }
    }
}

/// Render a buffer, showing "0" when it is empty.
pub(crate) fn display_text(buffer: &str) -> String {
    if buffer.is_empty() {
        EMPTY_DISPLAY.to_string()
    } else {
        buffer.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_display() {
        let state = CalculatorState::new();
        assert_eq!(state.current_input(), "0");
        assert_eq!(state.full_expression(), "");
        assert!(state.pending_operator().is_none());
        assert!(state.is_cleared());
    }

    #[test]
    fn test_display_serializes_camel_case() {
        let json = serde_json::to_string(&DisplayState::default()).unwrap();
        assert_eq!(json, r#"{"currentInput":"0","fullExpression":""}"#);
    }

    #[test]
    fn test_active_operand_follows_operator() {
        let mut state = CalculatorState {
            operand1: "4".to_string(),
            operand2: "2".to_string(),
            ..Default::default()
        };
        assert_eq!(state.active_operand(), "4");

        state.operator = Some(Operator::Add);
        assert_eq!(state.active_operand(), "2");
    }
}
