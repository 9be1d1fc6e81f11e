//! Binary arithmetic and result formatting.
//!
//! Operands arrive as typed buffers and are parsed as `f64`. Division by
//! zero produces NaN, which is reported as an error result rather than a
//! failure.

use super::event::Operator;

/// Text shown when a calculation has no numeric result.
pub const ERROR_DISPLAY: &str = "Error";

/// Result of applying a pending operator to two operands.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// Calculation produced a number.
    Success {
        /// The numeric value.
        value: f64,
        /// The value formatted for the display.
        display: String,
    },
    /// Calculation produced the NaN sentinel.
    Error {
        /// Message to display.
        message: String,
    },
}

impl CalcResult {
    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display, .. } => display,
            Self::Error { message } => message,
        }
    }
}

impl Operator {
    /// Apply the operator to two numbers. Division by zero yields NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    f64::NAN
                } else {
                    lhs / rhs
                }
            }
        }
    }
}

/// Evaluate `lhs op rhs` from operand buffers.
///
/// Returns `None` if either buffer does not parse as a number.
pub fn evaluate(lhs: &str, op: Operator, rhs: &str) -> Option<CalcResult> {
    let lhs: f64 = lhs.parse().ok()?;
    let rhs: f64 = rhs.parse().ok()?;

    let value = op.apply(lhs, rhs);
    if value.is_nan() {
        return Some(CalcResult::Error {
            message: ERROR_DISPLAY.to_string(),
        });
    }

    Some(CalcResult::Success {
        display: format_result(value),
        value,
    })
}

/// Format a result for display.
///
/// Uses the shortest round-trip representation and strips a single
/// trailing `".0"`, so `8.0` shows as `8` while `0.1 + 0.2` keeps its
/// full precision.
pub fn format_result(value: f64) -> String {
    let formatted = format!("{:?}", value);
    match formatted.strip_suffix(".0") {
        Some(integral) => integral.to_string(),
        None => formatted,
    }
}
