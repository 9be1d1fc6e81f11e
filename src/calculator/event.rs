//! Events accepted by the calculator engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary operation selected on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// The symbol shown in the running expression.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{d7}",
            Self::Divide => "\u{f7}",
        }
    }

    /// Parse an operator from its display symbol or ASCII form.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "\u{2212}" => Some(Self::Subtract),
            "*" | "x" | "X" | "\u{d7}" => Some(Self::Multiply),
            "/" | "\u{f7}" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A discrete user intent forwarded by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalculatorEvent {
    /// A digit key, `'0'..='9'`. Any other character is ignored by the engine.
    Digit(char),
    Operator(Operator),
    Decimal,
    /// Undo the most recent entry.
    Clear,
    AllClear,
    Calculate,
}

impl From<Operator> for CalculatorEvent {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_ascii_aliases() {
        assert_eq!(Operator::from_symbol("-"), Some(Operator::Subtract));
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("x"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("%"), None);
    }

    #[test]
    fn test_display_uses_symbol() {
        assert_eq!(Operator::Multiply.to_string(), "\u{d7}");
    }
}
