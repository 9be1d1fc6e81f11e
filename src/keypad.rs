//! Keypad labels and key scripts.
//!
//! Translates the labels printed on the keypad into engine events, and
//! splits compact scripts such as `10-4=*2=` into a sequence of key
//! presses.

use crate::calculator::{CalculatorEvent, Operator};
use crate::error::{CalcpadError, Result};
use lazy_static::lazy_static;
use regex::Regex;

/// Keypad rows in display order.
pub const KEYPAD_LAYOUT: &[&[&str]] = &[
    &["AC", "C", "\u{f7}"],
    &["7", "8", "9", "\u{d7}"],
    &["4", "5", "6", "\u{2212}"],
    &["1", "2", "3", "+"],
    &["0", ".", "="],
];

lazy_static! {
    /// Matches a single key at the start of the remaining script.
    /// `AC` is tried before `C` so all-clear is not read as two keys.
    static ref KEY_TOKEN: Regex = Regex::new(
        "^(?:(?i:ac)|(?i:c)|[0-9]|\\.|=|[+\\-*/xX\u{d7}\u{f7}\u{2212}])"
    ).unwrap();
}

/// Map a single keypad label to its event.
pub fn parse_key(label: &str) -> Option<CalculatorEvent> {
    let label = label.trim();

    if label.eq_ignore_ascii_case("ac") {
        return Some(CalculatorEvent::AllClear);
    }
    if label.eq_ignore_ascii_case("c") {
        return Some(CalculatorEvent::Clear);
    }

    match label {
        "." => Some(CalculatorEvent::Decimal),
        "=" => Some(CalculatorEvent::Calculate),
        _ => {
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_digit() => Some(CalculatorEvent::Digit(c)),
                _ => Operator::from_symbol(label).map(CalculatorEvent::Operator),
            }
        }
    }
}

/// Split a key script into events.
///
/// Whitespace is skipped. Any character that is not a key fails the whole
/// script with its character position.
pub fn tokenize(script: &str) -> Result<Vec<CalculatorEvent>> {
    let mut events = Vec::new();
    let mut rest = script;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
            continue;
        }

        let Some(token) = KEY_TOKEN.find(rest) else {
            let offset = script.len() - rest.len();
            return Err(CalcpadError::UnknownKey {
                key: c.to_string(),
                position: script[..offset].chars().count(),
            });
        };

        // Every token the regex accepts is a valid key label.
        if let Some(event) = parse_key(token.as_str()) {
            events.push(event);
        }
        rest = &rest[token.end()..];
    }

    Ok(events)
}
