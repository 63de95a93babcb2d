//! Calculator state and the events that drive it.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary operators.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum OperatorKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl OperatorKind {
    /// All operators in keypad order.
    pub const ALL: [OperatorKind; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Symbol shown next to the pending operand.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "−",
            Self::Mul => "×",
            Self::Div => "÷",
        }
    }

    /// Human-readable button title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Sub => "Subtract",
            Self::Mul => "Multiply",
            Self::Div => "Divide",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A decimal digit, always in `0..=9`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` unless `value` is in `0..=9`.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("digit out of range: {value}"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// A key that extends the number being typed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum EntryKey {
    Digit(Digit),
    Dot,
}

impl EntryKey {
    pub fn from_char(ch: char) -> Option<Self> {
        if ch == '.' {
            Some(Self::Dot)
        } else {
            Digit::from_char(ch).map(Self::Digit)
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Digit(digit) => digit.as_char(),
            Self::Dot => '.',
        }
    }
}

/// A single user interaction delivered by the input source.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum UiEvent {
    DigitOrDot(EntryKey),
    Backspace,
    ToggleSign,
    Operator(OperatorKind),
    Equals,
    ClearEntry,
    AllClear,
}

impl UiEvent {
    /// Shorthand for a digit press. Values above 9 are not digits.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(|d| Self::DigitOrDot(EntryKey::Digit(d)))
    }

    pub const fn dot() -> Self {
        Self::DigitOrDot(EntryKey::Dot)
    }
}

/// The complete state of the calculator.
///
/// Replaced wholesale on every event; see [`crate::engine::process`].
///
/// Equality compares the numeric fields bit for bit, so an error state
/// holding NaN equals its own clone, while `0.0` and `-0.0` differ.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineState {
    /// Raw text of the number being typed. Empty means no entry yet.
    pub input_buffer: String,
    /// Operand captured when the first operator was pressed.
    #[serde(with = "super::float::option", default)]
    pub first_value: Option<f64>,
    /// Operator chosen but not yet resolved.
    pub pending_op: Option<OperatorKind>,
    /// Last computed accumulator. Non-finite values display as an error.
    #[serde(with = "super::float")]
    pub result: f64,
    /// Set by equals, cleared by the next digit entry.
    pub just_calculated: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            input_buffer: String::new(),
            first_value: None,
            pending_op: None,
            result: 0.0,
            just_calculated: false,
        }
    }
}

impl PartialEq for EngineState {
    fn eq(&self, other: &Self) -> bool {
        self.input_buffer == other.input_buffer
            && self.first_value.map(f64::to_bits) == other.first_value.map(f64::to_bits)
            && self.pending_op == other.pending_op
            && self.result.to_bits() == other.result.to_bits()
            && self.just_calculated == other.just_calculated
    }
}

impl Eq for EngineState {}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when every field holds its initial default.
    pub fn is_initial(&self) -> bool {
        self.input_buffer.is_empty()
            && self.first_value.is_none()
            && self.pending_op.is_none()
            && self.result == 0.0
            && !self.just_calculated
    }
}

impl State for EngineState {
    type Event = UiEvent;

    fn name(&self) -> &str {
        if self.is_error() {
            "Error"
        } else if self.just_calculated {
            "Calculated"
        } else if self.pending_op.is_some() {
            "Pending"
        } else if self.is_initial() {
            "Idle"
        } else {
            "Entering"
        }
    }

    fn next(&self, event: &UiEvent) -> Self {
        crate::engine::process(self, *event)
    }

    fn is_error(&self) -> bool {
        !self.result.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_initial() {
        let state = EngineState::default();
        assert!(state.is_initial());
        assert_eq!(state.name(), "Idle");
        assert!(!state.is_error());
        assert!(!state.is_final());
    }

    #[test]
    fn name_reflects_phase() {
        let entering = EngineState {
            input_buffer: "12".to_string(),
            ..EngineState::default()
        };
        assert_eq!(entering.name(), "Entering");

        let pending = EngineState {
            first_value: Some(12.0),
            pending_op: Some(OperatorKind::Add),
            result: 12.0,
            ..EngineState::default()
        };
        assert_eq!(pending.name(), "Pending");

        let calculated = EngineState {
            first_value: Some(4.0),
            result: 4.0,
            just_calculated: true,
            ..EngineState::default()
        };
        assert_eq!(calculated.name(), "Calculated");

        let failed = EngineState {
            result: f64::INFINITY,
            just_calculated: true,
            ..EngineState::default()
        };
        assert_eq!(failed.name(), "Error");
        assert!(failed.is_error());
    }

    #[test]
    fn digit_rejects_out_of_range_values() {
        assert_eq!(Digit::new(9).map(Digit::as_char), Some('9'));
        assert!(Digit::new(10).is_none());
        assert!(Digit::try_from(42).is_err());
        assert_eq!(Digit::from_char('3').map(Digit::value), Some(3));
        assert!(Digit::from_char('x').is_none());
    }

    #[test]
    fn entry_key_from_char() {
        assert_eq!(EntryKey::from_char('.'), Some(EntryKey::Dot));
        assert_eq!(EntryKey::from_char('0').map(EntryKey::as_char), Some('0'));
        assert!(EntryKey::from_char('-').is_none());
    }

    #[test]
    fn operator_symbols_match_keypad() {
        let symbols: Vec<_> = OperatorKind::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, vec!["+", "−", "×", "÷"]);
        assert_eq!(OperatorKind::Div.to_string(), "÷");
        assert_eq!(OperatorKind::Sub.title(), "Subtract");
    }

    #[test]
    fn digit_deserialization_is_validated() {
        let ok: Digit = serde_json::from_str("7").unwrap();
        assert_eq!(ok.value(), 7);
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }

    #[test]
    fn event_serializes_correctly() {
        let event = UiEvent::Operator(OperatorKind::Mul);
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: UiEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    fn divided_by_zero() -> EngineState {
        EngineState {
            first_value: Some(f64::INFINITY),
            result: f64::INFINITY,
            just_calculated: true,
            ..EngineState::default()
        }
    }

    #[test]
    fn error_state_serializes_correctly() {
        let state = divided_by_zero();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains(r#""result":"inf""#));

        let deserialized: EngineState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, state);
        assert!(deserialized.is_error());
    }

    #[test]
    fn infinite_operand_survives_serialization() {
        let state = EngineState {
            first_value: Some(f64::NEG_INFINITY),
            pending_op: Some(OperatorKind::Add),
            result: 3.0,
            ..EngineState::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: EngineState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.first_value, Some(f64::NEG_INFINITY));
        assert_eq!(deserialized, state);
    }

    #[test]
    fn nan_state_equals_its_clone() {
        let state = EngineState {
            first_value: Some(f64::NAN),
            result: f64::NAN,
            just_calculated: true,
            ..EngineState::default()
        };
        assert_eq!(state.clone(), state);
        assert_ne!(state, divided_by_zero());
    }

    #[test]
    fn signed_zero_results_are_distinct() {
        let negative = EngineState {
            result: -0.0,
            ..EngineState::default()
        };
        assert_ne!(negative, EngineState::default());
        assert!(negative.is_initial());
    }
}
