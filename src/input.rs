//! Input sources and the button labels they speak.

use crate::core::{EntryKey, OperatorKind, UiEvent};
use std::str::FromStr;
use thiserror::Error;

/// Delivers one event per user interaction.
///
/// Any iterator of events is an input source, which makes scripted
/// sessions and tests trivial.
pub trait InputSource {
    fn next_event(&mut self) -> Option<UiEvent>;
}

impl<I: Iterator<Item = UiEvent>> InputSource for I {
    fn next_event(&mut self) -> Option<UiEvent> {
        self.next()
    }
}

/// A label that names no calculator button.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown button label: {0:?}")]
pub struct UnknownButton(pub String);

/// Button labels, row by row: operations, numpad, actions.
pub const KEYPAD: [&[&str]; 6] = [
    &["+", "−", "×", "÷"],
    &["7", "8", "9"],
    &["4", "5", "6"],
    &["1", "2", "3"],
    &["±", "0", "."],
    &["⌫", "=", "CE", "AC"],
];

impl UiEvent {
    /// Map a button label to its event.
    ///
    /// ASCII spellings of the operators (`-`, `*`, `/`) are accepted too.
    ///
    /// ```rust
    /// use chaincalc::core::{OperatorKind, UiEvent};
    ///
    /// assert_eq!(UiEvent::from_label("×"), Ok(UiEvent::Operator(OperatorKind::Mul)));
    /// assert_eq!("AC".parse::<UiEvent>(), Ok(UiEvent::AllClear));
    /// assert!(UiEvent::from_label("%").is_err());
    /// ```
    pub fn from_label(label: &str) -> Result<Self, UnknownButton> {
        let event = match label {
            "+" => Self::Operator(OperatorKind::Add),
            "−" | "-" => Self::Operator(OperatorKind::Sub),
            "×" | "*" => Self::Operator(OperatorKind::Mul),
            "÷" | "/" => Self::Operator(OperatorKind::Div),
            "=" => Self::Equals,
            "±" => Self::ToggleSign,
            "⌫" => Self::Backspace,
            "CE" => Self::ClearEntry,
            "AC" => Self::AllClear,
            _ => {
                let mut chars = label.chars();
                match (chars.next().and_then(EntryKey::from_char), chars.next()) {
                    (Some(key), None) => Self::DigitOrDot(key),
                    _ => return Err(UnknownButton(label.to_string())),
                }
            }
        };
        Ok(event)
    }

    /// The canonical label of the button producing this event.
    pub fn label(&self) -> String {
        match self {
            Self::DigitOrDot(key) => key.as_char().to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::ClearEntry => "CE".to_string(),
            Self::AllClear => "AC".to_string(),
        }
    }
}

impl FromStr for UiEvent {
    type Err = UnknownButton;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// Parse a whitespace-separated script of button labels.
///
/// ```rust
/// use chaincalc::input::parse_script;
///
/// let events = parse_script("7 + 3 × 2 =").unwrap();
/// assert_eq!(events.len(), 6);
/// ```
pub fn parse_script(script: &str) -> Result<Vec<UiEvent>, UnknownButton> {
    script.split_whitespace().map(UiEvent::from_label).collect()
}
