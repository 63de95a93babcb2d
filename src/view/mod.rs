//! The derived view handed to display adapters.
//!
//! A [`DisplayView`] is a pure projection of an [`EngineState`]: building
//! one never changes the state, and the engine formats numbers for no
//! other purpose.

mod pulse;

pub use pulse::{pulse_for, Pulse, DEFAULT_PULSE_DURATION};

use crate::core::{EngineState, OperatorKind};
use crate::format::{format_number, NumberFormat};
use serde::{Deserialize, Serialize};

/// Label shown above the result when no operator is pending.
pub const IDLE_LABEL: &str = "Result";

/// Placeholder shown in the entry line while nothing is typed.
pub const ENTRY_PLACEHOLDER: &str = "0";

/// Button currently pulsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Highlight {
    Operator(OperatorKind),
    Equals,
}

/// Everything a display adapter needs to draw the calculator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayView {
    /// The formatted accumulator, or `"Error"`.
    pub primary_text: String,
    /// `"<operand> <symbol>"` while an operator is pending, else a label.
    pub secondary_text: String,
    /// The number being typed, or a placeholder.
    pub entry_text: String,
    /// Operator button shown as selected.
    pub active_operator: Option<OperatorKind>,
    /// Button currently pulsing.
    pub highlighted: Option<Highlight>,
}

impl DisplayView {
    /// Project `state` into display text.
    ///
    /// ```rust
    /// use chaincalc::core::{EngineState, OperatorKind};
    /// use chaincalc::format::NumberFormat;
    /// use chaincalc::view::DisplayView;
    ///
    /// let state = EngineState {
    ///     first_value: Some(1500.0),
    ///     pending_op: Some(OperatorKind::Mul),
    ///     result: 1500.0,
    ///     ..EngineState::default()
    /// };
    /// let view = DisplayView::from_state(&state, &NumberFormat::default(), None);
    /// assert_eq!(view.primary_text, "1,500");
    /// assert_eq!(view.secondary_text, "1,500 ×");
    /// assert_eq!(view.entry_text, "0");
    /// ```
    pub fn from_state(
        state: &EngineState,
        format: &NumberFormat,
        highlighted: Option<Highlight>,
    ) -> Self {
        let secondary_text = match (state.first_value, state.pending_op) {
            (Some(first), Some(op)) => format!("{} {}", format_number(first, format), op.symbol()),
            _ => IDLE_LABEL.to_string(),
        };
        let entry_text = if state.input_buffer.is_empty() {
            ENTRY_PLACEHOLDER.to_string()
        } else {
            state.input_buffer.clone()
        };

        Self {
            primary_text: format_number(state.result, format),
            secondary_text,
            entry_text,
            active_operator: state.pending_op,
            highlighted,
        }
    }

    pub fn is_error(&self) -> bool {
        self.primary_text == crate::format::ERROR_TEXT
    }
}
