//! Core calculator types and logic.
//!
//! This module contains the pure functional core:
//! - State definitions via the `State` trait
//! - The calculator's state, operators and events
//! - Guard predicates for transition control
//! - Immutable history tracking
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod float;
mod guard;
mod history;
mod model;
mod state;

pub use guard::{Guard, CAN_CHAIN, CAN_EVALUATE};
pub use history::{StateHistory, StateTransition};
pub use model::{Digit, EngineState, EntryKey, OperatorKind, UiEvent};
pub use state::State;
