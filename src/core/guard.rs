//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether a transition
//! applies. They are plain function pointers so they can live in `const`s.

use super::model::EngineState;
use super::state::State;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::{EngineState, Guard};
///
/// fn has_entry(state: &EngineState) -> bool {
///     !state.input_buffer.is_empty()
/// }
///
/// let guard: Guard<EngineState> = Guard::new(has_entry);
/// assert!(!guard.check(&EngineState::default()));
/// ```
pub struct Guard<S: State> {
    predicate: fn(&S) -> bool,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub const fn new(predicate: fn(&S) -> bool) -> Self {
        Guard { predicate }
    }

    /// Check if the guard allows transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: State> Copy for Guard<S> {}

fn has_pending_operation(state: &EngineState) -> bool {
    state.first_value.is_some() && state.pending_op.is_some()
}

fn can_chain(state: &EngineState) -> bool {
    state.pending_op.is_some() && !state.just_calculated
}

/// Equals only evaluates once an operand and an operator are both held.
pub const CAN_EVALUATE: Guard<EngineState> = Guard::new(has_pending_operation);

/// A second operator folds the pending operation into the accumulator.
pub const CAN_CHAIN: Guard<EngineState> = Guard::new(can_chain);
