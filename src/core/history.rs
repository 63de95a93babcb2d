//! State transition history tracking.
//!
//! Provides immutable tracking of the transitions a session went through,
//! following functional programming principles. History lives only as long
//! as the session that owns it.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::{EngineState, StateHistory, StateTransition, State, UiEvent};
/// use chrono::Utc;
///
/// let from = EngineState::default();
/// let event = UiEvent::digit(4).unwrap();
/// let transition = StateTransition {
///     to: from.next(&event),
///     from,
///     event,
///     timestamp: Utc::now(),
/// };
/// let history = StateHistory::new().record(transition);
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that caused the transition
    pub event: S::Event,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// History is immutable - `record` and `retain_last` return a new history.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Keep only the newest `limit` transitions.
    pub fn retain_last(&self, limit: usize) -> Self {
        let skip = self.transitions.len().saturating_sub(limit);
        Self {
            transitions: self.transitions[skip..].to_vec(),
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the oldest `from` state, then the `to` state of each
    /// transition in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Events in the order they were applied.
    pub fn events(&self) -> impl Iterator<Item = &S::Event> + '_ {
        self.transitions.iter().map(|t| &t.event)
    }

    /// Re-run every recorded event from the oldest `from` state.
    ///
    /// Returns `None` for an empty history. For a history produced by
    /// [`State::next`] the result equals the newest `to` state under the
    /// state's `PartialEq`; a state type whose equality is not reflexive
    /// (raw `f64` fields holding NaN) will not compare equal to it.
    pub fn replay(&self) -> Option<S> {
        let first = self.transitions.first()?;
        Some(
            self.events()
                .fold(first.from.clone(), |state, event| state.next(event)),
        )
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
