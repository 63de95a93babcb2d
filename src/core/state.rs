//! Core State trait for calculator states.
//!
//! A state is an immutable value: every transition produces a new value
//! through the pure [`State::next`] function rather than mutating in place.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for states driven by a pure transition function.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: states are compared when replaying history
/// - `Debug`: states are debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states can be inspected as data
///
/// # Example
///
/// ```rust
/// use chaincalc::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
/// }
///
/// impl State for Lamp {
///     type Event = ();
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
///
///     fn next(&self, _event: &()) -> Self {
///         match self {
///             Self::Off => Self::On,
///             Self::On => Self::Off,
///         }
///     }
/// }
///
/// assert_eq!(Lamp::Off.next(&()), Lamp::On);
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Input that drives transitions out of this state.
    type Event: Clone + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync;

    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Compute the state that follows `event`.
    ///
    /// Must be pure and total: the same state and event always produce
    /// the same successor, and no event is rejected.
    fn next(&self, event: &Self::Event) -> Self;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Error states still accept events; they only describe what is shown.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
