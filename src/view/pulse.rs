//! Cosmetic highlight pulse on operator and equals presses.

use super::Highlight;
use crate::core::{EngineState, UiEvent, CAN_EVALUATE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default visible time of a pulse.
pub const DEFAULT_PULSE_DURATION: Duration = Duration::from_millis(300);

/// A highlight that clears itself once its duration has elapsed.
///
/// The pulse is a deadline, not a timer: nothing fires when it expires.
/// Readers ask [`Pulse::is_active_at`] when they render.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
    pub target: Highlight,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
}

impl Pulse {
    pub fn start(target: Highlight, started_at: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            target,
            started_at,
            duration,
        }
    }

    /// Time elapsed since the pulse started (pure).
    ///
    /// A `now` earlier than `started_at` counts as zero elapsed.
    pub fn elapsed_at(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.elapsed_at(now) < self.duration
    }

    /// Instant at which the highlight disappears.
    pub fn expires_at(&self) -> DateTime<Utc> {
        chrono::Duration::from_std(self.duration)
            .ok()
            .and_then(|delta| self.started_at.checked_add_signed(delta))
            .unwrap_or(self.started_at)
    }
}

/// Highlight triggered by applying `event` to `previous`, if any.
///
/// Every operator press pulses its button. Equals pulses only when it
/// actually evaluates.
pub fn pulse_for(previous: &EngineState, event: &UiEvent) -> Option<Highlight> {
    match event {
        UiEvent::Operator(op) => Some(Highlight::Operator(*op)),
        UiEvent::Equals if CAN_EVALUATE.check(previous) => Some(Highlight::Equals),
        _ => None,
    }
}
