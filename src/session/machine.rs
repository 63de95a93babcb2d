//! Session that drives the pure engine and renders each new state.

use crate::config::{CalculatorConfig, ConfigError};
use crate::core::{EngineState, State, StateHistory, StateTransition, UiEvent};
use crate::display::{DisplayAdapter, DisplayError};
use crate::engine::process;
use crate::input::InputSource;
use crate::view::{pulse_for, DisplayView, Pulse};
use chrono::{DateTime, Utc};

/// The imperative shell around [`process`].
///
/// Owns the single [`EngineState`] and is its only writer. Each dispatched
/// event is applied, recorded, and rendered before the next is accepted.
pub struct Session<D: DisplayAdapter> {
    config: CalculatorConfig,
    current: EngineState,
    history: StateHistory<EngineState>,
    pulse: Option<Pulse>,
    display: D,
}

impl<D: DisplayAdapter> Session<D> {
    /// Create a session in the initial state.
    ///
    /// The configuration is validated again here, since its fields are
    /// public and it may have been deserialized rather than built.
    pub fn new(config: CalculatorConfig, display: D) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            current: EngineState::default(),
            history: StateHistory::new(),
            pulse: None,
            display,
        })
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &EngineState {
        &self.current
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<EngineState> {
        &self.history
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// The pulse currently stored, whether or not it has expired.
    pub fn pulse(&self) -> Option<&Pulse> {
        self.pulse.as_ref()
    }

    /// When the visible highlight should disappear, if one is running.
    pub fn pulse_deadline(&self) -> Option<DateTime<Utc>> {
        self.pulse.as_ref().map(Pulse::expires_at)
    }

    /// Derive the view as it should look at `now` (pure).
    pub fn view_at(&self, now: DateTime<Utc>) -> DisplayView {
        let highlighted = self
            .pulse
            .as_ref()
            .filter(|pulse| pulse.is_active_at(now))
            .map(|pulse| pulse.target);
        DisplayView::from_state(&self.current, &self.config.number_format, highlighted)
    }

    pub fn view(&self) -> DisplayView {
        self.view_at(Utc::now())
    }

    /// Render the current view without applying an event.
    pub fn start(&mut self) -> Result<(), DisplayError> {
        self.render_at(Utc::now())
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Result<&EngineState, DisplayError> {
        self.dispatch_at(event, Utc::now())
    }

    /// Apply `event`, record the transition, and render.
    ///
    /// The state is updated before rendering, so a display error never
    /// loses the event.
    pub fn dispatch_at(
        &mut self,
        event: UiEvent,
        now: DateTime<Utc>,
    ) -> Result<&EngineState, DisplayError> {
        let next = process(&self.current, event);
        tracing::debug!(
            event = ?event,
            from = self.current.name(),
            to = next.name(),
            "Applied event"
        );

        if let Some(target) = pulse_for(&self.current, &event) {
            tracing::debug!(highlight = ?target, "Pulse started");
            self.pulse = Some(Pulse::start(target, now, self.config.pulse_duration));
        }
        if next.is_error() && !self.current.is_error() {
            tracing::warn!(result = next.result, "Result is not a finite number");
        }
        if event == UiEvent::AllClear {
            tracing::info!("Calculator cleared");
        }

        let previous = std::mem::replace(&mut self.current, next);
        self.record(previous, event, now);

        self.render_at(now)?;
        Ok(&self.current)
    }

    /// Drop an expired pulse and re-render.
    ///
    /// Returns `true` if a highlight disappeared and the display was
    /// redrawn.
    pub fn refresh_at(&mut self, now: DateTime<Utc>) -> Result<bool, DisplayError> {
        match self.pulse {
            Some(pulse) if !pulse.is_active_at(now) => {
                tracing::debug!(highlight = ?pulse.target, "Pulse expired");
                self.pulse = None;
                self.render_at(now)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn refresh(&mut self) -> Result<bool, DisplayError> {
        self.refresh_at(Utc::now())
    }

    /// Dispatch every event the source yields, in order.
    ///
    /// Returns the number of events applied.
    pub fn run<I: InputSource>(&mut self, mut source: I) -> Result<usize, DisplayError> {
        let mut applied = 0;
        while let Some(event) = source.next_event() {
            self.dispatch(event)?;
            applied += 1;
        }
        Ok(applied)
    }

    fn record(&mut self, from: EngineState, event: UiEvent, now: DateTime<Utc>) {
        let limit = self.config.history_limit;
        if limit == 0 {
            return;
        }
        let transition = StateTransition {
            from,
            to: self.current.clone(),
            event,
            timestamp: now,
        };
        self.history = self.history.record(transition).retain_last(limit);
    }

    fn render_at(&mut self, now: DateTime<Utc>) -> Result<(), DisplayError> {
        let view = self.view_at(now);
        self.display.render(&view)
    }
}
