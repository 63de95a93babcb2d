//! Chaincalc: a pure left-to-right chaining calculator engine
//!
//! Chaincalc follows the "pure core, imperative shell" philosophy. The
//! engine is a total, side-effect free function from (state, event) to the
//! next state; rendering, timing and logging live in a thin session shell.
//!
//! # Core Concepts
//!
//! - **State**: [`EngineState`] holds the input buffer, the accumulator and
//!   the pending operator, and is replaced wholesale on every event
//! - **Engine**: [`engine::process`] applies a [`UiEvent`]; operator chaining
//!   is strictly left to right with no operator precedence
//! - **View**: [`view::DisplayView`] is the formatted projection a display
//!   adapter draws
//! - **Session**: [`session::Session`] owns the state, a bounded history
//!   and the cosmetic highlight pulse
//!
//! # Example
//!
//! ```rust
//! use chaincalc::config::CalculatorConfig;
//! use chaincalc::display::MemoryDisplay;
//! use chaincalc::input::parse_script;
//! use chaincalc::session::Session;
//!
//! let mut session = Session::new(CalculatorConfig::default(), MemoryDisplay::new()).unwrap();
//! session.run(parse_script("7 + 3 × 2 =").unwrap().into_iter()).unwrap();
//! assert_eq!(session.view().primary_text, "20");
//!
//! session.run(parse_script("AC 8 ÷ 0 =").unwrap().into_iter()).unwrap();
//! assert_eq!(session.view().primary_text, "Error");
//! ```

pub mod config;
pub mod core;
pub mod display;
pub mod engine;
pub mod format;
pub mod input;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::core::{EngineState, OperatorKind, State, UiEvent};
pub use config::{CalculatorConfig, ConfigBuilder, ConfigError};
pub use display::{DisplayAdapter, DisplayError};
pub use session::Session;
pub use view::DisplayView;
