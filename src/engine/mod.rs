//! The calculator engine: a pure transition function over [`EngineState`].
//!
//! Nothing here performs I/O, reads the clock, or logs. The session shell
//! in [`crate::session`] wraps these functions with rendering and history.
//!
//! [`EngineState`]: crate::core::EngineState

mod arithmetic;
mod transition;

pub use arithmetic::{calculate, parse_number};
pub use transition::process;
