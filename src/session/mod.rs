//! The imperative shell of the calculator.
//!
//! A [`Session`] connects an [`InputSource`](crate::input::InputSource)
//! to the pure [`engine`](crate::engine) and a
//! [`DisplayAdapter`](crate::display::DisplayAdapter):
//!
//! ```text
//! Input Source → process(state, event) → new state → DisplayAdapter::render(view)
//! ```
//!
//! The session is also the only place that reads the clock (for the
//! highlight pulse) or logs.

mod machine;

pub use machine::Session;
