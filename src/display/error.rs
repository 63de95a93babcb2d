//! Display adapter error types.

use thiserror::Error;

/// Errors a display adapter can report while rendering.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Writing the rendered view failed
    #[error("Display write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The adapter refused the view
    #[error("Display rejected view: {0}")]
    Rejected(String),
}
