//! Display adapters: the presentation side of the imperative shell.
//!
//! An adapter receives a fully derived [`DisplayView`] and is responsible
//! for everything visual. Two adapters ship with the crate:
//!
//! - [`TextDisplay`] writes a plain-text frame to any `io::Write`
//! - [`MemoryDisplay`] keeps every frame, for headless hosts and tests

mod error;
mod text;

pub use error::DisplayError;
pub use text::TextDisplay;

use crate::view::DisplayView;

/// Renders calculator views.
pub trait DisplayAdapter {
    fn render(&mut self, view: &DisplayView) -> Result<(), DisplayError>;
}

impl<D: DisplayAdapter + ?Sized> DisplayAdapter for &mut D {
    fn render(&mut self, view: &DisplayView) -> Result<(), DisplayError> {
        (**self).render(view)
    }
}

impl<D: DisplayAdapter + ?Sized> DisplayAdapter for Box<D> {
    fn render(&mut self, view: &DisplayView) -> Result<(), DisplayError> {
        (**self).render(view)
    }
}

/// Adapter that records every rendered frame.
#[derive(Clone, Debug, Default)]
pub struct MemoryDisplay {
    frames: Vec<DisplayView>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[DisplayView] {
        &self.frames
    }

    pub fn last(&self) -> Option<&DisplayView> {
        self.frames.last()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl DisplayAdapter for MemoryDisplay {
    fn render(&mut self, view: &DisplayView) -> Result<(), DisplayError> {
        self.frames.push(view.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineState;
    use crate::format::NumberFormat;

    fn initial_view() -> DisplayView {
        DisplayView::from_state(&EngineState::default(), &NumberFormat::default(), None)
    }

    #[test]
    fn memory_display_records_frames() {
        let mut display = MemoryDisplay::new();
        display.render(&initial_view()).unwrap();
        display.render(&initial_view()).unwrap();

        assert_eq!(display.frames().len(), 2);
        assert_eq!(display.last().map(|v| v.primary_text.as_str()), Some("0"));

        display.clear();
        assert!(display.frames().is_empty());
    }

    fn render_once<D: DisplayAdapter>(mut display: D) -> Result<(), DisplayError> {
        display.render(&initial_view())
    }

    #[test]
    fn adapters_work_through_references_and_boxes() {
        let mut display = MemoryDisplay::new();
        render_once(&mut display).unwrap();
        assert_eq!(display.frames().len(), 1);

        let boxed: Box<dyn DisplayAdapter> = Box::new(MemoryDisplay::new());
        assert!(render_once(boxed).is_ok());
    }
}
