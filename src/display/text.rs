//! Plain-text display adapter.

use super::{DisplayAdapter, DisplayError};
use crate::core::OperatorKind;
use crate::view::{DisplayView, Highlight};
use std::io::Write;

/// Writes each view as a small text frame:
///
/// ```text
/// 1,500 ×
/// 1,500
/// > 0
///  +   −  [×]  ÷   =
/// ```
///
/// The selected operator is bracketed and a pulsing button is wrapped in
/// parentheses.
pub struct TextDisplay<W: Write> {
    out: W,
}

impl<W: Write> TextDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn button(symbol: &str, active: bool, pulsing: bool) -> String {
    if pulsing {
        format!("({symbol})")
    } else if active {
        format!("[{symbol}]")
    } else {
        format!(" {symbol} ")
    }
}

/// The operator row for `view`, as rendered by [`TextDisplay`].
pub(crate) fn operator_row(view: &DisplayView) -> String {
    let mut buttons: Vec<String> = OperatorKind::ALL
        .iter()
        .map(|&op| {
            button(
                op.symbol(),
                view.active_operator == Some(op),
                view.highlighted == Some(Highlight::Operator(op)),
            )
        })
        .collect();
    buttons.push(button("=", false, view.highlighted == Some(Highlight::Equals)));
    buttons.join(" ")
}

impl<W: Write> DisplayAdapter for TextDisplay<W> {
    fn render(&mut self, view: &DisplayView) -> Result<(), DisplayError> {
        writeln!(self.out, "{}", view.secondary_text)?;
        writeln!(self.out, "{}", view.primary_text)?;
        writeln!(self.out, "> {}", view.entry_text)?;
        writeln!(self.out, "{}", operator_row(view))?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineState;
    use crate::format::NumberFormat;
    use std::io;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn pending_mul() -> DisplayView {
        let state = EngineState {
            first_value: Some(1500.0),
            pending_op: Some(OperatorKind::Mul),
            result: 1500.0,
            ..EngineState::default()
        };
        DisplayView::from_state(&state, &NumberFormat::default(), None)
    }

    #[test]
    fn renders_four_lines() {
        let mut display = TextDisplay::new(Vec::new());
        display.render(&pending_mul()).unwrap();

        let text = String::from_utf8(display.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "1,500 ×");
        assert_eq!(lines[1], "1,500");
        assert_eq!(lines[2], "> 0");
        assert_eq!(lines[3], " +   −  [×]  ÷   = ");
    }

    #[test]
    fn pulsing_button_is_parenthesized() {
        let view = DisplayView {
            highlighted: Some(Highlight::Equals),
            active_operator: None,
            ..pending_mul()
        };
        assert!(operator_row(&view).ends_with("(=)"));

        let view = DisplayView {
            highlighted: Some(Highlight::Operator(OperatorKind::Mul)),
            ..pending_mul()
        };
        assert!(operator_row(&view).contains("(×)"));
        assert!(!operator_row(&view).contains("[×]"));
    }

    #[test]
    fn write_failure_is_reported() {
        let mut display = TextDisplay::new(FailingWriter);
        let err = display.render(&pending_mul()).unwrap_err();
        assert!(matches!(err, DisplayError::Io(_)));
    }
}
