//! Modal error dialog

use tftlcd_display::{DisplayBackend, DisplayError, Theme};

use crate::keys::DialogChoice;
use crate::layout::{Element, Label, ERROR_DIALOG};

use super::Widget;

/// Titled box with two message lines and Confirm / Cancel / X buttons
///
/// Stateless: every poll reports which button, if any, was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ErrorDialog<'a> {
    title: &'a str,
    lines: [&'a str; 2],
}

impl<'a> ErrorDialog<'a> {
    pub const fn new(title: &'a str, line1: &'a str, line2: &'a str) -> Self {
        Self {
            title,
            lines: [line1, line2],
        }
    }

    pub fn title(&self) -> &'a str {
        self.title
    }

    pub fn lines(&self) -> [&'a str; 2] {
        self.lines
    }
}

impl Widget for ErrorDialog<'_> {
    type Output = DialogChoice;

    fn layout(&self) -> &'static [Element] {
        &ERROR_DIALOG
    }

    fn label_text(&self, label: Label) -> &str {
        match label {
            Label::Text(text) => text,
            Label::Title => self.title,
            Label::Message(i) => self.lines.get(i as usize).copied().unwrap_or(""),
        }
    }

    fn handle<B: DisplayBackend>(
        &mut self,
        code: Option<u8>,
        _display: &mut B,
        _theme: &Theme,
    ) -> Result<DialogChoice, DisplayError> {
        Ok(code
            .and_then(DialogChoice::from_code)
            .unwrap_or(DialogChoice::None))
    }
}
