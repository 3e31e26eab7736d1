//! Input widgets
//!
//! A widget is drawn once and then polled every tick. Each poll samples the
//! touch panel once, decodes at most one key and updates the widget.

mod dialog;
mod keyboard;
mod keypad;

pub use dialog::ErrorDialog;
pub use keyboard::{Keyboard, KEYBOARD_CAPACITY};
pub use keypad::{Keypad, Radix, MAX_DIGITS};

use embedded_hal::delay::DelayNs;
use tftlcd_display::{DisplayBackend, DisplayError, Theme};
use tftlcd_hal::TouchPanel;

use crate::decoder::TouchDecoder;
use crate::error::InputError;
use crate::layout::{render, Element, Label};

/// Common interface of the keypads, keyboard and dialog
pub trait Widget {
    /// What a poll reports back to the caller
    type Output;

    /// Layout used for both drawing and hit-testing
    fn layout(&self) -> &'static [Element];

    /// Text for a label slot
    fn label_text(&self, label: Label) -> &str {
        match label {
            Label::Text(text) => text,
            _ => "",
        }
    }

    /// React to a decoded key code (`None` when nothing was pressed)
    fn handle<B: DisplayBackend>(
        &mut self,
        code: Option<u8>,
        display: &mut B,
        theme: &Theme,
    ) -> Result<Self::Output, DisplayError>;

    /// Draw the whole widget
    fn draw<B: DisplayBackend>(&self, display: &mut B, theme: &Theme) -> Result<(), DisplayError> {
        render(self.layout(), display, theme, move |label| self.label_text(label))
    }

    /// Sample, decode and handle one touch
    fn poll<T, D, B>(
        &mut self,
        decoder: &mut TouchDecoder<T, D>,
        display: &mut B,
        theme: &Theme,
    ) -> Result<Self::Output, InputError>
    where
        T: TouchPanel,
        D: DelayNs,
        B: DisplayBackend,
    {
        let code = decoder.poll(self.layout(), display, theme)?;
        Ok(self.handle(code, display, theme)?)
    }
}
