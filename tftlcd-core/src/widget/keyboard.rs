//! Alphanumeric keyboard
//!
//! Composes a short text (a file name, typically) one character at a time.

use tftlcd_display::{Align, DisplayBackend, DisplayError, Role, Theme};

use crate::keys::{KeyboardKey, Outcome};
use crate::layout::{Element, KEYBOARD, KEYBOARD_VALUE_FIELD};

use super::Widget;

/// Maximum number of characters the keyboard holds
pub const KEYBOARD_CAPACITY: usize = 10;

/// Unused buffer slot
const EMPTY: u8 = 0;

/// Written over a character removed by backspace
const ERASED: u8 = b' ';

/// Keyboard state
///
/// Characters are written at `index`, which then advances. Backspace
/// blanks the previous character with a space and steps back, so a text
/// that was shortened keeps trailing spaces until they are typed over.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keyboard {
    buffer: [u8; KEYBOARD_CAPACITY],
    index: u8,
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Keyboard {
    pub const fn new() -> Self {
        Self {
            buffer: [EMPTY; KEYBOARD_CAPACITY],
            index: 0,
        }
    }

    /// Clear the text before a new entry session
    pub fn reset(&mut self) {
        self.buffer = [EMPTY; KEYBOARD_CAPACITY];
        self.index = 0;
    }

    /// Next write position
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Raw buffer contents
    pub fn buffer(&self) -> &[u8; KEYBOARD_CAPACITY] {
        &self.buffer
    }

    /// Text entered so far, up to the first never-written slot
    pub fn as_str(&self) -> &str {
        let end = self
            .buffer
            .iter()
            .position(|&b| b == EMPTY)
            .unwrap_or(KEYBOARD_CAPACITY);
        // Only ASCII is ever written
        core::str::from_utf8(&self.buffer[..end]).unwrap_or("")
    }

    /// Apply one key to the keyboard state
    ///
    /// Characters outside the printable range, characters typed into a
    /// full buffer and backspace on an empty one are ignored.
    pub fn apply(&mut self, key: KeyboardKey) -> Outcome {
        match key {
            KeyboardKey::Char(c) => {
                self.push(c);
                Outcome::Idle
            }
            KeyboardKey::Backspace => {
                self.pop();
                Outcome::Idle
            }
            KeyboardKey::Accept => Outcome::Accept,
            KeyboardKey::Cancel => Outcome::Cancel,
        }
    }

    fn push(&mut self, c: u8) -> bool {
        if !KeyboardKey::is_printable(c) {
            #[cfg(feature = "defmt")]
            defmt::debug!("keyboard ignoring unprintable {=u8:#x}", c);
            return false;
        }
        let i = self.index as usize;
        if i >= KEYBOARD_CAPACITY {
            #[cfg(feature = "defmt")]
            defmt::debug!("keyboard full, dropping {=u8:#x}", c);
            return false;
        }
        self.buffer[i] = c;
        self.index += 1;
        true
    }

    fn pop(&mut self) -> bool {
        if self.index == 0 {
            #[cfg(feature = "defmt")]
            defmt::debug!("keyboard empty, ignoring backspace");
            return false;
        }
        self.index -= 1;
        self.buffer[self.index as usize] = ERASED;
        true
    }

    /// Redraw the value field with the current text
    pub fn draw_value<B: DisplayBackend>(
        &self,
        display: &mut B,
        theme: &Theme,
    ) -> Result<(), DisplayError> {
        display.draw_round_button(
            KEYBOARD_VALUE_FIELD,
            self.as_str(),
            &theme.style(Role::Field),
            Align::Center,
        )
    }
}

impl Widget for Keyboard {
    type Output = Outcome;

    fn layout(&self) -> &'static [Element] {
        &KEYBOARD
    }

    fn handle<B: DisplayBackend>(
        &mut self,
        code: Option<u8>,
        display: &mut B,
        theme: &Theme,
    ) -> Result<Outcome, DisplayError> {
        let Some(key) = code.and_then(KeyboardKey::from_code) else {
            return Ok(Outcome::Idle);
        };

        let changed = match key {
            KeyboardKey::Char(c) => self.push(c),
            KeyboardKey::Backspace => self.pop(),
            KeyboardKey::Accept => return Ok(Outcome::Accept),
            KeyboardKey::Cancel => return Ok(Outcome::Cancel),
        };
        if changed {
            self.draw_value(display, theme)?;
        }

        Ok(Outcome::Idle)
    }
}
