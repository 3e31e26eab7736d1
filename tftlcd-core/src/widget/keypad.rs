//! Hex and decimal keypads
//!
//! The keypad composes a number the way it is typed: each new digit enters
//! at the least significant position and pushes the earlier ones up.
//! Typing 1, 2, 3 on the hex keypad gives 0x123.

use core::fmt::Write;

use heapless::String;
use tftlcd_display::{Align, DisplayBackend, DisplayError, Role, Theme};

use crate::keys::{KeypadKey, Outcome};
use crate::layout::{Element, DECIMAL_KEYPAD, HEX_KEYPAD, KEYPAD_VALUE_FIELD};

use super::Widget;

/// Digit slots retained by a keypad
///
/// The decimal keypad keeps one slot beyond its capacity.
pub const MAX_DIGITS: usize = 5;

/// Longest value text: "fff" on hex, "9999" on decimal
const VALUE_TEXT_LEN: usize = 4;

const HEX_WEIGHTS: [u16; 3] = [1, 16, 256];
const DECIMAL_WEIGHTS: [u16; 4] = [1, 10, 100, 1000];

/// Number base of a keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Radix {
    /// Digits 0-f, up to three of them
    Hex,
    /// Digits 0-9, up to four of them
    Decimal,
}

impl Radix {
    pub const fn base(self) -> u8 {
        match self {
            Radix::Hex => 16,
            Radix::Decimal => 10,
        }
    }

    /// Maximum number of digits that can be entered
    pub const fn capacity(self) -> u8 {
        match self {
            Radix::Hex => 3,
            Radix::Decimal => 4,
        }
    }

    /// Positional weight of each slot, least significant first
    const fn weights(self) -> &'static [u16] {
        match self {
            Radix::Hex => &HEX_WEIGHTS,
            Radix::Decimal => &DECIMAL_WEIGHTS,
        }
    }

    pub fn layout(self) -> &'static [Element] {
        match self {
            Radix::Hex => &HEX_KEYPAD,
            Radix::Decimal => &DECIMAL_KEYPAD,
        }
    }
}

/// Numeric keypad state
///
/// `digits[0]` is the most recently typed digit. Only the first `index`
/// slots are meaningful; the rest keep whatever was shifted out of them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keypad {
    radix: Radix,
    digits: [u8; MAX_DIGITS],
    index: u8,
    total: u16,
}

impl Keypad {
    pub const fn new(radix: Radix) -> Self {
        Self {
            radix,
            digits: [0; MAX_DIGITS],
            index: 0,
            total: 0,
        }
    }

    /// Clear all digits before a new entry session
    pub fn reset(&mut self) {
        self.digits = [0; MAX_DIGITS];
        self.index = 0;
        self.total = 0;
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Value composed so far
    pub fn total(&self) -> u16 {
        self.total
    }

    /// Number of digits entered
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Raw digit slots, most recent first
    pub fn digits(&self) -> &[u8; MAX_DIGITS] {
        &self.digits
    }

    pub fn is_full(&self) -> bool {
        self.index >= self.radix.capacity()
    }

    /// Apply one key to the keypad state
    ///
    /// Digits typed while the keypad is full are dropped, as are digits
    /// outside the keypad's base.
    pub fn apply(&mut self, key: KeypadKey) -> Outcome {
        match key {
            KeypadKey::Digit(d) => {
                if d < self.radix.base() && !self.is_full() {
                    self.push_digit(d);
                }
                Outcome::Idle
            }
            KeypadKey::Backspace => {
                self.pop_digit();
                Outcome::Idle
            }
            KeypadKey::Accept => Outcome::Accept,
            KeypadKey::Cancel => Outcome::Cancel,
        }
    }

    fn push_digit(&mut self, digit: u8) {
        let capacity = self.radix.capacity() as usize;
        self.digits.copy_within(0..capacity - 1, 1);
        self.digits[0] = digit;
        self.index += 1;
        self.recompute();
    }

    /// Drop the most recent digit, shifting older ones down and zeroing
    /// the vacated top slot
    fn pop_digit(&mut self) {
        let n = self.index as usize;
        if n > 0 {
            self.digits.copy_within(1..n, 0);
            self.digits[n - 1] = 0;
            self.index -= 1;
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.total = self
            .radix
            .weights()
            .iter()
            .zip(self.digits.iter())
            .map(|(&weight, &digit)| weight * digit as u16)
            .sum();
    }

    /// Redraw the value field with the current total
    pub fn draw_value<B: DisplayBackend>(
        &self,
        display: &mut B,
        theme: &Theme,
    ) -> Result<(), DisplayError> {
        let mut text: String<VALUE_TEXT_LEN> = String::new();
        // Totals are bounded by the radix capacity, so the text always fits
        match self.radix {
            Radix::Hex => write!(text, "{:x}", self.total),
            Radix::Decimal => write!(text, "{}", self.total),
        }
        .ok();
        display.draw_round_button(
            KEYPAD_VALUE_FIELD,
            &text,
            &theme.style(Role::Field),
            Align::Center,
        )
    }
}

impl Widget for Keypad {
    type Output = Outcome;

    fn layout(&self) -> &'static [Element] {
        self.radix.layout()
    }

    fn handle<B: DisplayBackend>(
        &mut self,
        code: Option<u8>,
        display: &mut B,
        theme: &Theme,
    ) -> Result<Outcome, DisplayError> {
        let Some(key) = code.and_then(KeypadKey::from_code) else {
            return Ok(Outcome::Idle);
        };

        let before = self.index;
        let outcome = self.apply(key);

        let redraw = match key {
            KeypadKey::Digit(_) => self.index != before,
            KeypadKey::Backspace => true,
            KeypadKey::Accept | KeypadKey::Cancel => false,
        };
        if redraw {
            self.draw_value(display, theme)?;
        }

        Ok(outcome)
    }
}
