//! Logical key codes
//!
//! Every touchable element carries a one-byte code. The byte values are
//! the ones the panel firmware has always used, so they stay stable for
//! callers that still compare raw bytes.

/// "No key this poll" sentinel, distinct from every real key code
pub const NO_KEY: u8 = 0xFF;

// Keypad wire values (digits are 0x00-0x0F)
const KEYPAD_BACKSPACE: u8 = 0x10;
const KEYPAD_ACCEPT: u8 = 0x11;
const KEYPAD_CANCEL: u8 = 0x12;

// Keyboard wire values (characters are their ASCII code)
const KEYBOARD_CANCEL: u8 = 0xF0;
const KEYBOARD_ACCEPT: u8 = 0xF1;
const KEYBOARD_BACKSPACE: u8 = 0xF2;
const KEYBOARD_CHAR_FIRST: u8 = 0x2A;
const KEYBOARD_CHAR_LAST: u8 = 0x7A;

// Controller results
const OUTCOME_CANCEL: u8 = 0xF0;
const OUTCOME_ACCEPT: u8 = 0xF1;

/// Key on the hex or decimal keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadKey {
    /// Digit value 0x0-0xF
    Digit(u8),
    Backspace,
    Accept,
    Cancel,
}

impl KeypadKey {
    /// Parse a keypad code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00..=0x0F => Some(KeypadKey::Digit(code)),
            KEYPAD_BACKSPACE => Some(KeypadKey::Backspace),
            KEYPAD_ACCEPT => Some(KeypadKey::Accept),
            KEYPAD_CANCEL => Some(KeypadKey::Cancel),
            _ => None,
        }
    }

    /// Convert to the keypad code
    pub const fn code(self) -> u8 {
        match self {
            KeypadKey::Digit(d) => d,
            KeypadKey::Backspace => KEYPAD_BACKSPACE,
            KeypadKey::Accept => KEYPAD_ACCEPT,
            KeypadKey::Cancel => KEYPAD_CANCEL,
        }
    }
}

/// Key on the alphanumeric keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyboardKey {
    /// Printable ASCII character (0x2A..=0x7A)
    Char(u8),
    Backspace,
    Accept,
    Cancel,
}

impl KeyboardKey {
    /// Parse a keyboard code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            KEYBOARD_CHAR_FIRST..=KEYBOARD_CHAR_LAST => Some(KeyboardKey::Char(code)),
            KEYBOARD_BACKSPACE => Some(KeyboardKey::Backspace),
            KEYBOARD_ACCEPT => Some(KeyboardKey::Accept),
            KEYBOARD_CANCEL => Some(KeyboardKey::Cancel),
            _ => None,
        }
    }

    /// Check whether `c` is a character the keyboard can hold
    pub const fn is_printable(c: u8) -> bool {
        matches!(c, KEYBOARD_CHAR_FIRST..=KEYBOARD_CHAR_LAST)
    }

    /// Convert to the keyboard code
    pub const fn code(self) -> u8 {
        match self {
            KeyboardKey::Char(c) => c,
            KeyboardKey::Backspace => KEYBOARD_BACKSPACE,
            KeyboardKey::Accept => KEYBOARD_ACCEPT,
            KeyboardKey::Cancel => KEYBOARD_CANCEL,
        }
    }
}

/// Result of polling a keypad or keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Nothing terminal happened; keep polling
    Idle,
    /// User accepted the entered value
    Accept,
    /// User cancelled the entry
    Cancel,
}

impl Outcome {
    /// Legacy result byte (0xFF idle, 0xF1 accept, 0xF0 cancel)
    pub const fn code(self) -> u8 {
        match self {
            Outcome::Idle => NO_KEY,
            Outcome::Accept => OUTCOME_ACCEPT,
            Outcome::Cancel => OUTCOME_CANCEL,
        }
    }

    /// Returns true if the widget session is over
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Idle)
    }
}

/// Result of polling the error dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialogChoice {
    /// No button pressed this poll
    #[default]
    None,
    Confirm,
    Cancel,
    /// Title bar "X"
    Dismiss,
}

impl DialogChoice {
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(DialogChoice::None),
            1 => Some(DialogChoice::Confirm),
            2 => Some(DialogChoice::Cancel),
            3 => Some(DialogChoice::Dismiss),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            DialogChoice::None => 0,
            DialogChoice::Confirm => 1,
            DialogChoice::Cancel => 2,
            DialogChoice::Dismiss => 3,
        }
    }
}
