//! Input error type

use core::fmt;

use tftlcd_display::DisplayError;
use tftlcd_hal::TouchError;

/// Errors surfaced while polling a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Touch controller failed to produce a sample
    Touch(TouchError),
    /// Display rejected a draw
    Display(DisplayError),
}

impl From<TouchError> for InputError {
    fn from(e: TouchError) -> Self {
        InputError::Touch(e)
    }
}

impl From<DisplayError> for InputError {
    fn from(e: DisplayError) -> Self {
        InputError::Display(e)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Touch(e) => write!(f, "touch: {}", e),
            InputError::Display(e) => write!(f, "display: {}", e),
        }
    }
}
