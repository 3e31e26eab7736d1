//! Touch panel abstraction
//!
//! Provides the sampling trait that resistive or capacitive touch
//! controllers implement. Drivers are expected to hand back screen
//! coordinates (already calibrated and debounced).

use core::fmt;

use crate::geometry::Point;

/// Touch controller errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchError {
    /// Bus error while talking to the controller
    Communication,
    /// Controller has no calibration to map raw readings to pixels
    NotCalibrated,
}

impl fmt::Display for TouchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TouchError::Communication => f.write_str("touch controller communication error"),
            TouchError::NotCalibrated => f.write_str("touch controller not calibrated"),
        }
    }
}

/// Touch panel sampler
///
/// One call takes one sample. `Ok(Some(point))` means a finger or stylus
/// is down at `point`; `Ok(None)` means nothing is touching the panel.
pub trait TouchPanel {
    /// Sample the current pointer position
    fn sample(&mut self) -> Result<Option<Point>, TouchError>;

    /// Check if the panel is currently touched
    fn is_touched(&mut self) -> Result<bool, TouchError> {
        Ok(self.sample()?.is_some())
    }
}

impl<T: TouchPanel + ?Sized> TouchPanel for &mut T {
    fn sample(&mut self) -> Result<Option<Point>, TouchError> {
        (**self).sample()
    }
}
