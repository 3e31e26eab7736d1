//! Display backend trait
//!
//! Defines the drawing interface the widgets render through.

use core::fmt;

use tftlcd_hal::Rect;

use crate::color::Color;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Communication => f.write_str("display communication error"),
            DisplayError::InvalidCoordinates => f.write_str("coordinates outside the display"),
            DisplayError::NotInitialized => f.write_str("display not initialized"),
        }
    }
}

/// Horizontal label alignment inside a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

impl Align {
    /// Legacy alignment code (LEFT=1, CENTER=2, RIGHT=3)
    pub const fn code(self) -> u8 {
        match self {
            Align::Left => 1,
            Align::Center => 2,
            Align::Right => 3,
        }
    }

    /// Parse a legacy alignment code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Align::Left),
            2 => Some(Align::Center),
            3 => Some(Align::Right),
            _ => None,
        }
    }
}

/// Button outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shape {
    /// Rounded corners (touch keys)
    Round,
    /// Square corners (panels, dialog frame)
    Square,
}

/// Colours used to draw a single button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonStyle {
    pub fill: Color,
    pub border: Color,
    pub text: Color,
}

impl ButtonStyle {
    pub const fn new(fill: Color, border: Color, text: Color) -> Self {
        Self { fill, border, text }
    }

    /// Same style with a different border colour
    pub const fn with_border(self, border: Color) -> Self {
        Self { border, ..self }
    }
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for drawing labelled buttons.
/// `rect` is inclusive on all edges. An empty `label` draws just the box.
pub trait DisplayBackend {
    /// Draw a button with rounded corners
    fn draw_round_button(
        &mut self,
        rect: Rect,
        label: &str,
        style: &ButtonStyle,
        align: Align,
    ) -> Result<(), DisplayError>;

    /// Draw a button with square corners
    ///
    /// Also used to fill plain regions (label empty, all colours equal).
    fn draw_square_button(
        &mut self,
        rect: Rect,
        label: &str,
        style: &ButtonStyle,
        align: Align,
    ) -> Result<(), DisplayError>;

    /// Get pixel dimensions (width, height)
    fn dimensions(&self) -> (u16, u16);

    /// Draw a button of the given shape
    fn draw_button(
        &mut self,
        shape: Shape,
        rect: Rect,
        label: &str,
        style: &ButtonStyle,
        align: Align,
    ) -> Result<(), DisplayError> {
        match shape {
            Shape::Round => self.draw_round_button(rect, label, style, align),
            Shape::Square => self.draw_square_button(rect, label, style, align),
        }
    }

    /// Check that a rectangle fits on the panel
    fn check_bounds(&self, rect: Rect) -> Result<(), DisplayError> {
        let (width, height) = self.dimensions();
        if rect.x1 >= width || rect.y1 >= height {
            return Err(DisplayError::InvalidCoordinates);
        }
        Ok(())
    }
}
