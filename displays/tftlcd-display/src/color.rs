//! RGB565 colour values

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::IntoStorage;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 16-bit RGB565 colour as stored in the panel's GRAM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const BLUE: Color = Color(0x001F);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const CYAN: Color = Color(0x07FF);
    pub const MAGENTA: Color = Color(0xF81F);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const WHITE: Color = Color(0xFFFF);

    /// Orange (default button fill)
    pub const ORANGE: Color = Color(0xFC00);
    /// Blue-ish grey (default menu background)
    pub const SLATE: Color = Color(0x3AF1);
    pub const GREY: Color = Color(0x4228);

    /// Raw RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        Rgb565::from(RawU16::new(color.0))
    }
}

impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        Color(color.into_storage())
    }
}
