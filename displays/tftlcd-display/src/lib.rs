//! Render primitives for the TFT LCD input widgets
//!
//! This crate provides:
//! - `DisplayBackend` trait: rounded and square labelled buttons, the two
//!   primitives every widget is drawn from
//! - `Color`, `Theme` and `ButtonStyle` for the RGB565 palette
//! - `GraphicsBackend`, a `DisplayBackend` over any embedded-graphics
//!   `DrawTarget<Color = Rgb565>` (ILI9486, ILI9341, simulator, ...)
//!
//! Widgets never touch pixels directly; they describe buttons and let the
//! backend decide how to rasterize them.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod color;
pub mod graphics;
pub mod theme;

// Re-export key types
pub use backend::{Align, ButtonStyle, DisplayBackend, DisplayError, Shape};
pub use color::Color;
pub use graphics::GraphicsBackend;
pub use theme::{Role, Theme};
