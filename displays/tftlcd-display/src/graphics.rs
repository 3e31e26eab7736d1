//! embedded-graphics display backend
//!
//! Rasterizes buttons onto any `DrawTarget<Color = Rgb565>`, which covers
//! the common parallel/SPI TFT drivers as well as the desktop simulator.

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use tftlcd_hal::Rect;

use crate::backend::{Align, ButtonStyle, DisplayBackend, DisplayError};

/// Default corner radius for rounded buttons (pixels)
pub const DEFAULT_CORNER_RADIUS: u32 = 6;

/// Horizontal gap between the outline and a left/right aligned label
const LABEL_PADDING: i32 = 6;

/// `DisplayBackend` implementation on top of embedded-graphics
pub struct GraphicsBackend<D> {
    target: D,
    font: &'static MonoFont<'static>,
    corner_radius: u32,
}

impl<D> GraphicsBackend<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    /// Wrap a draw target using the default 10x20 font
    pub fn new(target: D) -> Self {
        Self {
            target,
            font: &FONT_10X20,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }

    /// Use a different label font
    pub fn with_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = font;
        self
    }

    /// Change the corner radius of rounded buttons
    pub fn with_corner_radius(mut self, radius: u32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Borrow the underlying draw target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Mutably borrow the underlying draw target
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Release the underlying draw target
    pub fn release(self) -> D {
        self.target
    }

    fn draw_box(
        &mut self,
        rect: Rect,
        radius: u32,
        label: &str,
        style: &ButtonStyle,
        align: Align,
    ) -> Result<(), DisplayError> {
        self.check_bounds(rect)?;

        let area = Rectangle::with_corners(
            Point::new(rect.x0 as i32, rect.y0 as i32),
            Point::new(rect.x1 as i32, rect.y1 as i32),
        );
        let outline: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
            .fill_color(style.fill.into())
            .stroke_color(style.border.into())
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();

        if radius == 0 {
            area.into_styled(outline)
                .draw(&mut self.target)
                .map_err(|_| DisplayError::Communication)?;
        } else {
            RoundedRectangle::with_equal_corners(area, Size::new(radius, radius))
                .into_styled(outline)
                .draw(&mut self.target)
                .map_err(|_| DisplayError::Communication)?;
        }

        if label.is_empty() {
            return Ok(());
        }

        let center = area.center();
        let (anchor, alignment) = match align {
            Align::Left => (
                Point::new(area.top_left.x + LABEL_PADDING, center.y),
                Alignment::Left,
            ),
            Align::Center => (center, Alignment::Center),
            Align::Right => (
                Point::new(rect.x1 as i32 - LABEL_PADDING, center.y),
                Alignment::Right,
            ),
        };

        let character_style = MonoTextStyle::new(self.font, style.text.into());
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(label, anchor, character_style, text_style)
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)?;

        Ok(())
    }
}

impl<D> DisplayBackend for GraphicsBackend<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    fn draw_round_button(
        &mut self,
        rect: Rect,
        label: &str,
        style: &ButtonStyle,
        align: Align,
    ) -> Result<(), DisplayError> {
        self.draw_box(rect, self.corner_radius, label, style, align)
    }

    fn draw_square_button(
        &mut self,
        rect: Rect,
        label: &str,
        style: &ButtonStyle,
        align: Align,
    ) -> Result<(), DisplayError> {
        self.draw_box(rect, 0, label, style, align)
    }

    fn dimensions(&self) -> (u16, u16) {
        let size = self.target.size();
        (size.width as u16, size.height as u16)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;
    use std::vec::Vec;

    use super::*;
    use crate::color::Color;

    const WIDTH: u32 = 480;
    const HEIGHT: u32 = 320;
    const BACKGROUND: Rgb565 = Rgb565::new(0, 0, 0);

    /// In-memory framebuffer the size of the panel
    struct Framebuffer {
        pixels: Vec<Rgb565>,
    }

    impl Framebuffer {
        fn new() -> Self {
            Self {
                pixels: vec![BACKGROUND; (WIDTH * HEIGHT) as usize],
            }
        }

        fn pixel(&self, x: u32, y: u32) -> Color {
            Color::from(self.pixels[(y * WIDTH + x) as usize])
        }
    }

    impl OriginDimensions for Framebuffer {
        fn size(&self) -> Size {
            Size::new(WIDTH, HEIGHT)
        }
    }

    impl DrawTarget for Framebuffer {
        type Color = Rgb565;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0
                    && point.y >= 0
                    && (point.x as u32) < WIDTH
                    && (point.y as u32) < HEIGHT
                {
                    self.pixels[(point.y as u32 * WIDTH + point.x as u32) as usize] = color;
                }
            }
            Ok(())
        }
    }

    fn style() -> ButtonStyle {
        ButtonStyle::new(Color::ORANGE, Color::BLUE, Color::WHITE)
    }

    #[test]
    fn test_dimensions() {
        let backend = GraphicsBackend::new(Framebuffer::new());
        assert_eq!(backend.dimensions(), (480, 320));
    }

    #[test]
    fn test_square_button_fill_and_border() {
        let mut backend = GraphicsBackend::new(Framebuffer::new());
        backend
            .draw_square_button(Rect::new(100, 50, 200, 90), "", &style(), Align::Center)
            .unwrap();

        let fb = backend.release();
        assert_eq!(fb.pixel(100, 50), Color::BLUE);
        assert_eq!(fb.pixel(200, 90), Color::BLUE);
        assert_eq!(fb.pixel(150, 70), Color::ORANGE);
        assert_eq!(fb.pixel(99, 50), Color::from(BACKGROUND));
        assert_eq!(fb.pixel(201, 90), Color::from(BACKGROUND));
    }

    #[test]
    fn test_round_button_leaves_corners() {
        let mut backend = GraphicsBackend::new(Framebuffer::new());
        backend
            .draw_round_button(Rect::new(100, 50, 200, 90), "", &style(), Align::Center)
            .unwrap();

        let fb = backend.release();
        // Corner pixel is cut away by the radius
        assert_eq!(fb.pixel(100, 50), Color::from(BACKGROUND));
        // Straight edge still carries the border
        assert_eq!(fb.pixel(150, 50), Color::BLUE);
        assert_eq!(fb.pixel(150, 70), Color::ORANGE);
    }

    #[test]
    fn test_label_is_drawn_inside_button() {
        let mut backend = GraphicsBackend::new(Framebuffer::new());
        let rect = Rect::new(145, 80, 195, 120);
        backend
            .draw_round_button(rect, "8", &style(), Align::Center)
            .unwrap();

        let fb = backend.release();
        let mut text_pixels = 0;
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if fb.pixel(x, y) == Color::WHITE {
                    assert!(rect.contains(tftlcd_hal::Point::new(x as u16, y as u16)));
                    text_pixels += 1;
                }
            }
        }
        assert!(text_pixels > 0);
    }

    /// Leftmost and rightmost columns holding text pixels
    fn text_columns(fb: &Framebuffer) -> (u32, u32) {
        let mut min = WIDTH;
        let mut max = 0;
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if fb.pixel(x, y) == Color::WHITE {
                    min = min.min(x);
                    max = max.max(x);
                }
            }
        }
        (min, max)
    }

    #[test]
    fn test_left_label_starts_after_padding() {
        let mut backend = GraphicsBackend::new(Framebuffer::new());
        let rect = Rect::new(100, 50, 300, 90);
        backend
            .draw_square_button(rect, "88", &style(), Align::Left)
            .unwrap();

        let (min, max) = text_columns(&backend.release());
        let start = rect.x0 as u32 + LABEL_PADDING as u32;
        assert!(min >= start, "text starts at {}", min);
        assert!(min < start + 10, "text starts at {}", min);
        assert!(max < start + 20, "text ends at {}", max);
    }

    #[test]
    fn test_right_label_ends_before_padding() {
        let mut backend = GraphicsBackend::new(Framebuffer::new());
        let rect = Rect::new(100, 50, 300, 90);
        backend
            .draw_square_button(rect, "88", &style(), Align::Right)
            .unwrap();

        let (min, max) = text_columns(&backend.release());
        let end = rect.x1 as u32 - LABEL_PADDING as u32;
        assert!(max <= end + 1, "text ends at {}", max);
        assert!(max + 10 > end, "text ends at {}", max);
        assert!(min + 22 > end, "text starts at {}", min);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut backend = GraphicsBackend::new(Framebuffer::new());
        let result =
            backend.draw_square_button(Rect::new(400, 300, 480, 319), "", &style(), Align::Left);
        assert_eq!(result, Err(DisplayError::InvalidCoordinates));
    }
}
