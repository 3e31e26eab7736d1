//! Screen geometry
//!
//! Pixel coordinates on the panel, origin at the top-left corner.

/// A pixel position on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with inclusive bounds on all four edges
///
/// A touch on the border pixel counts as inside, matching how the
/// layouts were measured against the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl Rect {
    /// Create a rectangle from its corners
    ///
    /// Panics (at compile time for `const` tables) unless `x0 < x1` and `y0 < y1`.
    pub const fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        assert!(x0 < x1 && y0 < y1, "rectangle corners out of order");
        Self { x0, y0, x1, y1 }
    }

    /// Create a rectangle from its top-left corner and size
    pub const fn with_size(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Check whether a point lies inside, edges included
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x <= self.x1 && p.y >= self.y0 && p.y <= self.y1
    }

    /// Horizontal extent (`x1 - x0`)
    pub const fn width(&self) -> u16 {
        self.x1 - self.x0
    }

    /// Vertical extent (`y1 - y0`)
    pub const fn height(&self) -> u16 {
        self.y1 - self.y0
    }

    pub const fn center(&self) -> Point {
        Point::new(self.x0 + self.width() / 2, self.y0 + self.height() / 2)
    }
}
