//! Test doubles for the touch panel, delay and display

use embedded_hal::delay::DelayNs;
use heapless::{Deque, String, Vec};
use tftlcd_display::{Align, ButtonStyle, DisplayBackend, DisplayError, Shape};
use tftlcd_hal::{Point, Rect, TouchError, TouchPanel};

/// Touch panel replaying a fixed list of samples
///
/// Once the script runs out every sample returns `hold` (no touch unless
/// [`holding`](Self::holding) was used).
#[derive(Debug, Default)]
pub struct ScriptedTouch {
    script: Deque<Option<Point>, 64>,
    hold: Option<Point>,
    fail: bool,
    samples: u32,
}

impl ScriptedTouch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single sample
    pub fn then(mut self, sample: Option<Point>) -> Self {
        self.script.push_back(sample).expect("script full");
        self
    }

    /// Append a press at `p` followed by a release
    pub fn tap(self, p: Point) -> Self {
        self.then(Some(p)).then(None)
    }

    /// Keep touching `p` once the script is exhausted
    pub fn holding(mut self, p: Point) -> Self {
        self.hold = Some(p);
        self
    }

    /// Stop holding once the script is exhausted
    pub fn lift(&mut self) {
        self.hold = None;
    }

    /// Every sample fails
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Number of samples taken so far
    pub fn samples(&self) -> u32 {
        self.samples
    }
}

impl TouchPanel for ScriptedTouch {
    fn sample(&mut self) -> Result<Option<Point>, TouchError> {
        if self.fail {
            return Err(TouchError::Communication);
        }
        self.samples += 1;
        Ok(self.script.pop_front().unwrap_or(self.hold))
    }
}

/// Delay that only records how long it was asked to wait
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub struct Draw {
    pub shape: Shape,
    pub rect: Rect,
    pub label: String<40>,
    pub style: ButtonStyle,
    pub align: Align,
}

/// Display that records every draw call
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub draws: Vec<Draw, 128>,
    fail: bool,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every draw fails with a communication error
    pub fn failing() -> Self {
        Self {
            draws: Vec::new(),
            fail: true,
        }
    }

    /// Label of the most recent draw covering exactly `rect`
    pub fn last_label_at(&self, rect: Rect) -> Option<&str> {
        self.draws
            .iter()
            .rev()
            .find(|d| d.rect == rect)
            .map(|d| d.label.as_str())
    }

    fn record(
        &mut self,
        shape: Shape,
        rect: Rect,
        label: &str,
        style: &ButtonStyle,
        align: Align,
    ) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::Communication);
        }
        self.check_bounds(rect)?;
        let mut text = String::new();
        text.push_str(label).expect("label too long");
        self.draws
            .push(Draw {
                shape,
                rect,
                label: text,
                style: *style,
                align,
            })
            .expect("too many draws");
        Ok(())
    }
}

impl DisplayBackend for RecordingDisplay {
    fn draw_round_button(
        &mut self,
        rect: Rect,
        label: &str,
        style: &ButtonStyle,
        align: Align,
    ) -> Result<(), DisplayError> {
        self.record(Shape::Round, rect, label, style, align)
    }

    fn draw_square_button(
        &mut self,
        rect: Rect,
        label: &str,
        style: &ButtonStyle,
        align: Align,
    ) -> Result<(), DisplayError> {
        self.record(Shape::Square, rect, label, style, align)
    }

    fn dimensions(&self) -> (u16, u16) {
        (480, 320)
    }
}
