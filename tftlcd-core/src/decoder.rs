//! Touch decoder
//!
//! Turns one touch sample into at most one key code. A matched key is held
//! until the finger lifts or slides off it, so a single physical press
//! yields exactly one key event.

use embedded_hal::delay::DelayNs;
use tftlcd_display::{DisplayBackend, Theme};
use tftlcd_hal::{Rect, TouchError, TouchPanel};

use crate::config::{InputConfig, ReleaseConfig};
use crate::error::InputError;
use crate::layout::{hit_test, Element, Label};

/// How a wait-for-release ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Release {
    /// Nothing touching the panel any more
    Lifted,
    /// Finger slid outside the key
    LeftRegion,
    /// Key still held when the timeout ran out
    TimedOut,
    /// Abort predicate fired
    Aborted,
}

/// Touch decoder
///
/// Owns the touch sampler and the delay used to pace samples while a key
/// is held.
pub struct TouchDecoder<T, D> {
    touch: T,
    delay: D,
    release: ReleaseConfig,
    press_feedback: bool,
    last_release: Option<Release>,
}

impl<T, D> TouchDecoder<T, D>
where
    T: TouchPanel,
    D: DelayNs,
{
    /// Create a decoder with the default configuration
    pub fn new(touch: T, delay: D) -> Self {
        Self::with_config(touch, delay, &InputConfig::default())
    }

    /// Create a decoder using the timing and feedback settings of `config`
    pub fn with_config(touch: T, delay: D, config: &InputConfig) -> Self {
        Self {
            touch,
            delay,
            release: config.release,
            press_feedback: config.press_feedback,
            last_release: None,
        }
    }

    /// Current release timing
    pub fn release_config(&self) -> &ReleaseConfig {
        &self.release
    }

    /// Change release timing
    pub fn set_release_config(&mut self, release: ReleaseConfig) {
        self.release = release;
    }

    /// Enable or disable the pressed-key highlight
    pub fn set_press_feedback(&mut self, enabled: bool) {
        self.press_feedback = enabled;
    }

    /// How the release wait of the latest poll ended
    ///
    /// `None` when that poll decoded no key.
    pub fn last_release(&self) -> Option<Release> {
        self.last_release
    }

    /// Borrow the touch sampler
    pub fn touch_mut(&mut self) -> &mut T {
        &mut self.touch
    }

    /// Release the sampler and delay
    pub fn into_inner(self) -> (T, D) {
        (self.touch, self.delay)
    }

    /// Sample once and decode against `layout`
    ///
    /// Returns the code of the touched key, or `None` when nothing is
    /// touched or the touch is outside every key. Blocks while the key is
    /// held (bounded by the release timeout).
    pub fn poll<B: DisplayBackend>(
        &mut self,
        layout: &[Element],
        display: &mut B,
        theme: &Theme,
    ) -> Result<Option<u8>, InputError> {
        self.poll_until(layout, display, theme, || false)
    }

    /// Like [`poll`](Self::poll), but stops waiting for release as soon as
    /// `abort` returns true
    ///
    /// The key code is still reported when the wait is cut short: the
    /// press itself was seen.
    pub fn poll_until<B, A>(
        &mut self,
        layout: &[Element],
        display: &mut B,
        theme: &Theme,
        mut abort: A,
    ) -> Result<Option<u8>, InputError>
    where
        B: DisplayBackend,
        A: FnMut() -> bool,
    {
        self.last_release = None;

        let Some(point) = self.touch.sample()? else {
            return Ok(None);
        };
        let Some(element) = hit_test(layout, point) else {
            return Ok(None);
        };
        let Some(code) = element.code else {
            return Ok(None);
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("key {=u8:#x} at ({}, {})", code, point.x, point.y);

        let label = match element.label {
            Label::Text(text) => Some(text),
            _ => None,
        };
        let feedback = if self.press_feedback { label } else { None };

        if let Some(text) = feedback {
            display.draw_button(
                element.shape,
                element.rect,
                text,
                &theme.pressed(element.role),
                element.align,
            )?;
        }

        let release = self.await_release_until(element.rect, &mut abort)?;
        #[cfg(feature = "defmt")]
        if matches!(release, Release::TimedOut | Release::Aborted) {
            defmt::warn!("release wait for key {=u8:#x} ended: {}", code, release);
        }
        self.last_release = Some(release);

        if let Some(text) = feedback {
            display.draw_button(
                element.shape,
                element.rect,
                text,
                &theme.style(element.role),
                element.align,
            )?;
        }

        Ok(Some(code))
    }

    /// Block until the panel is released or the touch leaves `rect`
    pub fn await_release(&mut self, rect: Rect) -> Result<Release, TouchError> {
        self.await_release_until(rect, || false)
    }

    /// Block until release, leaving `rect`, timeout, or `abort` returning true
    pub fn await_release_until<A>(&mut self, rect: Rect, mut abort: A) -> Result<Release, TouchError>
    where
        A: FnMut() -> bool,
    {
        let limit = self.release.max_polls();
        let mut polls: u32 = 0;

        loop {
            match self.touch.sample()? {
                None => return Ok(Release::Lifted),
                Some(p) if !rect.contains(p) => return Ok(Release::LeftRegion),
                Some(_) => {}
            }

            if abort() {
                return Ok(Release::Aborted);
            }
            if let Some(limit) = limit {
                if polls >= limit {
                    return Ok(Release::TimedOut);
                }
            }

            self.delay.delay_us(self.release.poll_interval_us);
            polls = polls.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ERROR_DIALOG, HEX_KEYPAD};
    use crate::mock::{CountingDelay, RecordingDisplay, ScriptedTouch};
    use tftlcd_display::{Color, Role};
    use tftlcd_hal::Point;

    fn decoder(touch: ScriptedTouch) -> TouchDecoder<ScriptedTouch, CountingDelay> {
        TouchDecoder::new(touch, CountingDelay::default())
    }

    #[test]
    fn test_no_touch() {
        let mut dec = decoder(ScriptedTouch::new());
        let mut display = RecordingDisplay::new();
        let code = dec
            .poll(&HEX_KEYPAD, &mut display, &Theme::default())
            .unwrap();
        assert_eq!(code, None);
        assert!(display.draws.is_empty());
    }

    #[test]
    fn test_touch_outside_keys() {
        let touch = ScriptedTouch::new().tap(Point::new(10, 10));
        let mut dec = decoder(touch);
        let mut display = RecordingDisplay::new();
        let code = dec
            .poll(&HEX_KEYPAD, &mut display, &Theme::default())
            .unwrap();
        assert_eq!(code, None);
        // No release wait on a miss
        assert_eq!(dec.touch_mut().samples(), 1);
    }

    #[test]
    fn test_tap_reports_code_once() {
        let touch = ScriptedTouch::new().tap(Point::new(225, 100));
        let mut dec = decoder(touch);
        let mut display = RecordingDisplay::new();
        let theme = Theme::default();

        assert_eq!(dec.poll(&HEX_KEYPAD, &mut display, &theme).unwrap(), Some(0x01));
        assert_eq!(dec.poll(&HEX_KEYPAD, &mut display, &theme).unwrap(), None);
    }

    #[test]
    fn test_press_feedback_highlights_then_restores() {
        let touch = ScriptedTouch::new().tap(Point::new(225, 100));
        let mut dec = decoder(touch);
        let mut display = RecordingDisplay::new();
        let theme = Theme::default();

        dec.poll(&HEX_KEYPAD, &mut display, &theme).unwrap();

        assert_eq!(display.draws.len(), 2);
        assert_eq!(display.draws[0].style.border, Color::YELLOW);
        assert_eq!(display.draws[0].label.as_str(), "1");
        assert_eq!(display.draws[1].style, theme.style(Role::Key));
        assert_eq!(display.draws[1].rect, display.draws[0].rect);
    }

    #[test]
    fn test_press_feedback_disabled() {
        let touch = ScriptedTouch::new().tap(Point::new(225, 100));
        let mut dec = decoder(touch);
        dec.set_press_feedback(false);
        let mut display = RecordingDisplay::new();

        let code = dec
            .poll(&HEX_KEYPAD, &mut display, &Theme::default())
            .unwrap();
        assert_eq!(code, Some(0x01));
        assert!(display.draws.is_empty());
    }

    #[test]
    fn test_release_when_lifted() {
        let touch = ScriptedTouch::new()
            .then(Some(Point::new(150, 100)))
            .then(Some(Point::new(151, 101)))
            .then(None);
        let mut dec = decoder(touch);
        let release = dec.await_release(Rect::new(145, 80, 195, 120)).unwrap();
        assert_eq!(release, Release::Lifted);
        assert_eq!(dec.touch_mut().samples(), 3);
    }

    #[test]
    fn test_release_when_leaving_region() {
        let touch = ScriptedTouch::new()
            .then(Some(Point::new(150, 100)))
            .then(Some(Point::new(300, 100)));
        let mut dec = decoder(touch);
        let release = dec.await_release(Rect::new(145, 80, 195, 120)).unwrap();
        assert_eq!(release, Release::LeftRegion);
    }

    #[test]
    fn test_release_times_out() {
        let touch = ScriptedTouch::new().holding(Point::new(150, 100));
        let mut dec = decoder(touch);
        dec.set_release_config(ReleaseConfig {
            poll_interval_us: 5_000,
            timeout_ms: 10,
        });

        let release = dec.await_release(Rect::new(145, 80, 195, 120)).unwrap();
        assert_eq!(release, Release::TimedOut);

        let (touch, delay) = dec.into_inner();
        assert_eq!(touch.samples(), 3);
        assert_eq!(delay.total_ns, 10_000_000);
    }

    #[test]
    fn test_timed_out_press_still_reports_code() {
        let touch = ScriptedTouch::new()
            .then(Some(Point::new(370, 115)))
            .holding(Point::new(370, 115));
        let mut dec = decoder(touch);
        dec.set_release_config(ReleaseConfig {
            poll_interval_us: 1_000,
            timeout_ms: 3,
        });
        let mut display = RecordingDisplay::new();

        let code = dec
            .poll(&ERROR_DIALOG, &mut display, &Theme::default())
            .unwrap();
        assert_eq!(code, Some(3));
    }

    #[test]
    fn test_abort_cuts_wait_short() {
        let touch = ScriptedTouch::new().holding(Point::new(150, 100));
        let mut dec = decoder(touch);
        dec.set_release_config(ReleaseConfig::UNBOUNDED);

        let mut checks = 0;
        let release = dec
            .await_release_until(Rect::new(145, 80, 195, 120), || {
                checks += 1;
                checks == 4
            })
            .unwrap();
        assert_eq!(release, Release::Aborted);
        assert_eq!(checks, 4);
    }

    #[test]
    fn test_last_release_reports_how_poll_ended() {
        let touch = ScriptedTouch::new()
            .tap(Point::new(225, 100))
            .then(Some(Point::new(225, 100)))
            .holding(Point::new(225, 100));
        let mut dec = decoder(touch);
        dec.set_release_config(ReleaseConfig {
            poll_interval_us: 1_000,
            timeout_ms: 2,
        });
        let mut display = RecordingDisplay::new();
        let theme = Theme::default();
        assert_eq!(dec.last_release(), None);

        assert_eq!(dec.poll(&HEX_KEYPAD, &mut display, &theme).unwrap(), Some(0x01));
        assert_eq!(dec.last_release(), Some(Release::Lifted));

        assert_eq!(dec.poll(&HEX_KEYPAD, &mut display, &theme).unwrap(), Some(0x01));
        assert_eq!(dec.last_release(), Some(Release::TimedOut));

        dec.touch_mut().lift();
        assert_eq!(dec.poll(&HEX_KEYPAD, &mut display, &theme).unwrap(), None);
        assert_eq!(dec.last_release(), None);
    }

    #[test]
    fn test_touch_error_propagates() {
        let touch = ScriptedTouch::new().failing();
        let mut dec = decoder(touch);
        let mut display = RecordingDisplay::new();
        let result = dec.poll(&HEX_KEYPAD, &mut display, &Theme::default());
        assert_eq!(result, Err(InputError::Touch(TouchError::Communication)));
    }

    #[test]
    fn test_display_error_propagates() {
        let touch = ScriptedTouch::new().tap(Point::new(225, 100));
        let mut dec = decoder(touch);
        let mut display = RecordingDisplay::failing();
        let result = dec.poll(&HEX_KEYPAD, &mut display, &Theme::default());
        assert_eq!(
            result,
            Err(InputError::Display(tftlcd_display::DisplayError::Communication))
        );
    }
}
