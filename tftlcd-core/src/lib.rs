//! Board-agnostic touch input widgets for TFT LCD panels
//!
//! This crate contains the input logic that sits between a touch sampler
//! and a display backend:
//!
//! - Declarative layouts shared by drawing and hit-testing
//! - Touch decoder with bounded wait-for-release debounce
//! - Hex and decimal keypads composing a number digit by digit
//! - Alphanumeric keyboard composing a short text
//! - Modal error dialog
//! - Persisted configuration (theme and release timing)
//!
//! # Usage
//!
//! A host loop draws a widget once, then polls it every tick until it
//! reports `Accept` or `Cancel`:
//!
//! ```ignore
//! let mut keypad = Keypad::new(Radix::Hex);
//! keypad.draw(&mut display, &theme)?;
//! loop {
//!     match keypad.poll(&mut decoder, &mut display, &theme)? {
//!         Outcome::Idle => continue,
//!         Outcome::Accept => break Some(keypad.total()),
//!         Outcome::Cancel => break None,
//!     }
//! }
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod keys;
pub mod layout;
pub mod widget;

#[cfg(test)]
pub(crate) mod mock;

pub use config::{InputConfig, ReleaseConfig};
pub use decoder::{Release, TouchDecoder};
pub use error::InputError;
pub use keys::{DialogChoice, KeyboardKey, KeypadKey, Outcome, NO_KEY};
pub use layout::{hit_test, render, Element, Label};
pub use widget::{ErrorDialog, Keyboard, Keypad, Radix, Widget};
