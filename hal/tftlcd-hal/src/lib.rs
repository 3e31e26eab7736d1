//! TFT LCD Hardware Abstraction Layer
//!
//! This crate defines the hardware-facing pieces the input widgets build on:
//! screen geometry and the touch panel sampler. Concrete touch controllers
//! (resistive ADC readers, capacitive I2C chips) implement [`TouchPanel`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tftlcd-core (keypads, keyboard, dialog)│
//! └─────────────────────────────────────────┘
//!            │                     │
//!            ▼                     ▼
//! ┌─────────────────────┐ ┌─────────────────────┐
//! │ tftlcd-hal (touch,  │ │ tftlcd-display      │
//! │ geometry)           │ │ (render primitives) │
//! └─────────────────────┘ └─────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod geometry;
pub mod touch;

pub use geometry::{Point, Rect};
pub use touch::{TouchError, TouchPanel};
