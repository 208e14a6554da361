//! Lib.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Board-agnostic core of the tilt cursor firmware
//!
//! Everything here runs on the host as well as on the micro:bit:
//!
//! - Collaborator traits for the sensor, displays and interrupt lines
//! - The shared process state touched by both interrupt handlers and the main loop
//! - The timer tick handler (rotating hex digit, sample flag)
//! - The button edge handler (display clear)
//! - Calibration and the cursor tracking loop

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod app;
pub mod calibration;
pub mod clear_on_edge;
pub mod config;
pub mod cursor;
pub mod digit_cycler;
pub mod error;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use app::{boot, draw_banner};
pub use calibration::{AxisSample, CalibrationOffset, calibrate};
pub use clear_on_edge::EdgeOutcome;
pub use cursor::{CursorPosition, CursorTracker};
pub use digit_cycler::Tick;
pub use error::Error;
pub use state::ProcessState;
