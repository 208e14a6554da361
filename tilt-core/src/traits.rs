//! Traits.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Collaborator traits
//!
//! The core never touches registers. Each peripheral it depends on is
//! reached through one of these traits, implemented by the firmware for
//! the micro:bit and by test doubles on the host.

use core::fmt::Debug;

use crate::calibration::AxisSample;

/// Two-level colour understood by the bitmap display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

/// Interrupt sources the core registers handlers against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptSource {
    /// Free-running periodic timer driving the digit cycler
    PeriodicTimer,
    /// Edge detector on the clear button
    ButtonEdge,
}

/// Three-axis accelerometer
pub trait AxisSensor {
    type Error: Debug;

    /// Take one instantaneous reading
    fn read(&mut self) -> Result<AxisSample, Self::Error>;
}

/// Character display showing one symbol per position
///
/// Must be callable from interrupt context. Writes are fire-and-forget.
pub trait DigitDisplay {
    fn set_symbol(&mut self, symbol: u8, position: u8);
}

/// Pixel addressable display
///
/// `clear` and `put_pixel` are called from both the main loop and the
/// edge interrupt, so implementations must not block in `clear`.
pub trait BitmapDisplay {
    type Error: Debug;

    fn clear(&mut self, color: Color) -> Result<(), Self::Error>;

    fn put_pixel(&mut self, x: i16, y: i16, color: Color) -> Result<(), Self::Error>;

    fn put_string(
        &mut self,
        x: i16,
        y: i16,
        text: &str,
        fg: Color,
        bg: Color,
    ) -> Result<(), Self::Error>;
}

/// An interrupt condition that has to be cleared before its handler returns
pub trait Acknowledge {
    fn acknowledge(&mut self);
}

/// An interrupt condition that also exposes its own status bit
///
/// Used where one interrupt line is shared between several pins.
pub trait PendingSource: Acknowledge {
    fn is_pending(&self) -> bool;
}

/// Interrupt controller
pub trait InterruptController {
    fn enable(&mut self, source: InterruptSource);
}
