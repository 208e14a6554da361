//! Cursor.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Main-loop cursor tracking
//!
//! Each iteration reads the accelerometer, nudges the cursor one pixel per
//! axis when the reading leaves the dead zone around the loop baseline,
//! wraps it into the canvas and plots it. Old pixels are never erased, so
//! the cursor leaves a trail until the clear button is pressed.

use core::sync::atomic::{AtomicBool, Ordering::Acquire};

use crate::calibration::AxisSample;
use crate::config::{CURSOR_START, DEAD_ZONE, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::error::Error;
use crate::state::ProcessState;
use crate::traits::{AxisSensor, BitmapDisplay, Color};

/// A point on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub x: i16,
    pub y: i16,
}

impl CursorPosition {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Wrap a coordinate into `0..bound`
///
/// Values past the end roll over to 0. A negative value lands on `bound`
/// itself, not `bound - 1`, so stepping left from column 0 puts the cursor
/// one column past the visible edge for one iteration.
pub const fn wrap(value: i16, bound: i16) -> i16 {
    let wrapped = value % bound;
    if wrapped < 0 { bound } else { wrapped }
}

/// One step along an axis: -1, 0 or +1
fn nudge(reading: i8, baseline: i8) -> i16 {
    let (reading, baseline) = (i16::from(reading), i16::from(baseline));
    if reading > baseline + DEAD_ZONE {
        1
    } else if reading < baseline - DEAD_ZONE {
        -1
    } else {
        0
    }
}

/// Cursor state owned by the main loop
#[derive(Debug, Clone)]
pub struct CursorTracker {
    baseline: AxisSample,
    position: CursorPosition,
}

impl CursorTracker {
    /// Start at [`CURSOR_START`] with the given loop baseline
    pub const fn new(baseline: AxisSample) -> Self {
        Self {
            baseline,
            position: CursorPosition::new(CURSOR_START.0, CURSOR_START.1),
        }
    }

    /// Take the loop baseline from a fresh reading
    ///
    /// Called after calibration. The baseline is a raw reading, separate
    /// from the calibration offsets.
    pub fn capture<S: AxisSensor>(sensor: &mut S) -> Result<Self, S::Error> {
        sensor.read().map(Self::new)
    }

    #[cfg(test)]
    const fn with_position(mut self, position: CursorPosition) -> Self {
        self.position = position;
        self
    }

    pub fn baseline(&self) -> AxisSample {
        self.baseline
    }

    pub fn position(&self) -> CursorPosition {
        self.position
    }

    /// Apply one reading to the position and return the result
    ///
    /// Tilting towards +x moves the cursor left; tilting towards +y moves
    /// it down the screen.
    pub fn advance(&mut self, sample: AxisSample) -> CursorPosition {
        let x = self.position.x - nudge(sample.x, self.baseline.x);
        let y = self.position.y + nudge(sample.y, self.baseline.y);

        self.position = CursorPosition::new(wrap(x, DISPLAY_WIDTH), wrap(y, DISPLAY_HEIGHT));
        self.position
    }

    /// One loop iteration: read, move, plot
    ///
    /// A failed read skips the iteration and leaves the cursor where it
    /// was. A failed plot drops the frame but keeps the new position.
    pub fn step<S, D>(
        &mut self,
        state: &ProcessState,
        sensor: &mut S,
        display: &mut D,
    ) -> Result<CursorPosition, Error<S::Error, D::Error>>
    where
        S: AxisSensor,
        D: BitmapDisplay,
    {
        let sample = sensor.read().map_err(Error::Sensor)?;
        let position = self.advance(sample);
        state.publish_cursor(position);

        display
            .put_pixel(position.x, position.y, Color::White)
            .map_err(Error::Display)?;
        Ok(position)
    }

    /// Iterate until `stop` is set, reporting failures to `on_error`
    pub fn run<S, D, F>(
        &mut self,
        state: &ProcessState,
        sensor: &mut S,
        display: &mut D,
        stop: &AtomicBool,
        mut on_error: F,
    ) where
        S: AxisSensor,
        D: BitmapDisplay,
        F: FnMut(Error<S::Error, D::Error>),
    {
        while !stop.load(Acquire) {
            if let Err(err) = self.step(state, sensor, display) {
                on_error(err);
            }
        }
    }
}
