//! State.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Process-wide state shared between the interrupt handlers and the main loop
//!
//! Every field has exactly one writer:
//!
//! | field              | writer            | readers        |
//! |--------------------|-------------------|----------------|
//! | digit index        | timer interrupt   | anyone         |
//! | sample flag        | timer interrupt   | anyone         |
//! | calibration        | `calibrate`, once | cursor, logs   |
//! | cursor position    | main loop         | anyone         |
//!
//! With a single writer per field, plain word-sized atomics are enough and
//! no critical section is needed.

use core::sync::atomic::{
    AtomicBool, AtomicI8, AtomicI16, AtomicU8,
    Ordering::{Acquire, Relaxed, Release},
};

use crate::calibration::CalibrationOffset;
use crate::config::CURSOR_START;
use crate::cursor::CursorPosition;

pub struct ProcessState {
    digit: AtomicU8,
    sample_armed: AtomicBool,
    calibrated: AtomicBool,
    x_off: AtomicI8,
    y_off: AtomicI8,
    z_off: AtomicI8,
    cursor_x: AtomicI16,
    cursor_y: AtomicI16,
}

impl Default for ProcessState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessState {
    /// Power-on state: digit 0, flag clear, uncalibrated, cursor at start
    pub const fn new() -> Self {
        Self {
            digit: AtomicU8::new(0),
            sample_armed: AtomicBool::new(false),
            calibrated: AtomicBool::new(false),
            x_off: AtomicI8::new(0),
            y_off: AtomicI8::new(0),
            z_off: AtomicI8::new(0),
            cursor_x: AtomicI16::new(CURSOR_START.0),
            cursor_y: AtomicI16::new(CURSOR_START.1),
        }
    }

    /// Index of the symbol the next timer tick will show
    pub fn digit_index(&self) -> u8 {
        self.digit.load(Acquire)
    }

    pub(crate) fn set_digit_index(&self, index: u8) {
        self.digit.store(index, Release);
    }

    /// Whether the timer has armed the sample flag
    ///
    /// Nothing in this crate clears the flag once set.
    pub fn sample_armed(&self) -> bool {
        self.sample_armed.load(Acquire)
    }

    pub(crate) fn arm_sample(&self) {
        self.sample_armed.store(true, Release);
    }

    /// The stored offsets, or `None` before calibration
    pub fn calibration(&self) -> Option<CalibrationOffset> {
        if !self.calibrated.load(Acquire) {
            return None;
        }
        Some(CalibrationOffset {
            x: self.x_off.load(Relaxed),
            y: self.y_off.load(Relaxed),
            z: self.z_off.load(Relaxed),
        })
    }

    /// Store the offsets unless some are already stored
    ///
    /// Returns the offsets in effect afterwards.
    pub(crate) fn store_calibration(&self, offset: CalibrationOffset) -> CalibrationOffset {
        if let Some(existing) = self.calibration() {
            return existing;
        }
        self.x_off.store(offset.x, Relaxed);
        self.y_off.store(offset.y, Relaxed);
        self.z_off.store(offset.z, Relaxed);
        self.calibrated.store(true, Release);
        offset
    }

    /// Last cursor position published by the main loop
    pub fn cursor(&self) -> CursorPosition {
        CursorPosition {
            x: self.cursor_x.load(Relaxed),
            y: self.cursor_y.load(Relaxed),
        }
    }

    pub(crate) fn publish_cursor(&self, position: CursorPosition) {
        self.cursor_x.store(position.x, Relaxed);
        self.cursor_y.store(position.y, Relaxed);
    }
}
