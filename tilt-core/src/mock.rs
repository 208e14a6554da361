//! Mock.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Test doubles for the collaborator traits

use std::cell::RefCell;
use std::rc::Rc;
use std::string::String;
use std::sync::atomic::{AtomicBool, Ordering};
use std::vec::Vec;

use crate::calibration::AxisSample;
use crate::traits::{
    Acknowledge, AxisSensor, BitmapDisplay, Color, DigitDisplay, InterruptController,
    InterruptSource, PendingSource,
};

/// Ordered record of collaborator calls, shared between mocks
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<&'static str>>>);

impl Journal {
    pub fn push(&self, event: &'static str) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Sensor replaying a script; the last entry repeats forever
///
/// `None` entries fail the read.
pub struct ScriptedSensor {
    script: Vec<Option<AxisSample>>,
    reads: usize,
    journal: Journal,
}

impl ScriptedSensor {
    pub fn new(samples: &[AxisSample]) -> Self {
        Self::script(samples.iter().copied().map(Some).collect())
    }

    pub fn script(script: Vec<Option<AxisSample>>) -> Self {
        assert!(!script.is_empty());
        Self {
            script,
            reads: 0,
            journal: Journal::default(),
        }
    }

    pub fn constant(sample: AxisSample) -> Self {
        Self::new(&[sample])
    }

    pub fn failing() -> Self {
        Self::script(std::vec![None])
    }

    pub fn with_journal(mut self, journal: &Journal) -> Self {
        self.journal = journal.clone();
        self
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl AxisSensor for ScriptedSensor {
    type Error = MockError;

    fn read(&mut self) -> Result<AxisSample, MockError> {
        let index = self.reads.min(self.script.len() - 1);
        self.reads += 1;
        self.journal.push("read");
        self.script[index].ok_or(MockError)
    }
}

/// Wraps a sensor and raises `stop` once `limit` reads have been served
pub struct StoppingSensor<'a, S> {
    pub inner: S,
    limit: usize,
    served: usize,
    stop: &'a AtomicBool,
}

impl<'a, S> StoppingSensor<'a, S> {
    pub fn new(inner: S, limit: usize, stop: &'a AtomicBool) -> Self {
        Self {
            inner,
            limit,
            served: 0,
            stop,
        }
    }
}

impl<S: AxisSensor> AxisSensor for StoppingSensor<'_, S> {
    type Error = S::Error;

    fn read(&mut self) -> Result<AxisSample, S::Error> {
        self.served += 1;
        if self.served >= self.limit {
            self.stop.store(true, Ordering::Release);
        }
        self.inner.read()
    }
}

/// Bitmap display keeping the set of lit pixels
#[derive(Default)]
pub struct RecordingDisplay {
    pub lit: Vec<(i16, i16)>,
    pub strings: Vec<(i16, i16, String)>,
    pub clears: usize,
    fail_clear: bool,
    fail_pixels: bool,
    journal: Journal,
}

impl RecordingDisplay {
    pub fn failing_clear() -> Self {
        Self {
            fail_clear: true,
            ..Self::default()
        }
    }

    pub fn failing_pixels() -> Self {
        Self {
            fail_pixels: true,
            ..Self::default()
        }
    }

    pub fn with_journal(mut self, journal: &Journal) -> Self {
        self.journal = journal.clone();
        self
    }
}

impl BitmapDisplay for RecordingDisplay {
    type Error = MockError;

    fn clear(&mut self, _color: Color) -> Result<(), MockError> {
        self.journal.push("clear");
        if self.fail_clear {
            return Err(MockError);
        }
        self.clears += 1;
        self.lit.clear();
        Ok(())
    }

    fn put_pixel(&mut self, x: i16, y: i16, color: Color) -> Result<(), MockError> {
        self.journal.push("pixel");
        if self.fail_pixels {
            return Err(MockError);
        }
        if color == Color::White && !self.lit.contains(&(x, y)) {
            self.lit.push((x, y));
        }
        Ok(())
    }

    fn put_string(
        &mut self,
        x: i16,
        y: i16,
        text: &str,
        _fg: Color,
        _bg: Color,
    ) -> Result<(), MockError> {
        self.journal.push("string");
        self.strings.push((x, y, text.into()));
        Ok(())
    }
}

/// Digit display remembering every symbol it was asked to show
#[derive(Default)]
pub struct RecordingDigits {
    pub shown: Vec<(u8, u8)>,
    journal: Journal,
}

impl RecordingDigits {
    pub fn with_journal(mut self, journal: &Journal) -> Self {
        self.journal = journal.clone();
        self
    }
}

impl DigitDisplay for RecordingDigits {
    fn set_symbol(&mut self, symbol: u8, position: u8) {
        self.journal.push("symbol");
        self.shown.push((symbol, position));
    }
}

/// Interrupt condition with a pending bit and an acknowledge counter
#[derive(Default)]
pub struct MockLine {
    pub pending: bool,
    pub acks: usize,
    journal: Journal,
}

impl MockLine {
    pub fn pending() -> Self {
        Self {
            pending: true,
            ..Self::default()
        }
    }

    pub fn with_journal(mut self, journal: &Journal) -> Self {
        self.journal = journal.clone();
        self
    }
}

impl Acknowledge for MockLine {
    fn acknowledge(&mut self) {
        self.journal.push("ack");
        self.pending = false;
        self.acks += 1;
    }
}

impl PendingSource for MockLine {
    fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Interrupt controller recording enable calls
#[derive(Default)]
pub struct MockController {
    pub enabled: Vec<InterruptSource>,
    journal: Journal,
}

impl MockController {
    pub fn with_journal(mut self, journal: &Journal) -> Self {
        self.journal = journal.clone();
        self
    }
}

impl InterruptController for MockController {
    fn enable(&mut self, source: InterruptSource) {
        self.journal.push(match source {
            InterruptSource::PeriodicTimer => "enable timer",
            InterruptSource::ButtonEdge => "enable edge",
        });
        self.enabled.push(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_display_keeps_lit_pixels() {
        let mut display = RecordingDisplay::default();
        display.put_pixel(40, 40, Color::White).unwrap();
        display.fail_clear = true;

        assert_eq!(display.clear(Color::Black), Err(MockError));
        assert_eq!(display.lit, [(40, 40)]);
        assert_eq!(display.clears, 0);
    }

    #[test]
    fn test_failing_pixels_records_nothing() {
        let mut display = RecordingDisplay::failing_pixels();
        assert_eq!(display.put_pixel(1, 1, Color::White), Err(MockError));
        assert!(display.lit.is_empty());
    }
}
