//! App.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Startup sequence

use crate::calibration::calibrate;
use crate::config::BANNER;
use crate::cursor::CursorTracker;
use crate::error::Error;
use crate::state::ProcessState;
use crate::traits::{AxisSensor, BitmapDisplay, Color, InterruptController, InterruptSource};

/// Clear the bitmap display and draw the static labels
pub fn draw_banner<D: BitmapDisplay>(display: &mut D) -> Result<(), D::Error> {
    display.clear(Color::Black)?;
    for (x, y, text) in BANNER {
        display.put_string(x, y, text, Color::White, Color::Black)?;
    }
    Ok(())
}

/// Bring the core up and hand back the tracker for the main loop
///
/// Order: calibrate, capture the loop baseline, draw the banner, then
/// enable the timer and edge interrupts. Calibration is finished before
/// either handler can run.
pub fn boot<S, D, C>(
    state: &ProcessState,
    sensor: &mut S,
    display: &mut D,
    interrupts: &mut C,
) -> Result<CursorTracker, Error<S::Error, D::Error>>
where
    S: AxisSensor,
    D: BitmapDisplay,
    C: InterruptController,
{
    calibrate(state, sensor).map_err(Error::Sensor)?;
    let tracker = CursorTracker::capture(sensor).map_err(Error::Sensor)?;
    draw_banner(display).map_err(Error::Display)?;

    interrupts.enable(InterruptSource::PeriodicTimer);
    interrupts.enable(InterruptSource::ButtonEdge);

    Ok(tracker)
}
