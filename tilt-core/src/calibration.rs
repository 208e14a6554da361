//! Calibration.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! One-shot accelerometer calibration

use crate::config::REST_Z;
use crate::state::ProcessState;
use crate::traits::AxisSensor;

/// One instantaneous three-axis reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisSample {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl AxisSample {
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }
}

/// Per-axis zero correction
///
/// x and y are pulled to zero, z to [`REST_Z`] since gravity acts on it
/// when the board lies flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationOffset {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl CalibrationOffset {
    /// Offsets that move `sample` onto (0, 0, REST_Z)
    ///
    /// Arithmetic wraps in 8 bits, so a reading of -128 yields an offset of -128.
    pub const fn from_rest(sample: AxisSample) -> Self {
        Self {
            x: 0i8.wrapping_sub(sample.x),
            y: 0i8.wrapping_sub(sample.y),
            z: REST_Z.wrapping_sub(sample.z),
        }
    }

    /// Zero-corrected view of a raw reading
    pub const fn apply(&self, sample: AxisSample) -> AxisSample {
        AxisSample {
            x: sample.x.wrapping_add(self.x),
            y: sample.y.wrapping_add(self.y),
            z: sample.z.wrapping_add(self.z),
        }
    }
}

/// Derive the offsets from one reading and store them in `state`
///
/// Runs once. Later calls return the stored offsets without touching the
/// sensor.
pub fn calibrate<S: AxisSensor>(
    state: &ProcessState,
    sensor: &mut S,
) -> Result<CalibrationOffset, S::Error> {
    if let Some(existing) = state.calibration() {
        return Ok(existing);
    }
    let sample = sensor.read()?;
    Ok(state.store_calibration(CalibrationOffset::from_rest(sample)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedSensor;

    #[test]
    fn test_offsets_from_fixed_sample() {
        let state = ProcessState::new();
        let mut sensor = ScriptedSensor::constant(AxisSample::new(3, -2, 60));

        let offset = calibrate(&state, &mut sensor).unwrap();

        assert_eq!(offset, CalibrationOffset { x: -3, y: 2, z: 4 });
        assert_eq!(state.calibration(), Some(offset));
    }

    #[test]
    fn test_offsets_wrap_at_i8_min() {
        let offset = CalibrationOffset::from_rest(AxisSample::new(-128, 127, -128));
        assert_eq!(offset, CalibrationOffset { x: -128, y: -127, z: -64 });
    }

    #[test]
    fn test_apply_moves_rest_sample_to_nominal() {
        let rest = AxisSample::new(3, -2, 60);
        let offset = CalibrationOffset::from_rest(rest);
        assert_eq!(offset.apply(rest), AxisSample::new(0, 0, REST_Z));
    }

    #[test]
    fn test_second_call_does_not_read_sensor() {
        let state = ProcessState::new();
        let mut sensor = ScriptedSensor::new(&[AxisSample::new(3, -2, 60), AxisSample::new(50, 50, 0)]);

        let first = calibrate(&state, &mut sensor).unwrap();
        let second = calibrate(&state, &mut sensor).unwrap();

        assert_eq!(first, second);
        assert_eq!(sensor.reads(), 1);
    }

    #[test]
    fn test_sensor_failure_leaves_state_uncalibrated() {
        let state = ProcessState::new();
        let mut sensor = ScriptedSensor::failing();

        assert!(calibrate(&state, &mut sensor).is_err());
        assert_eq!(state.calibration(), None);
    }
}
