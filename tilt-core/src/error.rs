//! Error.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Error type shared by the startup sequence and the cursor loop

/// Failure of one of the fallible collaborators
///
/// `SE` is the sensor's error type, `DE` the bitmap display's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<SE, DE> {
    /// The accelerometer read failed
    Sensor(SE),
    /// Writing to the bitmap display failed
    Display(DE),
}
