//! Config.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Compile-time configuration

/// Logical width of the bitmap canvas in pixels
pub const DISPLAY_WIDTH: i16 = 96;
/// Logical height of the bitmap canvas in pixels
pub const DISPLAY_HEIGHT: i16 = 64;

/// Where the cursor starts, roughly the middle of the canvas
pub const CURSOR_START: (i16, i16) = (48, 32);

/// Readings within this distance of the baseline do not move the cursor
pub const DEAD_ZONE: i16 = 5;

/// Expected z reading when the board lies flat (1 g)
pub const REST_Z: i8 = 64;

/// Symbols shown by the rotating digit, one per timer tick
pub const MONITOR_SYMBOLS: [u8; 16] = *b"0123456789ABCDEF";

/// Digit indices at which the timer arms the sample flag
pub const SAMPLE_TICKS: [u8; 3] = [5, 10, 15];

/// Position on the digit display the cycler writes to
pub const DIGIT_POSITION: u8 = 0;

/// Static labels drawn once at startup: (x, y, text)
pub const BANNER: [(i16, i16, &str); 3] = [
    (0, 20, "Tempe: "),
    (0, 30, "Light: "),
    (0, 40, "Accel: "),
];
