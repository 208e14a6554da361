//! Digit_cycler.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Periodic timer handler: rotating hex digit and sample flag

use crate::config::{DIGIT_POSITION, MONITOR_SYMBOLS, SAMPLE_TICKS};
use crate::state::ProcessState;
use crate::traits::{Acknowledge, DigitDisplay};

/// What one timer tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Symbol pushed to the digit display
    pub symbol: u8,
    /// Whether this tick armed the sample flag
    pub armed: bool,
}

/// Service one expiry of the periodic timer
///
/// The compare event is cleared first so the interrupt does not re-fire
/// as soon as the handler returns. Only the timer interrupt may call this;
/// it is the sole writer of the digit index and the sample flag.
pub fn on_tick<T, D>(state: &ProcessState, timer: &mut T, digits: &mut D) -> Tick
where
    T: Acknowledge,
    D: DigitDisplay,
{
    timer.acknowledge();

    let count = state.digit_index() % MONITOR_SYMBOLS.len() as u8;
    let symbol = MONITOR_SYMBOLS[count as usize];
    digits.set_symbol(symbol, DIGIT_POSITION);

    let armed = SAMPLE_TICKS.contains(&count);
    if armed {
        state.arm_sample();
    }

    state.set_digit_index((count + 1) % MONITOR_SYMBOLS.len() as u8);

    Tick { symbol, armed }
}
