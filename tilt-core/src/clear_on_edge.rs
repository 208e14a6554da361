//! Clear_on_edge.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Button edge handler: wipe the bitmap display

use crate::traits::{BitmapDisplay, Color, PendingSource};

/// What the edge handler did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOutcome {
    /// The monitored pin had no pending edge; another pin shares the line
    NotPending,
    /// The display was cleared and the edge acknowledged
    Cleared,
}

/// Service the shared edge interrupt line for the clear button
///
/// The pin's pending bit is cleared after the display clear has been
/// issued, so an edge arriving while the clear runs raises the interrupt
/// again instead of being lost. The bit is cleared even when the display
/// reports an error.
pub fn on_edge<P, D>(pin: &mut P, display: &mut D) -> Result<EdgeOutcome, D::Error>
where
    P: PendingSource,
    D: BitmapDisplay,
{
    if !pin.is_pending() {
        return Ok(EdgeOutcome::NotPending);
    }

    let cleared = display.clear(Color::Black);
    pin.acknowledge();

    cleared.map(|()| EdgeOutcome::Cleared)
}
