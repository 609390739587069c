//! Message types sent from the input actor to the scheduler.

use crate::scene::Adjustment;

/// A request from input to the frame scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Stop animating and exit.
    Quit,
    /// Restore default parameters and clear the screen.
    Reset,
    /// Change an animation parameter.
    Adjust(Adjustment),
    /// The terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}
