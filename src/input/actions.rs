//! Input gestures
//!
//! The game has exactly one action (flap / restart). It can arrive from two
//! sources that behave differently: key presses are taken as-is, touches are
//! debounced because browsers tend to fire them in pairs.

/// Where a jump gesture came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Jump key (Space)
    Key,
    /// Touch start
    Touch,
}

impl Gesture {
    /// Does this source go through the touch debounce?
    pub fn is_debounced(&self) -> bool {
        matches!(self, Gesture::Touch)
    }
}
