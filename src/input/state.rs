//! Input state management
//!
//! Polls keyboard and touch input from macroquad once per frame and filters
//! the result down to accepted jump gestures.

use macroquad::prelude::*;
use super::Gesture;

/// Drops touches that land too close to the previously accepted one
#[derive(Debug, Clone)]
pub struct TouchDebounce {
    window_ms: f64,
    last_accepted_ms: Option<f64>,
}

impl TouchDebounce {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    /// Returns true (and records the time) if a touch at `now_ms` is accepted
    ///
    /// A touch is accepted when more than `window_ms` has passed since the
    /// last accepted one. The first touch is always accepted.
    pub fn accept(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms - last <= self.window_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}

/// Keyboard + touch input for the jump action
pub struct InputState {
    touch: TouchDebounce,
}

impl InputState {
    pub fn new(touch_debounce_ms: f64) -> Self {
        Self {
            touch: TouchDebounce::new(touch_debounce_ms),
        }
    }

    /// Filter one raw gesture. Keys always pass; touches are debounced.
    pub fn accept(&mut self, gesture: Gesture, now_ms: f64) -> bool {
        if gesture.is_debounced() {
            self.touch.accept(now_ms)
        } else {
            true
        }
    }

    /// Call once per frame. Returns the accepted gestures in arrival order.
    pub fn poll(&mut self, now_ms: f64) -> Vec<Gesture> {
        let mut raw = Vec::new();
        if is_key_pressed(KeyCode::Space) {
            raw.push(Gesture::Key);
        }
        for touch in touches() {
            if matches!(touch.phase, TouchPhase::Started) {
                raw.push(Gesture::Touch);
            }
        }

        raw.into_iter()
            .filter(|&gesture| self.accept(gesture, now_ms))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches_50ms_apart_drop_second() {
        let mut input = InputState::new(100.0);
        assert!(input.accept(Gesture::Touch, 1000.0));
        assert!(!input.accept(Gesture::Touch, 1050.0));
    }

    #[test]
    fn test_touches_150ms_apart_both_accepted() {
        let mut input = InputState::new(100.0);
        assert!(input.accept(Gesture::Touch, 1000.0));
        assert!(input.accept(Gesture::Touch, 1150.0));
    }

    #[test]
    fn test_exact_window_is_dropped() {
        let mut debounce = TouchDebounce::new(100.0);
        assert!(debounce.accept(0.0));
        assert!(!debounce.accept(100.0));
        assert!(debounce.accept(100.5));
    }

    #[test]
    fn test_rejected_touch_does_not_extend_window() {
        let mut debounce = TouchDebounce::new(100.0);
        assert!(debounce.accept(0.0));
        assert!(!debounce.accept(60.0));
        // Measured from the accepted touch at 0, not the dropped one at 60
        assert!(debounce.accept(120.0));
    }

    #[test]
    fn test_keys_are_not_debounced() {
        let mut input = InputState::new(100.0);
        assert!(input.accept(Gesture::Key, 0.0));
        assert!(input.accept(Gesture::Key, 1.0));
        assert!(input.accept(Gesture::Key, 2.0));
        // Keys don't consume the touch window either
        assert!(input.accept(Gesture::Touch, 3.0));
    }
}
