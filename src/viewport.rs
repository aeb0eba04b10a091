//! Viewport sizing
//!
//! Picks the playfield size from the window width. Narrow windows (phones)
//! get a portrait field at 90% of the width; everything else gets a fixed
//! 800x600 field. The field is drawn centered in the window.

use macroquad::prelude::Vec2;

/// Windows narrower than this get the portrait layout
pub const NARROW_BREAKPOINT: f32 = 600.0;
/// Share of the window width used in the portrait layout
pub const NARROW_FILL: f32 = 0.9;
/// Width / height in the portrait layout
pub const PORTRAIT_ASPECT: f32 = 2.0 / 3.0;
/// Fixed landscape field
pub const WIDE_WIDTH: f32 = 800.0;
pub const WIDE_HEIGHT: f32 = 600.0;

/// Size of the area the game simulates and draws into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Compute the playfield for a window of the given logical width
    pub fn fit(window_width: f32) -> Self {
        if window_width < NARROW_BREAKPOINT {
            let width = window_width * NARROW_FILL;
            Self::new(width, width / PORTRAIT_ASPECT)
        } else {
            Self::new(WIDE_WIDTH, WIDE_HEIGHT)
        }
    }
}

/// Tracks the window size and recomputes the playfield when it changes
///
/// macroquad has no resize event, so this is polled once per frame.
#[derive(Debug, Clone)]
pub struct ViewportSizer {
    window: (f32, f32),
    playfield: Playfield,
}

impl ViewportSizer {
    pub fn new(window_width: f32, window_height: f32) -> Self {
        Self {
            window: (window_width, window_height),
            playfield: Playfield::fit(window_width),
        }
    }

    /// Feed the current window size. Returns true if the playfield changed.
    ///
    /// Entities are not moved; a resize mid-game can leave them where the
    /// old field put them.
    pub fn update(&mut self, window_width: f32, window_height: f32) -> bool {
        if (window_width, window_height) == self.window {
            return false;
        }
        self.window = (window_width, window_height);
        let fitted = Playfield::fit(window_width);
        let changed = fitted != self.playfield;
        self.playfield = fitted;
        changed
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    /// Top-left of the playfield in window coordinates (centered, never negative)
    pub fn origin(&self) -> Vec2 {
        Vec2::new(
            ((self.window.0 - self.playfield.width) * 0.5).max(0.0),
            ((self.window.1 - self.playfield.height) * 0.5).max(0.0),
        )
    }
}
