//! Entity data
//!
//! Plain data structs for the three kinds of things on screen.
//! Behavior lives in the session step; these only know their own geometry.

use super::collision::Rect;
use crate::config::PlayerSettings;

/// The flying character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Edge length (square sprite)
    pub size: f32,
    /// Vertical velocity, positive = down
    pub velocity: f32,
    pub gravity: f32,
    /// Velocity applied by a jump (overwrites, doesn't add)
    pub lift: f32,
}

impl Player {
    /// Spawn at the vertical center of a field of the given height
    pub fn new(settings: &PlayerSettings, field_height: f32) -> Self {
        Self {
            x: settings.x,
            y: field_height / 2.0,
            size: settings.size,
            velocity: 0.0,
            gravity: settings.gravity,
            lift: settings.lift,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.size
    }
}

/// A pair of walls with an opening between `top` and `bottom`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Upper edge of the gap (end of the top wall)
    pub top: f32,
    /// Lower edge of the gap (start of the bottom wall)
    pub bottom: f32,
}

impl Obstacle {
    pub fn new(x: f32, width: f32, top: f32, gap: f32) -> Self {
        Self { x, width, top, bottom: top + gap }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// A bonus coin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collectible {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Collectible {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_centered() {
        let player = Player::new(&PlayerSettings::default(), 600.0);
        assert_eq!(player.y, 300.0);
        assert_eq!(player.velocity, 0.0);
        assert_eq!(player.bottom(), 340.0);
    }

    #[test]
    fn test_obstacle_gap() {
        let ob = Obstacle::new(800.0, 50.0, 120.0, 200.0);
        assert_eq!(ob.bottom, 320.0);
        assert_eq!(ob.right(), 850.0);
    }
}
