//! Collision tests
//!
//! Everything is axis-aligned and strict: touching edges don't count.

use super::components::{Obstacle, Player};

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Horizontal spans overlap
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.x < other.right() && self.right() > other.x
    }

    /// Full AABB overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_x(other) && self.y < other.bottom() && self.bottom() > other.y
    }
}

/// Does the player hit this obstacle's walls?
///
/// Horizontal spans must overlap, and then the player's top has to be above
/// the gap top or its bottom below the gap bottom.
pub fn hits_obstacle(player: &Player, obstacle: &Obstacle) -> bool {
    let body = player.rect();
    let span = Rect::new(obstacle.x, 0.0, obstacle.width, 0.0);
    body.overlaps_x(&span) && (body.y < obstacle.top || body.bottom() > obstacle.bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerSettings;

    fn player_at(y: f32) -> Player {
        let mut p = Player::new(&PlayerSettings::default(), 600.0);
        p.y = y;
        p
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Touching edges is not an overlap
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let ob = Obstacle::new(10.0, 50.0, 100.0, 200.0);
        assert!(!hits_obstacle(&player_at(150.0), &ob));
    }

    #[test]
    fn test_above_gap_hits() {
        let ob = Obstacle::new(10.0, 50.0, 100.0, 200.0);
        assert!(hits_obstacle(&player_at(50.0), &ob));
    }

    #[test]
    fn test_below_gap_hits() {
        let ob = Obstacle::new(10.0, 50.0, 100.0, 200.0);
        // bottom = 290 + 40 = 330 > 300
        assert!(hits_obstacle(&player_at(290.0), &ob));
        // bottom exactly on the gap edge is fine
        assert!(!hits_obstacle(&player_at(260.0), &ob));
    }

    #[test]
    fn test_no_horizontal_overlap_is_safe() {
        // Player spans 50..90, obstacle 90..140
        let ob = Obstacle::new(90.0, 50.0, 100.0, 200.0);
        assert!(!hits_obstacle(&player_at(0.0), &ob));
    }
}
