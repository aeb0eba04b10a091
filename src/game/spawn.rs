//! Obstacle and coin spawning
//!
//! A new obstacle enters at the right edge whenever the stream is empty or the
//! newest obstacle has scrolled `spacing` pixels in. Half of them (by default)
//! carry a coin in the middle of their gap.

use rand::Rng;

use super::components::{Collectible, Obstacle};
use crate::config::{CollectibleSettings, ObstacleSettings};
use crate::viewport::Playfield;

/// Is it time for another obstacle?
pub fn should_spawn(newest: Option<&Obstacle>, field: Playfield, settings: &ObstacleSettings) -> bool {
    match newest {
        None => true,
        Some(ob) => ob.x < field.width - settings.spacing,
    }
}

/// Pick a gap top in `[margin, height - gap - margin)`
///
/// Scales a unit sample instead of using `gen_range` so that a field too
/// short for the margins still produces a value rather than panicking.
pub fn gap_top<R: Rng + ?Sized>(rng: &mut R, field: Playfield, settings: &ObstacleSettings) -> f32 {
    let r: f32 = rng.gen();
    r * (field.height - settings.gap - settings.margin * 2.0) + settings.margin
}

/// Build a new obstacle at the right edge, maybe with a coin
pub fn spawn_obstacle<R: Rng + ?Sized>(
    rng: &mut R,
    field: Playfield,
    obstacles: &ObstacleSettings,
    collectibles: &CollectibleSettings,
) -> (Obstacle, Option<Collectible>) {
    let top = gap_top(rng, field, obstacles);
    let obstacle = Obstacle::new(field.width, obstacles.width, top, obstacles.gap);

    let coin = if rng.gen_bool(collectibles.chance) {
        Some(Collectible {
            x: field.width + collectibles.offset_x,
            y: top + obstacles.gap / 2.0 - collectibles.size / 2.0,
            size: collectibles.size,
        })
    } else {
        None
    };

    (obstacle, coin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const FIELD: Playfield = Playfield::new(800.0, 600.0);

    #[test]
    fn test_should_spawn() {
        let settings = ObstacleSettings::default();
        assert!(should_spawn(None, FIELD, &settings));

        let fresh = Obstacle::new(800.0, 50.0, 100.0, 200.0);
        assert!(!should_spawn(Some(&fresh), FIELD, &settings));

        let edge = Obstacle::new(600.0, 50.0, 100.0, 200.0);
        assert!(!should_spawn(Some(&edge), FIELD, &settings));

        let moved = Obstacle::new(599.0, 50.0, 100.0, 200.0);
        assert!(should_spawn(Some(&moved), FIELD, &settings));
    }

    #[test]
    fn test_low_sample_puts_gap_at_margin_with_coin() {
        // All-zero RNG: gap top at the margin, gen_bool(0.5) succeeds
        let mut rng = StepRng::new(0, 0);
        let (ob, coin) = spawn_obstacle(
            &mut rng,
            FIELD,
            &ObstacleSettings::default(),
            &CollectibleSettings::default(),
        );
        assert_eq!(ob.x, 800.0);
        assert_eq!(ob.top, 50.0);
        assert_eq!(ob.bottom, 250.0);

        let coin = coin.expect("coin should spawn");
        assert_eq!(coin.x, 850.0);
        // Centered in the gap: 50 + 100 - 10
        assert_eq!(coin.y, 140.0);
    }

    #[test]
    fn test_high_sample_skips_coin() {
        let mut rng = StepRng::new(u64::MAX, 0);
        let (ob, coin) = spawn_obstacle(
            &mut rng,
            FIELD,
            &ObstacleSettings::default(),
            &CollectibleSettings::default(),
        );
        assert!(coin.is_none());
        // Just under the upper bound of 350 (float rounding may land on it)
        assert!(ob.top > 340.0 && ob.top <= 350.0);
    }

    #[test]
    fn test_gap_range_and_size() {
        let settings = ObstacleSettings::default();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let (ob, _) = spawn_obstacle(&mut rng, FIELD, &settings, &CollectibleSettings::default());
            assert!(ob.top >= 50.0);
            assert!(ob.top <= 350.0);
            assert!((ob.bottom - ob.top - settings.gap).abs() < 1e-3);
        }
    }
}
