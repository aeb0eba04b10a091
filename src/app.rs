//! Application state and frame driver
//!
//! Owns the session plus everything around it (viewport, input, RNG,
//! sprites) and runs one frame at a time: input, resize check, physics,
//! draw. main() calls `frame()` then yields with `next_frame().await`.

use macroquad::prelude::*;
use ::rand::rngs::SmallRng;
use ::rand::SeedableRng;

use crate::config::GameConfig;
use crate::game::{draw_frame, PressAction, Session, Sprites};
use crate::input::InputState;
use crate::viewport::ViewportSizer;

/// Turns frame timestamps into delta-time units
///
/// One unit is one reference frame (16.67ms, i.e. 60Hz), so 120Hz gives 0.5
/// and a stalled frame gives a proportionally large step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    reference_ms: f64,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(reference_ms: f64) -> Self {
        Self {
            reference_ms,
            last_ms: None,
        }
    }

    /// Feed the current timestamp; returns units elapsed since the last call.
    /// The very first call has nothing to compare against and returns 0.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let delta = match self.last_ms {
            Some(last) => ((now_ms - last) / self.reference_ms) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        delta
    }
}

/// Main application state
pub struct AppState {
    pub session: Session,
    pub viewport: ViewportSizer,
    pub input: InputState,
    pub clock: FrameClock,
    pub sprites: Sprites,
    rng: SmallRng,
}

impl AppState {
    /// Create app state for a window of the given size
    pub fn new(config: GameConfig, sprites: Sprites, window: (f32, f32), seed: u64) -> Self {
        let viewport = ViewportSizer::new(window.0, window.1);
        Self {
            session: Session::new(config, viewport.playfield()),
            viewport,
            input: InputState::new(config.timing.touch_debounce_ms),
            clock: FrameClock::new(config.timing.reference_frame_ms),
            sprites,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Run one frame against macroquad's clock, window, and input
    pub fn frame(&mut self) {
        let now_ms = get_time() * 1000.0;

        if self.viewport.update(screen_width(), screen_height()) {
            let field = self.viewport.playfield();
            log::debug!("Playfield resized to {:.0}x{:.0}", field.width, field.height);
        }

        for gesture in self.input.poll(now_ms) {
            self.handle_press(gesture);
        }

        let dt = self.clock.tick(now_ms);
        self.step(dt);

        let field = self.viewport.playfield();
        draw_frame(
            &self.session,
            &self.sprites,
            self.viewport.origin(),
            vec2(field.width, field.height),
        );
    }

    fn handle_press(&mut self, gesture: crate::input::Gesture) {
        if self.session.press(self.viewport.playfield()) == PressAction::Restart {
            log::info!("Restarted ({:?})", gesture);
        }
    }

    /// Physics step; logs the interesting outcomes
    pub fn step(&mut self, dt: f32) {
        let report = self.session.advance(dt, self.viewport.playfield(), &mut self.rng);
        if report.cleared > 0 {
            log::debug!("Cleared obstacle, score {}", self.session.score);
        }
        if report.collected > 0 {
            log::debug!("Collected coin, {} total", self.session.coins);
        }
        if let Some(cause) = report.ended {
            log::info!(
                "Game over: {} (score {}, coins {})",
                cause.label(),
                self.session.score,
                self.session.coins
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::session::Phase;

    fn app() -> AppState {
        AppState::new(GameConfig::default(), Sprites::default(), (1024.0, 768.0), 1)
    }

    #[test]
    fn test_clock_at_60hz_is_one_unit() {
        let mut clock = FrameClock::new(16.67);
        assert_eq!(clock.tick(1000.0), 0.0);
        assert!((clock.tick(1016.67) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_clock_at_120hz_is_half_unit() {
        let mut clock = FrameClock::new(16.67);
        clock.tick(0.0);
        assert!((clock.tick(8.335) - 0.5).abs() < 1e-4);
        assert!((clock.tick(16.67) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_clock_stall_gives_big_step() {
        let mut clock = FrameClock::new(16.67);
        clock.tick(0.0);
        assert!((clock.tick(166.7) - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_app_starts_running_on_wide_field() {
        let app = app();
        assert_eq!(app.viewport.playfield().width, 800.0);
        assert_eq!(app.session.player.y, 300.0);
        assert_eq!(app.session.phase, Phase::Running);
    }

    #[test]
    fn test_step_runs_until_game_over_then_freezes() {
        let mut app = app();
        let mut ticks = 0;
        while !app.session.is_over() && ticks < 10_000 {
            app.step(1.0);
            ticks += 1;
        }
        assert!(app.session.is_over());

        let frozen = app.session.player;
        app.step(1.0);
        assert_eq!(app.session.player, frozen);
    }

    #[test]
    fn test_same_seed_spawns_same_stream() {
        let mut a = app();
        let mut b = app();
        for _ in 0..600 {
            a.step(1.0);
            b.step(1.0);
        }
        assert!(!a.session.obstacles.is_empty());
        assert_eq!(a.session.obstacles, b.session.obstacles);
        assert_eq!(a.session.collectibles, b.session.collectibles);
    }

    #[test]
    fn test_press_after_game_over_restarts() {
        let mut app = app();
        app.session.phase = Phase::GameOver;
        app.session.score = 9;
        app.handle_press(crate::input::Gesture::Key);
        assert_eq!(app.session.phase, Phase::Running);
        assert_eq!(app.session.score, 0);
    }
}
