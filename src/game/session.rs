//! Game Session
//!
//! One playthrough's worth of state: the player, the obstacle stream, the
//! coins, and the counters. Created once at startup and reset on restart.
//!
//! `advance` is the whole simulation. Every motion is multiplied by the
//! delta-time units handed in, so the game plays the same at 60Hz and 144Hz.

use std::collections::VecDeque;

use rand::Rng;

use super::collision::hits_obstacle;
use super::components::{Collectible, Obstacle, Player};
use super::spawn::{should_spawn, spawn_obstacle};
use crate::config::GameConfig;
use crate::viewport::Playfield;

/// Is the game running or waiting for a restart?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    GameOver,
}

/// What ended a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    /// Fell past the bottom edge
    Floor,
    /// Flew past the top edge
    Ceiling,
    /// Clipped an obstacle wall
    Obstacle,
}

impl EndCause {
    pub fn label(&self) -> &'static str {
        match self {
            EndCause::Floor => "hit the floor",
            EndCause::Ceiling => "hit the ceiling",
            EndCause::Obstacle => "hit an obstacle",
        }
    }
}

/// What happened during one `advance` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Obstacles that scrolled off and scored
    pub cleared: u32,
    /// Coins picked up
    pub collected: u32,
    /// Set when this tick ended the session (first cause wins)
    pub ended: Option<EndCause>,
}

/// Result of a jump gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressAction {
    Jump,
    Restart,
}

/// All mutable game state
#[derive(Debug, Clone)]
pub struct Session {
    pub player: Player,
    /// Oldest (leftmost) first
    pub obstacles: VecDeque<Obstacle>,
    /// Never culled when missed, only when collected
    pub collectibles: Vec<Collectible>,
    /// Obstacles cleared
    pub score: u32,
    /// Coins collected
    pub coins: u32,
    pub phase: Phase,
    config: GameConfig,
}

impl Session {
    pub fn new(config: GameConfig, field: Playfield) -> Self {
        Self {
            player: Player::new(&config.player, field.height),
            obstacles: VecDeque::new(),
            collectibles: Vec::new(),
            score: 0,
            coins: 0,
            phase: Phase::Running,
            config,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    fn end(&mut self, cause: EndCause, report: &mut StepReport) {
        self.phase = Phase::GameOver;
        report.ended.get_or_insert(cause);
    }

    /// Step the simulation by `dt` delta-time units
    ///
    /// Once the session is over this does nothing. The tick that ends the
    /// session still finishes scrolling, scoring, and spawning.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, field: Playfield, rng: &mut R) -> StepReport {
        let mut report = StepReport::default();
        if self.is_over() {
            return report;
        }

        // Gravity
        self.player.velocity += self.player.gravity * dt;
        self.player.y += self.player.velocity * dt;

        // Field bounds
        if self.player.bottom() > field.height {
            self.player.y = field.height - self.player.size;
            self.player.velocity = 0.0;
            self.end(EndCause::Floor, &mut report);
        }
        if self.player.y < 0.0 {
            self.player.y = 0.0;
            self.player.velocity = 0.0;
            self.end(EndCause::Ceiling, &mut report);
        }

        let scroll = self.config.obstacles.speed * dt;

        // Obstacles
        let mut crashed = false;
        for obstacle in self.obstacles.iter_mut() {
            obstacle.x -= scroll;
            if hits_obstacle(&self.player, obstacle) {
                crashed = true;
            }
        }
        if crashed {
            self.end(EndCause::Obstacle, &mut report);
        }

        // Coins
        let body = self.player.rect();
        let before = self.collectibles.len();
        self.collectibles.retain_mut(|coin| {
            coin.x -= scroll;
            !coin.rect().overlaps(&body)
        });
        let collected = (before - self.collectibles.len()) as u32;
        self.coins += collected;
        report.collected = collected;

        // Score the oldest obstacle once it's fully off the left edge
        if let Some(oldest) = self.obstacles.front() {
            if oldest.right() < 0.0 {
                self.obstacles.pop_front();
                self.score += 1;
                report.cleared = 1;
            }
        }

        if should_spawn(self.obstacles.back(), field, &self.config.obstacles) {
            let (obstacle, coin) =
                spawn_obstacle(rng, field, &self.config.obstacles, &self.config.collectibles);
            self.obstacles.push_back(obstacle);
            if let Some(coin) = coin {
                self.collectibles.push(coin);
            }
        }

        report
    }

    /// Overwrite the vertical velocity with the lift impulse
    pub fn jump(&mut self) {
        self.player.velocity = self.player.lift;
    }

    /// Reset everything and start running again
    pub fn restart(&mut self, field: Playfield) {
        self.player = Player::new(&self.config.player, field.height);
        self.obstacles.clear();
        self.collectibles.clear();
        self.score = 0;
        self.coins = 0;
        self.phase = Phase::Running;
    }

    /// The one input action: jump while running, restart when over
    pub fn press(&mut self, field: Playfield) -> PressAction {
        if self.is_over() {
            self.restart(field);
            PressAction::Restart
        } else {
            self.jump();
            PressAction::Jump
        }
    }
}
