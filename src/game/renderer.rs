//! Frame Renderer
//!
//! Repaints the whole playfield every frame: background, player, obstacle
//! walls, coins, HUD, and the game-over panel. No dirty rects; cost is linear
//! in the number of obstacles and coins on the list.

use macroquad::prelude::*;

use super::collision::Rect;
use super::components::Obstacle;
use super::session::Session;

/// Window area outside the playfield
const LETTERBOX_COLOR: Color = Color::new(0.10, 0.10, 0.12, 1.0);
/// Playfield background (#f0f0f0)
const FIELD_COLOR: Color = Color::new(0.94, 0.94, 0.94, 1.0);
const TOP_WALL_COLOR: Color = GREEN;
const BOTTOM_WALL_COLOR: Color = RED;
const HUD_COLOR: Color = Color::new(0.9, 0.9, 0.9, 1.0);
const HUD_ON_FIELD_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);
const OVERLAY_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.6);
const PANEL_COLOR: Color = Color::new(0.12, 0.12, 0.14, 0.95);
const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

const HUD_FONT_SIZE: f32 = 24.0;
const HUD_PADDING: f32 = 8.0;

/// Sprite images. Either may be missing; missing sprites are simply not drawn.
#[derive(Default)]
pub struct Sprites {
    pub player: Option<Texture2D>,
    pub coin: Option<Texture2D>,
}

impl Sprites {
    pub const PLAYER_PATH: &'static str = "assets/sprites/fric.png";
    pub const COIN_PATH: &'static str = "assets/sprites/coin.png";

    /// Load both sprites, logging (not failing) on errors
    pub async fn load() -> Self {
        Self {
            player: load_sprite(Self::PLAYER_PATH).await,
            coin: load_sprite(Self::COIN_PATH).await,
        }
    }
}

async fn load_sprite(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Linear);
            log::info!("Loaded sprite {}", path);
            Some(tex)
        }
        Err(e) => {
            log::warn!("Failed to load sprite {}: {}, it will not be drawn", path, e);
            None
        }
    }
}

/// Top and bottom wall rectangles for an obstacle, in playfield coordinates
pub fn obstacle_segments(obstacle: &Obstacle, field_height: f32) -> (Rect, Rect) {
    (
        Rect::new(obstacle.x, 0.0, obstacle.width, obstacle.top),
        Rect::new(obstacle.x, obstacle.bottom, obstacle.width, field_height - obstacle.bottom),
    )
}

/// The two HUD counters
pub fn hud_lines(session: &Session) -> [String; 2] {
    [format!("Score: {}", session.score), format!("Coins: {}", session.coins)]
}

fn fill(rect: Rect, origin: Vec2, color: Color) {
    draw_rectangle(origin.x + rect.x, origin.y + rect.y, rect.w, rect.h, color);
}

fn blit(texture: &Option<Texture2D>, rect: Rect, origin: Vec2) {
    let Some(tex) = texture else { return };
    draw_texture_ex(
        tex,
        origin.x + rect.x,
        origin.y + rect.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(rect.w, rect.h)),
            ..Default::default()
        },
    );
}

/// Draw one full frame
///
/// `origin` is the playfield's top-left corner in window coordinates and
/// `field` its size (from the viewport sizer).
pub fn draw_frame(session: &Session, sprites: &Sprites, origin: Vec2, field: Vec2) {
    clear_background(LETTERBOX_COLOR);

    let field_rect = Rect::new(0.0, 0.0, field.x, field.y);
    fill(field_rect, origin, FIELD_COLOR);

    blit(&sprites.player, session.player.rect(), origin);

    for obstacle in &session.obstacles {
        let (top, bottom) = obstacle_segments(obstacle, field.y);
        fill(top, origin, TOP_WALL_COLOR);
        fill(bottom, origin, BOTTOM_WALL_COLOR);
    }

    for coin in &session.collectibles {
        blit(&sprites.coin, coin.rect(), origin);
    }

    draw_hud(session, origin);

    if session.is_over() {
        draw_game_over(session, origin, field);
    }
}

fn draw_hud(session: &Session, origin: Vec2) {
    let [score, coins] = hud_lines(session);
    let line_h = HUD_FONT_SIZE + HUD_PADDING;

    // Above the field when the letterbox has room, otherwise on the field itself
    let (y, color) = if origin.y >= line_h {
        (origin.y - HUD_PADDING, HUD_COLOR)
    } else {
        (origin.y + HUD_FONT_SIZE + HUD_PADDING, HUD_ON_FIELD_COLOR)
    };

    let x = origin.x + HUD_PADDING;
    draw_text(&score, x, y, HUD_FONT_SIZE, color);
    let score_w = measure_text(&score, None, HUD_FONT_SIZE as u16, 1.0).width;
    draw_text(&coins, x + score_w + HUD_PADDING * 3.0, y, HUD_FONT_SIZE, color);
}

fn draw_game_over(session: &Session, origin: Vec2, field: Vec2) {
    fill(Rect::new(0.0, 0.0, field.x, field.y), origin, OVERLAY_COLOR);

    let panel_w = (field.x * 0.8).min(360.0);
    let panel_h = 150.0;
    let panel = Rect::new((field.x - panel_w) / 2.0, (field.y - panel_h) / 2.0, panel_w, panel_h);
    fill(panel, origin, PANEL_COLOR);

    let summary = format!("Score {}  Coins {}", session.score, session.coins);
    let lines = [
        ("Game Over", 36.0, ACCENT_COLOR),
        (summary.as_str(), 22.0, HUD_COLOR),
        ("Space or tap to restart", 18.0, HUD_COLOR),
    ];
    let mut y = origin.y + panel.y + 44.0;
    for (text, size, color) in lines {
        let dims = measure_text(text, None, size as u16, 1.0);
        let x = origin.x + panel.x + (panel.w - dims.width) / 2.0;
        draw_text(text, x, y, size, color);
        y += size + 16.0;
    }
}
