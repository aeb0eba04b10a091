//! fric-flap: a one-screen gravity arcade game
//!
//! Flap through the gaps, grab the coins. Score is obstacles cleared;
//! coins are counted separately. Runs natively and in the browser
//! (wasm32 + macroquad's JS bundle).

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod game;
mod input;
mod logging;
mod viewport;

use macroquad::prelude::*;
use app::AppState;
use game::Sprites;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("fric-flap v{}", VERSION),
        window_width: viewport::WIDE_WIDTH as i32,
        window_height: viewport::WIDE_HEIGHT as i32,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Logging FIRST so config/sprite loading can report problems
    logging::init();

    let config = config::load_or_default(config::CONFIG_PATH).await;
    let sprites = Sprites::load().await;

    let seed = (macroquad::miniquad::date::now() * 1000.0) as u64;
    let mut app = AppState::new(config, sprites, (screen_width(), screen_height()), seed);

    let field = app.viewport.playfield();
    log::info!(
        "=== fric-flap v{} === playfield {:.0}x{:.0}",
        VERSION,
        field.width,
        field.height
    );

    loop {
        app.frame();
        next_frame().await;
    }
}
