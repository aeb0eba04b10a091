//! Game Module
//!
//! Everything that happens inside the playfield:
//! - components: Player / Obstacle / Collectible data
//! - collision: AABB and gap tests
//! - spawn: obstacle stream and coin placement
//! - session: per-playthrough state and the physics step
//! - renderer: macroquad drawing
//!
//! Only the renderer touches macroquad's global context; the rest is plain
//! data and can be tested without a window.

pub mod components;
pub mod collision;
pub mod spawn;
pub mod session;
pub mod renderer;

// Re-export main types
pub use session::{PressAction, Session};
pub use renderer::{draw_frame, Sprites};
