//! Input handling
//!
//! One action, two sources: the Space key and touch start. Both map to a
//! jump while the game runs and to a restart after it ends. Mouse and gamepad
//! are not read.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
