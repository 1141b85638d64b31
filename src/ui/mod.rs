//! Heads-up display
//!
//! Immediate mode: the HUD is rebuilt from the session every frame, so
//! there is no text object to keep in sync with the score.

mod rect;
mod theme;
mod hud;

pub use rect::*;
pub use theme::*;
pub use hud::*;
