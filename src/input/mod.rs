//! Input handling with gamepad support
//!
//! Action-based input that works with keyboard and gamepad.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Keyboard and mouse only

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use gamepad::{Gamepad, button};
pub use state::*;
