//! Gamepad support
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: No gamepad backend; every query reports "not connected"

use macroquad::prelude::Vec2;

// Button bits in the state mask (Xbox layout names)
pub mod button {
    pub const A: u32 = 0;           // ActionDown / South
    pub const START: u32 = 1;       // Start/Options
    pub const DPAD_LEFT: u32 = 2;
    pub const DPAD_RIGHT: u32 = 3;
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::*;
    use gilrs::{Gilrs, Button as GilrsButton, Axis};

    pub struct Gamepad {
        gilrs: Option<Gilrs>,
        deadzone: f32,
        buttons: u32,
        last_buttons: u32,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    log::warn!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                deadzone: 0.15,
                buttons: 0,
                last_buttons: 0,
            }
        }

        /// Pump gilrs events and latch this frame's button mask
        pub fn poll(&mut self) {
            if let Some(gilrs) = self.gilrs.as_mut() {
                while gilrs.next_event().is_some() {}
            }
            self.last_buttons = self.buttons;
            self.buttons = self.read_button_mask();
        }

        pub fn has_gamepad(&self) -> bool {
            self.active_gamepad().is_some()
        }

        fn active_gamepad(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.as_ref()?.gamepads().next().map(|(_, gp)| gp)
        }

        fn read_button_mask(&self) -> u32 {
            let Some(gp) = self.active_gamepad() else { return 0 };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << button::A; }
            if gp.is_pressed(GilrsButton::Start) { mask |= 1 << button::START; }
            if gp.is_pressed(GilrsButton::DPadLeft) { mask |= 1 << button::DPAD_LEFT; }
            if gp.is_pressed(GilrsButton::DPadRight) { mask |= 1 << button::DPAD_RIGHT; }

            mask
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            (self.buttons & (1 << button)) != 0
        }

        /// Went down between the last two polls
        pub fn is_button_pressed(&self, button: u32) -> bool {
            is_edge(self.last_buttons, self.buttons, button)
        }

        pub fn left_stick(&self) -> Vec2 {
            let Some(gp) = self.active_gamepad() else { return Vec2::ZERO };
            let x = gp.value(Axis::LeftStickX);
            let y = -gp.value(Axis::LeftStickY);
            apply_deadzone(x, y, self.deadzone)
        }
    }

    impl Default for Gamepad {
        fn default() -> Self {
            Self::new()
        }
    }
}

// ============================================================================
// WASM Implementation (keyboard only)
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;

    #[derive(Default)]
    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_down(&self, _button: u32) -> bool {
            false
        }

        pub fn is_button_pressed(&self, _button: u32) -> bool {
            false
        }

        pub fn left_stick(&self) -> Vec2 {
            Vec2::ZERO
        }
    }
}

// ============================================================================
// Shared utilities
// ============================================================================

/// Bit went from up to down between two masks
fn is_edge(last: u32, current: u32, button: u32) -> bool {
    let bit = 1 << button;
    (current & bit) != 0 && (last & bit) == 0
}

/// Apply radial deadzone with linear rescaling
fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return Vec2::ZERO;
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    Vec2::new(x * scale, y * scale)
}

// Re-export the platform-specific implementation
pub use platform::Gamepad;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_detection() {
        assert!(is_edge(0, 1 << button::A, button::A));
        assert!(!is_edge(1 << button::A, 1 << button::A, button::A));
        assert!(!is_edge(1 << button::A, 0, button::A));
        assert!(!is_edge(0, 1 << button::START, button::A));
    }

    #[test]
    fn test_deadzone() {
        assert_eq!(apply_deadzone(0.1, 0.05, 0.15), Vec2::ZERO);
        let full = apply_deadzone(1.0, 0.0, 0.15);
        assert!((full.x - 1.0).abs() < 1e-6);
        let half = apply_deadzone(0.575, 0.0, 0.15);
        assert!((half.x - 0.5).abs() < 1e-4);
    }
}
