//! Input state management
//!
//! Polls keyboard/mouse (macroquad) and gamepad input once per frame and
//! turns it into per-tick snapshots for the session.
//!
//! The fire button is edge-triggered and latched: a press is held until
//! the next simulation tick consumes it, so a frame that runs zero ticks
//! does not swallow the shot.

use macroquad::prelude::*;
use crate::game::TickInput;
use super::{Action, Gamepad, button};

/// Left stick travel needed to count as a direction press
const STICK_THRESHOLD: f32 = 0.3;

/// Unified input state that handles both keyboard/mouse and gamepad
pub struct InputState {
    gamepad: Gamepad,
    fire_latched: bool,
    confirm_latched: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
            fire_latched: false,
            confirm_latched: false,
        }
    }

    /// Call once per frame before the simulation ticks
    pub fn poll(&mut self) {
        self.gamepad.poll();
        if self.action_pressed(Action::Fire) {
            self.fire_latched = true;
        }
        if self.action_pressed(Action::Confirm) {
            self.confirm_latched = true;
        }
    }

    /// Snapshot for one tick. Consumes a latched fire press.
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            left: self.action_down(Action::MoveLeft),
            right: self.action_down(Action::MoveRight),
            fire_pressed: std::mem::take(&mut self.fire_latched),
        }
    }

    /// Consume a latched confirm press (Enter / Start)
    pub fn take_confirm(&mut self) -> bool {
        std::mem::take(&mut self.confirm_latched)
    }

    /// Drop any latched presses (new round starting)
    pub fn clear_latches(&mut self) {
        self.fire_latched = false;
        self.confirm_latched = false;
    }

    /// Left mouse button went down this frame, at this window position
    pub fn click(&self) -> Option<Vec2> {
        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            Some(Vec2::new(x, y))
        } else {
            None
        }
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        self.keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            Action::MoveRight => is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            Action::Fire => is_key_down(KeyCode::Space),
            Action::Confirm => is_key_down(KeyCode::Enter),
        }
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::Fire => is_key_pressed(KeyCode::Space),
            Action::Confirm => is_key_pressed(KeyCode::Enter),
            _ => false,
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        let stick = self.gamepad.left_stick();
        match action {
            Action::MoveLeft => {
                self.gamepad.is_button_down(button::DPAD_LEFT) || stick.x < -STICK_THRESHOLD
            }
            Action::MoveRight => {
                self.gamepad.is_button_down(button::DPAD_RIGHT) || stick.x > STICK_THRESHOLD
            }
            Action::Fire => self.gamepad.is_button_down(button::A),
            Action::Confirm => self.gamepad.is_button_down(button::START),
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        match action {
            Action::Fire => self.gamepad.is_button_pressed(button::A),
            Action::Confirm => self.gamepad.is_button_pressed(button::START),
            _ => false,
        }
    }

    /// Check if any gamepad is connected
    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
