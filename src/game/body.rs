//! Arcade Bodies
//!
//! A body is one sprite's worth of simulation state: a center position,
//! a velocity and an axis-aligned hitbox. Pools recycle bodies by toggling
//! `active`/`visible` instead of allocating new ones.
//!
//! Coordinates are in logical pixels with y growing downward, so enemies
//! fall with positive y velocity and lasers climb with negative y velocity.

use macroquad::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Center of the sprite
    pub position: Vec2,
    /// Pixels per second
    pub velocity: Vec2,
    /// Hitbox half-extents
    pub half_size: Vec2,
    /// Takes part in simulation and overlap queries
    pub active: bool,
    /// Drawn by the renderer
    pub visible: bool,
}

impl Body {
    /// An inactive, hidden body parked off the field
    pub fn parked(half_size: Vec2) -> Self {
        Self {
            position: Vec2::new(-100.0, -100.0),
            velocity: Vec2::ZERO,
            half_size,
            active: false,
            visible: false,
        }
    }

    /// Activate at a position with a velocity
    pub fn enable(&mut self, position: Vec2, velocity: Vec2) {
        self.position = position;
        self.velocity = velocity;
        self.active = true;
        self.visible = true;
    }

    /// Deactivate, hide and stop the body, leaving it where it is
    pub fn disable(&mut self) {
        self.active = false;
        self.visible = false;
        self.velocity = Vec2::ZERO;
    }

    /// Advance position by one step
    pub fn integrate(&mut self, dt: f32) {
        if self.active {
            self.position += self.velocity * dt;
        }
    }

    /// Top-left corner of the hitbox
    pub fn min(&self) -> Vec2 {
        self.position - self.half_size
    }

    /// Bottom-right corner of the hitbox
    pub fn max(&self) -> Vec2 {
        self.position + self.half_size
    }

    /// Strict AABB overlap (touching edges do not count)
    pub fn overlaps(&self, other: &Body) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }

    /// Keep the hitbox inside `[0, width] x [0, height]`, reflecting the
    /// velocity on the clamped axis scaled by `bounce`.
    pub fn clamp_to_bounds(&mut self, width: f32, height: f32, bounce: f32) {
        let min = self.half_size;
        let max = Vec2::new(width - self.half_size.x, height - self.half_size.y);

        if self.position.x < min.x {
            self.position.x = min.x;
            self.velocity.x = -self.velocity.x * bounce;
        } else if self.position.x > max.x {
            self.position.x = max.x;
            self.velocity.x = -self.velocity.x * bounce;
        }

        if self.position.y < min.y {
            self.position.y = min.y;
            self.velocity.y = -self.velocity.y * bounce;
        } else if self.position.y > max.y {
            self.position.y = max.y;
            self.velocity.y = -self.velocity.y * bounce;
        }
    }

    /// Is the center outside `[0, width] x [0, height]`?
    pub fn outside(&self, width: f32, height: f32) -> bool {
        let p = self.position;
        p.x < 0.0 || p.x > width || p.y < 0.0 || p.y > height
    }
}
