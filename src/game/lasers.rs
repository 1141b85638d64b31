//! Laser Pool
//!
//! Lasers fly straight up at a fixed speed. A shot takes the first free
//! slot; when every slot is in flight the shot is dropped.

use macroquad::math::Vec2;
use crate::config::{FieldConfig, LaserConfig};
use super::body::Body;

pub struct LaserPool {
    lasers: Vec<Body>,
    field: FieldConfig,
    speed: f32,
}

impl LaserPool {
    pub fn new(config: &LaserConfig, field: FieldConfig) -> Self {
        let half_size = Vec2::new(config.half_size.0, config.half_size.1);
        Self {
            lasers: vec![Body::parked(half_size); config.capacity],
            field,
            speed: config.speed,
        }
    }

    /// Launch a laser from `origin`. Returns the slot used, or None if the
    /// pool is exhausted.
    pub fn fire(&mut self, origin: Vec2) -> Option<usize> {
        let index = self.lasers.iter().position(|l| !l.active)?;
        self.lasers[index].enable(origin, Vec2::new(0.0, -self.speed));
        Some(index)
    }

    /// Disable every laser that left the field
    pub fn sweep(&mut self) -> usize {
        let (width, height) = (self.field.width, self.field.height);
        let mut recycled = 0;
        for laser in &mut self.lasers {
            if laser.active && laser.outside(width, height) {
                laser.disable();
                recycled += 1;
            }
        }
        recycled
    }

    /// Disable a laser after it hit something
    pub fn disable(&mut self, index: usize) {
        if let Some(laser) = self.lasers.get_mut(index) {
            laser.disable();
        }
    }

    #[cfg(test)]
    pub fn count_active(&self) -> usize {
        self.lasers.iter().filter(|l| l.active).count()
    }

    pub fn integrate(&mut self, dt: f32) {
        for laser in &mut self.lasers {
            laser.integrate(dt);
        }
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.lasers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.lasers.iter()
    }

    pub fn capacity(&self) -> usize {
        self.lasers.len()
    }
}
