//! Enemy Pool
//!
//! A fixed number of enemies that never grows or shrinks. Enemies are
//! recycled by re-spawning them at the top of the field with a fresh random
//! velocity, either when they drift out of bounds or when they are hit.

use macroquad::math::Vec2;
use rand::Rng;
use crate::config::{EnemyConfig, FieldConfig};
use super::body::Body;

pub struct EnemyPool {
    enemies: Vec<Body>,
    field: FieldConfig,
    max_speed: Vec2,
}

impl EnemyPool {
    /// Create a pool of parked (inactive) enemies.
    /// Call `reset_all` to put them on the field.
    pub fn new(config: &EnemyConfig, field: FieldConfig) -> Self {
        let half_size = Vec2::new(config.half_size.0, config.half_size.1);
        Self {
            enemies: vec![Body::parked(half_size); config.count],
            field,
            max_speed: Vec2::new(config.max_speed_x, config.max_speed_y),
        }
    }

    /// Move an enemy to a random column at the top edge with a random
    /// velocity: horizontal in either direction, vertical always downward.
    pub fn spawn<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) {
        let x = (rng.gen::<f32>() * self.field.width).floor();
        let direction = if rng.gen::<f32>() < 0.5 { -1.0 } else { 1.0 };
        let velocity = Vec2::new(
            rng.gen::<f32>() * self.max_speed.x * direction,
            rng.gen::<f32>() * self.max_speed.y,
        );
        if let Some(enemy) = self.enemies.get_mut(index) {
            enemy.enable(Vec2::new(x, 0.0), velocity);
        }
    }

    /// Re-spawn every active enemy that fell past the bottom or left the
    /// sides of the field. Inactive (retired) enemies are free slots and
    /// are left alone.
    pub fn sweep<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let (width, height) = (self.field.width, self.field.height);
        let mut recycled = 0;
        for index in 0..self.enemies.len() {
            let e = &self.enemies[index];
            if e.active && (e.position.y > height || e.position.x < 0.0 || e.position.x > width) {
                self.spawn(index, rng);
                recycled += 1;
            }
        }
        recycled
    }

    /// Re-spawn every enemy, active or not
    pub fn reset_all<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for index in 0..self.enemies.len() {
            self.spawn(index, rng);
        }
    }

    /// Take an enemy off the field until the next `reset_all`
    pub fn retire(&mut self, index: usize) {
        if let Some(enemy) = self.enemies.get_mut(index) {
            enemy.disable();
        }
    }

    pub fn count_active(&self) -> usize {
        self.enemies.iter().filter(|e| e.active).count()
    }

    pub fn integrate(&mut self, dt: f32) {
        for enemy in &mut self.enemies {
            enemy.integrate(dt);
        }
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.enemies.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.enemies.iter()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    #[cfg(test)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.enemies.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool() -> (EnemyPool, StdRng) {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = EnemyPool::new(&EnemyConfig::default(), FieldConfig::default());
        pool.reset_all(&mut rng);
        (pool, rng)
    }

    #[test]
    fn test_new_pool_is_parked() {
        let pool = EnemyPool::new(&EnemyConfig::default(), FieldConfig::default());
        assert_eq!(pool.len(), 20);
        assert_eq!(pool.count_active(), 0);
    }

    #[test]
    fn test_reset_all_places_enemies_on_top_edge() {
        let (mut pool, mut rng) = pool();
        for _ in 0..50 {
            pool.reset_all(&mut rng);
            assert_eq!(pool.len(), 20);
            assert_eq!(pool.count_active(), 20);
            for enemy in pool.iter() {
                assert_eq!(enemy.position.y, 0.0);
                assert!(enemy.position.x >= 0.0 && enemy.position.x < 600.0);
                assert_eq!(enemy.position.x, enemy.position.x.floor());
                assert!(enemy.velocity.x.abs() <= 200.0);
                assert!(enemy.velocity.y >= 0.0 && enemy.velocity.y <= 200.0);
                assert!(enemy.visible);
            }
        }
    }

    #[test]
    fn test_spawn_uses_both_directions() {
        let (mut pool, mut rng) = pool();
        let mut left = 0;
        let mut right = 0;
        for _ in 0..100 {
            pool.spawn(0, &mut rng);
            let vx = pool.get(0).unwrap().velocity.x;
            if vx < 0.0 { left += 1; } else { right += 1; }
        }
        assert!(left > 10 && right > 10);
    }

    #[test]
    fn test_sweep_recycles_out_of_bounds_only() {
        let (mut pool, mut rng) = pool();
        pool.get_mut(0).unwrap().position = Vec2::new(300.0, 801.0);
        pool.get_mut(1).unwrap().position = Vec2::new(-1.0, 300.0);
        pool.get_mut(2).unwrap().position = Vec2::new(601.0, 300.0);
        pool.get_mut(3).unwrap().position = Vec2::new(600.0, 800.0);

        assert_eq!(pool.sweep(&mut rng), 3);
        for index in 0..3 {
            assert_eq!(pool.get(index).unwrap().position.y, 0.0);
        }
        // Exactly on the edge is still in bounds
        assert_eq!(pool.get(3).unwrap().position, Vec2::new(600.0, 800.0));
        assert_eq!(pool.len(), 20);
    }

    #[test]
    fn test_sweep_skips_retired() {
        let (mut pool, mut rng) = pool();
        pool.get_mut(4).unwrap().position = Vec2::new(300.0, 900.0);
        pool.retire(4);
        assert_eq!(pool.sweep(&mut rng), 0);
        assert_eq!(pool.count_active(), 19);

        pool.reset_all(&mut rng);
        assert_eq!(pool.count_active(), 20);
    }

    #[test]
    fn test_integrate_moves_enemies_down() {
        let (mut pool, _) = pool();
        let before: Vec<Vec2> = pool.iter().map(|e| e.position).collect();
        pool.integrate(0.5);
        for (enemy, start) in pool.iter().zip(before) {
            assert!(enemy.position.y >= start.y);
        }
    }
}
