//! Overlap Queries
//!
//! Each tick the session asks "which pairs overlap right now?" and gets a
//! plain list back, instead of registering callbacks. Only active bodies
//! take part. Pairs come out in pool order (laser-major for laser/enemy)
//! so resolution is deterministic.

use super::body::Body;
use super::enemies::EnemyPool;
use super::lasers::LaserPool;

/// All (laser index, enemy index) pairs currently overlapping
pub fn laser_enemy_overlaps(lasers: &LaserPool, enemies: &EnemyPool) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (li, laser) in lasers.iter().enumerate().filter(|(_, l)| l.active) {
        for (ei, enemy) in enemies.iter().enumerate().filter(|(_, e)| e.active) {
            if laser.overlaps(enemy) {
                pairs.push((li, ei));
            }
        }
    }
    pairs
}

/// Indices of enemies overlapping the player
pub fn player_enemy_overlaps(player: &Body, enemies: &EnemyPool) -> Vec<usize> {
    if !player.active {
        return Vec::new();
    }
    enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| e.active && player.overlaps(e))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::Vec2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use crate::config::{EnemyConfig, FieldConfig, LaserConfig};

    fn enemies_at(points: &[(f32, f32)]) -> EnemyPool {
        let config = EnemyConfig { count: points.len(), ..EnemyConfig::default() };
        let mut pool = EnemyPool::new(&config, FieldConfig::default());
        pool.reset_all(&mut StdRng::seed_from_u64(1));
        for (i, &(x, y)) in points.iter().enumerate() {
            pool.get_mut(i).unwrap().position = Vec2::new(x, y);
        }
        pool
    }

    #[test]
    fn test_laser_pairs_in_pool_order() {
        let enemies = enemies_at(&[(100.0, 100.0), (400.0, 400.0), (105.0, 110.0)]);
        let mut lasers = LaserPool::new(&LaserConfig::default(), FieldConfig::default());
        lasers.fire(Vec2::new(400.0, 410.0));
        lasers.fire(Vec2::new(102.0, 105.0));
        lasers.fire(Vec2::new(550.0, 700.0));

        let pairs = laser_enemy_overlaps(&lasers, &enemies);
        assert_eq!(pairs, vec![(0, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_inactive_bodies_never_overlap() {
        let mut enemies = enemies_at(&[(100.0, 100.0)]);
        let mut lasers = LaserPool::new(&LaserConfig::default(), FieldConfig::default());
        let slot = lasers.fire(Vec2::new(100.0, 100.0)).unwrap();
        assert_eq!(laser_enemy_overlaps(&lasers, &enemies).len(), 1);

        enemies.retire(0);
        assert!(laser_enemy_overlaps(&lasers, &enemies).is_empty());

        enemies.reset_all(&mut StdRng::seed_from_u64(2));
        enemies.get_mut(0).unwrap().position = Vec2::new(100.0, 100.0);
        lasers.disable(slot);
        assert!(laser_enemy_overlaps(&lasers, &enemies).is_empty());
    }

    #[test]
    fn test_player_overlaps() {
        let enemies = enemies_at(&[(300.0, 690.0), (10.0, 10.0), (320.0, 710.0)]);
        let mut player = Body::parked(Vec2::new(24.0, 20.0));
        player.enable(Vec2::new(300.0, 700.0), Vec2::ZERO);
        assert_eq!(player_enemy_overlaps(&player, &enemies), vec![0, 2]);

        player.disable();
        assert!(player_enemy_overlaps(&player, &enemies).is_empty());
    }
}
