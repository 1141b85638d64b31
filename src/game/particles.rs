//! Particle System
//!
//! Explosion sparks using a fixed-size pool. Purely cosmetic: the rules
//! never read particle state, so particles use their own cheap PRNG instead
//! of the session's seeded RNG.

use macroquad::math::Vec2;

/// Maximum number of live particles
pub const MAX_PARTICLES: usize = 256;

/// Spark colors, one picked per particle
pub const PALETTE: [[u8; 3]; 5] = [
    [255, 64, 64],   // red
    [255, 220, 64],  // yellow
    [64, 220, 96],   // green
    [64, 128, 255],  // blue
    [192, 80, 255],  // purple
];

/// A single particle in the pool
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vec2,
    /// Pixels per second
    pub velocity: Vec2,
    /// Remaining life in seconds
    pub life: f32,
    /// Total lifetime (for fading)
    pub max_life: f32,
    pub color: [u8; 3],
    /// Square size in pixels
    pub size: f32,
    /// Is this particle slot active?
    pub alive: bool,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            life: 0.0,
            max_life: 1.0,
            color: PALETTE[0],
            size: 4.0,
            alive: false,
        }
    }
}

impl Particle {
    /// 1.0 when fresh, 0.0 when about to die
    pub fn opacity(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// Burst parameters
#[derive(Debug, Clone, Copy)]
pub struct BurstDef {
    pub speed_min: f32,
    pub speed_max: f32,
    /// Lifetime in seconds
    pub life: f32,
    pub size: f32,
}

impl Default for BurstDef {
    fn default() -> Self {
        Self {
            speed_min: 50.0,
            speed_max: 100.0,
            life: 1.0,
            size: 4.0,
        }
    }
}

/// Fixed-size pool of explosion particles
pub struct ParticlePool {
    pub particles: [Particle; MAX_PARTICLES],
    /// Simple PRNG state for randomization
    rng_state: u32,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self {
            particles: [Particle::default(); MAX_PARTICLES],
            rng_state: 12345,
        }
    }

    /// Fast xorshift PRNG (deterministic)
    fn next_random(&mut self) -> f32 {
        self.rng_state ^= self.rng_state << 13;
        self.rng_state ^= self.rng_state >> 17;
        self.rng_state ^= self.rng_state << 5;
        (self.rng_state as f32) / (u32::MAX as f32)
    }

    /// Random float in range [min, max]
    fn random_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_random() * (max - min)
    }

    /// Find a dead particle slot
    fn find_free_slot(&self) -> Option<usize> {
        self.particles.iter().position(|p| !p.alive)
    }

    /// Spawn one spark flying in a random direction. Dropped if the pool is full.
    pub fn spawn_one(&mut self, def: &BurstDef, origin: Vec2) {
        let Some(idx) = self.find_free_slot() else { return };

        let speed = self.random_range(def.speed_min, def.speed_max);
        let angle = self.random_range(0.0, std::f32::consts::TAU);
        let color_idx = (self.next_random() * PALETTE.len() as f32) as usize;

        self.particles[idx] = Particle {
            position: origin,
            velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: def.life,
            max_life: def.life,
            color: PALETTE[color_idx.min(PALETTE.len() - 1)],
            size: def.size,
            alive: true,
        };
    }

    /// Spawn a burst of particles (one-shot explosion)
    pub fn spawn_burst(&mut self, def: &BurstDef, origin: Vec2, count: usize) {
        for _ in 0..count {
            self.spawn_one(def, origin);
        }
    }

    /// Update all live particles
    pub fn update(&mut self, delta_time: f32) {
        for particle in &mut self.particles {
            if !particle.alive {
                continue;
            }

            particle.life -= delta_time;
            if particle.life <= 0.0 {
                particle.alive = false;
                continue;
            }

            particle.position += particle.velocity * delta_time;
        }
    }

    /// Iterate live particles
    pub fn alive(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.alive)
    }

    /// Get count of live particles
    #[cfg(test)]
    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    /// Kill all particles
    pub fn clear(&mut self) {
        for p in &mut self.particles {
            p.alive = false;
        }
    }
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_and_expire() {
        let mut pool = ParticlePool::new();
        let def = BurstDef::default();
        pool.spawn_burst(&def, Vec2::new(100.0, 100.0), 20);
        assert_eq!(pool.alive_count(), 20);

        pool.update(0.5);
        for p in pool.alive() {
            let dist = p.position.distance(Vec2::new(100.0, 100.0));
            assert!(dist >= 24.0 && dist <= 51.0, "distance {}", dist);
            assert!((p.opacity() - 0.5).abs() < 1e-4);
            assert!(PALETTE.contains(&p.color));
        }

        pool.update(0.6);
        assert_eq!(pool.alive_count(), 0);
    }

    #[test]
    fn test_pool_is_bounded() {
        let mut pool = ParticlePool::new();
        pool.spawn_burst(&BurstDef::default(), Vec2::ZERO, MAX_PARTICLES + 40);
        assert_eq!(pool.alive_count(), MAX_PARTICLES);

        pool.clear();
        assert_eq!(pool.alive_count(), 0);
    }
}
