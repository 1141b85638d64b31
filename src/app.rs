//! Application state
//!
//! Owns the current round plus everything around it that is not rules:
//! the frame clock, input latches, particles, sounds and sprites. A
//! restart swaps in a fresh `GameSession`; nothing else is rebuilt.

use macroquad::prelude::{get_frame_time, Vec2};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use crate::audio::{Cue, Sfx};
use crate::config::GameConfig;
use crate::game::{BurstDef, ExplosionKind, FixedStep, GameSession, ParticlePool, RoundEvent};
use crate::input::InputState;
use crate::render::{Renderer, Sprites};
use crate::ui;

pub struct AppState {
    config: GameConfig,
    session: GameSession,
    clock: FixedStep,
    input: InputState,
    particles: ParticlePool,
    burst: BurstDef,
    sfx: Sfx,
    sprites: Sprites,
    renderer: Renderer,
    seeds: RoundSeeds,
    rounds: u32,
}

impl AppState {
    pub async fn new(config: GameConfig, seed: u64) -> Self {
        let mut seeds = RoundSeeds::new(seed);
        let sprites = Sprites::load().await;
        let sfx = Sfx::load().await;
        let renderer = Renderer::new(config.field.width, config.field.height);
        let clock = FixedStep::new(config.round.tick_rate, config.round.max_ticks_per_frame);
        let session = GameSession::new(config, seeds.next_seed());

        let input = InputState::new();
        if input.has_gamepad() {
            log::info!("Gamepad connected");
        }

        Self {
            config,
            session,
            clock,
            input,
            particles: ParticlePool::new(),
            burst: BurstDef::default(),
            sfx,
            sprites,
            renderer,
            seeds,
            rounds: 1,
        }
    }

    /// Throw the finished round away and start a new one
    pub fn restart(&mut self) {
        self.rounds += 1;
        log::info!("Starting round {}", self.rounds);
        self.session = GameSession::new(self.config, self.seeds.next_seed());
        self.particles.clear();
        self.input.clear_latches();
    }

    /// Poll input, run the due simulation ticks, then draw
    pub fn frame(&mut self) {
        self.input.poll();

        let ticks = self.clock.advance(get_frame_time() as f64);
        for _ in 0..ticks {
            let tick_input = self.input.take_tick_input();
            self.session.tick(&tick_input);
        }

        self.consume_events();
        self.particles.update(get_frame_time());

        // Read both every frame so early presses don't carry into the prompt
        let confirm = self.input.take_confirm();
        let click = self.input.click();
        if self.session.play_again_visible() && (confirm || self.clicked_play_again(click)) {
            self.restart();
        }

        let hud = ui::build_hud(&self.session);
        self.renderer.draw(&self.session, &self.particles, &self.sprites, &hud);
    }

    fn clicked_play_again(&self, click: Option<Vec2>) -> bool {
        let Some(window_pos) = click else { return false };
        let Some(pos) = self.renderer.viewport().to_logical(window_pos) else { return false };
        ui::play_again_rect(&self.config.field).contains(pos.x, pos.y)
    }

    /// Turn this frame's round events into sounds, bursts and log lines
    fn consume_events(&mut self) {
        let events = self.session.events_mut();

        for _shot in events.shots.drain() {
            self.sfx.play(Cue::Fire);
        }

        for explosion in events.explosions.drain() {
            let cue = match explosion.kind {
                ExplosionKind::Enemy => Cue::EnemyDestroyed,
                ExplosionKind::Player => Cue::PlayerDestroyed,
            };
            self.sfx.play(cue);
            self.particles.spawn_burst(&self.burst, explosion.position, explosion.kind.particles());
        }

        for event in events.round.drain() {
            match event {
                RoundEvent::PhaseChanged { from, to } => log::debug!("Phase {:?} -> {:?}", from, to),
                RoundEvent::PlayAgainShown => log::debug!("Play Again prompt shown"),
            }
        }
    }
}

/// One generator seeded at startup, drawing a fresh seed for every round
pub struct RoundSeeds(StdRng);

impl RoundSeeds {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn next_seed(&mut self) -> u64 {
        self.0.gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_seeds_repeat_per_startup_seed() {
        let mut a = RoundSeeds::new(7);
        let mut b = RoundSeeds::new(7);
        let first: Vec<u64> = (0..4).map(|_| a.next_seed()).collect();
        let second: Vec<u64> = (0..4).map(|_| b.next_seed()).collect();
        assert_eq!(first, second);

        // Every round gets its own seed
        for (i, x) in first.iter().enumerate() {
            assert!(first[i + 1..].iter().all(|y| y != x));
        }
        assert_ne!(RoundSeeds::new(8).next_seed(), first[0]);
    }
}
