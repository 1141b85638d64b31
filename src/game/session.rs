//! Round Session
//!
//! One `GameSession` is one round: it owns the round state, the player,
//! both pools, the RNG and the event queues. "Play Again" throws the
//! session away and builds a new one, so nothing leaks between rounds.
//!
//! Tick order (fixed):
//! 1. Player velocity from input
//! 2. Fire on a fresh press
//! 3. Laser sweep
//! 4. Enemy sweep
//! 5. Win check
//! 6. Physics step (integrate, clamp player)
//! 7. Overlap resolution (laser/enemy, then player/enemy)
//!
//! Overlaps resolve after the win check, so a kill that reaches the win
//! score is noticed on the following tick.

use macroquad::math::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use crate::config::GameConfig;
use super::body::Body;
use super::collision::{laser_enemy_overlaps, player_enemy_overlaps};
use super::enemies::EnemyPool;
use super::event::{Events, ExplosionEvent, ExplosionKind, RoundEvent, ShotEvent};
use super::lasers::LaserPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Phase {
    /// Won or Lost: no more score, lives or phase changes
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

/// Input snapshot for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Fire was pressed since the last tick (edge, not level)
    pub fire_pressed: bool,
}

impl TickInput {
    /// -1, 0 or 1. Right wins when both are held.
    pub fn horizontal(&self) -> f32 {
        if self.right {
            1.0
        } else if self.left {
            -1.0
        } else {
            0.0
        }
    }
}

/// Score, lives and phase for the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    pub score: u32,
    pub lives: u32,
    pub phase: Phase,
    /// Ticks elapsed since the phase became terminal
    pub terminal_ticks: u32,
}

pub struct GameSession {
    config: GameConfig,
    round: RoundState,
    player: Body,
    enemies: EnemyPool,
    lasers: LaserPool,
    events: Events,
    rng: StdRng,
    ticks: u64,
}

impl GameSession {
    /// Start a new round: player at the spawn point, every enemy on the field
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut player = Body::parked(Vec2::new(config.player.half_size.0, config.player.half_size.1));
        player.enable(spawn_point(&config), Vec2::ZERO);

        let mut enemies = EnemyPool::new(&config.enemies, config.field);
        enemies.reset_all(&mut rng);

        let lasers = LaserPool::new(&config.lasers, config.field);

        log::info!(
            "New round (seed {}): {} enemies, {} lasers, {} lives, win at {}",
            seed,
            enemies.len(),
            lasers.capacity(),
            config.player.lives,
            config.round.win_score
        );

        Self {
            round: RoundState {
                score: 0,
                lives: config.player.lives,
                phase: Phase::Playing,
                terminal_ticks: 0,
            },
            config,
            player,
            enemies,
            lasers,
            events: Events::new(),
            rng,
            ticks: 0,
        }
    }

    /// Run one fixed simulation step
    pub fn tick(&mut self, input: &TickInput) {
        self.ticks += 1;

        if self.round.phase.is_terminal() {
            self.round.terminal_ticks = self.round.terminal_ticks.saturating_add(1);
            if self.round.terminal_ticks == self.config.round.reveal_ticks() {
                self.events.round.send(RoundEvent::PlayAgainShown);
            }
            self.player.velocity = Vec2::ZERO;
        } else {
            self.apply_input(input);
        }

        let recycled_lasers = self.lasers.sweep();
        let recycled_enemies = self.enemies.sweep(&mut self.rng);
        if recycled_lasers + recycled_enemies > 0 {
            log::trace!(
                "tick {}: recycled {} lasers, {} enemies",
                self.ticks, recycled_lasers, recycled_enemies
            );
        }

        if !self.round.phase.is_terminal() {
            self.check_win();
        }

        self.physics_step();

        if !self.round.phase.is_terminal() {
            self.resolve_overlaps();
        }
    }

    fn apply_input(&mut self, input: &TickInput) {
        if self.player.active {
            self.player.velocity.x = input.horizontal() * self.config.player.speed;
        }

        if input.fire_pressed && self.round.lives > 0 {
            let origin = self.player.position;
            let laser = self.lasers.fire(origin);
            if laser.is_none() {
                log::debug!("tick {}: laser pool exhausted", self.ticks);
            }
            self.events.shots.send(ShotEvent { origin, laser });
        }
    }

    fn check_win(&mut self) {
        if self.enemies.count_active() == 0 || self.round.score >= self.config.round.win_score {
            self.enter_phase(Phase::Won);
        }
    }

    fn physics_step(&mut self) {
        let dt = self.config.round.tick_seconds();
        let field = self.config.field;

        self.player.integrate(dt);
        if self.player.active {
            self.player.clamp_to_bounds(field.width, field.height, self.config.player.bounce);
        }
        self.lasers.integrate(dt);
        self.enemies.integrate(dt);
    }

    fn resolve_overlaps(&mut self) {
        for (laser, enemy) in laser_enemy_overlaps(&self.lasers, &self.enemies) {
            if self.round.phase.is_terminal() {
                return;
            }
            self.resolve_laser_hit(laser, enemy);
        }

        for enemy in player_enemy_overlaps(&self.player, &self.enemies) {
            if self.round.phase.is_terminal() {
                return;
            }
            self.resolve_player_hit(enemy);
        }
    }

    /// Apply a laser/enemy contact. Returns false (and changes nothing) if
    /// the round is over, either body is gone, or they no longer overlap,
    /// so a contact is only ever counted once.
    pub fn resolve_laser_hit(&mut self, laser_index: usize, enemy_index: usize) -> bool {
        if self.round.phase.is_terminal() {
            return false;
        }
        let (Some(laser), Some(enemy)) = (self.lasers.get(laser_index), self.enemies.get(enemy_index)) else {
            return false;
        };
        if !laser.active || !enemy.active || !laser.overlaps(enemy) {
            return false;
        }

        self.events.explosions.send(ExplosionEvent {
            kind: ExplosionKind::Enemy,
            position: enemy.position,
        });

        self.lasers.disable(laser_index);
        if self.config.enemies.respawn_on_kill {
            self.enemies.spawn(enemy_index, &mut self.rng);
        } else {
            self.enemies.retire(enemy_index);
        }
        self.round.score = self.round.score.saturating_add(self.config.enemies.points);

        log::debug!(
            "tick {}: laser {} destroyed enemy {}, score {}",
            self.ticks, laser_index, enemy_index, self.round.score
        );
        true
    }

    /// Apply a player/enemy contact. Costs a life; the last life ends the
    /// round, otherwise the player returns to spawn and the field resets.
    pub fn resolve_player_hit(&mut self, enemy_index: usize) -> bool {
        if self.round.phase.is_terminal() || !self.player.active {
            return false;
        }
        let Some(enemy) = self.enemies.get(enemy_index) else {
            return false;
        };
        if !enemy.active || !self.player.overlaps(enemy) {
            return false;
        }

        self.events.explosions.send(ExplosionEvent {
            kind: ExplosionKind::Player,
            position: self.player.position,
        });

        self.round.lives = self.round.lives.saturating_sub(1);
        log::debug!(
            "tick {}: enemy {} hit the player, {} lives left",
            self.ticks, enemy_index, self.round.lives
        );

        if self.round.lives > 0 {
            self.player.position = spawn_point(&self.config);
            self.enemies.reset_all(&mut self.rng);
        } else {
            self.player.disable();
            self.enter_phase(Phase::Lost);
        }
        true
    }

    fn enter_phase(&mut self, phase: Phase) {
        let from = self.round.phase;
        if from == phase {
            return;
        }
        self.round.phase = phase;
        self.round.terminal_ticks = 0;
        log::info!(
            "Round over after {} ticks: {:?} (score {}, lives {})",
            self.ticks, phase, self.round.score, self.round.lives
        );
        self.events.round.send(RoundEvent::PhaseChanged { from, to: phase });
        if phase.is_terminal() && self.config.round.reveal_ticks() == 0 {
            self.events.round.send(RoundEvent::PlayAgainShown);
        }
    }

    /// Has the post-round delay elapsed?
    pub fn play_again_visible(&self) -> bool {
        self.round.phase.is_terminal()
            && self.round.terminal_ticks >= self.config.round.reveal_ticks()
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.round.phase
    }

    pub fn player(&self) -> &Body {
        &self.player
    }

    pub fn enemies(&self) -> &EnemyPool {
        &self.enemies
    }

    pub fn lasers(&self) -> &LaserPool {
        &self.lasers
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn events_mut(&mut self) -> &mut Events {
        &mut self.events
    }
}

fn spawn_point(config: &GameConfig) -> Vec2 {
    Vec2::new(config.player.spawn.0, config.player.spawn.1)
}
