//! Event System
//!
//! The rules layer never plays a sound or spawns a particle itself. It
//! sends events, and the frontend drains them after each frame's ticks:
//!
//! 1. Session resolves a laser hit → sends ExplosionEvent
//! 2. Audio reads ExplosionEvent → plays the destroyed cue
//! 3. Particles read ExplosionEvent → spawn a burst
//!
//! Each consumer handles its own concern without knowing about the others.

use macroquad::math::Vec2;
use super::session::Phase;

/// A queue for events of a single type.
/// Events are collected during ticks and drained by the frontend.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[cfg(test)]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all round events
#[derive(Debug, Default)]
pub struct Events {
    /// Fire button accepted (sound plays even if the pool was empty)
    pub shots: EventQueue<ShotEvent>,

    /// Something blew up
    pub explosions: EventQueue<ExplosionEvent>,

    /// Round phase changed, or the restart control appeared
    pub round: EventQueue<RoundEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all event queues
    #[cfg(test)]
    pub fn clear_all(&mut self) {
        self.shots.clear();
        self.explosions.clear();
        self.round.clear();
    }
}

// =============================================================================
// Event Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotEvent {
    pub origin: Vec2,
    /// Laser slot used; None when every laser was already in flight
    pub laser: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionKind {
    Enemy,
    Player,
}

impl ExplosionKind {
    /// Particle count for the burst
    pub fn particles(&self) -> usize {
        match self {
            ExplosionKind::Enemy => 20,
            ExplosionKind::Player => 40,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionEvent {
    pub kind: ExplosionKind,
    pub position: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    PhaseChanged { from: Phase, to: Phase },
    PlayAgainShown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_events_container() {
        let mut events = Events::new();

        events.explosions.send(ExplosionEvent {
            kind: ExplosionKind::Enemy,
            position: Vec2::ZERO,
        });
        events.round.send(RoundEvent::PlayAgainShown);

        assert_eq!(events.explosions.len(), 1);
        assert_eq!(events.round.iter().count(), 1);

        events.clear_all();
        assert!(events.explosions.is_empty());
        assert!(events.round.is_empty());
    }
}
