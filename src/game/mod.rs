//! Game Rules
//!
//! Everything that decides what happens in a round, with no window, audio
//! or input device involved:
//!
//! - Body: position/velocity/hitbox record shared by every sprite
//! - Pools: fixed-size enemy and laser pools, recycled instead of reallocated
//! - Collision: per-tick overlap queries returning plain index lists
//! - Session: one round's state and the fixed tick order
//! - Events: what happened this tick, for audio/particles/logging to consume
//!
//! The frontend (input, audio, render) only talks to `GameSession`.

pub mod body;
pub mod enemies;
pub mod lasers;
pub mod collision;
pub mod event;
pub mod session;
pub mod clock;
pub mod particles;

// Re-export main types
pub use body::Body;
pub use clock::FixedStep;
pub use event::{ExplosionKind, RoundEvent};
pub use particles::{BurstDef, ParticlePool};
pub use session::{GameSession, Phase, TickInput};
