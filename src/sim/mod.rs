//! Deterministic simulation core
//!
//! Everything that decides who wins lives here, and it stays pure:
//! - Advanced only from the host's redraw tick, never self-scheduled
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod particles;
pub mod state;
pub mod tick;

pub use particles::{Particle, ParticleSystem};
pub use state::{GameEvent, GamePhase, GameState, Outcome, Player, Side, SimError};
pub use tick::{TickInput, tick};
