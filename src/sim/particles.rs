//! Game-over particle burst
//!
//! Purely decorative: spawned once when the ball reaches an end, advanced on
//! the host's redraw clock, gone within 1.25 seconds of accumulated time.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::Side;
use crate::consts::*;

/// A single burst particle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Drawing units per tick; velocities are applied per tick, not scaled
    /// by dt
    pub vel: Vec2,
    /// Remaining life in (0, 1]; doubles as the draw alpha
    pub life: f32,
    /// The losing side; keys the palette color at render time
    pub side: Side,
}

/// Fixed-size radial burst fired at game over
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ParticleSystem {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(BURST_SIZE),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Replace any live burst with a fresh one centered on `origin`.
    ///
    /// Exactly `BURST_SIZE` particles, launch angle uniform over the full
    /// circle, speed uniform in the configured range, full life.
    pub fn spawn(&mut self, origin: Vec2, loser_side: Side) {
        self.particles.clear();
        for _ in 0..BURST_SIZE {
            let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
            let speed = self
                .rng
                .random_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED);
            self.particles.push(Particle {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life: 1.0,
                side: loser_side,
            });
        }
    }

    /// Advance all live particles and drop the expired ones.
    pub fn advance(&mut self, dt: f32) {
        if self.particles.is_empty() {
            return;
        }
        for p in &mut self.particles {
            p.pos += p.vel;
            p.vel.y += PARTICLE_GRAVITY_PER_TICK;
            p.life -= dt * PARTICLE_FADE_PER_SEC;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// True while any particle is alive
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}
