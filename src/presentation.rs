//! Presentation-side state fed by engine outputs
//!
//! Trail history and firework particles are visual only: they subscribe to
//! the root tracker and win evaluator outputs and never feed back into the
//! numeric core. They are replaced together with the gameplay state on
//! level changes.

use std::collections::VecDeque;

use glam::Vec2;
use num_complex::Complex64;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::state::Target;

/// Maximum trail points stored per root slot
pub const TRAIL_LENGTH: usize = 75;

/// Particles spawned per target when a level completes
pub const BURST_PARTICLES: usize = 50;

/// Particle speed range per tick, world units
const PARTICLE_MIN_SPEED: f32 = 0.01;
const PARTICLE_MAX_SPEED: f32 = 0.06;
/// Downward pull applied to particle velocity each tick
const PARTICLE_GRAVITY: f32 = 0.001;
/// Life lost per tick; particles start at 1.0
const PARTICLE_LIFE_DECAY: f32 = 0.02;

/// Per-slot world-coordinate history of root positions
#[derive(Debug, Clone, Default)]
pub struct RootTrails {
    trails: Vec<VecDeque<Complex64>>,
}

impl RootTrails {
    pub fn new(degree: usize) -> Self {
        Self {
            trails: (0..degree)
                .map(|_| VecDeque::with_capacity(TRAIL_LENGTH))
                .collect(),
        }
    }

    /// Record this tick's roots, dropping the oldest point past capacity.
    /// Re-syncs the slot count if the degree changed underneath us.
    pub fn record(&mut self, roots: &[Complex64]) {
        if self.trails.len() != roots.len() {
            *self = Self::new(roots.len());
        }
        for (trail, &root) in self.trails.iter_mut().zip(roots) {
            trail.push_back(root);
            if trail.len() > TRAIL_LENGTH {
                trail.pop_front();
            }
        }
    }

    /// History for one slot, oldest first
    pub fn slot(&self, slot: usize) -> Option<&VecDeque<Complex64>> {
        self.trails.get(slot)
    }

    pub fn slot_count(&self) -> usize {
        self.trails.len()
    }
}

/// A single firework particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fades 1.0 -> 0.0; dead below zero
    pub life: f32,
    /// Target slot this burst came from, for palette lookup
    pub slot: usize,
}

/// Celebration particle system, deterministic per seed
#[derive(Debug, Clone)]
pub struct Fireworks {
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl Fireworks {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn a burst at every target (level completion)
    pub fn burst(&mut self, targets: &[Target]) {
        for target in targets {
            let origin = Vec2::new(target.position.re as f32, target.position.im as f32);
            for _ in 0..BURST_PARTICLES {
                let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
                let speed = self.rng.random_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED);
                self.particles.push(Particle {
                    pos: origin,
                    vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                    life: 1.0,
                    slot: target.slot,
                });
            }
        }
    }

    /// Integrate one tick and drop dead particles
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.vel.y -= PARTICLE_GRAVITY;
            p.life -= PARTICLE_LIFE_DECAY;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TARGET_RADIUS;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_trails_cap_at_length() {
        let mut trails = RootTrails::new(2);
        for i in 0..(TRAIL_LENGTH + 20) {
            trails.record(&[c(i as f64, 0.0), c(0.0, i as f64)]);
        }
        let slot0 = trails.slot(0).unwrap();
        assert_eq!(slot0.len(), TRAIL_LENGTH);
        // Oldest points were dropped from the front
        assert_eq!(slot0.front().unwrap().re, 20.0);
        assert_eq!(slot0.back().unwrap().re, (TRAIL_LENGTH + 19) as f64);
    }

    #[test]
    fn test_trails_resync_on_degree_change() {
        let mut trails = RootTrails::new(2);
        trails.record(&[c(1.0, 0.0), c(2.0, 0.0)]);

        trails.record(&[c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)]);
        assert_eq!(trails.slot_count(), 3);
        // History from the old degree is discarded, not misaligned
        assert_eq!(trails.slot(0).unwrap().len(), 1);
    }

    #[test]
    fn test_fireworks_lifecycle() {
        let targets = [
            Target {
                slot: 0,
                position: c(1.0, 0.0),
                radius: TARGET_RADIUS,
                filled: true,
            },
            Target {
                slot: 1,
                position: c(-1.0, 0.0),
                radius: TARGET_RADIUS,
                filled: true,
            },
        ];

        let mut fireworks = Fireworks::new(42);
        assert!(fireworks.is_empty());
        fireworks.burst(&targets);
        assert_eq!(fireworks.particles().len(), 2 * BURST_PARTICLES);

        // Life decays to zero within 1 / PARTICLE_LIFE_DECAY ticks
        for _ in 0..60 {
            fireworks.step();
        }
        assert!(fireworks.is_empty());
    }

    #[test]
    fn test_fireworks_deterministic_per_seed() {
        let target = [Target {
            slot: 0,
            position: c(0.5, 0.5),
            radius: TARGET_RADIUS,
            filled: true,
        }];

        let mut a = Fireworks::new(7);
        let mut b = Fireworks::new(7);
        a.burst(&target);
        b.burst(&target);
        a.step();
        b.step();

        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.vel, pb.vel);
        }
    }
}
