//! Particle lifecycle: spawn in bursts, drift, fade, cull.

use glam::Vec3;

use crate::api::config::{OverflowPolicy, ParticleConfig};
use crate::components::color::Rgba;
use super::rng::Rng;

/// A single particle. Rendered by the host as a tinted sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// Displacement applied once per simulation step.
    pub velocity: Vec3,
    pub color: Rgba,
    /// Sphere radius.
    pub size: f32,
    /// Seconds since spawn.
    pub life_time: f32,
    /// Seconds the particle lives for.
    pub max_life_time: f32,
}

impl Particle {
    /// Opacity from the remaining-life fraction: 255 at spawn, 0 at expiry.
    pub fn alpha(&self) -> u8 {
        let remaining = 1.0 - self.life_time / self.max_life_time;
        (255.0 * remaining).clamp(0.0, 255.0) as u8
    }

    pub fn is_expired(&self) -> bool {
        self.life_time >= self.max_life_time
    }

    /// Advance one step. Returns false once the particle has expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.position += self.velocity;
        self.life_time += dt;
        self.color.a = self.alpha();
        !self.is_expired()
    }
}

/// Owns every live particle. Spawning is capacity-checked; ticking culls in one stable pass.
pub struct ParticleSystem {
    particles: Vec<Particle>,
    config: ParticleConfig,
    rng: Rng,
}

impl ParticleSystem {
    pub fn new(config: ParticleConfig, seed: u64) -> Self {
        let capacity = config.max_particles.unwrap_or(256).min(4096);
        Self {
            particles: Vec::with_capacity(capacity),
            config,
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// Spawn `count` particles at `origin` with randomized velocity, size and lifetime.
    /// Returns how many were admitted under the capacity policy.
    pub fn spawn(&mut self, origin: Vec3, color: Rgba, count: usize) -> usize {
        let admitted = self.make_room(count);
        if admitted < count {
            log::warn!(
                "particle cap reached: {} of {} new particles rejected",
                count - admitted,
                count
            );
        }

        let cfg = &self.config;
        for _ in 0..admitted {
            let velocity = Vec3::new(
                self.rng.range(-cfg.drift, cfg.drift),
                self.rng.range(cfg.rise[0], cfg.rise[1]),
                self.rng.range(-cfg.drift, cfg.drift),
            );
            let size = self.rng.range(cfg.size[0], cfg.size[1]);
            let max_life_time = self.rng.range(cfg.lifetime[0], cfg.lifetime[1]);
            self.particles.push(Particle {
                position: origin,
                velocity,
                color,
                size,
                life_time: 0.0,
                max_life_time,
            });
        }
        admitted
    }

    /// Apply the overflow policy ahead of a spawn of `count`. Returns the admitted count.
    fn make_room(&mut self, count: usize) -> usize {
        let Some(max) = self.config.max_particles else {
            return count;
        };
        match self.config.overflow {
            OverflowPolicy::RejectNew => count.min(max.saturating_sub(self.particles.len())),
            OverflowPolicy::DropOldest => {
                let count = count.min(max);
                let overflow = (self.particles.len() + count).saturating_sub(max);
                if overflow > 0 {
                    log::debug!("particle cap reached: evicting {} oldest", overflow);
                    self.particles.drain(..overflow);
                }
                count
            }
        }
    }

    /// Move, age and fade every particle, dropping the expired ones.
    pub fn tick(&mut self, dt: f32) {
        self.particles.retain_mut(|p| p.tick(dt));
    }

    /// Visit every live particle, oldest first.
    pub fn for_each_alive(&self, mut visitor: impl FnMut(&Particle)) {
        for p in &self.particles {
            visitor(p);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }
}
