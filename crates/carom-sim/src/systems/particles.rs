//! Particle aging, gravity, and burst spawning.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use carom_core::components::Particle;
use carom_core::constants::{
    PARTICLE_MAX_LIFE, PARTICLE_MAX_SIZE, PARTICLE_MAX_SPEED, PARTICLE_MIN_LIFE,
    PARTICLE_MIN_SIZE, PARTICLE_MIN_SPEED,
};

use crate::tables::ParticleTable;

/// Age and integrate every active particle. A particle whose remaining
/// life reaches zero is deactivated on the same frame and skips motion.
pub fn run(particles: &mut ParticleTable, gravity: Vec2, dt: f32) {
    for particle in particles.iter_mut() {
        if !particle.active {
            continue;
        }

        particle.life -= dt;
        if particle.life <= 0.0 {
            particle.active = false;
            continue;
        }

        particle.vel += gravity * dt;
        particle.pos += particle.vel * dt;
    }
}

/// Spawn a radial burst of warm-colored particles at `origin`.
///
/// The requested count is capped by the per-call limit and by the free
/// slots left in the table. Returns how many particles were created.
pub fn spawn_burst(
    particles: &mut ParticleTable,
    rng: &mut ChaCha8Rng,
    origin: Vec2,
    count: usize,
    burst_cap: usize,
) -> usize {
    let spawned = count.min(burst_cap).min(particles.remaining());

    for _ in 0..spawned {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED);
        let life = rng.gen_range(PARTICLE_MIN_LIFE..PARTICLE_MAX_LIFE);
        let size = rng.gen_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE);
        let warmth = rng.gen::<f32>();

        particles.push(Particle {
            pos: origin,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life,
            max_life: life,
            size,
            color: [1.0, 0.5 + warmth * 0.5, 0.0, 1.0],
            active: true,
        });
    }

    spawned
}
