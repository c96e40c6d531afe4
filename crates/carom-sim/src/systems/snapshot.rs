//! Snapshot builders: flat render buffers and the full world snapshot.
//!
//! Builders are read-only over the tables. Particle fade is applied
//! here from the life ratio, so stored particle state stays independent
//! of how often snapshots are taken.

use carom_core::components::{Camera, PerformanceState};
use carom_core::config::SimConfig;
use carom_core::enums::Role;
use carom_core::state::{CameraView, SimStats, WorldSnapshot};
use carom_core::state::{ENTITY_SNAPSHOT_STRIDE, PARTICLE_SNAPSHOT_STRIDE};

use crate::tables::{EntityTable, ParticleTable};

/// Pack live entities into the flat render buffer in table order,
/// truncated at `limit` entries.
pub fn entity_buffer(entities: &EntityTable, limit: usize) -> Vec<f32> {
    let mut buffer = Vec::with_capacity(limit.min(entities.len()) * ENTITY_SNAPSHOT_STRIDE);
    let mut packed = 0;

    for entity in entities.iter() {
        if packed >= limit {
            break;
        }
        if !entity.is_alive() {
            continue;
        }
        buffer.extend_from_slice(&[
            entity.pos.x,
            entity.pos.y,
            entity.vel.x,
            entity.vel.y,
            entity.rotation,
            entity.material_id as f32,
            entity.health_ratio(),
            if entity.role == Role::Player { 1.0 } else { 0.0 },
        ]);
        packed += 1;
    }

    buffer
}

/// Pack active particles into the flat render buffer. Size and alpha are
/// scaled by the remaining life ratio.
pub fn particle_buffer(particles: &ParticleTable, limit: usize) -> Vec<f32> {
    let mut buffer = Vec::with_capacity(limit.min(particles.len()) * PARTICLE_SNAPSHOT_STRIDE);
    let mut packed = 0;

    for particle in particles.iter() {
        if packed >= limit {
            break;
        }
        if !particle.active {
            continue;
        }
        let fade = particle.life_ratio();
        buffer.extend_from_slice(&[
            particle.pos.x,
            particle.pos.y,
            particle.size * fade,
            particle.color[0],
            particle.color[1],
            particle.color[2],
            particle.color[3] * fade,
        ]);
        packed += 1;
    }

    buffer
}

/// Camera view with shake applied to the reported position.
pub fn camera_view(camera: &Camera, config: &SimConfig) -> CameraView {
    CameraView {
        x: camera.pos.x + camera.shake_offset.x,
        y: camera.pos.y + camera.shake_offset.y,
        zoom: camera.zoom,
        world_width: config.world_width,
        world_height: config.world_height,
    }
}

/// Build a complete WorldSnapshot from the current frame state.
#[allow(clippy::too_many_arguments)]
pub fn build(
    frame: u64,
    score: u32,
    entities: &EntityTable,
    particles: &ParticleTable,
    camera: &Camera,
    perf: &PerformanceState,
    config: &SimConfig,
) -> WorldSnapshot {
    WorldSnapshot {
        frame,
        stats: SimStats {
            score,
            entity_count: entities.len(),
            active_entity_count: entities.active_count(),
            particle_count: particles.len(),
            active_particle_count: particles.active_count(),
            fps: perf.current_fps,
            frame_time_ms: perf.average_frame_time_ms,
            quality_level: perf.quality.level(),
        },
        camera: camera_view(camera, config),
        entities: entity_buffer(entities, config.snapshot_entity_limit),
        particles: particle_buffer(particles, config.snapshot_particle_limit),
    }
}
