//! Kinematic integration system.
//!
//! Integrates acceleration into velocity and velocity into position over
//! the configured number of substeps, applies friction decay, advances
//! the constant spin, and wraps positions onto the torus.

use glam::Vec2;

use carom_core::config::SimConfig;
use carom_core::types::{wrap_angle_deg, wrap_coord};

use crate::tables::EntityTable;

/// Integrate every active entity over `dt`.
pub fn run(entities: &mut EntityTable, config: &SimConfig, dt: f32) {
    let sub_dt = dt / config.physics_substeps as f32;

    for entity in entities.iter_mut() {
        if !entity.active {
            continue;
        }

        for _ in 0..config.physics_substeps {
            entity.vel += entity.accel * sub_dt;
            entity.vel *= (1.0 - config.friction * sub_dt).max(0.0);
            entity.pos += entity.vel * sub_dt;
        }

        // Acceleration is an impulse input; it does not persist.
        entity.accel = Vec2::ZERO;

        entity.rotation = wrap_angle_deg(entity.rotation + config.rotation_speed * dt);
        entity.pos.x = wrap_coord(entity.pos.x, config.world_width);
        entity.pos.y = wrap_coord(entity.pos.y, config.world_height);
    }
}
