//! Spawn factories for seeding a fresh simulation world.
//!
//! A seeded world holds one Player entity at the world center plus a
//! configured number of drifting Environment objects. Placement and
//! initial velocities come from the instance RNG, so the same seed
//! reproduces the same world.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use carom_core::components::Entity;
use carom_core::config::SimConfig;
use carom_core::constants::{
    DEFAULT_HEALTH, MATERIAL_VARIANTS, SPAWN_MARGIN, SPAWN_SPEED_RANGE,
};
use carom_core::enums::Role;
use carom_core::types::EntityId;

use crate::tables::EntityTable;

/// Seed the initial world: the player, then the environment objects.
pub fn populate(
    entities: &mut EntityTable,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    next_id: &mut u32,
) {
    spawn_player(entities, config, next_id);
    for i in 0..config.initial_environment_count {
        spawn_object(entities, rng, config, next_id, i);
    }
}

/// Spawn the player entity at the world center.
pub fn spawn_player(entities: &mut EntityTable, config: &SimConfig, next_id: &mut u32) {
    let center = Vec2::new(config.world_width * 0.5, config.world_height * 0.5);
    entities.push(base_entity(
        take_id(next_id),
        center,
        Vec2::ZERO,
        "Player".to_string(),
        Role::Player,
        0,
    ));
}

/// Spawn one drifting environment object at a random interior position.
pub fn spawn_object(
    entities: &mut EntityTable,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    next_id: &mut u32,
    index: usize,
) {
    // Keep a margin clear of the edges, shrunk for very small worlds.
    let margin = SPAWN_MARGIN
        .min(config.world_width * 0.25)
        .min(config.world_height * 0.25);

    let x = rng.gen_range(margin..config.world_width - margin);
    let y = rng.gen_range(margin..config.world_height - margin);
    let vx = rng.gen_range(-SPAWN_SPEED_RANGE..SPAWN_SPEED_RANGE);
    let vy = rng.gen_range(-SPAWN_SPEED_RANGE..SPAWN_SPEED_RANGE);
    let material_id = rng.gen_range(1..=MATERIAL_VARIANTS);

    entities.push(base_entity(
        take_id(next_id),
        Vec2::new(x, y),
        Vec2::new(vx, vy),
        format!("Object_{index}"),
        Role::Environment,
        material_id,
    ));
}

/// Allocate the next entity id.
fn take_id(next_id: &mut u32) -> EntityId {
    let id = EntityId(*next_id);
    *next_id += 1;
    id
}

fn base_entity(
    id: EntityId,
    pos: Vec2,
    vel: Vec2,
    name: String,
    role: Role,
    material_id: u32,
) -> Entity {
    Entity {
        id,
        pos,
        vel,
        accel: Vec2::ZERO,
        rotation: 0.0,
        name,
        role,
        material_id,
        health: DEFAULT_HEALTH,
        max_health: DEFAULT_HEALTH,
        active: true,
    }
}
