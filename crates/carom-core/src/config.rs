//! Simulation configuration.
//!
//! One parameterized core replaces the per-tier engine copies: capacities,
//! substeps, collision strategy, compaction cadence, and quality thresholds
//! are all instance configuration. [`SimConfig::default`] is the enhanced
//! tier; [`SimConfig::classic`] reproduces the small-canvas tier.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::CollisionMode;
use crate::error::SimError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed; equal seeds give bit-identical runs.
    pub seed: u64,

    // --- World ---
    pub world_width: f32,
    pub world_height: f32,

    // --- Capacities ---
    /// Entity table capacity, fixed at construction.
    pub entity_capacity: usize,
    /// Particle table capacity, fixed at construction.
    pub particle_capacity: usize,
    /// Environment entities seeded alongside the Player.
    pub initial_environment_count: usize,

    // --- Physics ---
    /// Integration substeps per frame (1..=4).
    pub physics_substeps: u32,
    /// Velocity decay rate per second.
    pub friction: f32,
    /// Player acceleration from a full movement axis.
    pub move_speed: f32,
    /// Constant entity spin in degrees per second.
    pub rotation_speed: f32,
    /// Clamp on the simulated step length in seconds.
    pub max_delta_seconds: f32,

    // --- Collision ---
    pub collision_mode: CollisionMode,
    pub collision_radius: f32,
    pub bounce_impulse: f32,
    pub score_per_collision: u32,
    /// Particles spawned per contact at high quality.
    pub collision_burst_count: usize,
    pub grid_cell_size: f32,
    pub grid_cell_capacity: usize,

    // --- Particles ---
    /// Hard per-call cap on explosion particles.
    pub explosion_burst_cap: usize,
    pub particle_gravity: Vec2,

    // --- AI ---
    pub ai_drift_speed: f32,
    pub ai_impulse_interval: f32,
    pub ai_impulse_chance: f32,
    pub ai_impulse_strength: f32,

    // --- Performance / adaptive quality ---
    pub frame_budget_ms: f32,
    pub frame_window: usize,
    /// Quality drops at `degrade_factor`× budget.
    pub degrade_factor: f32,
    /// Quality rises at `upgrade_factor`× budget.
    pub upgrade_factor: f32,
    pub quality_drop_cooldown: u32,
    pub quality_raise_cooldown: u32,

    // --- Compaction ---
    pub entity_compact_interval: u32,
    pub particle_compact_interval: u32,

    // --- Camera ---
    pub camera_follow_speed: f32,
    pub camera_zoom: f32,

    // --- Snapshots ---
    /// Entity snapshot truncates past this many entries.
    pub snapshot_entity_limit: usize,
    /// Particle snapshot truncates past this many entries.
    pub snapshot_particle_limit: usize,

    /// Emit per-second diagnostics through the log facade.
    pub debug: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            entity_capacity: MAX_ENTITIES,
            particle_capacity: MAX_PARTICLES,
            initial_environment_count: INITIAL_ENVIRONMENT_COUNT,
            physics_substeps: PHYSICS_SUBSTEPS,
            friction: FRICTION,
            move_speed: MOVE_SPEED,
            rotation_speed: ROTATION_SPEED,
            max_delta_seconds: MAX_DELTA_SECONDS,
            collision_mode: CollisionMode::Grid,
            collision_radius: COLLISION_RADIUS,
            bounce_impulse: BOUNCE_IMPULSE,
            score_per_collision: SCORE_PER_COLLISION,
            collision_burst_count: COLLISION_BURST_COUNT,
            grid_cell_size: GRID_CELL_SIZE,
            grid_cell_capacity: GRID_CELL_CAPACITY,
            explosion_burst_cap: EXPLOSION_BURST_CAP,
            particle_gravity: Vec2::new(0.0, PARTICLE_GRAVITY_Y),
            ai_drift_speed: AI_DRIFT_SPEED,
            ai_impulse_interval: AI_IMPULSE_INTERVAL,
            ai_impulse_chance: AI_IMPULSE_CHANCE,
            ai_impulse_strength: AI_IMPULSE_STRENGTH,
            frame_budget_ms: FRAME_BUDGET_MS,
            frame_window: FRAME_WINDOW,
            degrade_factor: DEGRADE_FACTOR,
            upgrade_factor: UPGRADE_FACTOR,
            quality_drop_cooldown: QUALITY_DROP_COOLDOWN,
            quality_raise_cooldown: QUALITY_RAISE_COOLDOWN,
            entity_compact_interval: ENTITY_COMPACT_INTERVAL,
            particle_compact_interval: PARTICLE_COMPACT_INTERVAL,
            camera_follow_speed: CAMERA_FOLLOW_SPEED,
            camera_zoom: CAMERA_ZOOM,
            snapshot_entity_limit: MAX_ENTITIES,
            snapshot_particle_limit: MAX_PARTICLES,
            debug: false,
        }
    }
}

impl SimConfig {
    /// The small-canvas tier: 800×600, single physics substep, exhaustive
    /// collision scan, snappier friction.
    pub fn classic() -> Self {
        Self {
            world_width: CLASSIC_WORLD_WIDTH,
            world_height: CLASSIC_WORLD_HEIGHT,
            entity_capacity: CLASSIC_MAX_ENTITIES,
            particle_capacity: CLASSIC_MAX_PARTICLES,
            initial_environment_count: CLASSIC_INITIAL_ENVIRONMENT_COUNT,
            physics_substeps: 1,
            friction: CLASSIC_FRICTION,
            move_speed: CLASSIC_MOVE_SPEED,
            collision_mode: CollisionMode::Exhaustive,
            snapshot_entity_limit: CLASSIC_MAX_ENTITIES,
            snapshot_particle_limit: CLASSIC_MAX_PARTICLES,
            ..Self::default()
        }
    }

    /// Check every tunable for a value the simulation cannot run with.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.entity_capacity == 0 {
            return Err(SimError::InvalidConfig("entity_capacity must be non-zero"));
        }
        if self.particle_capacity == 0 {
            return Err(SimError::InvalidConfig("particle_capacity must be non-zero"));
        }
        if self.initial_environment_count + 1 > self.entity_capacity {
            return Err(SimError::InvalidConfig(
                "seeded world (player + environment) exceeds entity_capacity",
            ));
        }
        if !(self.world_width.is_finite() && self.world_width > 0.0)
            || !(self.world_height.is_finite() && self.world_height > 0.0)
        {
            return Err(SimError::InvalidConfig(
                "world dimensions must be finite and positive",
            ));
        }
        if !(1..=4).contains(&self.physics_substeps) {
            return Err(SimError::InvalidConfig("physics_substeps must be 1..=4"));
        }
        if self.friction < 0.0 {
            return Err(SimError::InvalidConfig("friction must be non-negative"));
        }
        if self.max_delta_seconds <= 0.0 {
            return Err(SimError::InvalidConfig("max_delta_seconds must be positive"));
        }
        if self.collision_radius <= 0.0 {
            return Err(SimError::InvalidConfig("collision_radius must be positive"));
        }
        if self.collision_mode == CollisionMode::Grid
            && (self.grid_cell_size <= 0.0 || self.grid_cell_capacity == 0)
        {
            return Err(SimError::InvalidConfig(
                "grid collision requires positive cell size and capacity",
            ));
        }
        if self.explosion_burst_cap == 0 {
            return Err(SimError::InvalidConfig("explosion_burst_cap must be non-zero"));
        }
        if self.ai_drift_speed < 0.0 || self.ai_impulse_strength < 0.0 {
            return Err(SimError::InvalidConfig(
                "AI drift speed and impulse strength must be non-negative",
            ));
        }
        if self.frame_budget_ms <= 0.0 {
            return Err(SimError::InvalidConfig("frame_budget_ms must be positive"));
        }
        if self.frame_window == 0 {
            return Err(SimError::InvalidConfig("frame_window must be non-zero"));
        }
        if self.degrade_factor <= 1.0 {
            return Err(SimError::InvalidConfig("degrade_factor must exceed 1.0"));
        }
        if !(self.upgrade_factor > 0.0 && self.upgrade_factor < 1.0) {
            return Err(SimError::InvalidConfig(
                "upgrade_factor must lie strictly between 0 and 1",
            ));
        }
        if self.entity_compact_interval == 0 || self.particle_compact_interval == 0 {
            return Err(SimError::InvalidConfig(
                "compaction intervals must be non-zero",
            ));
        }
        if self.snapshot_entity_limit == 0 || self.snapshot_particle_limit == 0 {
            return Err(SimError::InvalidConfig("snapshot limits must be non-zero"));
        }
        if self.camera_follow_speed < 0.0 {
            return Err(SimError::InvalidConfig(
                "camera_follow_speed must be non-negative",
            ));
        }
        Ok(())
    }
}
