//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::SimConfig`]; every value
//! here can be overridden per instance through configuration.

// --- World ---

/// Default world width in world units (enhanced tier canvas).
pub const WORLD_WIDTH: f32 = 1920.0;

/// Default world height in world units.
pub const WORLD_HEIGHT: f32 = 1080.0;

/// Classic tier canvas width.
pub const CLASSIC_WORLD_WIDTH: f32 = 800.0;

/// Classic tier canvas height.
pub const CLASSIC_WORLD_HEIGHT: f32 = 600.0;

/// Margin kept clear of the world edge when placing seeded entities.
pub const SPAWN_MARGIN: f32 = 50.0;

// --- Capacities ---

/// Entity table capacity (enhanced tier).
pub const MAX_ENTITIES: usize = 2000;

/// Particle table capacity (enhanced tier).
pub const MAX_PARTICLES: usize = 5000;

/// Entity table capacity (classic tier).
pub const CLASSIC_MAX_ENTITIES: usize = 1000;

/// Particle table capacity (classic tier).
pub const CLASSIC_MAX_PARTICLES: usize = 250;

/// Seeded Environment entity count (enhanced tier).
pub const INITIAL_ENVIRONMENT_COUNT: usize = 50;

/// Seeded Environment entity count (classic tier).
pub const CLASSIC_INITIAL_ENVIRONMENT_COUNT: usize = 20;

/// Entity name strings are truncated to this many bytes at spawn.
pub const MAX_ENTITY_NAME_BYTES: usize = 32;

// --- Physics ---

/// Integration substeps per frame (enhanced tier).
pub const PHYSICS_SUBSTEPS: u32 = 4;

/// Velocity decay rate per second (enhanced tier).
pub const FRICTION: f32 = 0.1;

/// Velocity decay rate per second (classic tier, ~0.95× per frame at 60 Hz).
pub const CLASSIC_FRICTION: f32 = 3.0;

/// Player acceleration from a full movement axis (units/s²).
pub const MOVE_SPEED: f32 = 300.0;

/// Classic tier player acceleration.
pub const CLASSIC_MOVE_SPEED: f32 = 200.0;

/// Constant spin applied to every entity (degrees/second).
pub const ROTATION_SPEED: f32 = 45.0;

/// Largest simulated step; longer real gaps are clamped to this (seconds).
pub const MAX_DELTA_SECONDS: f32 = 0.033;

/// Near-zero length guard for direction normalization.
pub const EPSILON: f32 = 1e-6;

// --- Collision ---

/// Contact distance between entity centers.
pub const COLLISION_RADIUS: f32 = 32.0;

/// Speed change applied to each participant along the contact axis.
pub const BOUNCE_IMPULSE: f32 = 100.0;

/// Score awarded per collision involving the Player.
pub const SCORE_PER_COLLISION: u32 = 10;

/// Particles spawned at a contact midpoint at high quality.
pub const COLLISION_BURST_COUNT: usize = 3;

/// Spatial grid cell edge length.
pub const GRID_CELL_SIZE: f32 = 64.0;

/// Entity slots per grid cell; overflow in a cell is skipped that frame.
pub const GRID_CELL_CAPACITY: usize = 16;

// --- Particles ---

/// Hard cap on particles created by one explosion call.
pub const EXPLOSION_BURST_CAP: usize = 20;

/// Downward acceleration applied to particles (canvas y grows downward).
pub const PARTICLE_GRAVITY_Y: f32 = 98.0;

/// Burst particle launch speed range (units/s).
pub const PARTICLE_MIN_SPEED: f32 = 100.0;
pub const PARTICLE_MAX_SPEED: f32 = 300.0;

/// Burst particle lifetime range (seconds).
pub const PARTICLE_MIN_LIFE: f32 = 1.0;
pub const PARTICLE_MAX_LIFE: f32 = 3.0;

/// Burst particle size range (world units).
pub const PARTICLE_MIN_SIZE: f32 = 2.0;
pub const PARTICLE_MAX_SIZE: f32 = 6.0;

// --- AI ---

/// Drift speed of the wander pattern (units/s).
pub const AI_DRIFT_SPEED: f32 = 50.0;

/// Seconds between impulse decision rounds.
pub const AI_IMPULSE_INTERVAL: f32 = 2.0;

/// Per-entity chance of an impulse each decision round.
pub const AI_IMPULSE_CHANCE: f32 = 0.1;

/// Impulse magnitude range is ±half of this per axis.
pub const AI_IMPULSE_STRENGTH: f32 = 200.0;

/// Phase offset between neighboring slots in the drift pattern (seconds).
pub const AI_PHASE_STEP: f32 = 0.5;

// --- Performance / adaptive quality ---

/// Target frame budget in milliseconds (60 FPS).
pub const FRAME_BUDGET_MS: f32 = 16.67;

/// Rolling frame-time window length in samples.
pub const FRAME_WINDOW: usize = 60;

/// Quality drops when the average reaches this multiple of the budget.
pub const DEGRADE_FACTOR: f32 = 1.2;

/// Quality rises when the average falls to this multiple of the budget.
pub const UPGRADE_FACTOR: f32 = 0.75;

/// Frames of hysteresis after a quality drop.
pub const QUALITY_DROP_COOLDOWN: u32 = 60;

/// Frames of hysteresis after a quality raise (drop fast, raise slowly).
pub const QUALITY_RAISE_COOLDOWN: u32 = 180;

// --- Compaction ---

/// Frames between entity table compaction passes.
pub const ENTITY_COMPACT_INTERVAL: u32 = 30;

/// Frames between particle table compaction passes.
pub const PARTICLE_COMPACT_INTERVAL: u32 = 60;

// --- Camera ---

/// Exponential follow smoothing rate (per second).
pub const CAMERA_FOLLOW_SPEED: f32 = 5.0;

/// Default zoom factor.
pub const CAMERA_ZOOM: f32 = 1.0;

/// Shake intensity exponential falloff rate (per second).
pub const CAMERA_SHAKE_DECAY: f32 = 5.0;

// --- Entities ---

/// Health assigned to every spawned entity.
pub const DEFAULT_HEALTH: i32 = 100;

/// Seeded Environment entities start with velocity in ±this per axis (units/s).
pub const SPAWN_SPEED_RANGE: f32 = 25.0;

/// Material ids for seeded Environment entities run 1..=this; 0 is the Player.
pub const MATERIAL_VARIANTS: u32 = 3;

/// Time-scale bounds for slow-motion / fast-forward.
pub const MIN_TIME_SCALE: f32 = 0.0;
pub const MAX_TIME_SCALE: f32 = 4.0;

// --- Key codes (browser keyCode values) ---

pub const KEY_W: u32 = 87;
pub const KEY_A: u32 = 65;
pub const KEY_S: u32 = 83;
pub const KEY_D: u32 = 68;
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;
pub const KEY_SPACE: u32 = 32;
pub const KEY_TILDE: u32 = 192;
