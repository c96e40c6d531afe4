//! Read-only snapshot types: the render-facing view produced each frame.
//!
//! The renderer consumes flattened f32 buffers; the aggregate
//! [`WorldSnapshot`] additionally carries counters and the camera view for
//! host transport and determinism comparisons.

use serde::{Deserialize, Serialize};

/// f32 values per entity in the flat snapshot:
/// x, y, vx, vy, rotation, material id, health ratio, is-player flag.
pub const ENTITY_SNAPSHOT_STRIDE: usize = 8;

/// f32 values per particle in the flat snapshot:
/// x, y, faded size, r, g, b, faded alpha.
pub const PARTICLE_SNAPSHOT_STRIDE: usize = 7;

/// Camera view for the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    /// Smoothed position plus the current shake offset.
    pub x: f32,
    pub y: f32,
    pub zoom: f32,
    pub world_width: f32,
    pub world_height: f32,
}

/// Aggregate counters exposed alongside the buffers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimStats {
    pub score: u32,
    /// Occupied entity slots, including dead-but-uncompacted entries.
    pub entity_count: usize,
    /// Entities with the active flag set.
    pub active_entity_count: usize,
    /// Occupied particle slots.
    pub particle_count: usize,
    /// Particles with the active flag set.
    pub active_particle_count: usize,
    pub fps: f32,
    pub frame_time_ms: f32,
    /// Ordinal quality level: 0 = low, 1 = medium, 2 = high.
    pub quality_level: u8,
}

/// Complete per-frame view of the simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Frames simulated since construction or the last reset.
    pub frame: u64,
    pub stats: SimStats,
    pub camera: CameraView,
    /// Flat entity attributes, [`ENTITY_SNAPSHOT_STRIDE`] per entry,
    /// truncated at the configured limit.
    pub entities: Vec<f32>,
    /// Flat particle attributes, [`PARTICLE_SNAPSHOT_STRIDE`] per entry,
    /// truncated at the configured limit.
    pub particles: Vec<f32>,
}
