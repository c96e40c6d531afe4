//! Simulation state structs.
//!
//! These are plain data: movement, collision, aging, and quality control all
//! live in the `carom-sim` systems, not here.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

use crate::enums::{Quality, Role};
use crate::types::EntityId;

/// One slot in the fixed-capacity entity table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identity; survives compaction, unlike the slot index.
    pub id: EntityId,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Accumulated per-frame acceleration, zeroed after integration.
    pub accel: Vec2,
    /// Spin angle in degrees, kept in [0, 360).
    pub rotation: f32,
    /// Display name, truncated to a fixed byte budget at spawn.
    pub name: String,
    pub role: Role,
    /// Texture/material reference consumed by the renderer.
    pub material_id: u32,
    /// Independent of `active`: a dead entity stays in the table (and in
    /// snapshots) until the next compaction pass.
    pub health: i32,
    pub max_health: i32,
    pub active: bool,
}

impl Entity {
    pub fn is_alive(&self) -> bool {
        self.active && self.health > 0
    }

    pub fn health_ratio(&self) -> f32 {
        if self.max_health > 0 {
            (self.health as f32 / self.max_health as f32).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// One slot in the fixed-capacity particle table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in seconds; monotonically decreasing once spawned.
    pub life: f32,
    pub max_life: f32,
    /// Base render size; the snapshot fades it by the remaining-life ratio.
    pub size: f32,
    /// Normalized RGBA.
    pub color: [f32; 4],
    pub active: bool,
}

impl Particle {
    /// Remaining-life fraction in [0, 1].
    pub fn life_ratio(&self) -> f32 {
        if self.max_life > 0.0 {
            (self.life / self.max_life).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Follow camera with optional screen shake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Smoothed position; never the raw target.
    pub pos: Vec2,
    /// Follow target, normally the Player position.
    pub target: Vec2,
    /// Exponential smoothing rate (per second).
    pub follow_speed: f32,
    /// Constant unless explicitly set by the host.
    pub zoom: f32,
    pub shake_intensity: f32,
    /// Seconds of shake remaining.
    pub shake_duration: f32,
    /// Current jitter, additive on the read side only.
    pub shake_offset: Vec2,
}

impl Camera {
    pub fn new(center: Vec2, follow_speed: f32, zoom: f32) -> Self {
        Self {
            pos: center,
            target: center,
            follow_speed,
            zoom,
            shake_intensity: 0.0,
            shake_duration: 0.0,
            shake_offset: Vec2::ZERO,
        }
    }
}

/// Externally-populated input snapshot, read once per frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputState {
    /// Key code -> currently pressed.
    pub keys: HashMap<u32, bool>,
    pub pointer: PointerState,
    pub touch: TouchState,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TouchState {
    pub x: f32,
    pub y: f32,
    pub active: bool,
    /// Number of simultaneous contacts.
    pub count: u32,
}

impl InputState {
    pub fn is_pressed(&self, code: u32) -> bool {
        self.keys.get(&code).copied().unwrap_or(false)
    }

    /// WASD/arrow movement axis, normalized so diagonals are not faster.
    pub fn movement_axis(&self) -> Vec2 {
        use crate::constants::*;

        let mut axis = Vec2::ZERO;
        if self.is_pressed(KEY_W) || self.is_pressed(KEY_UP) {
            axis.y -= 1.0;
        }
        if self.is_pressed(KEY_S) || self.is_pressed(KEY_DOWN) {
            axis.y += 1.0;
        }
        if self.is_pressed(KEY_A) || self.is_pressed(KEY_LEFT) {
            axis.x -= 1.0;
        }
        if self.is_pressed(KEY_D) || self.is_pressed(KEY_RIGHT) {
            axis.x += 1.0;
        }
        if axis.length_squared() > 1.0 {
            axis = axis.normalize();
        }
        axis
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.pointer = PointerState::default();
        self.touch = TouchState::default();
    }
}

/// Frame-time tracking and adaptive quality state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceState {
    /// Rolling window of recent frame times (milliseconds).
    pub frame_times: VecDeque<f32>,
    /// Window length in samples.
    pub window: usize,
    /// Mean of `frame_times`.
    pub average_frame_time_ms: f32,
    /// FPS recomputed on each 1-second boundary.
    pub current_fps: f32,
    /// Frames accumulated since the last FPS boundary.
    pub fps_counter: u32,
    /// Seconds accumulated since the last FPS boundary.
    pub fps_timer: f64,
    pub quality: Quality,
    pub adaptive: bool,
    /// Frames remaining before the next quality change is allowed.
    pub cooldown: u32,
}

impl PerformanceState {
    pub fn new(window: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(window),
            window,
            average_frame_time_ms: 0.0,
            current_fps: 0.0,
            fps_counter: 0,
            fps_timer: 0.0,
            quality: Quality::High,
            adaptive: true,
            cooldown: 0,
        }
    }
}
