//! Simulation engine: the core of the arcade loop.
//!
//! `Simulation` owns the slot tables, camera, input, and clocks for one
//! world instance. It is completely headless: callers feed it timestamps
//! and input events and read back flat snapshots. Nothing is shared
//! between instances, so several simulations can run side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use carom_core::components::{
    Camera, Entity, InputState, PerformanceState, PointerState, TouchState,
};
use carom_core::config::SimConfig;
use carom_core::constants::{
    DEFAULT_HEALTH, KEY_SPACE, KEY_TILDE, MAX_ENTITY_NAME_BYTES, MAX_TIME_SCALE, MIN_TIME_SCALE,
};
use carom_core::enums::{Quality, Role};
use carom_core::error::SimError;
use carom_core::state::{CameraView, WorldSnapshot};
use carom_core::types::{wrap_coord, EntityId};

use crate::systems;
use crate::systems::ai::WanderState;
use crate::systems::collision::{CollisionGrid, Contact};
use crate::tables::{EntityTable, ParticleTable};
use crate::world_setup;

/// One independent simulation instance. Owns all world state.
pub struct Simulation {
    config: SimConfig,
    rng: ChaCha8Rng,
    entities: EntityTable,
    particles: ParticleTable,
    camera: Camera,
    perf: PerformanceState,
    input: InputState,
    wander: WanderState,
    grid: CollisionGrid,
    contacts: Vec<Contact>,
    score: u32,
    paused: bool,
    debug: bool,
    time_scale: f32,
    frame: u64,
    elapsed: f64,
    last_timestamp: Option<f64>,
    next_entity_id: u32,
}

impl Simulation {
    /// Create a simulation from the given config, seeding the initial
    /// world. Fails if the config does not validate.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut entities = EntityTable::with_capacity(config.entity_capacity);
        let particles = ParticleTable::with_capacity(config.particle_capacity);
        let mut next_entity_id = 0;
        world_setup::populate(&mut entities, &mut rng, &config, &mut next_entity_id);

        let center = Vec2::new(config.world_width * 0.5, config.world_height * 0.5);
        let camera = Camera::new(center, config.camera_follow_speed, config.camera_zoom);
        let grid = CollisionGrid::new(
            config.world_width,
            config.world_height,
            config.grid_cell_size,
            config.grid_cell_capacity,
        );
        let perf = PerformanceState::new(config.frame_window);
        let debug = config.debug;

        Ok(Self {
            config,
            rng,
            entities,
            particles,
            camera,
            perf,
            input: InputState::default(),
            wander: WanderState::default(),
            grid,
            contacts: Vec::new(),
            score: 0,
            paused: false,
            debug,
            time_scale: 1.0,
            frame: 0,
            elapsed: 0.0,
            last_timestamp: None,
            next_entity_id,
        })
    }

    /// Advance the simulation to `timestamp_ms` from a monotonic clock.
    ///
    /// The first call only establishes the clock and advances nothing.
    /// Paused simulations ignore the call entirely, so the gap built up
    /// while paused is absorbed by the frame-delta clamp on resume.
    pub fn update(&mut self, timestamp_ms: f64) {
        if self.paused {
            return;
        }

        let raw_ms = self
            .last_timestamp
            .map(|prev| (timestamp_ms - prev).max(0.0) as f32);
        self.last_timestamp = Some(timestamp_ms);

        let dt = match raw_ms {
            Some(ms) => {
                ((ms / 1000.0) * self.time_scale).clamp(0.0, self.config.max_delta_seconds)
            }
            None => 0.0,
        };

        // 1. Frame timing and adaptive quality, fed the unscaled gap
        if let Some(ms) = raw_ms {
            systems::performance::run(&mut self.perf, &self.config, ms, self.debug);
        }
        let quality = self.perf.quality;

        // 2. Player steering
        systems::player_control::run(&mut self.entities, &self.input, self.config.move_speed);

        // 3. Kinematic integration, spin, and wrap
        systems::movement::run(&mut self.entities, &self.config, dt);

        // 4. Environment wander (medium quality and up)
        if quality >= Quality::Medium {
            systems::ai::run(
                &mut self.entities,
                &mut self.wander,
                &mut self.rng,
                &self.config,
                self.elapsed as f32,
                dt,
            );
        }

        // 5. Collision scan, then scoring and contact bursts
        if quality >= Quality::Medium {
            systems::collision::run(
                &mut self.entities,
                &mut self.grid,
                &self.config,
                &mut self.contacts,
            );
            self.apply_contacts(quality);
        }

        // 6. Particle aging (high quality only)
        if quality >= Quality::High {
            systems::particles::run(&mut self.particles, self.config.particle_gravity, dt);
        }

        // 7. Camera follow
        let target = self
            .entities
            .iter()
            .find(|e| e.active && e.role == Role::Player)
            .map(|p| p.pos)
            .unwrap_or(self.camera.target);
        systems::camera::run(&mut self.camera, target, &mut self.rng, dt);

        // 8. Periodic slot compaction
        if self.frame > 0 {
            if self
                .frame
                .is_multiple_of(self.config.entity_compact_interval as u64)
            {
                self.entities.compact();
            }
            if self
                .frame
                .is_multiple_of(self.config.particle_compact_interval as u64)
            {
                self.particles.compact();
            }
        }

        self.frame += 1;
        self.elapsed += dt as f64;
    }

    /// Apply scoring and burst effects for the contacts of this frame.
    fn apply_contacts(&mut self, quality: Quality) {
        for contact in &self.contacts {
            if contact.player_involved {
                self.score += self.config.score_per_collision;
            }
            if quality >= Quality::High {
                systems::particles::spawn_burst(
                    &mut self.particles,
                    &mut self.rng,
                    contact.midpoint,
                    self.config.collision_burst_count,
                    self.config.explosion_burst_cap,
                );
            }
        }
    }

    // --- Input ---

    /// Record a key transition. Space toggles pause and tilde toggles
    /// debug logging, both on the press edge only.
    pub fn handle_key(&mut self, key_code: u32, pressed: bool) {
        let was_pressed = self.input.is_pressed(key_code);
        self.input.keys.insert(key_code, pressed);

        if pressed && !was_pressed {
            match key_code {
                KEY_SPACE => {
                    self.paused = !self.paused;
                    log::debug!(
                        "simulation {}",
                        if self.paused { "paused" } else { "resumed" }
                    );
                }
                KEY_TILDE => {
                    self.debug = !self.debug;
                    log::debug!(
                        "debug logging {}",
                        if self.debug { "enabled" } else { "disabled" }
                    );
                }
                _ => {}
            }
        }
    }

    /// Record pointer position and per-event deltas.
    pub fn handle_pointer(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        self.input.pointer = PointerState { x, y, dx, dy };
    }

    /// Record the primary touch point and contact count.
    pub fn handle_touch(&mut self, x: f32, y: f32, active: bool, count: u32) {
        self.input.touch = TouchState {
            x,
            y,
            active,
            count,
        };
    }

    // --- World operations ---

    /// Spawn an entity at a wrapped world position. Returns its id, or
    /// None when the entity table is full; a refused spawn changes
    /// nothing.
    pub fn spawn_entity(
        &mut self,
        x: f32,
        y: f32,
        material_id: u32,
        name: &str,
        role: Role,
    ) -> Option<EntityId> {
        let id = EntityId(self.next_entity_id);
        let entity = Entity {
            id,
            pos: Vec2::new(
                wrap_coord(x, self.config.world_width),
                wrap_coord(y, self.config.world_height),
            ),
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            rotation: 0.0,
            name: bounded_name(name),
            role,
            material_id,
            health: DEFAULT_HEALTH,
            max_health: DEFAULT_HEALTH,
            active: true,
        };
        self.entities.push(entity)?;
        self.next_entity_id += 1;
        Some(id)
    }

    /// Spawn a particle burst at a world position. Returns how many
    /// particles were created after the per-call and capacity caps.
    pub fn spawn_explosion(&mut self, x: f32, y: f32, count: usize) -> usize {
        systems::particles::spawn_burst(
            &mut self.particles,
            &mut self.rng,
            Vec2::new(x, y),
            count,
            self.config.explosion_burst_cap,
        )
    }

    /// Deactivate an entity; its slot is reclaimed by the next
    /// compaction pass. Returns false for unknown ids.
    pub fn destroy_entity(&mut self, id: EntityId) -> bool {
        match self.entities.find_mut(id) {
            Some(entity) => {
                entity.active = false;
                true
            }
            None => false,
        }
    }

    /// Kick the camera shake with the given intensity and duration.
    pub fn shake_camera(&mut self, intensity: f32, duration: f32) {
        self.camera.shake_intensity = intensity.max(0.0);
        self.camera.shake_duration = duration.max(0.0);
    }

    // --- Control ---

    /// Pin quality to a fixed tier, disabling adaptive scaling.
    pub fn set_quality(&mut self, quality: Quality) {
        self.perf.quality = quality;
        self.perf.adaptive = false;
        self.perf.cooldown = 0;
    }

    /// Re-enable or disable adaptive quality scaling.
    pub fn set_adaptive_quality(&mut self, enabled: bool) {
        self.perf.adaptive = enabled;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Enable or disable per-second debug stats logging.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Set the simulation speed multiplier, clamped to the supported
    /// range. Zero freezes simulated time while the clock keeps running.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Rebuild the world from the configured seed. A reset simulation
    /// behaves exactly like a freshly constructed one.
    pub fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.entities.clear();
        self.particles.clear();
        self.next_entity_id = 0;
        world_setup::populate(
            &mut self.entities,
            &mut self.rng,
            &self.config,
            &mut self.next_entity_id,
        );

        let center = Vec2::new(self.config.world_width * 0.5, self.config.world_height * 0.5);
        self.camera = Camera::new(center, self.config.camera_follow_speed, self.config.camera_zoom);
        self.perf = PerformanceState::new(self.config.frame_window);
        self.input.clear();
        self.wander = WanderState::default();
        self.contacts.clear();
        self.score = 0;
        self.paused = false;
        self.debug = self.config.debug;
        self.time_scale = 1.0;
        self.frame = 0;
        self.elapsed = 0.0;
        self.last_timestamp = None;
    }

    // --- Queries ---

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Completed update frames since construction or reset.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn active_entity_count(&self) -> usize {
        self.entities.active_count()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn active_particle_count(&self) -> usize {
        self.particles.active_count()
    }

    pub fn fps(&self) -> f32 {
        self.perf.current_fps
    }

    pub fn frame_time_ms(&self) -> f32 {
        self.perf.average_frame_time_ms
    }

    pub fn quality(&self) -> Quality {
        self.perf.quality
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Look up an entity by id.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.find(id)
    }

    /// First entity with the given role, in slot order.
    pub fn find_by_role(&self, role: Role) -> Option<&Entity> {
        self.entities.iter().find(|e| e.role == role)
    }

    /// First entity with the given name, in slot order.
    pub fn find_by_name(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    // --- Snapshots ---

    /// Flat entity render buffer (ENTITY_SNAPSHOT_STRIDE floats each).
    pub fn entity_snapshot(&self) -> Vec<f32> {
        systems::snapshot::entity_buffer(&self.entities, self.config.snapshot_entity_limit)
    }

    /// Flat particle render buffer (PARTICLE_SNAPSHOT_STRIDE floats each).
    pub fn particle_snapshot(&self) -> Vec<f32> {
        systems::snapshot::particle_buffer(&self.particles, self.config.snapshot_particle_limit)
    }

    /// Camera view with shake applied.
    pub fn camera_snapshot(&self) -> CameraView {
        systems::snapshot::camera_view(&self.camera, &self.config)
    }

    /// Complete world snapshot for a frontend.
    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build(
            self.frame,
            self.score,
            &self.entities,
            &self.particles,
            &self.camera,
            &self.perf,
            &self.config,
        )
    }

    /// Entity at a raw table slot (for tests inspecting slot order).
    #[cfg(test)]
    pub fn entity_at(&self, slot: usize) -> Option<&Entity> {
        self.entities.get(slot)
    }

    /// Read back the recorded input state (for tests).
    #[cfg(test)]
    pub fn input(&self) -> &InputState {
        &self.input
    }
}

/// Truncate a name to the byte bound without splitting a character.
fn bounded_name(name: &str) -> String {
    if name.len() <= MAX_ENTITY_NAME_BYTES {
        return name.to_string();
    }
    let mut end = MAX_ENTITY_NAME_BYTES;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name[..end].to_string()
}
