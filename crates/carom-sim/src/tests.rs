//! Tests for the simulation engine, collision modes, adaptive quality,
//! and snapshot building.

use glam::Vec2;

use carom_core::config::SimConfig;
use carom_core::constants::{KEY_D, KEY_SPACE, KEY_TILDE};
use carom_core::enums::{CollisionMode, Quality, Role};
use carom_core::state::{ENTITY_SNAPSHOT_STRIDE, PARTICLE_SNAPSHOT_STRIDE};
use carom_core::types::EntityId;

use crate::engine::Simulation;

/// Drive `frames` updates spaced `step_ms` apart, starting at `start_ms`.
/// Returns the next unused timestamp.
fn run_for(sim: &mut Simulation, start_ms: f64, frames: u32, step_ms: f64) -> f64 {
    let mut t = start_ms;
    for _ in 0..frames {
        sim.update(t);
        t += step_ms;
    }
    t
}

/// Config with no seeded environment objects: just the player.
fn lone_world() -> SimConfig {
    SimConfig {
        initial_environment_count: 0,
        ..SimConfig::default()
    }
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        ..SimConfig::default()
    };
    let mut sim_a = Simulation::new(config.clone()).unwrap();
    let mut sim_b = Simulation::new(config).unwrap();

    let mut t = 0.0;
    for _ in 0..300 {
        sim_a.update(t);
        sim_b.update(t);
        let json_a = serde_json::to_string(&sim_a.snapshot()).unwrap();
        let json_b = serde_json::to_string(&sim_b.snapshot()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
        t += 16.67;
    }
}

#[test]
fn test_determinism_different_seeds() {
    let sim_a = Simulation::new(SimConfig {
        seed: 111,
        ..SimConfig::default()
    })
    .unwrap();
    let sim_b = Simulation::new(SimConfig {
        seed: 222,
        ..SimConfig::default()
    })
    .unwrap();

    // Seeded placement differs before the first update
    let json_a = serde_json::to_string(&sim_a.snapshot()).unwrap();
    let json_b = serde_json::to_string(&sim_b.snapshot()).unwrap();
    assert_ne!(json_a, json_b, "Different seeds should place the world differently");
}

#[test]
fn test_reset_reproduces_fresh_run() {
    let mut sim = Simulation::new(SimConfig::default()).unwrap();
    let _ = run_for(&mut sim, 0.0, 100, 16.0);
    let first = serde_json::to_string(&sim.snapshot()).unwrap();

    sim.handle_key(KEY_SPACE, true);
    assert!(sim.is_paused());

    // Back-to-back resets land in the same state
    sim.reset();
    sim.reset();
    assert!(!sim.is_paused());
    assert_eq!(sim.frame(), 0);
    assert_eq!(sim.score(), 0);
    assert_eq!(sim.particle_count(), 0);
    assert_eq!(sim.entity_count(), 51);

    let _ = run_for(&mut sim, 0.0, 100, 16.0);
    let second = serde_json::to_string(&sim.snapshot()).unwrap();
    assert_eq!(first, second, "Reset run diverged from the fresh run");
}

#[test]
fn test_instances_are_independent() {
    let mut sim_a = Simulation::new(SimConfig::default()).unwrap();
    let sim_b = Simulation::new(SimConfig::default()).unwrap();

    let _ = run_for(&mut sim_a, 0.0, 5, 16.0);
    sim_a.spawn_entity(100.0, 100.0, 1, "Extra", Role::Neutral);

    assert_eq!(sim_a.entity_count(), 52);
    assert_eq!(sim_b.entity_count(), 51);
    assert_eq!(sim_b.frame(), 0);
}

// ---- Clock and pause ----

#[test]
fn test_space_toggles_pause_on_press_edge() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    sim.update(0.0);
    sim.update(16.0);
    assert_eq!(sim.frame(), 2);

    sim.handle_key(KEY_SPACE, true);
    assert!(sim.is_paused());
    // A held key repeat must not re-toggle
    sim.handle_key(KEY_SPACE, true);
    assert!(sim.is_paused());

    sim.update(32.0);
    assert_eq!(sim.frame(), 2, "Paused update must not advance the frame");

    sim.handle_key(KEY_SPACE, false);
    sim.handle_key(KEY_SPACE, true);
    assert!(!sim.is_paused());

    // Resume after a long gap; the delta clamp absorbs it
    sim.update(10_000.0);
    assert_eq!(sim.frame(), 3);
    let player = sim.find_by_role(Role::Player).unwrap();
    assert_eq!(
        player.pos,
        Vec2::new(960.0, 540.0),
        "Idle player must not move on resume"
    );
}

#[test]
fn test_tilde_toggles_debug_on_press_edge() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    assert!(!sim.is_debug());
    sim.handle_key(KEY_TILDE, true);
    assert!(sim.is_debug());
    sim.handle_key(KEY_TILDE, true);
    assert!(sim.is_debug(), "Held repeat must not re-toggle");
    sim.handle_key(KEY_TILDE, false);
    sim.handle_key(KEY_TILDE, true);
    assert!(!sim.is_debug());
}

#[test]
fn test_backwards_clock_is_ignored() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    sim.update(0.0);
    sim.update(16.0);
    sim.update(10.0);
    assert_eq!(sim.frame(), 3);
    let player = sim.find_by_role(Role::Player).unwrap();
    assert_eq!(player.pos, Vec2::new(960.0, 540.0));
}

#[test]
fn test_time_scale_clamped_and_zero_freezes_world() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    sim.spawn_entity(200.0, 200.0, 1, "A", Role::Neutral);
    sim.spawn_entity(900.0, 900.0, 2, "B", Role::Neutral);

    sim.set_time_scale(9.0);
    assert_eq!(sim.time_scale(), 4.0);
    sim.set_time_scale(-1.0);
    assert_eq!(sim.time_scale(), 0.0);

    let t = run_for(&mut sim, 0.0, 3, 16.0);
    let before: Vec<Vec2> = (0..sim.entity_count())
        .map(|i| sim.entity_at(i).unwrap().pos)
        .collect();
    let _ = run_for(&mut sim, t, 10, 16.0);
    let after: Vec<Vec2> = (0..sim.entity_count())
        .map(|i| sim.entity_at(i).unwrap().pos)
        .collect();
    assert_eq!(before, after, "Zero time scale must freeze all positions");
}

#[test]
fn test_pointer_and_touch_recorded() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    sim.handle_pointer(10.0, 20.0, 1.5, -2.5);
    sim.handle_touch(300.0, 200.0, true, 2);

    assert_eq!(sim.input().pointer.x, 10.0);
    assert_eq!(sim.input().pointer.dy, -2.5);
    assert!(sim.input().touch.active);
    assert_eq!(sim.input().touch.count, 2);
}

#[test]
fn test_movement_keys_steer_the_player() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    sim.handle_key(KEY_D, true);
    let _ = run_for(&mut sim, 0.0, 30, 16.0);

    let player = sim.find_by_role(Role::Player).unwrap();
    assert!(player.pos.x > 960.0, "Player should accelerate right");
    assert_eq!(player.pos.y, 540.0);
}

// ---- Toroidal wrap ----

#[test]
fn test_spawn_positions_wrap_into_world() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    let id = sim.spawn_entity(2000.0, 1200.0, 1, "Out", Role::Neutral).unwrap();
    assert_eq!(sim.entity(id).unwrap().pos, Vec2::new(80.0, 120.0));

    let id = sim.spawn_entity(-5.0, -5.0, 1, "Neg", Role::Neutral).unwrap();
    assert_eq!(sim.entity(id).unwrap().pos, Vec2::new(1915.0, 1075.0));
}

#[test]
fn test_positions_and_rotation_stay_in_range() {
    let mut sim = Simulation::new(SimConfig::default()).unwrap();
    // Enough frames for the constant spin to wrap past 360 degrees
    let _ = run_for(&mut sim, 0.0, 700, 16.67);

    for slot in 0..sim.entity_count() {
        let entity = sim.entity_at(slot).unwrap();
        assert!(
            (0.0..1920.0).contains(&entity.pos.x),
            "x out of range: {}",
            entity.pos.x
        );
        assert!(
            (0.0..1080.0).contains(&entity.pos.y),
            "y out of range: {}",
            entity.pos.y
        );
        assert!(
            (0.0..360.0).contains(&entity.rotation),
            "rotation out of range: {}",
            entity.rotation
        );
    }
}

// ---- Entity lifecycle ----

#[test]
fn test_spawn_refused_when_full() {
    let config = SimConfig {
        entity_capacity: 2,
        initial_environment_count: 0,
        ..SimConfig::default()
    };
    let mut sim = Simulation::new(config).unwrap();
    assert_eq!(sim.entity_count(), 1);

    let first = sim.spawn_entity(100.0, 100.0, 1, "First", Role::Neutral);
    assert_eq!(first, Some(EntityId(1)));
    let second = sim.spawn_entity(200.0, 200.0, 1, "Second", Role::Neutral);
    assert_eq!(second, None);
    assert_eq!(sim.entity_count(), 2, "Refused spawn must not change the table");

    // Compaction frees the slot; refused spawns burn no ids
    assert!(sim.destroy_entity(EntityId(1)));
    let _ = run_for(&mut sim, 0.0, 31, 16.0);
    assert_eq!(sim.entity_count(), 1);
    let third = sim.spawn_entity(200.0, 200.0, 1, "Third", Role::Neutral);
    assert_eq!(third, Some(EntityId(2)));
}

#[test]
fn test_compaction_preserves_slot_order() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    let a = sim.spawn_entity(100.0, 100.0, 1, "A", Role::Neutral).unwrap();
    let b = sim.spawn_entity(300.0, 100.0, 2, "B", Role::Neutral).unwrap();
    let c = sim.spawn_entity(500.0, 100.0, 3, "C", Role::Neutral).unwrap();

    assert!(sim.destroy_entity(b));
    assert!(!sim.destroy_entity(EntityId(99)));

    // The destroyed slot lingers until the periodic compaction pass
    sim.update(0.0);
    assert_eq!(sim.entity_count(), 4);
    assert_eq!(sim.active_entity_count(), 3);

    let _ = run_for(&mut sim, 16.0, 30, 16.0);
    assert_eq!(sim.entity_count(), 3);
    assert!(sim.entity(b).is_none());

    let ids: Vec<u32> = (0..3).map(|i| sim.entity_at(i).unwrap().id.0).collect();
    assert_eq!(ids, vec![0, a.0, c.0], "Survivors keep their relative order");
}

#[test]
fn test_entity_names_truncate_at_char_boundary() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    let long = "a".repeat(40);
    let id = sim.spawn_entity(10.0, 10.0, 1, &long, Role::Neutral).unwrap();
    assert_eq!(sim.entity(id).unwrap().name.len(), 32);

    // 33 bytes where the bound falls inside a two-byte character
    let wide = format!("a{}", "\u{03c9}".repeat(16));
    let id = sim.spawn_entity(20.0, 20.0, 1, &wide, Role::Neutral).unwrap();
    let name = &sim.entity(id).unwrap().name;
    assert_eq!(name.len(), 31, "Truncation backs up to a character boundary");
    assert_eq!(name.chars().count(), 16);
}

#[test]
fn test_find_by_role_and_name() {
    let mut sim = Simulation::new(SimConfig::default()).unwrap();
    assert_eq!(sim.find_by_role(Role::Player).unwrap().name, "Player");
    assert_eq!(sim.find_by_name("Object_0").unwrap().role, Role::Environment);
    assert!(sim.find_by_name("NoSuchEntity").is_none());
    assert!(sim.find_by_role(Role::Neutral).is_none());
}

// ---- Collision ----

#[test]
fn test_collision_response_is_symmetric() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    let a = sim.spawn_entity(200.0, 300.0, 1, "A", Role::Neutral).unwrap();
    let b = sim.spawn_entity(210.0, 300.0, 1, "B", Role::Neutral).unwrap();
    sim.update(0.0);

    let va = sim.entity(a).unwrap().vel;
    let vb = sim.entity(b).unwrap().vel;
    assert_eq!(va, Vec2::new(-100.0, 0.0));
    assert_eq!(va, -vb, "Impulses must be equal and opposite");

    let pa = sim.entity(a).unwrap().pos;
    let pb = sim.entity(b).unwrap().pos;
    assert_eq!(pa.x, 189.0);
    assert_eq!(pb.x, 221.0);
    assert!(
        (pa.distance(pb) - 32.0).abs() < 1e-3,
        "Separation leaves exactly one contact radius"
    );
    assert_eq!(sim.score(), 0, "Contacts without the player do not score");
}

#[test]
fn test_player_contact_scores() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    sim.spawn_entity(970.0, 540.0, 1, "Bumper", Role::Neutral);
    sim.update(0.0);

    assert_eq!(sim.score(), 10);
    assert_eq!(sim.particle_count(), 3, "Contact bursts fire at high quality");

    // Separated after the bounce; no further scoring
    sim.update(16.0);
    sim.update(33.0);
    assert_eq!(sim.score(), 10);
}

#[test]
fn test_coincident_centers_count_without_response() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    let a = sim.spawn_entity(100.0, 100.0, 1, "A", Role::Neutral).unwrap();
    let b = sim.spawn_entity(100.0, 100.0, 1, "B", Role::Neutral).unwrap();
    sim.update(0.0);

    assert_eq!(sim.entity(a).unwrap().vel, Vec2::ZERO);
    assert_eq!(sim.entity(b).unwrap().pos, Vec2::new(100.0, 100.0));
    assert_eq!(sim.particle_count(), 3, "The contact still produces its burst");
}

#[test]
fn test_grid_and_exhaustive_agree_within_a_cell() {
    let grid_config = SimConfig {
        initial_environment_count: 0,
        collision_mode: CollisionMode::Grid,
        ..SimConfig::default()
    };
    let flat_config = SimConfig {
        initial_environment_count: 0,
        collision_mode: CollisionMode::Exhaustive,
        ..SimConfig::default()
    };
    let mut grid_sim = Simulation::new(grid_config).unwrap();
    let mut flat_sim = Simulation::new(flat_config).unwrap();

    for sim in [&mut grid_sim, &mut flat_sim] {
        sim.spawn_entity(400.0, 300.0, 1, "A", Role::Neutral);
        sim.spawn_entity(410.0, 300.0, 1, "B", Role::Neutral);
        sim.update(0.0);
        sim.update(16.0);
    }

    let grid_json = serde_json::to_string(&grid_sim.snapshot()).unwrap();
    let flat_json = serde_json::to_string(&flat_sim.snapshot()).unwrap();
    assert_eq!(
        grid_json, flat_json,
        "Same-cell contact must resolve identically in both modes"
    );
}

#[test]
fn test_grid_mode_skips_cross_cell_pairs() {
    // Overlapping pair straddling the cell border at x = 64
    let mut sim = Simulation::new(lone_world()).unwrap();
    let a = sim.spawn_entity(63.0, 50.0, 1, "A", Role::Neutral).unwrap();
    let b = sim.spawn_entity(65.0, 50.0, 1, "B", Role::Neutral).unwrap();
    sim.update(0.0);
    assert_eq!(sim.entity(a).unwrap().vel, Vec2::ZERO);
    assert_eq!(sim.entity(b).unwrap().vel, Vec2::ZERO);

    let mut sim = Simulation::new(SimConfig {
        collision_mode: CollisionMode::Exhaustive,
        ..lone_world()
    })
    .unwrap();
    let a = sim.spawn_entity(63.0, 50.0, 1, "A", Role::Neutral).unwrap();
    sim.spawn_entity(65.0, 50.0, 1, "B", Role::Neutral);
    sim.update(0.0);
    assert!(
        sim.entity(a).unwrap().vel.length() > 0.0,
        "Exhaustive mode resolves the same pair"
    );
}

// ---- Particles ----

#[test]
fn test_explosion_respects_burst_cap_and_capacity() {
    let config = SimConfig {
        particle_capacity: 30,
        initial_environment_count: 0,
        ..SimConfig::default()
    };
    let mut sim = Simulation::new(config).unwrap();

    assert_eq!(sim.spawn_explosion(500.0, 500.0, 25), 20, "Per-call cap");
    assert_eq!(sim.spawn_explosion(500.0, 500.0, 25), 10, "Capacity cap");
    assert_eq!(sim.spawn_explosion(500.0, 500.0, 25), 0, "Full table");
    assert_eq!(sim.particle_count(), 30);
}

#[test]
fn test_active_particles_monotonically_expire() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    sim.spawn_explosion(500.0, 500.0, 20);
    let mut last = sim.active_particle_count();
    assert_eq!(last, 20);

    let mut t = 0.0;
    for _ in 0..260 {
        sim.update(t);
        t += 16.0;
        let current = sim.active_particle_count();
        assert!(
            current <= last,
            "Active particle count rose from {last} to {current}"
        );
        last = current;
    }
    assert_eq!(last, 0, "All particles expire within the maximum lifetime");
    assert_eq!(sim.particle_count(), 0, "Compaction reclaims expired slots");
}

// ---- Quality scaling ----

#[test]
fn test_quality_drops_one_tier_with_cooldown() {
    let mut sim = Simulation::new(SimConfig::default()).unwrap();
    assert_eq!(sim.quality(), Quality::High);

    // 25 ms frames: over budget once the 60-sample window fills
    let t = run_for(&mut sim, 0.0, 61, 25.0);
    assert_eq!(sim.quality(), Quality::Medium, "One tier per adjustment");

    // Cooldown holds the tier for a while
    let t = run_for(&mut sim, t, 30, 25.0);
    assert_eq!(sim.quality(), Quality::Medium);

    let t = run_for(&mut sim, t, 40, 25.0);
    assert_eq!(sim.quality(), Quality::Low);

    // Floor: no further drops
    let _ = run_for(&mut sim, t, 120, 25.0);
    assert_eq!(sim.quality(), Quality::Low);
}

#[test]
fn test_quality_recovers_on_fast_frames() {
    let mut sim = Simulation::new(SimConfig::default()).unwrap();
    let t = run_for(&mut sim, 0.0, 61, 25.0);
    assert_eq!(sim.quality(), Quality::Medium);

    // 8 ms frames refill the window under the upgrade threshold
    let _ = run_for(&mut sim, t, 61, 8.0);
    assert_eq!(sim.quality(), Quality::High);
}

#[test]
fn test_manual_quality_pins_until_adaptive_reenabled() {
    let mut sim = Simulation::new(SimConfig::default()).unwrap();
    sim.set_quality(Quality::Low);
    assert_eq!(sim.quality(), Quality::Low);

    // Fast frames would normally raise quality; pinned stays put
    let t = run_for(&mut sim, 0.0, 120, 8.0);
    assert_eq!(sim.quality(), Quality::Low);

    sim.set_adaptive_quality(true);
    let t = run_for(&mut sim, t, 2, 8.0);
    assert_eq!(sim.quality(), Quality::Medium, "One step per adjustment");
    let _ = run_for(&mut sim, t, 200, 8.0);
    assert_eq!(sim.quality(), Quality::High);
}

#[test]
fn test_wander_gated_by_quality() {
    let drifting = |sim: &Simulation| {
        (0..sim.entity_count())
            .filter_map(|i| sim.entity_at(i))
            .filter(|e| e.role == Role::Environment)
            .filter(|e| (e.vel.length() - 50.0).abs() < 0.01)
            .count()
    };

    let mut low = Simulation::new(SimConfig::default()).unwrap();
    low.set_quality(Quality::Low);
    low.update(0.0);
    assert_eq!(drifting(&low), 0, "No drift pattern at low quality");

    let mut medium = Simulation::new(SimConfig::default()).unwrap();
    medium.set_quality(Quality::Medium);
    medium.update(0.0);
    assert!(
        drifting(&medium) >= 20,
        "Most objects should follow the drift pattern, got {}",
        drifting(&medium)
    );
}

#[test]
fn test_collision_gated_by_quality() {
    // Low: no collision pass at all
    let mut sim = Simulation::new(lone_world()).unwrap();
    sim.set_quality(Quality::Low);
    let a = sim.spawn_entity(200.0, 300.0, 1, "A", Role::Neutral).unwrap();
    let b = sim.spawn_entity(210.0, 300.0, 1, "B", Role::Neutral).unwrap();
    sim.update(0.0);
    assert_eq!(sim.entity(a).unwrap().vel, Vec2::ZERO);
    assert_eq!(sim.entity(b).unwrap().vel, Vec2::ZERO);
    assert_eq!(sim.particle_count(), 0);

    // Medium: response and scoring without bursts
    let mut sim = Simulation::new(lone_world()).unwrap();
    sim.set_quality(Quality::Medium);
    let a = sim.spawn_entity(200.0, 300.0, 1, "A", Role::Neutral).unwrap();
    let b = sim.spawn_entity(210.0, 300.0, 1, "B", Role::Neutral).unwrap();
    sim.update(0.0);
    assert_eq!(sim.entity(a).unwrap().vel, Vec2::new(-100.0, 0.0));
    assert_eq!(sim.entity(b).unwrap().vel, Vec2::new(100.0, 0.0));
    assert_eq!(sim.particle_count(), 0, "No contact bursts below high quality");
}

#[test]
fn test_particle_aging_gated_by_quality() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    sim.set_quality(Quality::Medium);
    assert_eq!(sim.spawn_explosion(500.0, 500.0, 10), 10);

    let t = run_for(&mut sim, 0.0, 50, 16.0);
    assert_eq!(
        sim.active_particle_count(),
        10,
        "Particles frozen below high quality"
    );

    sim.set_quality(Quality::High);
    let _ = run_for(&mut sim, t, 300, 16.0);
    assert_eq!(sim.active_particle_count(), 0);
    assert_eq!(sim.particle_count(), 0);
}

// ---- Performance reporting ----

#[test]
fn test_fps_reported_on_second_boundary() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    assert_eq!(sim.fps(), 0.0);

    // 125 ms steps: 8 samples make exactly one second
    let _ = run_for(&mut sim, 0.0, 9, 125.0);
    assert_eq!(sim.fps(), 8.0);
    assert_eq!(sim.frame_time_ms(), 125.0);
}

// ---- Camera ----

#[test]
fn test_camera_trails_moving_player() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    sim.handle_key(KEY_D, true);
    let _ = run_for(&mut sim, 0.0, 40, 16.0);

    let player_x = sim.find_by_role(Role::Player).unwrap().pos.x;
    let view = sim.camera_snapshot();
    assert!(player_x > 960.0, "Player should have moved right");
    assert!(view.x > 960.0, "Camera should follow the player");
    assert!(view.x < player_x, "Camera eases behind the player");
}

#[test]
fn test_camera_shake_decays_and_clears() {
    let mut sim = Simulation::new(lone_world()).unwrap();
    let t = run_for(&mut sim, 0.0, 2, 16.0);

    sim.shake_camera(50.0, 0.2);
    let mut seen_offset = false;
    let mut t = t;
    for _ in 0..30 {
        sim.update(t);
        t += 16.0;
        let view = sim.camera_snapshot();
        if (view.x - 960.0).abs() > 1e-3 || (view.y - 540.0).abs() > 1e-3 {
            seen_offset = true;
        }
    }
    assert!(seen_offset, "Shake should displace the camera view");

    let view = sim.camera_snapshot();
    assert_eq!(
        (view.x, view.y),
        (960.0, 540.0),
        "Expired shake must clear the offset"
    );
}

// ---- Snapshots ----

#[test]
fn test_snapshot_buffers_truncate_at_limits() {
    let config = SimConfig {
        snapshot_entity_limit: 5,
        snapshot_particle_limit: 4,
        ..SimConfig::default()
    };
    let mut sim = Simulation::new(config).unwrap();
    sim.spawn_explosion(500.0, 500.0, 20);

    let snapshot = sim.snapshot();
    assert_eq!(snapshot.entities.len(), 5 * ENTITY_SNAPSHOT_STRIDE);
    assert_eq!(snapshot.particles.len(), 4 * PARTICLE_SNAPSHOT_STRIDE);
    assert_eq!(snapshot.stats.entity_count, 51, "Stats report the full counts");
    assert_eq!(snapshot.stats.particle_count, 20);

    assert_eq!(sim.entity_snapshot().len(), 5 * ENTITY_SNAPSHOT_STRIDE);
    assert_eq!(sim.particle_snapshot().len(), 4 * PARTICLE_SNAPSHOT_STRIDE);
}

#[test]
fn test_snapshot_strides_match_counts() {
    let mut sim = Simulation::new(SimConfig::default()).unwrap();
    let _ = run_for(&mut sim, 0.0, 3, 16.0);

    let snapshot = sim.snapshot();
    assert_eq!(
        snapshot.entities.len(),
        snapshot.stats.active_entity_count * ENTITY_SNAPSHOT_STRIDE
    );
    assert_eq!(snapshot.stats.quality_level, 2);
    assert_eq!(snapshot.frame, 3);
}
