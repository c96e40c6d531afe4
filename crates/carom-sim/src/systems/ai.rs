//! Wander behavior for environment objects.
//!
//! Every object drifts along a slot-phased circular pattern. A shared
//! decision clock fires every couple of seconds; on those rounds each
//! object has a small chance of an extra random kick for that frame.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use carom_core::config::SimConfig;
use carom_core::constants::AI_PHASE_STEP;
use carom_core::enums::Role;

use crate::tables::EntityTable;

/// Shared clock for impulse decision rounds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WanderState {
    pub decision_timer: f32,
}

/// Drive every active Environment entity.
pub fn run(
    entities: &mut EntityTable,
    wander: &mut WanderState,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    elapsed: f32,
    dt: f32,
) {
    wander.decision_timer += dt;
    let impulse_round = wander.decision_timer > config.ai_impulse_interval;
    let half_kick = config.ai_impulse_strength * 0.5;

    for (slot, entity) in entities.iter_mut().enumerate() {
        if !entity.active || entity.role != Role::Environment {
            continue;
        }

        // Slot-offset phase keeps the flock from moving in lockstep.
        let phase = elapsed + slot as f32 * AI_PHASE_STEP;
        entity.vel = Vec2::new(phase.sin(), phase.cos()) * config.ai_drift_speed;

        // A zero-strength kick would be an empty sample range
        if impulse_round && half_kick > 0.0 && rng.gen::<f32>() < config.ai_impulse_chance {
            entity.vel += Vec2::new(
                rng.gen_range(-half_kick..half_kick),
                rng.gen_range(-half_kick..half_kick),
            );
        }
    }

    if impulse_round {
        wander.decision_timer = 0.0;
    }
}
