//! Player steering system.
//!
//! Converts the keyboard movement axis into acceleration on the player
//! entity. Acceleration is consumed and cleared by the integration pass
//! in the same frame.

use carom_core::components::InputState;
use carom_core::enums::Role;

use crate::tables::EntityTable;

/// Apply the movement axis as acceleration on the active player entity.
pub fn run(entities: &mut EntityTable, input: &InputState, move_speed: f32) {
    let axis = input.movement_axis();
    if let Some(player) = entities
        .iter_mut()
        .find(|e| e.active && e.role == Role::Player)
    {
        player.accel = axis * move_speed;
    }
}
