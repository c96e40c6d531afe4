//! Fundamental identity and coordinate-wrapping types.

use serde::{Deserialize, Serialize};

/// Stable entity identity, assigned monotonically at spawn.
///
/// Table slot indices are reused after a compaction pass; any reference
/// held across frames must use this id, not the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Wrap a coordinate into `[0, extent)` toroidally.
///
/// Unlike a single edge check, this lands in range for any finite input,
/// including values several world-widths out of bounds.
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to the extent itself for tiny negatives
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_angle_deg(degrees: f32) -> f32 {
    wrap_coord(degrees, 360.0)
}
