//! Systems that advance the simulation world each frame.
//!
//! Systems are free functions over the slot tables and small clock
//! structs owned by the engine. They hold no state of their own, so the
//! engine decides each frame which of them run at the current quality
//! tier.

pub mod ai;
pub mod camera;
pub mod collision;
pub mod movement;
pub mod particles;
pub mod performance;
pub mod player_control;
pub mod snapshot;
