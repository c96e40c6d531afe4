//! Simulation engine for CAROM.
//!
//! Owns the fixed-capacity entity and particle tables, runs the frame
//! systems under adaptive quality scaling, and produces flat snapshots
//! for a frontend.

pub mod engine;
pub mod systems;
pub mod tables;
pub mod world_setup;

pub use carom_core as core;
pub use engine::Simulation;

#[cfg(test)]
mod tests;
