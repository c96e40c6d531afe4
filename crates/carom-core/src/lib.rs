//! Core types and definitions for the CAROM arcade simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, configuration, state snapshots, and constants.
//! It has no dependency on any runtime framework and contains no game logic.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;
