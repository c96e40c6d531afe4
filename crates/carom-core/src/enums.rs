//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Entity role, used for behavior dispatch instead of tag-string compares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The single input-driven entity the camera follows.
    Player,
    /// Autonomous wanderer driven by the AI pass.
    Environment,
    /// Inert participant: simulated and collidable, but never AI-driven.
    #[default]
    Neutral,
}

/// Discrete simulation quality tier.
///
/// Gates which subsystems run each frame: `Low` runs integration and the
/// camera only, `Medium` adds AI and collision scoring, `High` adds the
/// particle pass and collision bursts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quality {
    Low,
    Medium,
    #[default]
    High,
}

impl Quality {
    /// Ordinal level: 0 = low, 1 = medium, 2 = high.
    pub fn level(self) -> u8 {
        match self {
            Quality::Low => 0,
            Quality::Medium => 1,
            Quality::High => 2,
        }
    }

    pub fn from_level(level: u8) -> Option<Quality> {
        match level {
            0 => Some(Quality::Low),
            1 => Some(Quality::Medium),
            2 => Some(Quality::High),
            _ => None,
        }
    }

    /// One step down, saturating at `Low`.
    pub fn step_down(self) -> Quality {
        match self {
            Quality::High => Quality::Medium,
            _ => Quality::Low,
        }
    }

    /// One step up, saturating at `High`.
    pub fn step_up(self) -> Quality {
        match self {
            Quality::Low => Quality::Medium,
            _ => Quality::High,
        }
    }
}

/// Collision pair-enumeration strategy.
///
/// Both strategies run the identical pairwise response; they differ only in
/// which pairs are tested. The grid checks same-cell pairs only, so a
/// contact straddling a cell boundary can go unresolved for a frame. That
/// is an accepted approximation, selectable per instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionMode {
    /// Test every unordered pair of active entities, O(n²).
    Exhaustive,
    /// Bucket entities into a fixed cell grid and test within cells only.
    #[default]
    Grid,
}
