//! Error types for simulation construction.

use thiserror::Error;

/// Failures surfaced when building a simulation instance.
///
/// Capacity exhaustion at runtime is not an error: spawn calls return
/// `None`/partial results and the caller checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
