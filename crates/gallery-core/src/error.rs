//! Error types for precondition violations at the simulation boundary.

use thiserror::Error;

/// A controller pose that cannot be turned into a usable aim ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoseError {
    #[error("controller origin has a non-finite component")]
    NonFiniteOrigin,
    #[error("controller direction has a non-finite component")]
    NonFiniteDirection,
    #[error("controller direction has zero length")]
    DegenerateDirection,
    #[error("unknown controller {0}")]
    UnknownController(u8),
}

/// Rejected simulation configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("target capacity must be at least 1")]
    ZeroCapacity,
    #[error("initial population {initial} exceeds capacity {capacity}")]
    InitialAboveCapacity { initial: usize, capacity: usize },
    #[error("{name} must be at least one tick")]
    ZeroInterval { name: &'static str },
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("spawn weights sum to {0}, expected 1")]
    SpawnWeights(f64),
}
