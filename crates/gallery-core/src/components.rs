//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems.
//! A target entity is the bundle `(Position, Target, Health)` where the
//! `Position` component is the displayed (smoothed) position.

use serde::{Deserialize, Serialize};

use crate::enums::TargetKind;
use crate::types::{PlanarVelocity, Position};

/// Stable identifier of a target, unique within an engine's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(pub u32);

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Identity and motion state of a target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: TargetId,
    pub kind: TargetKind,
    /// Logical position advanced by the movement integrator. The displayed
    /// `Position` component eases toward it.
    pub logical: Position,
    pub velocity: PlanarVelocity,
    /// Set briefly after a non-lethal hit.
    pub flashing: bool,
}

/// Hit points. Invariant: `current <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

/// Per-device input state held by the engine (not an ECS entity).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ControllerState {
    pub trigger_held: bool,
    pub muzzle_flash: bool,
    pub shots_fired: u32,
}
