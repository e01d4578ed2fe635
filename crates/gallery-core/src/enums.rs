//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Target size class. Declaration order is the order of the weighted
/// spawn draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TargetKind {
    /// Fast, fragile, high value.
    Small,
    /// The common case.
    Medium,
    /// Slow, takes three hits, low value.
    Large,
}

impl TargetKind {
    /// All kinds in declared order.
    pub const ALL: [TargetKind; 3] = [TargetKind::Small, TargetKind::Medium, TargetKind::Large];
}

/// Session lifecycle (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No headset session: nothing spawns or moves.
    #[default]
    Idle,
    /// Headset session in progress.
    Active,
}
