//! Game state snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use serde::{Deserialize, Serialize};

use crate::components::TargetId;
use crate::enums::*;
use crate::events::GalleryEvent;
use crate::types::{PlanarVelocity, Position, SimTime};

/// Complete state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    /// Active targets ordered by id.
    pub targets: Vec<TargetView>,
    pub controllers: Vec<ControllerView>,
    pub events: Vec<GalleryEvent>,
    pub score: ScoreView,
}

/// A target as the renderer should place it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub id: TargetId,
    pub kind: TargetKind,
    /// Displayed (smoothed) position.
    pub position: Position,
    pub velocity: PlanarVelocity,
    pub radius: f64,
    pub health: u32,
    pub max_health: u32,
    pub flashing: bool,
}

/// Per-controller presentation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerView {
    pub controller: u8,
    pub trigger_held: bool,
    pub muzzle_flash: bool,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub shots_fired: u32,
    pub hits: u32,
    pub misses: u32,
    pub destroyed_small: u32,
    pub destroyed_medium: u32,
    pub destroyed_large: u32,
    pub session_time_secs: f64,
}
