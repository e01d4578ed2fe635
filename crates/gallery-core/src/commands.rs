//! Input and lifecycle commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::ControllerPose;

/// All host-originated events the simulation reacts to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session lifecycle ---
    /// The headset session began.
    StartSession,
    /// The headset session ended.
    EndSession,

    // --- Input ---
    /// Trigger pressed on a controller, with its pose at that instant.
    TriggerPress { controller: u8, pose: ControllerPose },
    /// Trigger released on a controller.
    TriggerRelease { controller: u8 },
}
