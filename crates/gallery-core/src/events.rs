//! Events emitted by the simulation for visual and audio feedback.

use serde::{Deserialize, Serialize};

use crate::components::TargetId;
use crate::enums::TargetKind;
use crate::types::Position;

/// Discrete presentation cues, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GalleryEvent {
    /// A new target entered the play area.
    TargetSpawned {
        target: TargetId,
        kind: TargetKind,
        position: Position,
    },
    /// A controller fired.
    ShotFired { controller: u8 },
    /// A target took a hit and survived.
    TargetDamaged { target: TargetId, remaining: u32 },
    /// A target was destroyed by a hit.
    TargetDestroyed {
        target: TargetId,
        kind: TargetKind,
        points: u32,
        position: Position,
    },
    /// A shot found no target. `controller` is `None` for shots resolved
    /// directly from a ray rather than a trigger press.
    HitMissed { controller: Option<u8> },
    /// A session began.
    SessionStarted,
    /// A session ended; `final_score` is the score before the reset.
    SessionEnded { final_score: u32 },
}
