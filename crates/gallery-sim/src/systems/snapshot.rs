//! Snapshot system: queries the ECS world and builds a complete
//! `GameStateSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use gallery_core::components::{ControllerState, Health, Target};
use gallery_core::enums::SessionPhase;
use gallery_core::events::GalleryEvent;
use gallery_core::state::*;
use gallery_core::types::{Position, SimTime};

use crate::score::ScoreState;

/// Build a snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SessionPhase,
    controllers: &[ControllerState],
    events: Vec<GalleryEvent>,
    score: &ScoreState,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        targets: build_targets(world),
        controllers: build_controllers(controllers),
        events,
        score: ScoreView {
            score: score.score,
            shots_fired: score.shots_fired,
            hits: score.hits,
            misses: score.misses,
            destroyed_small: score.destroyed_small,
            destroyed_medium: score.destroyed_medium,
            destroyed_large: score.destroyed_large,
            session_time_secs: time.elapsed_secs,
        },
    }
}

/// Build TargetView list, ordered by id for stable output.
fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Position, &Target, &Health)>()
        .iter()
        .map(|(_, (pos, target, health))| TargetView {
            id: target.id,
            kind: target.kind,
            position: *pos,
            velocity: target.velocity,
            radius: target.kind.params().radius,
            health: health.current,
            max_health: health.max,
            flashing: target.flashing,
        })
        .collect();

    targets.sort_by_key(|t| t.id);
    targets
}

fn build_controllers(controllers: &[ControllerState]) -> Vec<ControllerView> {
    controllers
        .iter()
        .enumerate()
        .map(|(i, c)| ControllerView {
            controller: i as u8,
            trigger_held: c.trigger_held,
            muzzle_flash: c.muzzle_flash,
        })
        .collect()
}
