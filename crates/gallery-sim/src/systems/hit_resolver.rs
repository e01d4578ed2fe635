//! Hit resolution: finds the target nearest the aim ray and applies damage.
//!
//! Candidate filter: ray distance to the target's displayed center below
//! `radius * tolerance`. Tie-break: smallest ray distance wins, regardless
//! of how far the target is from the shooter.

use hecs::World;
use log::debug;

use gallery_core::components::{Health, Target, TargetId};
use gallery_core::enums::TargetKind;
use gallery_core::events::GalleryEvent;
use gallery_core::types::{Position, Ray};

use crate::score::ScoreState;

/// Result of resolving one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// No target within tolerance of the ray.
    Miss,
    /// A target was hit and survived.
    Damaged { target: TargetId, remaining: u32 },
    /// A target was hit and destroyed.
    Destroyed {
        target: TargetId,
        kind: TargetKind,
        points: u32,
    },
}

/// The winning candidate for a ray, if any: (entity, ray distance).
pub fn find_candidate(world: &World, ray: &Ray, tolerance: f64) -> Option<(hecs::Entity, f64)> {
    let mut best: Option<(hecs::Entity, f64)> = None;

    for (entity, (pos, target)) in world.query::<(&Position, &Target)>().iter() {
        let distance = ray.distance_to_point(pos.to_dvec3());
        let threshold = target.kind.params().radius * tolerance;
        if distance >= threshold {
            continue;
        }
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((entity, distance));
        }
    }

    best
}

/// Resolve a shot along `ray`. On a kill the target is despawned and the
/// score credited; the caller schedules the replacement spawn.
pub fn run(
    world: &mut World,
    ray: &Ray,
    tolerance: f64,
    score: &mut ScoreState,
    events: &mut Vec<GalleryEvent>,
) -> HitOutcome {
    let Some((entity, distance)) = find_candidate(world, ray, tolerance) else {
        score.misses += 1;
        return HitOutcome::Miss;
    };

    let (target, kind, position, remaining, depleted) = {
        let Ok(mut query) = world.query_one::<(&Target, &Position, &mut Health)>(entity) else {
            score.misses += 1;
            return HitOutcome::Miss;
        };
        let Some((target, position, health)) = query.get() else {
            score.misses += 1;
            return HitOutcome::Miss;
        };
        health.current = health.current.saturating_sub(1);
        (target.id, target.kind, *position, health.current, health.is_depleted())
    };
    score.hits += 1;

    if !depleted {
        debug!("hit {target} at ray distance {distance:.3}, {remaining} hp left");
        events.push(GalleryEvent::TargetDamaged { target, remaining });
        return HitOutcome::Damaged { target, remaining };
    }

    let points = kind.params().points;
    score.record_destroyed(kind);
    let _ = world.despawn(entity);

    debug!(
        "destroyed {target} ({kind:?}) for {points} points, score {}",
        score.score
    );
    events.push(GalleryEvent::TargetDestroyed {
        target,
        kind,
        points,
        position,
    });
    HitOutcome::Destroyed {
        target,
        kind,
        points,
    }
}
