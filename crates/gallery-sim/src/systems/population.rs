//! Target population: weighted spawning, removal and bulk teardown.
//!
//! The population system is the only code that creates or destroys target
//! entities.

use hecs::World;
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gallery_core::components::{Target, TargetId};
use gallery_core::enums::TargetKind;
use gallery_core::events::GalleryEvent;
use gallery_core::types::Position;

use crate::world_setup;

/// Draw a target kind by cumulative spawn weight.
pub fn choose_kind(rng: &mut ChaCha8Rng) -> TargetKind {
    let u: f64 = rng.gen();
    TargetKind::from_weighted_draw(u)
}

/// Spawn one random target if fewer than `capacity` are active.
/// Returns the new id, or `None` when at capacity.
pub fn spawn(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    capacity: usize,
    boundary: f64,
    events: &mut Vec<GalleryEvent>,
) -> Option<TargetId> {
    if world_setup::target_count(world) >= capacity {
        debug!("spawn skipped: {capacity} targets already active");
        return None;
    }

    let kind = choose_kind(rng);
    let id = TargetId(*next_id);
    *next_id += 1;

    let entity = world_setup::spawn_random_target(world, rng, id, kind, boundary);
    let position = world
        .get::<&Position>(entity)
        .map(|p| *p)
        .unwrap_or_default();

    debug!("spawned {id} ({kind:?}) at ({:.2}, {:.2})", position.x, position.z);
    events.push(GalleryEvent::TargetSpawned {
        target: id,
        kind,
        position,
    });
    Some(id)
}

/// Periodic spawn: at most one new target per call, only below capacity.
pub fn tick_spawn(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    capacity: usize,
    boundary: f64,
    events: &mut Vec<GalleryEvent>,
) -> Option<TargetId> {
    if world_setup::target_count(world) < capacity {
        spawn(world, rng, next_id, capacity, boundary, events)
    } else {
        None
    }
}

/// Remove a target by id. Returns false if no such target is active.
pub fn remove(world: &mut World, id: TargetId) -> bool {
    match world_setup::find_target(world, id) {
        Some(entity) => world.despawn(entity).is_ok(),
        None => false,
    }
}

/// Remove every target. Returns how many were removed.
/// Uses the caller's buffer to avoid allocating per teardown.
pub fn clear(world: &mut World, despawn_buffer: &mut Vec<hecs::Entity>) -> usize {
    despawn_buffer.clear();
    despawn_buffer.extend(world.query_mut::<&Target>().into_iter().map(|(e, _)| e));

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
