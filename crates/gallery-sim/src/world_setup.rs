//! Entity spawn factories for targets.
//!
//! A target is the bundle `(Position, Target, Health)`. The `Position`
//! component is the displayed position; `Target::logical` starts equal to
//! it and is what the movement integrator advances.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gallery_core::components::{Health, Target, TargetId};
use gallery_core::constants::{BASE_SPEED_MAX, BASE_SPEED_MIN};
use gallery_core::enums::TargetKind;
use gallery_core::types::{PlanarVelocity, Position};

/// Spawn a target of `kind` at a uniformly random floor position inside
/// `boundary`, moving in a random direction.
pub fn spawn_random_target(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id: TargetId,
    kind: TargetKind,
    boundary: f64,
) -> hecs::Entity {
    let x: f64 = rng.gen_range(-boundary..=boundary);
    let z: f64 = rng.gen_range(-boundary..=boundary);

    let base_speed: f64 = rng.gen_range(BASE_SPEED_MIN..BASE_SPEED_MAX);
    let heading: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let velocity =
        PlanarVelocity::from_heading(base_speed * kind.params().speed_multiplier, heading);

    spawn_target(world, id, kind, x, z, velocity)
}

/// Spawn a target at a fixed floor position with a fixed velocity.
/// The height is the kind's radius so the sphere rests on the floor.
pub fn spawn_target(
    world: &mut World,
    id: TargetId,
    kind: TargetKind,
    x: f64,
    z: f64,
    velocity: PlanarVelocity,
) -> hecs::Entity {
    let params = kind.params();
    let position = Position::new(x, params.radius, z);

    world.spawn((
        position,
        Target {
            id,
            kind,
            logical: position,
            velocity,
            flashing: false,
        },
        Health::full(params.max_health),
    ))
}

/// Find the entity for a target id.
pub fn find_target(world: &World, id: TargetId) -> Option<hecs::Entity> {
    world
        .query::<&Target>()
        .iter()
        .find(|(_, target)| target.id == id)
        .map(|(entity, _)| entity)
}

/// Number of live targets.
pub fn target_count(world: &World) -> usize {
    world.query::<&Target>().iter().count()
}
