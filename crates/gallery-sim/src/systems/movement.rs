//! Kinematic integration system.
//!
//! Advances each target's logical position from its velocity, reflects it
//! off the play-area boundary, then eases the displayed `Position` toward
//! the logical one with the kind's lerp factor.

use hecs::World;

use gallery_core::components::Target;
use gallery_core::types::Position;

/// Run one movement step of `step_secs` for every target.
pub fn run(world: &mut World, boundary: f64, step_secs: f64) {
    for (_entity, (displayed, target)) in world.query_mut::<(&mut Position, &mut Target)>() {
        step_target(target, boundary, step_secs);
        displayed.lerp_toward(&target.logical, target.kind.params().lerp_factor);
    }
}

/// Advance one target's logical position and reflect at the boundary.
pub fn step_target(target: &mut Target, boundary: f64, step_secs: f64) {
    target.logical.x += target.velocity.x * step_secs;
    target.logical.z += target.velocity.z * step_secs;

    if target.logical.x.abs() > boundary {
        target.velocity.x = -target.velocity.x;
        target.logical.x = boundary.copysign(target.logical.x);
    }
    if target.logical.z.abs() > boundary {
        target.velocity.z = -target.velocity.z;
        target.logical.z = boundary.copysign(target.logical.z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gallery_core::components::TargetId;
    use gallery_core::constants::DT;
    use gallery_core::enums::TargetKind;
    use gallery_core::types::PlanarVelocity;

    use crate::world_setup;

    fn target_at(x: f64, z: f64, vx: f64, vz: f64) -> Target {
        let p = Position::new(x, 0.25, z);
        Target {
            id: TargetId(0),
            kind: TargetKind::Medium,
            logical: p,
            velocity: PlanarVelocity::new(vx, vz),
            flashing: false,
        }
    }

    #[test]
    fn test_integrates_velocity() {
        let mut t = target_at(0.0, 0.0, 6.0, -3.0);
        step_target(&mut t, 4.5, DT);
        assert_relative_eq!(t.logical.x, 0.1, epsilon = 1e-12);
        assert_relative_eq!(t.logical.z, -0.05, epsilon = 1e-12);
        assert_relative_eq!(t.logical.y, 0.25);
    }

    #[test]
    fn test_longer_step_covers_proportional_distance() {
        let mut one = target_at(0.0, 0.0, 1.5, 0.0);
        let mut two = one.clone();
        step_target(&mut one, 4.5, DT);
        step_target(&mut one, 4.5, DT);
        step_target(&mut two, 4.5, 2.0 * DT);
        assert_relative_eq!(one.logical.x, two.logical.x, epsilon = 1e-12);
        assert_relative_eq!(two.logical.x, 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_reflects_positive_x() {
        let mut t = target_at(4.49, 0.0, 3.0, 0.5);
        step_target(&mut t, 4.5, DT);
        assert_relative_eq!(t.logical.x, 4.5);
        assert_relative_eq!(t.velocity.x, -3.0);
        assert_relative_eq!(t.velocity.z, 0.5);
    }

    #[test]
    fn test_reflects_negative_z_preserving_sign() {
        let mut t = target_at(0.0, -4.49, 0.0, -3.0);
        step_target(&mut t, 4.5, DT);
        assert_relative_eq!(t.logical.z, -4.5);
        assert_relative_eq!(t.velocity.z, 3.0);
    }

    #[test]
    fn test_displayed_position_eases_toward_logical() {
        let mut world = World::new();
        let entity = world_setup::spawn_target(
            &mut world,
            TargetId(1),
            TargetKind::Large,
            0.0,
            0.0,
            PlanarVelocity::new(6.0, 0.0),
        );
        run(&mut world, 4.5, DT);

        let displayed = *world.get::<&Position>(entity).unwrap();
        let logical = world.get::<&Target>(entity).unwrap().logical;
        assert_relative_eq!(logical.x, 0.1, epsilon = 1e-12);
        let lerp = TargetKind::Large.params().lerp_factor;
        assert_relative_eq!(displayed.x, 0.1 * lerp, epsilon = 1e-12);
        assert!(displayed.x < logical.x);
    }

    #[test]
    fn test_fast_target_never_leaves_play_area() {
        let mut world = World::new();
        let entity = world_setup::spawn_target(
            &mut world,
            TargetId(2),
            TargetKind::Small,
            4.0,
            -4.0,
            PlanarVelocity::new(40.0, -25.0),
        );
        for _ in 0..2_000 {
            run(&mut world, 4.5, DT);
            let t = world.get::<&Target>(entity).unwrap();
            assert!(t.logical.x.abs() <= 4.5);
            assert!(t.logical.z.abs() <= 4.5);
        }
    }
}
