//! Transient visual feedback flags toggled by the scheduler.

use hecs::World;

use gallery_core::components::{Target, TargetId};

/// Set or clear the damage flash on a target. Returns false if the target
/// no longer exists (destroyed or torn down before the timer fired).
pub fn set_damage_flash(world: &mut World, id: TargetId, on: bool) -> bool {
    for (_entity, target) in world.query_mut::<&mut Target>() {
        if target.id == id {
            target.flashing = on;
            return true;
        }
    }
    false
}
