//! ECS systems that operate on the target world.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only work). They hold no state of their own.

pub mod feedback;
pub mod hit_resolver;
pub mod movement;
pub mod population;
pub mod snapshot;
