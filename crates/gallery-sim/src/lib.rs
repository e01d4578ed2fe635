//! Simulation engine for the shooting gallery.
//!
//! Owns the hecs ECS world of targets, runs the population, movement and
//! hit-resolution systems off a tick-driven scheduler, and produces
//! `GameStateSnapshot`s for the presentation layer.

pub mod engine;
pub mod scheduler;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::{GalleryConfig, SimulationEngine};
pub use gallery_core as core;
pub use systems::hit_resolver::HitOutcome;
