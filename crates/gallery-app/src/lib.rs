//! Headless host for the shooting-gallery simulation.
//!
//! Runs the engine on its own thread at the tick rate, forwards host input
//! over a channel, and drives a scripted pair of controllers for demos.

pub mod autoaim;
pub mod game_loop;
pub mod logging;
pub mod state;

pub use gallery_core as core;
pub use logging::init as init_logging;
