//! Core types and definitions for the shooting-gallery simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, state snapshots, events, errors and constants.
//! It has no dependency on any host runtime, renderer or XR API.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod kinds;
pub mod state;
pub mod types;
