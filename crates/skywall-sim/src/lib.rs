//! Simulation engine for SKYWALL.
//!
//! Owns the hecs ECS world, runs the per-tick system sequence, and
//! produces `MatchSnapshot`s for the presentation layer.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::MatchEngine;
pub use skywall_core as core;
