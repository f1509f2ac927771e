//! ECS systems that operate on the match world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They own no state — per-match state lives in the engine and components.

pub mod blast;
pub mod cleanup;
pub mod evaluator;
pub mod fire_control;
pub mod impact;
pub mod movement;
pub mod snapshot;
pub mod spawner;
