//! SKYWALL headless runtime.
//!
//! Hosts the match engine on a 60 Hz frame-driver thread and exposes it
//! through a command channel and a shared snapshot cell. A renderer (or
//! the demo binary) polls snapshots and forwards player commands.

pub mod game_loop;
pub mod state;

pub use skywall_core as core;
