//! OVERWATCH headless host.
//!
//! Runs the HUD engine on its own frame-loop thread, feeds it commands over
//! a channel and keeps the latest snapshot for synchronous polling.

pub mod host;
pub mod host_loop;
pub mod state;

pub use overwatch_core as core;
