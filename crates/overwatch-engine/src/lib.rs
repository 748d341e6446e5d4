//! HUD engine for OVERWATCH.
//!
//! Owns the hecs ECS world of mounted widgets, applies commands, runs
//! per-frame systems and the notification heartbeat, and produces
//! `HudSnapshot`s for the renderer. Headless and clock-free: the host
//! injects every timestamp, so runs are deterministic.

pub mod engine;
pub mod feed;
pub mod systems;
pub mod world_setup;

pub use engine::HudEngine;
pub use overwatch_core as core;
