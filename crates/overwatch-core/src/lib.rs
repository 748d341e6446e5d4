//! Core types and definitions for the OVERWATCH HUD engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! records, commands, events, snapshot views, configuration and the
//! error taxonomy. It has no dependency on the ECS or any runtime loop.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::{HudError, HudResult};

#[cfg(test)]
mod tests;
