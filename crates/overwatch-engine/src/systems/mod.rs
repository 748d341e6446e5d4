//! ECS systems that operate on the widget world each frame.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod animation;
pub mod cleanup;
pub mod radar;
pub mod snapshot;
