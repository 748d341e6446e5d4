//! Telemetry logic for OVERWATCH widgets.
//!
//! Value animation, threshold classification and radar sweep detection.
//! No ECS dependency: every type here operates on plain data and injected
//! timestamps, so it runs the same inside a UI loop and a test harness.

pub mod animator;
pub mod easing;
pub mod sweep;
pub mod threshold;

pub use animator::ValueAnimator;
pub use overwatch_core as core;
pub use sweep::{SweepDetector, SweepReport};
pub use threshold::{classify, ThresholdCrossing, ThresholdMonitor};
