//! ECS components for hecs widget entities.
//!
//! Components here are plain data. The stateful telemetry types
//! (animators, monitors, detectors) are attached by the engine.

use serde::{Deserialize, Serialize};

use crate::enums::WidgetKind;
use crate::types::{GaugeRange, RadarContact};

/// Caller-facing identity of a mounted widget.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub String);

/// Marks a metric gauge or progress bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Gauge {
    pub kind: WidgetKind,
    pub range: GaugeRange,
}

/// Marks a radar scope and holds its beam motion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RadarScope {
    pub sweep_rate_deg_per_sec: f64,
}

/// Contacts most recently supplied for a radar scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactList {
    pub contacts: Vec<RadarContact>,
}

/// Insertion order, so snapshots list widgets in mount order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MountOrder(pub u64);
