//! Commands sent from the host or rendering layer to the engine.
//!
//! Commands are either applied immediately (`HudEngine::apply`) or queued
//! for processing at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{GaugeRange, NotificationRecord, RadarContact, Thresholds};

/// All possible inputs to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HudCommand {
    // --- Widget lifecycle ---
    /// Mount a metric gauge or progress bar.
    MountGauge {
        widget_id: String,
        kind: WidgetKind,
        initial: f64,
        #[serde(default)]
        range: GaugeRange,
        /// Falls back to the configured thresholds.
        #[serde(default)]
        thresholds: Option<Thresholds>,
        #[serde(default)]
        duration_ms: Option<i64>,
        #[serde(default)]
        easing: Option<Easing>,
    },
    /// Mount a radar scope.
    MountRadar {
        widget_id: String,
        #[serde(default)]
        sweep_rate_deg_per_sec: Option<f64>,
    },
    /// Remove a widget and cancel anything it had in flight.
    Unmount { widget_id: String },

    // --- Gauge inputs ---
    /// Feed a new raw reading.
    SetValue { widget_id: String, value: f64 },
    SetThresholds {
        widget_id: String,
        thresholds: Thresholds,
    },
    /// Force a category regardless of the reading.
    SetOverrides {
        widget_id: String,
        critical: bool,
        warning: bool,
    },

    // --- Radar inputs ---
    SetContacts {
        widget_id: String,
        contacts: Vec<RadarContact>,
    },
    /// Point the beam at an explicit angle (degrees).
    SetSweepAngle { widget_id: String, angle_deg: f64 },

    // --- Notifications ---
    /// Replace the caller's notification collection.
    SetNotifications { records: Vec<NotificationRecord> },
    PauseNotification { id: String },
    ResumeNotification { id: String },
    /// Pointer entered the notification container.
    PauseAllNotifications,
    /// Pointer left the notification container.
    ResumeAllNotifications,
    DismissNotification { id: String },
    InvokeAction { id: String, action_id: String },
}
