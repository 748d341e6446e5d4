//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Status band a gauge reading falls into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    #[default]
    Normal,
    Optimal,
    Warning,
    Critical,
}

/// Interpolation curve applied to the fraction of elapsed animation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Quadratic acceleration from rest.
    EaseIn,
    /// Cubic deceleration into the target.
    #[default]
    EaseOut,
    /// Cubic acceleration then deceleration.
    EaseInOut,
}

/// Identification of a radar contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactClassification {
    Friendly,
    Hostile,
    Neutral,
    #[default]
    Unknown,
    Objective,
}

/// Notification category, used for styling and audio cues by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Critical,
    System,
    Combat,
    Objective,
}

/// Lifecycle position of a notification inside the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    Queued,
    Visible,
    Removed,
}

/// Why a notification left the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalReason {
    /// Closed by the user.
    Manual,
    /// Auto-dismiss timer ran out.
    Expired,
    /// Bumped out of the visible set by a higher-priority record.
    Displaced,
    /// The caller dropped it from its collection.
    Withdrawn,
    /// One of its actions was invoked.
    Action,
}

/// Kind of widget mounted in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    MetricGauge,
    ProgressBar,
    Radar,
}

/// Sound hook derived from events. The engine only logs these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioCue {
    Ping,
    Chime,
    Alert,
    Alarm,
}
