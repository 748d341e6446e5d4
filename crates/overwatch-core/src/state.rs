//! HUD state snapshot: the complete presentation state handed to the renderer each frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::HudEvent;
use crate::types::{HudClock, NotificationRecord, Thresholds};

/// Complete presentation state broadcast after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub clock: HudClock,
    pub gauges: Vec<GaugeView>,
    pub radars: Vec<RadarView>,
    pub notifications: NotificationsView,
    /// Events emitted since the previous snapshot, in order.
    pub events: Vec<HudEvent>,
    /// Queued commands rejected since the previous snapshot.
    pub rejections: Vec<String>,
}

/// A gauge or progress bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeView {
    pub widget_id: String,
    pub kind: WidgetKind,
    /// Interpolated display value (raw units).
    pub current: f64,
    pub target: f64,
    /// `current` as a percentage of the gauge range.
    pub percent: f64,
    pub category: StatusCategory,
    pub thresholds: Thresholds,
    pub animating: bool,
}

/// A radar scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarView {
    pub widget_id: String,
    pub sweep_angle_deg: f64,
    pub half_width_deg: f64,
    /// Completed rotations since mount.
    pub rotations: u64,
    pub contacts: Vec<ContactView>,
}

/// A contact annotated with detection state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactView {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub bearing_deg: f64,
    pub classification: ContactClassification,
    pub strength: Option<f64>,
    /// Beam is currently over the contact.
    pub detected: bool,
    pub last_detected_angle: Option<f64>,
    /// Time since the last detection, for ping fade-out.
    pub ping_age_ms: Option<u64>,
}

/// Notification manager state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationsView {
    /// Visible notifications in display order.
    pub visible: Vec<NotificationView>,
    /// Ids waiting for a free slot, in promotion order.
    pub queued: Vec<String>,
}

/// One visible notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationView {
    pub record: NotificationRecord,
    /// `None` for persistent notifications.
    pub remaining_ms: Option<u64>,
    pub paused: bool,
}
