//! Events emitted by the engine for the rendering layer.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::NotificationRecord;

/// Outputs of the engine, drained into each snapshot in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HudEvent {
    /// An animated gauge value reached its target.
    ValueSettled { widget_id: String, value: f64 },
    /// A gauge entered a different status category.
    ThresholdCrossed {
        widget_id: String,
        previous: StatusCategory,
        category: StatusCategory,
        value: f64,
    },
    /// The beam entered a contact's window.
    ContactDetected {
        widget_id: String,
        contact_id: String,
        bearing_deg: f64,
    },
    /// The beam wrapped past 0 degrees.
    SweepComplete { widget_id: String, rotation: u64 },
    NotificationAdded { record: NotificationRecord },
    NotificationRemoved { id: String, reason: RemovalReason },
    /// The overflow queue changed; ids in display order.
    QueueChanged { queued: Vec<String> },
    ActionInvoked { id: String, action_id: String },
}

impl HudEvent {
    /// Sound hook for this event, if any.
    pub fn cue(&self) -> Option<AudioCue> {
        match self {
            HudEvent::ContactDetected { .. } => Some(AudioCue::Ping),
            HudEvent::ThresholdCrossed { category, .. } => match category {
                StatusCategory::Critical => Some(AudioCue::Alarm),
                StatusCategory::Warning => Some(AudioCue::Alert),
                StatusCategory::Normal | StatusCategory::Optimal => None,
            },
            HudEvent::NotificationAdded { record } => match record.category {
                NotificationCategory::Critical | NotificationCategory::Combat => {
                    Some(AudioCue::Alarm)
                }
                NotificationCategory::Warning | NotificationCategory::Error => {
                    Some(AudioCue::Alert)
                }
                _ => Some(AudioCue::Chime),
            },
            _ => None,
        }
    }
}
