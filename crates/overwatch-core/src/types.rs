//! Fundamental records and value types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::error::{ensure_finite, HudError, HudResult};

/// Engine time tracking. Time is injected by the host, never read from a clock.
///
/// The host timestamp of the first frame becomes the origin, so `now_ms`
/// counts milliseconds since that frame whatever epoch the host uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudClock {
    /// Frame number (increments by 1 each frame).
    pub frame: u64,
    /// Time of the latest frame, relative to the origin (ms).
    pub now_ms: u64,
    /// Host timestamp of the first frame; `None` until it runs.
    pub origin_ms: Option<u64>,
}

impl HudClock {
    /// Advance to host time `now_ms` and return the elapsed milliseconds.
    ///
    /// The first call only fixes the origin and reports zero elapsed time.
    /// A timestamp older than the current one counts as zero elapsed time.
    pub fn advance_to(&mut self, now_ms: u64) -> u64 {
        let origin = *self.origin_ms.get_or_insert(now_ms);
        let relative = now_ms.saturating_sub(origin);
        let dt = relative.saturating_sub(self.now_ms);
        self.frame += 1;
        self.now_ms = self.now_ms.max(relative);
        dt
    }
}

/// Ordered breakpoints (percent of gauge range).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub critical: f64,
    pub warning: f64,
    pub optimal: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            critical: DEFAULT_CRITICAL_PERCENT,
            warning: DEFAULT_WARNING_PERCENT,
            optimal: DEFAULT_OPTIMAL_PERCENT,
        }
    }
}

impl Thresholds {
    pub fn new(critical: f64, warning: f64, optimal: f64) -> Self {
        Self {
            critical,
            warning,
            optimal,
        }
    }

    /// Every breakpoint must be a finite percentage.
    ///
    /// Ordering between `critical` and `warning` is not enforced; a reversed
    /// pair is accepted and logged.
    pub fn validate(&self) -> HudResult<()> {
        for (name, value) in [
            ("critical", self.critical),
            ("warning", self.warning),
            ("optimal", self.optimal),
        ] {
            ensure_finite(name, value)?;
            if !(PERCENT_MIN..=PERCENT_MAX).contains(&value) {
                return Err(HudError::invalid(format!(
                    "threshold {name} must be within [0, 100], got {value}"
                )));
            }
        }
        if self.critical >= self.warning {
            log::warn!(
                "thresholds not monotonic: critical={} >= warning={}",
                self.critical,
                self.warning
            );
        }
        Ok(())
    }
}

/// Flags that force a category regardless of the numeric reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdOverrides {
    pub critical: bool,
    pub warning: bool,
}

/// Raw value range of a gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeRange {
    pub min: f64,
    pub max: f64,
}

impl Default for GaugeRange {
    fn default() -> Self {
        Self {
            min: PERCENT_MIN,
            max: PERCENT_MAX,
        }
    }
}

impl GaugeRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> HudResult<()> {
        ensure_finite("range min", self.min)?;
        ensure_finite("range max", self.max)?;
        if self.min >= self.max {
            return Err(HudError::invalid(format!(
                "range min ({}) must be below max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Position of `value` within the range, as a percentage clamped to [0, 100].
    pub fn percent(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        ((value - self.min) / span * PERCENT_MAX).clamp(PERCENT_MIN, PERCENT_MAX)
    }
}

/// A radar contact supplied by the caller each frame.
///
/// Position is normalized to the scope: both axes in [-1, 1], origin at center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarContact {
    pub id: String,
    pub position: DVec2,
    #[serde(default)]
    pub classification: ContactClassification,
    /// Return strength in [0, 1].
    #[serde(default)]
    pub strength: Option<f64>,
}

impl RadarContact {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            position: DVec2::new(x, y),
            classification: ContactClassification::default(),
            strength: None,
        }
    }

    pub fn with_classification(mut self, classification: ContactClassification) -> Self {
        self.classification = classification;
        self
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn validate(&self) -> HudResult<()> {
        for (axis, value) in [("x", self.position.x), ("y", self.position.y)] {
            ensure_finite(axis, value)?;
            if !(-1.0..=1.0).contains(&value) {
                return Err(HudError::invalid(format!(
                    "contact {} {axis} must be within [-1, 1], got {value}",
                    self.id
                )));
            }
        }
        if let Some(strength) = self.strength {
            ensure_finite("strength", strength)?;
            if !(0.0..=1.0).contains(&strength) {
                return Err(HudError::invalid(format!(
                    "contact {} strength must be within [0, 1], got {strength}",
                    self.id
                )));
            }
        }
        Ok(())
    }

    /// Bearing from scope center in degrees, counter-clockwise from +x, in [0, 360).
    pub fn bearing_deg(&self) -> f64 {
        let bearing = self.position.y.atan2(self.position.x).to_degrees();
        normalize_degrees(bearing)
    }
}

/// Wrap an angle into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_CIRCLE_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_CIRCLE_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Shortest angular distance between two bearings (degrees, in [0, 180]).
pub fn circular_distance_deg(a: f64, b: f64) -> f64 {
    let diff = (normalize_degrees(a) - normalize_degrees(b)).abs();
    diff.min(FULL_CIRCLE_DEG - diff)
}

/// A button attached to a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    pub id: String,
    pub label: String,
}

impl NotificationAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A notification as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    /// Caller-assigned, unique within one collection.
    pub id: String,
    #[serde(default)]
    pub category: NotificationCategory,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub source: Option<String>,
    /// Higher is more urgent.
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub created_at_ms: u64,
    /// `None` takes the configured default, `0` is persistent, negative
    /// values degrade to persistent.
    #[serde(default)]
    pub duration_ms: Option<i64>,
    /// `None` takes the configured default.
    #[serde(default)]
    pub pause_on_hover: Option<bool>,
    #[serde(default)]
    pub actions: Vec<NotificationAction>,
}

impl NotificationRecord {
    pub fn new(id: impl Into<String>, category: NotificationCategory) -> Self {
        Self {
            id: id.into(),
            category,
            title: String::new(),
            message: String::new(),
            source: None,
            priority: DEFAULT_NOTIFICATION_PRIORITY,
            created_at_ms: 0,
            duration_ms: None,
            pause_on_hover: None,
            actions: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn created_at(mut self, created_at_ms: u64) -> Self {
        self.created_at_ms = created_at_ms;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn persistent(self) -> Self {
        self.with_duration_ms(0)
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = Some(pause_on_hover);
        self
    }

    pub fn with_action(mut self, action: NotificationAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Auto-dismiss duration after applying defaults; `0` means persistent.
    pub fn effective_duration_ms(&self, default_ms: i64) -> u64 {
        let duration = self.duration_ms.unwrap_or(default_ms);
        u64::try_from(duration).unwrap_or(0)
    }

    pub fn effective_pause_on_hover(&self, default: bool) -> bool {
        self.pause_on_hover.unwrap_or(default)
    }
}
