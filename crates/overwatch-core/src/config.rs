//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Easing;
use crate::error::{ensure_finite, HudError, HudResult};
use crate::types::Thresholds;

/// Top-level configuration for a `HudEngine`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub animation: AnimationConfig,
    pub thresholds: Thresholds,
    pub radar: RadarConfig,
    pub notifications: NotificationConfig,
}

/// Defaults for gauge value animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Signed so a negative value can be rejected rather than wrap.
    pub duration_ms: i64,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_ANIMATION_DURATION_MS as i64,
            easing: Easing::default(),
        }
    }
}

/// Defaults for radar scopes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    pub half_width_deg: f64,
    pub sweep_rate_deg_per_sec: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            half_width_deg: DEFAULT_BEAM_HALF_WIDTH_DEG,
            sweep_rate_deg_per_sec: DEFAULT_SWEEP_RATE_DEG_PER_SEC,
        }
    }
}

/// Notification scheduler settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub max_visible: usize,
    pub default_duration_ms: i64,
    pub pause_on_hover: bool,
    pub heartbeat_interval_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_VISIBLE,
            default_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            pause_on_hover: true,
            heartbeat_interval_ms: DEFAULT_HEARTBEAT_INTERVAL_MS,
        }
    }
}

impl NotificationConfig {
    pub fn validate(&self) -> HudResult<()> {
        if self.max_visible == 0 {
            return Err(HudError::invalid("max_visible must be at least 1"));
        }
        if self.heartbeat_interval_ms == 0 {
            return Err(HudError::invalid("heartbeat_interval_ms must be positive"));
        }
        Ok(())
    }
}

impl RadarConfig {
    pub fn validate(&self) -> HudResult<()> {
        ensure_finite("half_width_deg", self.half_width_deg)?;
        ensure_finite("sweep_rate_deg_per_sec", self.sweep_rate_deg_per_sec)?;
        if !(0.0..=180.0).contains(&self.half_width_deg) {
            return Err(HudError::invalid(format!(
                "half_width_deg must be within [0, 180], got {}",
                self.half_width_deg
            )));
        }
        if self.sweep_rate_deg_per_sec <= 0.0 {
            return Err(HudError::invalid(format!(
                "sweep_rate_deg_per_sec must be positive, got {}",
                self.sweep_rate_deg_per_sec
            )));
        }
        Ok(())
    }
}

impl HudConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> HudResult<Self> {
        let config: HudConfig =
            serde_json::from_str(json).map_err(|e| HudError::ConfigLoad(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> HudResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| HudError::ConfigLoad(format!("{}: {e}", path.display())))?;
        let config = Self::from_json_str(&json)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> HudResult<()> {
        if self.animation.duration_ms < 0 {
            return Err(HudError::invalid(format!(
                "animation duration_ms must be >= 0, got {}",
                self.animation.duration_ms
            )));
        }
        self.thresholds.validate()?;
        self.radar.validate()?;
        self.notifications.validate()
    }
}
