//! Threshold classification with edge-triggered crossing events.
//!
//! `classify` is a pure function of (value, thresholds, overrides).
//! `ThresholdMonitor` remembers the previous category and reports a
//! crossing only on the evaluation where the category changes.

use overwatch_core::enums::StatusCategory;
use overwatch_core::error::{ensure_finite, HudResult};
use overwatch_core::types::{ThresholdOverrides, Thresholds};

/// Classify a percentage reading.
///
/// Order is fixed: critical, then warning, then optimal, else normal.
/// Breakpoints are inclusive.
pub fn classify(
    value: f64,
    thresholds: &Thresholds,
    overrides: ThresholdOverrides,
) -> StatusCategory {
    if overrides.critical || value <= thresholds.critical {
        StatusCategory::Critical
    } else if overrides.warning || value <= thresholds.warning {
        StatusCategory::Warning
    } else if value >= thresholds.optimal {
        StatusCategory::Optimal
    } else {
        StatusCategory::Normal
    }
}

/// A change of category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdCrossing {
    pub previous: StatusCategory,
    pub category: StatusCategory,
    pub value: f64,
}

/// Stateful classifier for one gauge.
#[derive(Debug, Clone)]
pub struct ThresholdMonitor {
    thresholds: Thresholds,
    overrides: ThresholdOverrides,
    /// Starts as `Normal`, so a first reading in any other band reports a crossing.
    category: StatusCategory,
    last_value: Option<f64>,
}

impl ThresholdMonitor {
    pub fn new(thresholds: Thresholds) -> HudResult<Self> {
        thresholds.validate()?;
        Ok(Self {
            thresholds,
            overrides: ThresholdOverrides::default(),
            category: StatusCategory::Normal,
            last_value: None,
        })
    }

    pub fn category(&self) -> StatusCategory {
        self.category
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn overrides(&self) -> ThresholdOverrides {
        self.overrides
    }

    /// Classify `value` and report a crossing if the category changed.
    pub fn evaluate(&mut self, value: f64) -> HudResult<Option<ThresholdCrossing>> {
        let value = ensure_finite("value", value)?;
        self.last_value = Some(value);
        Ok(self.update(value))
    }

    /// Replace the breakpoints and re-evaluate the last reading against them.
    pub fn set_thresholds(&mut self, thresholds: Thresholds) -> HudResult<Option<ThresholdCrossing>> {
        thresholds.validate()?;
        self.thresholds = thresholds;
        Ok(self.last_value.and_then(|value| self.update(value)))
    }

    /// Replace the overrides and re-evaluate the last reading.
    pub fn set_overrides(&mut self, overrides: ThresholdOverrides) -> Option<ThresholdCrossing> {
        self.overrides = overrides;
        self.last_value.and_then(|value| self.update(value))
    }

    fn update(&mut self, value: f64) -> Option<ThresholdCrossing> {
        let category = classify(value, &self.thresholds, self.overrides);
        if category == self.category {
            return None;
        }
        let previous = std::mem::replace(&mut self.category, category);
        log::debug!("threshold crossed {previous:?} -> {category:?} at {value}");
        Some(ThresholdCrossing {
            previous,
            category,
            value,
        })
    }
}
