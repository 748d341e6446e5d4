//! Error taxonomy shared by every crate.

/// Errors surfaced synchronously to the caller that introduced them.
///
/// A rejected call leaves all prior state unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HudError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unknown widget: {0}")]
    UnknownWidget(String),
    #[error("widget already mounted: {0}")]
    DuplicateWidget(String),
    #[error("failed to load config: {0}")]
    ConfigLoad(String),
}

pub type HudResult<T> = Result<T, HudError>;

impl HudError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Reject NaN and infinite scalars.
pub fn ensure_finite(name: &str, value: f64) -> HudResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HudError::invalid(format!("{name} must be finite, got {value}")))
    }
}

/// Reject negative durations and convert to unsigned milliseconds.
pub fn ensure_duration(name: &str, duration_ms: i64) -> HudResult<u64> {
    u64::try_from(duration_ms)
        .map_err(|_| HudError::invalid(format!("{name} must be >= 0, got {duration_ms}")))
}
