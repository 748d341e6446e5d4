//! Engine constants and tuning defaults.

/// Render frame rate driven by the host loop (Hz).
pub const FRAME_RATE: u32 = 60;

/// Milliseconds per frame at the nominal frame rate.
pub const FRAME_INTERVAL_MS: u64 = 1000 / FRAME_RATE as u64;

// --- Value animation ---

/// Default interpolation duration for gauge values (ms).
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 300;

// --- Thresholds (percent of gauge range) ---

/// At or below this percentage a gauge reads critical.
pub const DEFAULT_CRITICAL_PERCENT: f64 = 15.0;

/// At or below this percentage a gauge reads warning.
pub const DEFAULT_WARNING_PERCENT: f64 = 30.0;

/// At or above this percentage a gauge reads optimal.
pub const DEFAULT_OPTIMAL_PERCENT: f64 = 80.0;

/// Lower bound of a threshold breakpoint.
pub const PERCENT_MIN: f64 = 0.0;

/// Upper bound of a threshold breakpoint.
pub const PERCENT_MAX: f64 = 100.0;

// --- Radar ---

/// Half-width of the beam's detection window (degrees).
pub const DEFAULT_BEAM_HALF_WIDTH_DEG: f64 = 10.0;

/// Beam rotation rate (degrees per second), one rotation every 4 seconds.
pub const DEFAULT_SWEEP_RATE_DEG_PER_SEC: f64 = 90.0;

/// Degrees in a full rotation.
pub const FULL_CIRCLE_DEG: f64 = 360.0;

// --- Notifications ---

/// Maximum number of simultaneously visible notifications.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Auto-dismiss duration for notifications that do not specify one (ms).
pub const DEFAULT_NOTIFICATION_DURATION_MS: i64 = 5000;

/// Interval between scheduler heartbeats (ms).
pub const DEFAULT_HEARTBEAT_INTERVAL_MS: u64 = 100;

/// Default notification priority.
pub const DEFAULT_NOTIFICATION_PRIORITY: i32 = 0;
