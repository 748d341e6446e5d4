//! Value animator: eased interpolation of a displayed scalar toward a target.
//!
//! The animator is polled with `tick(now_ms)` once per frame while
//! `is_animating()` is true. A new target restarts the run from whatever
//! `current` is at that instant, so the displayed value never jumps.

use overwatch_core::enums::Easing;
use overwatch_core::error::{ensure_duration, ensure_finite, HudResult};

use crate::easing;

#[derive(Debug, Clone)]
pub struct ValueAnimator {
    current: f64,
    target: f64,
    start_value: f64,
    start_ms: u64,
    duration_ms: u64,
    easing: Easing,
    /// Eased-time fraction reached by the latest tick.
    fraction: f64,
    running: bool,
}

impl ValueAnimator {
    /// Create an animator resting at `initial`.
    pub fn new(initial: f64, duration_ms: i64, easing: Easing) -> HudResult<Self> {
        let initial = ensure_finite("initial value", initial)?;
        let duration_ms = ensure_duration("duration_ms", duration_ms)?;
        Ok(Self {
            current: initial,
            target: initial,
            start_value: initial,
            start_ms: 0,
            duration_ms,
            easing,
            fraction: 1.0,
            running: false,
        })
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Whether the animator still needs frames.
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Linear time fraction of the current run, 1.0 once settled.
    pub fn progress(&self) -> f64 {
        self.fraction
    }

    /// Start a run toward `target`.
    ///
    /// Returns `false` when `target` equals the current target (no restart).
    /// Non-finite targets are rejected and leave state unchanged.
    /// A run in flight is sampled at `now_ms` first, so the new run starts
    /// from the displayed value even if no tick happened since.
    pub fn set_target(&mut self, target: f64, now_ms: u64) -> HudResult<bool> {
        let target = ensure_finite("target", target)?;
        if target == self.target {
            return Ok(false);
        }
        if self.running {
            self.sample(now_ms);
        }
        self.start_value = self.current;
        self.target = target;
        self.start_ms = now_ms;
        self.fraction = 0.0;
        self.running = true;
        Ok(true)
    }

    /// Advance the run. Returns the target exactly once, on the tick that settles.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        if !self.running {
            return None;
        }
        if self.sample(now_ms) >= 1.0 {
            self.running = false;
            return Some(self.target);
        }
        None
    }

    /// Move `current` to its eased position at `now_ms` and return the
    /// linear fraction.
    fn sample(&mut self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let fraction = if self.duration_ms == 0 {
            1.0
        } else {
            (elapsed as f64 / self.duration_ms as f64).min(1.0)
        };
        self.fraction = fraction;
        self.current = if fraction >= 1.0 {
            self.target
        } else {
            let eased = easing::apply(self.easing, fraction);
            self.start_value + (self.target - self.start_value) * eased
        };
        fraction
    }

    /// Stop the run where it is. No settle is reported for a cancelled run.
    pub fn cancel(&mut self) {
        if self.running {
            self.running = false;
            self.target = self.current;
            self.fraction = 1.0;
        }
    }

    /// Set value and target immediately without animating.
    ///
    /// Returns the value when it differs from the previous target, so the
    /// caller can report it as settled.
    pub fn jump_to(&mut self, value: f64) -> HudResult<Option<f64>> {
        let value = ensure_finite("value", value)?;
        let changed = value != self.target || self.running;
        self.current = value;
        self.target = value;
        self.start_value = value;
        self.fraction = 1.0;
        self.running = false;
        Ok(changed.then_some(value))
    }

    /// Takes effect immediately, including for an active run.
    pub fn set_duration(&mut self, duration_ms: i64) -> HudResult<()> {
        self.duration_ms = ensure_duration("duration_ms", duration_ms)?;
        Ok(())
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }
}
