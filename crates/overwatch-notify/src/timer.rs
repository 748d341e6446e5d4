//! Pausable countdown owned by one visible notification.

/// Auto-dismiss countdown. Advanced by the scheduler heartbeat.
///
/// Pausing freezes `remaining_ms`; resuming continues from the frozen value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleTimer {
    duration_ms: u64,
    remaining_ms: u64,
    running: bool,
    last_tick_ms: u64,
}

impl VisibleTimer {
    /// Start a running countdown at `now_ms`.
    pub fn start(duration_ms: u64, now_ms: u64) -> Self {
        Self {
            duration_ms,
            remaining_ms: duration_ms,
            running: true,
            last_tick_ms: now_ms,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_ms == 0
    }

    /// Count down to `now_ms`. Returns true once the timer has run out.
    ///
    /// A timer that ran out while being paused still reports expiry.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.running {
            self.consume(now_ms);
        }
        self.is_expired()
    }

    /// Freeze the countdown, keeping the time elapsed since the last tick.
    pub fn pause(&mut self, now_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        self.consume(now_ms);
        self.running = false;
        true
    }

    /// Continue from the frozen remaining time.
    pub fn resume(&mut self, now_ms: u64) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.last_tick_ms = now_ms;
        true
    }

    fn consume(&mut self, now_ms: u64) {
        let elapsed = now_ms.saturating_sub(self.last_tick_ms);
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed);
        self.last_tick_ms = self.last_tick_ms.max(now_ms);
    }
}
