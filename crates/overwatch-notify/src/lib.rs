//! Notification scheduling for OVERWATCH.
//!
//! Derives a stable priority order over the caller's notification
//! collection, keeps a bounded visible set with an overflow queue, and
//! owns one pausable auto-dismiss timer per visible notification.

pub mod scheduler;
pub mod timer;

pub use overwatch_core as core;
pub use scheduler::NotificationScheduler;
pub use timer::VisibleTimer;
