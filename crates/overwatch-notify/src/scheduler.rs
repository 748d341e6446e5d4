//! Notification scheduler.
//!
//! Each record is in exactly one of visible, queued or removed. A shown
//! notification never goes back to the queue: it stays visible until it is
//! dismissed, expires, is displaced by a higher-priority record, or the
//! caller withdraws it.
//!
//! Every mutating call returns the events it produced, in order.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use overwatch_core::config::NotificationConfig;
use overwatch_core::enums::{NotificationStatus, RemovalReason};
use overwatch_core::error::HudResult;
use overwatch_core::events::HudEvent;
use overwatch_core::state::{NotificationView, NotificationsView};
use overwatch_core::types::NotificationRecord;

use crate::timer::VisibleTimer;

#[derive(Debug, Clone)]
pub struct NotificationScheduler {
    config: NotificationConfig,
    /// Latest caller collection, keyed by id.
    records: HashMap<String, NotificationRecord>,
    /// Display order.
    visible: Vec<String>,
    /// Promotion order.
    queued: Vec<String>,
    timers: HashMap<String, VisibleTimer>,
    /// Removed ids still present in the caller's collection.
    dismissed: HashSet<String>,
}

/// Priority descending, then newest first, then id for a total order.
fn display_order(a: &NotificationRecord, b: &NotificationRecord) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| b.created_at_ms.cmp(&a.created_at_ms))
        .then_with(|| a.id.cmp(&b.id))
}

impl NotificationScheduler {
    pub fn new(config: NotificationConfig) -> HudResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            records: HashMap::new(),
            visible: Vec::new(),
            queued: Vec::new(),
            timers: HashMap::new(),
            dismissed: HashSet::new(),
        })
    }

    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    pub fn visible_ids(&self) -> &[String] {
        &self.visible
    }

    pub fn queued_ids(&self) -> &[String] {
        &self.queued
    }

    pub fn status(&self, id: &str) -> NotificationStatus {
        if self.is_visible(id) {
            NotificationStatus::Visible
        } else if self.is_queued(id) {
            NotificationStatus::Queued
        } else {
            NotificationStatus::Removed
        }
    }

    /// Remaining auto-dismiss time; `None` for persistent or untracked ids.
    pub fn remaining_ms(&self, id: &str) -> Option<u64> {
        self.timers.get(id).map(VisibleTimer::remaining_ms)
    }

    pub fn is_paused(&self, id: &str) -> bool {
        self.timers.get(id).is_some_and(|timer| !timer.is_running())
    }

    /// Number of running countdowns.
    pub fn active_timer_count(&self) -> usize {
        self.timers.values().filter(|timer| timer.is_running()).count()
    }

    /// Replace the caller's collection and re-run selection.
    ///
    /// Calling this twice with the same input produces no events the second time.
    pub fn reconcile(&mut self, records: &[NotificationRecord], now_ms: u64) -> Vec<HudEvent> {
        let mut incoming: HashMap<String, NotificationRecord> =
            HashMap::with_capacity(records.len());
        for record in records {
            if incoming.contains_key(&record.id) {
                log::warn!("duplicate notification id {}, keeping the first", record.id);
                continue;
            }
            incoming.insert(record.id.clone(), record.clone());
        }
        // Ids dropped by the caller may be reused later.
        self.dismissed.retain(|id| incoming.contains_key(id));
        self.records = incoming;

        let mut events = Vec::new();
        self.select(now_ms, &mut events);
        events
    }

    /// Advance every visible countdown to `now_ms`.
    ///
    /// All expirations in this heartbeat are removed before the visible set
    /// is refilled from the queue.
    pub fn heartbeat(&mut self, now_ms: u64) -> Vec<HudEvent> {
        let mut expired = Vec::new();
        for id in &self.visible {
            if let Some(timer) = self.timers.get_mut(id) {
                if timer.tick(now_ms) {
                    expired.push(id.clone());
                }
            }
        }

        let mut events = Vec::new();
        if expired.is_empty() {
            return events;
        }
        for id in &expired {
            log::debug!("notification {id} expired");
            self.remove(id, RemovalReason::Expired, &mut events);
        }
        self.select(now_ms, &mut events);
        events
    }

    /// Close a visible or queued notification. Unknown ids are a no-op.
    ///
    /// Only a visible notification reports `NotificationRemoved`. A queued
    /// one was never added, so its dismissal shows up as `QueueChanged`.
    pub fn dismiss(&mut self, id: &str, now_ms: u64) -> Vec<HudEvent> {
        self.dismiss_with(id, RemovalReason::Manual, now_ms)
    }

    /// Invoke one of a visible notification's actions, then dismiss it.
    pub fn invoke_action(&mut self, id: &str, action_id: &str, now_ms: u64) -> Vec<HudEvent> {
        let has_action = self.is_visible(id)
            && self
                .records
                .get(id)
                .is_some_and(|record| record.actions.iter().any(|a| a.id == action_id));
        if !has_action {
            log::debug!("ignoring action {action_id} on notification {id}");
            return Vec::new();
        }

        let mut events = vec![HudEvent::ActionInvoked {
            id: id.to_string(),
            action_id: action_id.to_string(),
        }];
        events.extend(self.dismiss_with(id, RemovalReason::Action, now_ms));
        events
    }

    /// Freeze a visible notification's countdown, if it allows pause-on-hover.
    pub fn pause(&mut self, id: &str, now_ms: u64) -> bool {
        let allowed = self
            .records
            .get(id)
            .is_some_and(|record| record.effective_pause_on_hover(self.config.pause_on_hover));
        if !allowed || !self.is_visible(id) {
            return false;
        }
        self.timers
            .get_mut(id)
            .is_some_and(|timer| timer.pause(now_ms))
    }

    /// Continue a paused countdown from its frozen remaining time.
    pub fn resume(&mut self, id: &str, now_ms: u64) -> bool {
        self.timers
            .get_mut(id)
            .is_some_and(|timer| timer.resume(now_ms))
    }

    /// Pause every visible countdown that allows it. Returns how many paused.
    pub fn pause_all(&mut self, now_ms: u64) -> usize {
        let ids = self.visible.clone();
        ids.iter().filter(|id| self.pause(id, now_ms)).count()
    }

    pub fn resume_all(&mut self, now_ms: u64) -> usize {
        let ids = self.visible.clone();
        ids.iter().filter(|id| self.resume(id, now_ms)).count()
    }

    /// Change capacity and re-run selection.
    pub fn set_max_visible(&mut self, max_visible: usize, now_ms: u64) -> HudResult<Vec<HudEvent>> {
        let config = NotificationConfig {
            max_visible,
            ..self.config
        };
        config.validate()?;
        self.config = config;
        let mut events = Vec::new();
        self.select(now_ms, &mut events);
        Ok(events)
    }

    /// Presentation state for the snapshot.
    pub fn view(&self) -> NotificationsView {
        let visible = self
            .visible
            .iter()
            .filter_map(|id| {
                let record = self.records.get(id)?;
                let timer = self.timers.get(id);
                Some(NotificationView {
                    record: record.clone(),
                    remaining_ms: timer.map(VisibleTimer::remaining_ms),
                    paused: timer.is_some_and(|t| !t.is_running()),
                })
            })
            .collect();
        NotificationsView {
            visible,
            queued: self.queued.clone(),
        }
    }

    fn is_visible(&self, id: &str) -> bool {
        self.visible.iter().any(|v| v == id)
    }

    fn is_queued(&self, id: &str) -> bool {
        self.queued.iter().any(|q| q == id)
    }

    fn dismiss_with(&mut self, id: &str, reason: RemovalReason, now_ms: u64) -> Vec<HudEvent> {
        let mut events = Vec::new();
        if self.is_visible(id) {
            self.remove(id, reason, &mut events);
        } else if self.is_queued(id) {
            log::info!("queued notification {id} dismissed ({reason:?})");
            self.dismissed.insert(id.to_string());
        } else {
            log::debug!("notification {id} already removed");
            return events;
        }
        self.select(now_ms, &mut events);
        events
    }

    /// Take `id` out of the visible set, cancelling its timer.
    fn remove(&mut self, id: &str, reason: RemovalReason, events: &mut Vec<HudEvent>) {
        self.visible.retain(|v| v != id);
        self.timers.remove(id);
        if self.records.contains_key(id) {
            self.dismissed.insert(id.to_string());
        }
        log::info!("notification {id} removed ({reason:?})");
        events.push(HudEvent::NotificationRemoved {
            id: id.to_string(),
            reason,
        });
    }

    /// Partition live records into visible and queued, then diff against
    /// the previous visible set.
    fn select(&mut self, now_ms: u64, events: &mut Vec<HudEvent>) {
        let mut candidates: Vec<&NotificationRecord> = self
            .records
            .values()
            .filter(|record| !self.dismissed.contains(&record.id))
            .collect();
        candidates.sort_by(|a, b| display_order(a, b));

        let split = candidates.len().min(self.config.max_visible);
        let next_visible: Vec<String> = candidates[..split].iter().map(|r| r.id.clone()).collect();
        let mut next_queued: Vec<String> =
            candidates[split..].iter().map(|r| r.id.clone()).collect();

        let leaving: Vec<String> = self
            .visible
            .iter()
            .filter(|id| !next_visible.contains(id))
            .cloned()
            .collect();
        for id in &leaving {
            let reason = if self.records.contains_key(id) {
                RemovalReason::Displaced
            } else {
                RemovalReason::Withdrawn
            };
            self.remove(id, reason, events);
            next_queued.retain(|q| q != id);
        }

        for id in &next_visible {
            if self.visible.contains(id) {
                continue;
            }
            let Some(record) = self.records.get(id) else {
                continue;
            };
            if record.duration_ms.is_some_and(|d| d < 0) {
                log::warn!(
                    "notification {id} has negative duration {:?}, keeping it persistent",
                    record.duration_ms
                );
            }
            let duration_ms = record.effective_duration_ms(self.config.default_duration_ms);
            if duration_ms > 0 {
                self.timers
                    .insert(id.clone(), VisibleTimer::start(duration_ms, now_ms));
            }
            log::info!("notification {id} shown (priority {})", record.priority);
            events.push(HudEvent::NotificationAdded {
                record: record.clone(),
            });
        }
        self.visible = next_visible;

        if next_queued != self.queued {
            events.push(HudEvent::QueueChanged {
                queued: next_queued.clone(),
            });
            self.queued = next_queued;
        }
    }
}
