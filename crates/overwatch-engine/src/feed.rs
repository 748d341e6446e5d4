//! Demo telemetry feed: a seeded generator of HUD commands.
//!
//! Produces random-walk gauge readings, drifting radar contacts and the
//! occasional notification. Same seed = same command stream.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use overwatch_core::commands::HudCommand;
use overwatch_core::enums::*;
use overwatch_core::events::HudEvent;
use overwatch_core::types::{GaugeRange, NotificationAction, NotificationRecord, RadarContact};

/// Milliseconds between feed readings.
pub const READING_INTERVAL_MS: u64 = 250;
/// Chance of raising a notification on each reading.
pub const NOTIFICATION_CHANCE: f64 = 0.15;
/// Widget id of the demo radar scope.
pub const RADAR_WIDGET_ID: &str = "scope";

const CONTACT_COUNT: usize = 6;
/// Max contact drift (scope radii per second).
const MAX_DRIFT: f64 = 0.05;

/// One random-walk gauge.
#[derive(Debug, Clone)]
struct FeedGauge {
    widget_id: &'static str,
    kind: WidgetKind,
    range: GaugeRange,
    value: f64,
    /// Max step per reading, in raw units.
    volatility: f64,
}

/// One drifting contact.
#[derive(Debug, Clone)]
struct FeedContact {
    id: String,
    position: DVec2,
    velocity: DVec2,
    classification: ContactClassification,
}

/// Seeded command source for demos and soak tests.
pub struct TelemetryFeed {
    rng: ChaCha8Rng,
    gauges: Vec<FeedGauge>,
    contacts: Vec<FeedContact>,
    notifications: Vec<NotificationRecord>,
    notifications_dirty: bool,
    next_notification: u64,
    next_reading_ms: u64,
}

impl TelemetryFeed {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let gauges = vec![
            FeedGauge {
                widget_id: "hull",
                kind: WidgetKind::MetricGauge,
                range: GaugeRange::new(0.0, 100.0),
                value: 100.0,
                volatility: 6.0,
            },
            FeedGauge {
                widget_id: "shields",
                kind: WidgetKind::MetricGauge,
                range: GaugeRange::new(0.0, 1000.0),
                value: 800.0,
                volatility: 80.0,
            },
            FeedGauge {
                widget_id: "power",
                kind: WidgetKind::ProgressBar,
                range: GaugeRange::new(0.0, 100.0),
                value: 60.0,
                volatility: 4.0,
            },
        ];
        let contacts = (0..CONTACT_COUNT)
            .map(|i| random_contact(&mut rng, i))
            .collect();

        Self {
            rng,
            gauges,
            contacts,
            notifications: Vec::new(),
            notifications_dirty: false,
            next_notification: 0,
            next_reading_ms: 0,
        }
    }

    /// Commands that mount every demo widget with its starting state.
    pub fn mount_commands(&self) -> Vec<HudCommand> {
        let mut commands: Vec<HudCommand> = self
            .gauges
            .iter()
            .map(|gauge| HudCommand::MountGauge {
                widget_id: gauge.widget_id.to_string(),
                kind: gauge.kind,
                initial: gauge.value,
                range: gauge.range,
                thresholds: None,
                duration_ms: None,
                easing: None,
            })
            .collect();
        commands.push(HudCommand::MountRadar {
            widget_id: RADAR_WIDGET_ID.to_string(),
            sweep_rate_deg_per_sec: None,
        });
        commands.push(self.contacts_command());
        commands
    }

    /// Commands due at `now_ms`. Empty between readings.
    pub fn poll(&mut self, now_ms: u64) -> Vec<HudCommand> {
        if now_ms < self.next_reading_ms {
            return Vec::new();
        }
        self.next_reading_ms = now_ms + READING_INTERVAL_MS;
        let dt_sec = READING_INTERVAL_MS as f64 / 1000.0;

        let mut commands = Vec::new();
        for gauge in &mut self.gauges {
            let step = self.rng.gen_range(-gauge.volatility..=gauge.volatility);
            gauge.value = (gauge.value + step).clamp(gauge.range.min, gauge.range.max);
            commands.push(HudCommand::SetValue {
                widget_id: gauge.widget_id.to_string(),
                value: gauge.value,
            });
        }

        for contact in &mut self.contacts {
            contact.position += contact.velocity * dt_sec;
            bounce(&mut contact.position.x, &mut contact.velocity.x);
            bounce(&mut contact.position.y, &mut contact.velocity.y);
        }
        commands.push(self.contacts_command());

        if self.rng.gen_bool(NOTIFICATION_CHANCE) {
            let record = self.random_notification(now_ms);
            log::debug!("feed raised notification {}", record.id);
            self.notifications.push(record);
            self.notifications_dirty = true;
        }
        if self.notifications_dirty {
            self.notifications_dirty = false;
            commands.push(HudCommand::SetNotifications {
                records: self.notifications.clone(),
            });
        }
        commands
    }

    /// Drop notifications the engine removed, so their ids are released.
    pub fn acknowledge(&mut self, events: &[HudEvent]) {
        for event in events {
            if let HudEvent::NotificationRemoved { id, .. } = event {
                let before = self.notifications.len();
                self.notifications.retain(|record| &record.id != id);
                self.notifications_dirty |= self.notifications.len() != before;
            }
        }
    }

    /// Notifications the feed still considers live.
    pub fn notifications(&self) -> &[NotificationRecord] {
        &self.notifications
    }

    fn contacts_command(&self) -> HudCommand {
        HudCommand::SetContacts {
            widget_id: RADAR_WIDGET_ID.to_string(),
            contacts: self
                .contacts
                .iter()
                .map(|c| {
                    RadarContact::new(c.id.clone(), c.position.x, c.position.y)
                        .with_classification(c.classification)
                })
                .collect(),
        }
    }

    fn random_notification(&mut self, now_ms: u64) -> NotificationRecord {
        const CATEGORIES: [NotificationCategory; 8] = [
            NotificationCategory::Info,
            NotificationCategory::Success,
            NotificationCategory::Warning,
            NotificationCategory::Error,
            NotificationCategory::Critical,
            NotificationCategory::System,
            NotificationCategory::Combat,
            NotificationCategory::Objective,
        ];
        let id = format!("feed-{}", self.next_notification);
        self.next_notification += 1;
        let category = CATEGORIES[self.rng.gen_range(0..CATEGORIES.len())];

        let mut record = NotificationRecord::new(id, category)
            .with_title(format!("{category:?}"))
            .with_message("telemetry event")
            .with_source("feed")
            .with_priority(self.rng.gen_range(0..=5))
            .created_at(now_ms);
        match self.rng.gen_range(0..4) {
            0 => {
                record = record
                    .persistent()
                    .with_action(NotificationAction::new("ack", "Acknowledge"))
            }
            1 => record = record.with_duration_ms(3000),
            _ => {}
        }
        record
    }
}

fn random_contact(rng: &mut ChaCha8Rng, index: usize) -> FeedContact {
    const CLASSES: [ContactClassification; 5] = [
        ContactClassification::Friendly,
        ContactClassification::Hostile,
        ContactClassification::Neutral,
        ContactClassification::Unknown,
        ContactClassification::Objective,
    ];
    FeedContact {
        id: format!("contact-{index}"),
        position: DVec2::new(rng.gen_range(-0.9..0.9), rng.gen_range(-0.9..0.9)),
        velocity: DVec2::new(
            rng.gen_range(-MAX_DRIFT..MAX_DRIFT),
            rng.gen_range(-MAX_DRIFT..MAX_DRIFT),
        ),
        classification: CLASSES[rng.gen_range(0..CLASSES.len())],
    }
}

/// Reflect a coordinate off the scope edge at +/-1.
fn bounce(position: &mut f64, velocity: &mut f64) {
    if *position > 1.0 {
        *position = 2.0 - *position;
        *velocity = -*velocity;
    } else if *position < -1.0 {
        *position = -2.0 - *position;
        *velocity = -*velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_reflects_at_edges() {
        let (mut p, mut v) = (1.2, 0.5);
        bounce(&mut p, &mut v);
        assert!((p - 0.8).abs() < 1e-12);
        assert_eq!(v, -0.5);

        let (mut p, mut v) = (-1.1, -0.5);
        bounce(&mut p, &mut v);
        assert!((p + 0.9).abs() < 1e-12);
        assert_eq!(v, 0.5);
    }

    #[test]
    fn same_seed_same_commands() {
        let mut a = TelemetryFeed::new(7);
        let mut b = TelemetryFeed::new(7);
        for step in 0..40 {
            let now = step * READING_INTERVAL_MS;
            let ja = serde_json::to_string(&a.poll(now)).unwrap();
            let jb = serde_json::to_string(&b.poll(now)).unwrap();
            assert_eq!(ja, jb, "feeds diverged at step {step}");
        }
    }

    #[test]
    fn poll_is_empty_between_readings() {
        let mut feed = TelemetryFeed::new(1);
        assert!(!feed.poll(0).is_empty());
        assert!(feed.poll(READING_INTERVAL_MS - 1).is_empty());
        assert!(!feed.poll(READING_INTERVAL_MS).is_empty());
    }

    #[test]
    fn contacts_stay_on_scope() {
        let mut feed = TelemetryFeed::new(3);
        for step in 0..2000 {
            feed.poll(step * READING_INTERVAL_MS);
        }
        for contact in &feed.contacts {
            assert!(contact.position.x.abs() <= 1.0 && contact.position.y.abs() <= 1.0);
        }
    }

    #[test]
    fn acknowledge_releases_removed_ids() {
        let mut feed = TelemetryFeed::new(11);
        let mut now = 0;
        while feed.notifications().is_empty() {
            feed.poll(now);
            now += READING_INTERVAL_MS;
        }
        let id = feed.notifications()[0].id.clone();
        feed.acknowledge(&[HudEvent::NotificationRemoved {
            id: id.clone(),
            reason: RemovalReason::Manual,
        }]);
        assert!(feed.notifications().iter().all(|r| r.id != id));
        let commands = feed.poll(now);
        assert!(commands
            .iter()
            .any(|c| matches!(c, HudCommand::SetNotifications { .. })));
    }
}
