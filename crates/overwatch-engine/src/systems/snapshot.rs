//! Snapshot system: queries the ECS world and builds a complete HudSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use overwatch_core::components::*;
use overwatch_core::events::HudEvent;
use overwatch_core::state::*;
use overwatch_core::types::HudClock;
use overwatch_notify::NotificationScheduler;
use overwatch_telemetry::{SweepDetector, ThresholdMonitor, ValueAnimator};

/// Build a complete HudSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    clock: &HudClock,
    scheduler: &NotificationScheduler,
    events: Vec<HudEvent>,
    rejections: Vec<String>,
) -> HudSnapshot {
    HudSnapshot {
        clock: *clock,
        gauges: build_gauges(world),
        radars: build_radars(world, clock.now_ms),
        notifications: scheduler.view(),
        events,
        rejections,
    }
}

/// Build GaugeView list in mount order.
fn build_gauges(world: &World) -> Vec<GaugeView> {
    let mut gauges: Vec<(MountOrder, GaugeView)> = world
        .query::<(&WidgetId, &MountOrder, &Gauge, &ValueAnimator, &ThresholdMonitor)>()
        .iter()
        .map(|(_, (id, order, gauge, animator, monitor))| {
            (
                *order,
                GaugeView {
                    widget_id: id.0.clone(),
                    kind: gauge.kind,
                    current: animator.current(),
                    target: animator.target(),
                    percent: gauge.range.percent(animator.current()),
                    category: monitor.category(),
                    thresholds: *monitor.thresholds(),
                    animating: animator.is_animating(),
                },
            )
        })
        .collect();
    gauges.sort_by_key(|(order, _)| *order);
    gauges.into_iter().map(|(_, view)| view).collect()
}

/// Build RadarView list in mount order.
fn build_radars(world: &World, now_ms: u64) -> Vec<RadarView> {
    let mut radars: Vec<(MountOrder, RadarView)> = world
        .query::<(&WidgetId, &MountOrder, &ContactList, &SweepDetector)>()
        .iter()
        .map(|(_, (id, order, contacts, detector))| {
            let contacts = contacts
                .contacts
                .iter()
                .map(|contact| {
                    let state = detector.state(&contact.id);
                    ContactView {
                        id: contact.id.clone(),
                        x: contact.position.x,
                        y: contact.position.y,
                        bearing_deg: contact.bearing_deg(),
                        classification: contact.classification,
                        strength: contact.strength,
                        detected: state.map(|s| s.inside).unwrap_or(false),
                        last_detected_angle: state.and_then(|s| s.last_detected_angle),
                        ping_age_ms: state.and_then(|s| s.ping_age_ms(now_ms)),
                    }
                })
                .collect();
            (
                *order,
                RadarView {
                    widget_id: id.0.clone(),
                    sweep_angle_deg: detector.angle_deg(),
                    half_width_deg: detector.half_width_deg(),
                    rotations: detector.rotations(),
                    contacts,
                },
            )
        })
        .collect();
    radars.sort_by_key(|(order, _)| *order);
    radars.into_iter().map(|(_, view)| view).collect()
}
