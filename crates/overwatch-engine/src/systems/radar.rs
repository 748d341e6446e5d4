//! Radar system: rotates each scope's beam and raises ping events.
//!
//! The beam advances by `sweep_rate * dt` every frame, then the detector
//! scans the scope's current contact list.

use hecs::World;

use overwatch_core::components::{ContactList, RadarScope, WidgetId};
use overwatch_core::events::HudEvent;
use overwatch_telemetry::{SweepDetector, SweepReport};

/// Advance every radar scope by `dt_ms`.
pub fn run(world: &mut World, dt_ms: u64, now_ms: u64, events: &mut Vec<HudEvent>) {
    for (_entity, (id, scope, contacts, detector)) in
        world.query_mut::<(&WidgetId, &RadarScope, &ContactList, &mut SweepDetector)>()
    {
        let delta_deg = scope.sweep_rate_deg_per_sec * dt_ms as f64 / 1000.0;
        match detector.advance(delta_deg, &contacts.contacts, now_ms) {
            Ok(report) => push_report(&id.0, &report, contacts, detector, events),
            Err(err) => log::warn!("radar {} skipped a frame: {err}", id.0),
        }
    }
}

/// Convert a detector report into events. The wrap is reported before
/// pings found at the new angle.
pub fn push_report(
    widget_id: &str,
    report: &SweepReport,
    contacts: &ContactList,
    detector: &SweepDetector,
    events: &mut Vec<HudEvent>,
) {
    if report.sweep_complete {
        events.push(HudEvent::SweepComplete {
            widget_id: widget_id.to_string(),
            rotation: detector.rotations(),
        });
    }
    for contact_id in &report.detected {
        let bearing_deg = contacts
            .contacts
            .iter()
            .find(|c| &c.id == contact_id)
            .map(|c| c.bearing_deg())
            .unwrap_or_else(|| detector.angle_deg());
        events.push(HudEvent::ContactDetected {
            widget_id: widget_id.to_string(),
            contact_id: contact_id.clone(),
            bearing_deg,
        });
    }
}
