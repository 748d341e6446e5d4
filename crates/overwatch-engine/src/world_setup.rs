//! Entity spawn factories for mounted widgets.
//!
//! Validation happens before spawning; these only assemble component bundles.

use hecs::{Entity, World};

use overwatch_core::components::*;
use overwatch_telemetry::{SweepDetector, ThresholdMonitor, ValueAnimator};

/// Spawn a metric gauge or progress bar.
pub fn spawn_gauge(
    world: &mut World,
    widget_id: &str,
    gauge: Gauge,
    animator: ValueAnimator,
    monitor: ThresholdMonitor,
    order: MountOrder,
) -> Entity {
    world.spawn((
        WidgetId(widget_id.to_string()),
        order,
        gauge,
        animator,
        monitor,
    ))
}

/// Spawn a radar scope with an empty contact list.
pub fn spawn_radar(
    world: &mut World,
    widget_id: &str,
    scope: RadarScope,
    detector: SweepDetector,
    order: MountOrder,
) -> Entity {
    world.spawn((
        WidgetId(widget_id.to_string()),
        order,
        scope,
        ContactList::default(),
        detector,
    ))
}
