//! Animation system: advances every gauge's value animator.

use hecs::World;

use overwatch_core::components::WidgetId;
use overwatch_core::events::HudEvent;
use overwatch_telemetry::ValueAnimator;

/// Tick all running animators and report the ones that settled this frame.
pub fn run(world: &mut World, now_ms: u64, events: &mut Vec<HudEvent>) {
    for (_entity, (id, animator)) in world.query_mut::<(&WidgetId, &mut ValueAnimator)>() {
        if let Some(value) = animator.tick(now_ms) {
            log::debug!("gauge {} settled at {value}", id.0);
            events.push(HudEvent::ValueSettled {
                widget_id: id.0.clone(),
                value,
            });
        }
    }
}

/// Whether any gauge still needs frames.
pub fn any_animating(world: &World) -> bool {
    world
        .query::<&ValueAnimator>()
        .iter()
        .any(|(_, animator)| animator.is_animating())
}
