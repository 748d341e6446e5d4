//! Cleanup system: despawns unmounted widgets.

use hecs::{Entity, World};

/// Despawn every entity in the buffer. Dropping the entity drops its
/// animator or detector, so no further events can be produced for it.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        if world.despawn(entity).is_err() {
            log::debug!("entity {entity:?} already despawned");
        }
    }
}
