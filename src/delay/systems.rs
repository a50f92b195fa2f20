use bevy::prelude::*;

use super::events::DelayedActionEvent;
use super::resources::DelayQueue;

/// Game time in whole milliseconds, the clock all delayed actions run on.
pub fn elapsed_ms(time: &Time) -> u64 {
    time.elapsed().as_millis() as u64
}

/// System to drain due delayed actions into `DelayedActionEvent` messages
pub fn fire_due_actions_system(
    time: Res<Time>,
    mut queue: ResMut<DelayQueue>,
    mut messages: MessageWriter<DelayedActionEvent>,
) {
    let now = elapsed_ms(&time);
    for (entity, action_id) in queue.drain_due(now) {
        messages.write(DelayedActionEvent::new(entity, action_id));
    }
}
