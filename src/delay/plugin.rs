use bevy::prelude::*;

use super::events::DelayedActionEvent;
use super::resources::DelayQueue;
use super::systems::fire_due_actions_system;

/// System sets for delayed-action scheduling ordering
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DelaySets {
    /// Draining due actions into messages
    Fire,
}

/// Delayed-action plugin: named one-shot timers fired as messages
pub fn plugin(app: &mut App) {
    app.init_resource::<DelayQueue>()
        .add_message::<DelayedActionEvent>()
        .add_systems(Update, fire_due_actions_system.in_set(DelaySets::Fire));
}
