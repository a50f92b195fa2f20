use bevy::prelude::*;

/// Message fired when a named delayed action comes due.
///
/// Handlers dispatch on the action id, typically by prefix so a single id can
/// carry a payload suffix (e.g. `circulation:part_regen:leftArm`).
#[derive(Message, Debug, Clone)]
pub struct DelayedActionEvent {
    /// The entity the action was scheduled on
    pub entity: Entity,
    /// The id the action was scheduled under
    pub action_id: String,
}

impl DelayedActionEvent {
    pub fn new(entity: Entity, action_id: impl Into<String>) -> Self {
        Self {
            entity,
            action_id: action_id.into(),
        }
    }

    /// The part of the action id after `prefix`, if the id starts with it.
    pub fn suffix<'a>(&'a self, prefix: &str) -> Option<&'a str> {
        self.action_id.strip_prefix(prefix)
    }
}
