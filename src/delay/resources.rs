use bevy::prelude::*;
use std::collections::HashMap;

/// Pending named delayed actions, keyed per entity.
///
/// Actions are one-shot: once due they are drained and emitted as
/// [`DelayedActionEvent`](super::events::DelayedActionEvent) messages, and it
/// is up to the handling system to re-arm them. Scheduling an action id that
/// is already pending replaces its deadline.
#[derive(Resource, Debug, Default)]
pub struct DelayQueue {
    pending: HashMap<Entity, HashMap<String, u64>>,
}

impl DelayQueue {
    /// Schedule `action_id` on `entity` to fire `delay_ms` after `now_ms`.
    pub fn schedule(
        &mut self,
        entity: Entity,
        action_id: impl Into<String>,
        delay_ms: u64,
        now_ms: u64,
    ) {
        self.pending
            .entry(entity)
            .or_default()
            .insert(action_id.into(), now_ms + delay_ms);
    }

    /// Whether `action_id` is currently pending on `entity`.
    pub fn is_scheduled(&self, entity: Entity, action_id: &str) -> bool {
        self.pending
            .get(&entity)
            .is_some_and(|actions| actions.contains_key(action_id))
    }

    /// Drop a single pending action. Returns true if it was pending.
    pub fn cancel(&mut self, entity: Entity, action_id: &str) -> bool {
        let Some(actions) = self.pending.get_mut(&entity) else {
            return false;
        };
        let removed = actions.remove(action_id).is_some();
        if actions.is_empty() {
            self.pending.remove(&entity);
        }
        removed
    }

    /// Drop every pending action for `entity`.
    pub fn cancel_all(&mut self, entity: Entity) {
        self.pending.remove(&entity);
    }

    /// Total number of pending actions across all entities.
    pub fn len(&self) -> usize {
        self.pending.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every action due at `now_ms`, ordered by deadline
    /// (then by id, so firing order is deterministic).
    pub(crate) fn drain_due(&mut self, now_ms: u64) -> Vec<(Entity, String)> {
        let mut due = Vec::new();
        for (&entity, actions) in self.pending.iter_mut() {
            actions.retain(|action_id, &mut fire_at| {
                if fire_at <= now_ms {
                    due.push((fire_at, entity, action_id.clone()));
                    false
                } else {
                    true
                }
            });
        }
        self.pending.retain(|_, actions| !actions.is_empty());
        due.sort_by(|a, b| (a.0, &a.2).cmp(&(b.0, &b.2)));
        due.into_iter()
            .map(|(_, entity, action_id)| (entity, action_id))
            .collect()
    }
}
