use bevy::prelude::*;
use std::collections::HashMap;

use super::components::{InjuredCirculation, Severity};
use super::events::{
    BleedRateChangedEvent, BloodLevelChangedEvent, DestroyCause, DestroyEvent,
    PartHealthChangedEvent,
};
use crate::body::components::{Anatomy, Characteristic};
use crate::body::events::PartImpactEvent;
use crate::delay::events::DelayedActionEvent;
use crate::delay::resources::DelayQueue;
use crate::delay::systems::elapsed_ms;

/// Action-id prefix for per-part health regeneration; the part name is the
/// suffix.
pub const PART_REGEN_PREFIX: &str = "circulation:part_regen:";
/// Action id for the entity-wide blood level regeneration tick.
pub const BLOOD_REGEN_ACTION: &str = "circulation:blood_regen";

/// Interval between blood regen ticks, fixed regardless of rate.
const BLOOD_REGEN_INTERVAL_MS: u64 = 1000;

/// System to apply part impacts to circulatory health
///
/// Lazily creates the `InjuredCirculation` record and the part's health
/// details. A part's first injury arms its personal regen action and, if not
/// already pending, the entity's shared blood regen action.
pub fn apply_part_damage_system(
    mut commands: Commands,
    time: Res<Time>,
    mut delay_queue: ResMut<DelayQueue>,
    mut impacts: MessageReader<PartImpactEvent>,
    mut query: Query<(&Anatomy, Option<&mut InjuredCirculation>)>,
    mut health_changed: MessageWriter<PartHealthChangedEvent>,
) {
    let now = elapsed_ms(&time);
    // Component inserts are deferred, so records created this frame are
    // staged here and later hits in the same frame land on the same record.
    let mut created: HashMap<Entity, InjuredCirculation> = HashMap::new();
    for event in impacts.read() {
        let Ok((anatomy, injured)) = query.get_mut(event.target) else {
            continue;
        };
        let Some(part) = anatomy.part(&event.part) else {
            warn!("impact on unknown body part {:?}", event.part);
            continue;
        };
        if !part.has_characteristic(Characteristic::Circulation) {
            continue;
        }
        match injured {
            Some(mut injured) => {
                damage_part(&mut injured, &mut delay_queue, event, now);
            }
            None => {
                let record = created.entry(event.target).or_default();
                damage_part(record, &mut delay_queue, event, now);
            }
        }
        health_changed.write(PartHealthChangedEvent::new(event.target, event.part.clone()));
    }
    for (entity, record) in created {
        commands.entity(entity).insert(record);
    }
}

fn damage_part(
    injured: &mut InjuredCirculation,
    delay_queue: &mut DelayQueue,
    event: &PartImpactEvent,
    now_ms: u64,
) {
    let first_injury = !injured.part_healths.contains_key(&event.part);
    let part = injured.part_healths.entry(event.part.clone()).or_default();
    if first_injury {
        delay_queue.schedule(
            event.target,
            format!("{PART_REGEN_PREFIX}{}", event.part),
            part.regen_interval_ms(),
            now_ms,
        );
        if !delay_queue.is_scheduled(event.target, BLOOD_REGEN_ACTION) {
            delay_queue.schedule(event.target, BLOOD_REGEN_ACTION, BLOOD_REGEN_INTERVAL_MS, now_ms);
        }
    }
    // Truncating cast, so pierce 30 lands as 45 and blunt 20 as 10
    let effective = (event.amount as f32 * event.kind.multiplier()) as i32;
    part.take_damage(effective);
    part.next_regen_tick = now_ms + (part.wait_before_regen * 1000.0).floor() as u64;
}

/// System to apply periodic part-health regeneration
///
/// Catches up on missed intervals: one heal unit per elapsed interval since
/// the part's `next_regen_tick`, clamped at max health. Re-arms its action
/// even when the part is already full, so the timer survives reinjury.
pub fn part_regen_system(
    time: Res<Time>,
    mut delay_queue: ResMut<DelayQueue>,
    mut actions: MessageReader<DelayedActionEvent>,
    mut query: Query<&mut InjuredCirculation>,
    mut health_changed: MessageWriter<PartHealthChangedEvent>,
) {
    let now = elapsed_ms(&time);
    for action in actions.read() {
        let Some(part_name) = action.suffix(PART_REGEN_PREFIX) else {
            continue;
        };
        let Ok(mut injured) = query.get_mut(action.entity) else {
            continue;
        };
        let Some(part) = injured.part_healths.get_mut(part_name) else {
            continue;
        };
        if part.regen_rate == 0.0 {
            continue;
        }
        if part.health >= 0 && !part.is_full() {
            let mut heal = 0;
            while now >= part.next_regen_tick {
                heal += 1;
                part.next_regen_tick += part.regen_interval_ms();
            }
            part.health = (part.health + heal).min(part.max_health);
            health_changed.write(PartHealthChangedEvent::new(action.entity, part_name));
        }
        let interval = part.regen_interval_ms();
        delay_queue.schedule(action.entity, action.action_id.clone(), interval, now);
    }
}

/// System to apply periodic blood level regeneration
///
/// Unlike part regen this applies the (truncated) rate once per fixed tick
/// with no catch-up, mirroring how the drain was originally tuned.
pub fn blood_regen_system(
    time: Res<Time>,
    mut delay_queue: ResMut<DelayQueue>,
    mut actions: MessageReader<DelayedActionEvent>,
    mut query: Query<&mut InjuredCirculation>,
    mut level_changed: MessageWriter<BloodLevelChangedEvent>,
) {
    let now = elapsed_ms(&time);
    for action in actions.read() {
        if action.action_id != BLOOD_REGEN_ACTION {
            continue;
        }
        let Ok(mut injured) = query.get_mut(action.entity) else {
            continue;
        };
        if injured.blood_level >= 0
            && injured.blood_level <= injured.max_blood_level
            && injured.blood_regen_rate != 0.0
        {
            let heal = injured.blood_regen_rate as i32;
            injured.next_regen_tick += BLOOD_REGEN_INTERVAL_MS;
            let before = injured.blood_level;
            injured.blood_level += heal;
            injured.clamp_blood_level();
            if injured.blood_level != before {
                level_changed.write(BloodLevelChangedEvent::new(action.entity, injured.blood_level));
            }
        }
        delay_queue.schedule(action.entity, BLOOD_REGEN_ACTION, BLOOD_REGEN_INTERVAL_MS, now);
    }
}

/// System to keep severity buckets in step with part health
///
/// Reclassifies a part whenever its health changes and fires the rate-changed
/// message only on actual bucket membership changes.
pub fn update_severity_system(
    mut health_changed: MessageReader<PartHealthChangedEvent>,
    mut query: Query<&mut InjuredCirculation>,
    mut rate_changed: MessageWriter<BleedRateChangedEvent>,
) {
    for event in health_changed.read() {
        let Ok(mut injured) = query.get_mut(event.entity) else {
            continue;
        };
        let Some(part) = injured.part_healths.get(&event.part) else {
            continue;
        };
        let severity = Severity::classify(part.health, part.max_health);
        if injured.set_part_severity(&event.part, severity) {
            rate_changed.write(BleedRateChangedEvent::new(event.entity));
        }
    }
}

/// System to recompute the net blood regen rate after bucket changes
pub fn recompute_bleed_rate_system(
    mut rate_changed: MessageReader<BleedRateChangedEvent>,
    mut query: Query<&mut InjuredCirculation>,
) {
    for event in rate_changed.read() {
        if let Ok(mut injured) = query.get_mut(event.entity) {
            injured.recompute_blood_regen_rate();
        }
    }
}

/// System to issue the terminal destroy instruction on blood depletion
pub fn blood_loss_destroy_system(
    mut level_changed: MessageReader<BloodLevelChangedEvent>,
    query: Query<&InjuredCirculation>,
    mut destroys: MessageWriter<DestroyEvent>,
) {
    for event in level_changed.read() {
        let Ok(injured) = query.get(event.entity) else {
            continue;
        };
        if injured.blood_level <= 0 {
            destroys.write(DestroyEvent::new(event.entity, DestroyCause::BloodLoss));
        }
    }
}
