use bevy::prelude::*;

use super::events::{
    BleedRateChangedEvent, BloodLevelChangedEvent, DestroyEvent, PartHealthChangedEvent,
};
use super::systems::{
    apply_part_damage_system, blood_loss_destroy_system, blood_regen_system, part_regen_system,
    recompute_bleed_rate_system, update_severity_system,
};
use crate::delay::plugin::DelaySets;

/// System sets for circulation system ordering
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CirculationSets {
    /// Impact handling and health mutation
    Damage,
    /// Periodic part-health and blood-level regeneration
    Regen,
    /// Severity bucketing, rate recomputation and the terminal check
    Effects,
}

/// Circulation plugin: body-part damage, bleeding and regeneration.
/// Expects the delay plugin to be installed alongside it.
pub fn plugin(app: &mut App) {
    app.add_message::<PartHealthChangedEvent>()
        .add_message::<BloodLevelChangedEvent>()
        .add_message::<BleedRateChangedEvent>()
        .add_message::<DestroyEvent>()
        .configure_sets(
            Update,
            (
                DelaySets::Fire,
                CirculationSets::Damage,
                CirculationSets::Regen,
                CirculationSets::Effects,
            )
                .chain(),
        )
        .add_systems(
            Update,
            apply_part_damage_system.in_set(CirculationSets::Damage),
        )
        .add_systems(
            Update,
            (part_regen_system, blood_regen_system).in_set(CirculationSets::Regen),
        )
        .add_systems(
            Update,
            (
                update_severity_system,
                recompute_bleed_rate_system,
                blood_loss_destroy_system,
            )
                .chain()
                .in_set(CirculationSets::Effects),
        );
}
