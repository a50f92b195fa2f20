use bevy::prelude::*;

/// Message fired when a part's circulatory health value changes
#[derive(Message, Debug, Clone)]
pub struct PartHealthChangedEvent {
    pub entity: Entity,
    /// Name of the affected body part
    pub part: String,
}

impl PartHealthChangedEvent {
    pub fn new(entity: Entity, part: impl Into<String>) -> Self {
        Self {
            entity,
            part: part.into(),
        }
    }
}

/// Message fired when an entity's blood level changes
#[derive(Message, Debug, Clone)]
pub struct BloodLevelChangedEvent {
    pub entity: Entity,
    /// Blood level after the change
    pub level: i32,
}

impl BloodLevelChangedEvent {
    pub fn new(entity: Entity, level: i32) -> Self {
        Self { entity, level }
    }
}

/// Message fired when a part enters, leaves, or moves between severity
/// buckets, invalidating the cached blood regen rate
#[derive(Message, Debug, Clone)]
pub struct BleedRateChangedEvent {
    pub entity: Entity,
}

impl BleedRateChangedEvent {
    pub fn new(entity: Entity) -> Self {
        Self { entity }
    }
}

/// Why an entity was destroyed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DestroyCause {
    BloodLoss,
}

impl DestroyCause {
    /// Returns the display name for this cause.
    pub fn name(&self) -> &'static str {
        match self {
            DestroyCause::BloodLoss => "blood loss",
        }
    }
}

/// Message instructing the host to destroy an entity. Re-delivery is
/// possible; the handler is expected to be idempotent.
#[derive(Message, Debug, Clone)]
pub struct DestroyEvent {
    pub entity: Entity,
    pub cause: DestroyCause,
}

impl DestroyEvent {
    pub fn new(entity: Entity, cause: DestroyCause) -> Self {
        Self { entity, cause }
    }
}
