use bevy::prelude::*;

/// Damage flavor carried by an impact. Pierce wounds bleed badly, blunt
/// trauma barely breaks the skin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DamageKind {
    #[default]
    Direct,
    Pierce,
    Blunt,
    Slash,
    Burn,
}

impl DamageKind {
    /// Multiplier applied to the raw impact amount before it hits part health.
    pub fn multiplier(&self) -> f32 {
        match self {
            DamageKind::Pierce => 1.5,
            DamageKind::Blunt => 0.5,
            _ => 1.0,
        }
    }

    /// Returns the display name for this damage kind.
    pub fn name(&self) -> &'static str {
        match self {
            DamageKind::Direct => "direct",
            DamageKind::Pierce => "pierce",
            DamageKind::Blunt => "blunt",
            DamageKind::Slash => "slash",
            DamageKind::Burn => "burn",
        }
    }

    /// Returns all damage kinds for iteration.
    pub fn all() -> &'static [DamageKind] {
        &[
            DamageKind::Direct,
            DamageKind::Pierce,
            DamageKind::Blunt,
            DamageKind::Slash,
            DamageKind::Burn,
        ]
    }
}

/// Message fired when a body part takes a hit
#[derive(Message, Debug, Clone)]
pub struct PartImpactEvent {
    /// The entity whose part was hit
    pub target: Entity,
    /// Name of the body part that was hit
    pub part: String,
    /// Raw damage amount, before the kind multiplier
    pub amount: i32,
    pub kind: DamageKind,
}

impl PartImpactEvent {
    pub fn new(target: Entity, part: impl Into<String>, amount: i32, kind: DamageKind) -> Self {
        Self {
            target,
            part: part.into(),
            amount,
            kind,
        }
    }
}
