use bevy::prelude::*;
use std::collections::HashMap;

/// Traits a body part can carry. Subsystems filter on these: the circulation
/// model only tracks parts with `Circulation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Characteristic {
    Circulation,
    Skeletal,
    Muscular,
    Nervous,
}

impl Characteristic {
    /// Returns the display name for this characteristic.
    pub fn name(&self) -> &'static str {
        match self {
            Characteristic::Circulation => "circulation",
            Characteristic::Skeletal => "skeletal",
            Characteristic::Muscular => "muscular",
            Characteristic::Nervous => "nervous",
        }
    }

    /// Returns all characteristic variants for iteration.
    pub fn all() -> &'static [Characteristic] {
        &[
            Characteristic::Circulation,
            Characteristic::Skeletal,
            Characteristic::Muscular,
            Characteristic::Nervous,
        ]
    }
}

/// A single body part in an entity's anatomy catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPart {
    /// Identifier used in events and timer action ids (no spaces)
    pub name: String,
    /// Human-readable name for logs and UI
    pub display_name: String,
    pub characteristics: Vec<Characteristic>,
}

impl BodyPart {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            characteristics: Vec::new(),
        }
    }

    pub fn with_characteristic(mut self, characteristic: Characteristic) -> Self {
        if !self.characteristics.contains(&characteristic) {
            self.characteristics.push(characteristic);
        }
        self
    }

    pub fn has_characteristic(&self, characteristic: Characteristic) -> bool {
        self.characteristics.contains(&characteristic)
    }
}

/// Anatomy component: the catalog of body parts an entity is made of
#[derive(Component, Debug, Clone, Default)]
pub struct Anatomy {
    pub parts: HashMap<String, BodyPart>,
}

impl Anatomy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_part(mut self, part: BodyPart) -> Self {
        self.parts.insert(part.name.clone(), part);
        self
    }

    pub fn part(&self, name: &str) -> Option<&BodyPart> {
        self.parts.get(name)
    }

    /// A standard six-part humanoid layout, every part vascularized.
    pub fn humanoid() -> Self {
        let part = |name: &str, display: &str| {
            BodyPart::new(name, display)
                .with_characteristic(Characteristic::Circulation)
                .with_characteristic(Characteristic::Skeletal)
                .with_characteristic(Characteristic::Muscular)
        };
        Self::new()
            .with_part(part("head", "Head").with_characteristic(Characteristic::Nervous))
            .with_part(part("torso", "Torso").with_characteristic(Characteristic::Nervous))
            .with_part(part("leftArm", "Left Arm"))
            .with_part(part("rightArm", "Right Arm"))
            .with_part(part("leftLeg", "Left Leg"))
            .with_part(part("rightLeg", "Right Leg"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod body_part_tests {
        use super::*;

        #[test]
        fn test_new_has_no_characteristics() {
            let part = BodyPart::new("leftArm", "Left Arm");
            assert_eq!(part.name, "leftArm");
            assert_eq!(part.display_name, "Left Arm");
            assert!(part.characteristics.is_empty());
        }

        #[test]
        fn test_with_characteristic() {
            let part =
                BodyPart::new("leftArm", "Left Arm").with_characteristic(Characteristic::Circulation);
            assert!(part.has_characteristic(Characteristic::Circulation));
            assert!(!part.has_characteristic(Characteristic::Skeletal));
        }

        #[test]
        fn test_with_characteristic_deduplicates() {
            let part = BodyPart::new("leftArm", "Left Arm")
                .with_characteristic(Characteristic::Circulation)
                .with_characteristic(Characteristic::Circulation);
            assert_eq!(part.characteristics.len(), 1);
        }
    }

    mod anatomy_tests {
        use super::*;

        #[test]
        fn test_with_part_and_lookup() {
            let anatomy = Anatomy::new()
                .with_part(BodyPart::new("torso", "Torso"));
            assert!(anatomy.part("torso").is_some());
            assert!(anatomy.part("tail").is_none());
        }

        #[test]
        fn test_humanoid_has_six_parts() {
            let anatomy = Anatomy::humanoid();
            assert_eq!(anatomy.parts.len(), 6);
        }

        #[test]
        fn test_humanoid_parts_are_vascularized() {
            let anatomy = Anatomy::humanoid();
            for part in anatomy.parts.values() {
                assert!(
                    part.has_characteristic(Characteristic::Circulation),
                    "{} should carry circulation",
                    part.name
                );
            }
        }
    }

    mod characteristic_tests {
        use super::*;

        #[test]
        fn test_names_are_distinct() {
            let names: Vec<_> = Characteristic::all().iter().map(|c| c.name()).collect();
            for (i, a) in names.iter().enumerate() {
                for (j, b) in names.iter().enumerate() {
                    if i != j {
                        assert_ne!(a, b);
                    }
                }
            }
        }
    }
}
