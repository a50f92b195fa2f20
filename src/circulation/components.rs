use bevy::prelude::*;
use std::collections::HashMap;

/// Injury severity bucket. Each injured part sits in at most one bucket;
/// bucket occupancy drives how fast the entity bleeds out (or recovers).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
}

impl Severity {
    /// Numeric level, 1 (minor) through 3 (severe).
    pub fn level(&self) -> u8 {
        match self {
            Severity::Minor => 1,
            Severity::Moderate => 2,
            Severity::Severe => 3,
        }
    }

    /// Contribution of one part at this severity to the blood regen rate,
    /// in blood units per second. Always negative: wounds bleed.
    pub fn bleed_rate(&self) -> f32 {
        match self {
            Severity::Minor => -0.5,
            Severity::Moderate => -1.0,
            Severity::Severe => -2.0,
        }
    }

    /// Returns the display name for this severity.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    /// Classify a part by its health fraction: at or below 25% is severe,
    /// 50% moderate, 75% minor; above that the part counts as healthy.
    pub fn classify(health: i32, max_health: i32) -> Option<Severity> {
        if max_health <= 0 || health * 4 <= max_health {
            Some(Severity::Severe)
        } else if health * 2 <= max_health {
            Some(Severity::Moderate)
        } else if health * 4 <= max_health * 3 {
            Some(Severity::Minor)
        } else {
            None
        }
    }

    /// Returns all severity levels for iteration.
    pub fn all() -> &'static [Severity] {
        &[Severity::Minor, Severity::Moderate, Severity::Severe]
    }
}

/// Health bookkeeping for a single injured part.
#[derive(Debug, Clone, PartialEq)]
pub struct PartHealth {
    pub health: i32,
    pub max_health: i32,
    /// Heal units per second while regenerating
    pub regen_rate: f32,
    /// Seconds to wait after a hit before regeneration resumes
    pub wait_before_regen: f32,
    /// Game-time ms at which the next heal unit is earned
    pub next_regen_tick: u64,
}

impl Default for PartHealth {
    fn default() -> Self {
        Self {
            health: 100,
            max_health: 100,
            regen_rate: 1.0,
            wait_before_regen: 1.0,
            next_regen_tick: 0,
        }
    }
}

impl PartHealth {
    pub fn new(max_health: i32) -> Self {
        Self {
            health: max_health,
            max_health,
            ..Default::default()
        }
    }

    /// Apply damage, flooring health at zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    pub fn is_full(&self) -> bool {
        self.health == self.max_health
    }

    /// Milliseconds between heal units at the current regen rate. Callers
    /// must guard `regen_rate != 0`; a rate above 1000/s still yields a
    /// 1 ms floor so catch-up loops terminate.
    pub fn regen_interval_ms(&self) -> u64 {
        ((1000.0 / self.regen_rate) as u64).max(1)
    }
}

/// Circulatory state of a wounded entity. Created lazily on the first hit to
/// a vascularized part and mutated by the circulation systems from then on.
#[derive(Component, Debug, Clone)]
pub struct InjuredCirculation {
    pub blood_level: i32,
    pub max_blood_level: i32,
    /// Net blood change per tick: base rate plus bleed contributions
    pub blood_regen_rate: f32,
    /// Recovery rate of an uninjured body
    pub base_blood_regen_rate: f32,
    /// Game-time ms of the next blood regen tick
    pub next_regen_tick: u64,
    /// Which parts are currently injured, bucketed by severity
    pub parts_by_severity: HashMap<Severity, Vec<String>>,
    /// Per-part health details, keyed by part name
    pub part_healths: HashMap<String, PartHealth>,
}

impl Default for InjuredCirculation {
    fn default() -> Self {
        Self {
            blood_level: 100,
            max_blood_level: 100,
            blood_regen_rate: 1.0,
            base_blood_regen_rate: 1.0,
            next_regen_tick: 0,
            parts_by_severity: HashMap::new(),
            part_healths: HashMap::new(),
        }
    }
}

impl InjuredCirculation {
    /// The severity bucket `part` currently occupies, if any.
    pub fn part_severity(&self, part: &str) -> Option<Severity> {
        self.parts_by_severity
            .iter()
            .find(|(_, parts)| parts.iter().any(|p| p == part))
            .map(|(&severity, _)| severity)
    }

    /// Move `part` into the given bucket (or out of all buckets for `None`).
    /// Returns true if membership actually changed.
    pub fn set_part_severity(&mut self, part: &str, severity: Option<Severity>) -> bool {
        if self.part_severity(part) == severity {
            return false;
        }
        for parts in self.parts_by_severity.values_mut() {
            parts.retain(|p| p != part);
        }
        self.parts_by_severity.retain(|_, parts| !parts.is_empty());
        if let Some(severity) = severity {
            self.parts_by_severity
                .entry(severity)
                .or_default()
                .push(part.to_string());
        }
        true
    }

    /// Recompute the net blood regen rate from bucket occupancy. Pure
    /// function of the current severity sets.
    pub fn recompute_blood_regen_rate(&mut self) {
        let mut rate = self.base_blood_regen_rate;
        for (severity, parts) in &self.parts_by_severity {
            rate += parts.len() as f32 * severity.bleed_rate();
        }
        self.blood_regen_rate = rate;
    }

    pub fn clamp_blood_level(&mut self) {
        self.blood_level = self.blood_level.clamp(0, self.max_blood_level);
    }

    pub fn injured_part_count(&self) -> usize {
        self.parts_by_severity.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod severity_tests {
        use super::*;

        #[test]
        fn test_levels_and_bleed_rates() {
            assert_eq!(Severity::Minor.level(), 1);
            assert_eq!(Severity::Moderate.level(), 2);
            assert_eq!(Severity::Severe.level(), 3);
            assert_eq!(Severity::Minor.bleed_rate(), -0.5);
            assert_eq!(Severity::Moderate.bleed_rate(), -1.0);
            assert_eq!(Severity::Severe.bleed_rate(), -2.0);
        }

        #[test]
        fn test_classify_thresholds() {
            assert_eq!(Severity::classify(100, 100), None);
            assert_eq!(Severity::classify(76, 100), None);
            assert_eq!(Severity::classify(75, 100), Some(Severity::Minor));
            assert_eq!(Severity::classify(51, 100), Some(Severity::Minor));
            assert_eq!(Severity::classify(50, 100), Some(Severity::Moderate));
            assert_eq!(Severity::classify(26, 100), Some(Severity::Moderate));
            assert_eq!(Severity::classify(25, 100), Some(Severity::Severe));
            assert_eq!(Severity::classify(0, 100), Some(Severity::Severe));
        }

        #[test]
        fn test_classify_degenerate_max() {
            assert_eq!(Severity::classify(0, 0), Some(Severity::Severe));
        }
    }

    mod part_health_tests {
        use super::*;

        #[test]
        fn test_default() {
            let part = PartHealth::default();
            assert_eq!(part.health, 100);
            assert_eq!(part.max_health, 100);
            assert_eq!(part.regen_rate, 1.0);
            assert_eq!(part.wait_before_regen, 1.0);
            assert!(part.is_full());
        }

        #[test]
        fn test_take_damage_floors_at_zero() {
            let mut part = PartHealth::new(50);
            part.take_damage(80);
            assert_eq!(part.health, 0);
        }

        #[test]
        fn test_regen_interval() {
            let part = PartHealth::default();
            assert_eq!(part.regen_interval_ms(), 1000);

            let fast = PartHealth {
                regen_rate: 4.0,
                ..Default::default()
            };
            assert_eq!(fast.regen_interval_ms(), 250);
        }

        #[test]
        fn test_regen_interval_floors_at_one_ms() {
            let absurd = PartHealth {
                regen_rate: 5000.0,
                ..Default::default()
            };
            assert_eq!(absurd.regen_interval_ms(), 1);
        }
    }

    mod injured_circulation_tests {
        use super::*;

        #[test]
        fn test_default_rate_matches_base() {
            let injured = InjuredCirculation::default();
            assert_eq!(injured.blood_regen_rate, injured.base_blood_regen_rate);
            assert_eq!(injured.injured_part_count(), 0);
        }

        #[test]
        fn test_set_part_severity_moves_between_buckets() {
            let mut injured = InjuredCirculation::default();

            assert!(injured.set_part_severity("leftArm", Some(Severity::Minor)));
            assert_eq!(injured.part_severity("leftArm"), Some(Severity::Minor));

            assert!(injured.set_part_severity("leftArm", Some(Severity::Severe)));
            assert_eq!(injured.part_severity("leftArm"), Some(Severity::Severe));
            assert_eq!(injured.injured_part_count(), 1);

            assert!(injured.set_part_severity("leftArm", None));
            assert_eq!(injured.part_severity("leftArm"), None);
            assert_eq!(injured.injured_part_count(), 0);
        }

        #[test]
        fn test_set_part_severity_reports_no_change() {
            let mut injured = InjuredCirculation::default();
            injured.set_part_severity("torso", Some(Severity::Moderate));

            assert!(!injured.set_part_severity("torso", Some(Severity::Moderate)));
            assert!(!injured.set_part_severity("head", None));
        }

        #[test]
        fn test_recompute_rate_sums_buckets() {
            let mut injured = InjuredCirculation {
                base_blood_regen_rate: 1.0,
                ..Default::default()
            };
            injured.set_part_severity("leftArm", Some(Severity::Minor));
            injured.set_part_severity("rightArm", Some(Severity::Minor));
            injured.set_part_severity("torso", Some(Severity::Severe));
            injured.recompute_blood_regen_rate();

            // 1.0 + 2 * -0.5 + 1 * -2.0
            assert_eq!(injured.blood_regen_rate, -2.0);
        }

        #[test]
        fn test_recompute_rate_with_no_injuries_is_base() {
            let mut injured = InjuredCirculation {
                base_blood_regen_rate: 0.25,
                ..Default::default()
            };
            injured.recompute_blood_regen_rate();
            assert_eq!(injured.blood_regen_rate, 0.25);
        }

        #[test]
        fn test_clamp_blood_level() {
            let mut injured = InjuredCirculation::default();
            injured.blood_level = 140;
            injured.clamp_blood_level();
            assert_eq!(injured.blood_level, 100);

            injured.blood_level = -3;
            injured.clamp_blood_level();
            assert_eq!(injured.blood_level, 0);
        }
    }
}
