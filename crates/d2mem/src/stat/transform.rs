//! Per-stat numeric transforms
//!
//! The game stores several stats in encoded form (fixed point, per-level
//! fractions, durations in frames). The table below maps each affected stat
//! to the rule that turns the raw value into the displayed value. Stats not
//! listed pass through unchanged.

use super::StatId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Drop the 8 fractional bits (arithmetic shift)
    FixedPoint,
    /// Truncating integer division
    Divide(i32),
    /// Real division, truncated toward zero
    DivideReal(f64),
    /// `max(raw / d, 1)` with truncating division
    DivideAtLeastOne(i32),
    /// `max(2 / raw, 1)` for positive values, otherwise unchanged
    ReplenishRate,
    Multiply(i32),
    /// `max(raw, floor)`
    AtLeast(i32),
}

impl Transform {
    pub fn apply(self, raw: i32) -> i32 {
        match self {
            Self::FixedPoint => raw >> 8,
            Self::Divide(d) => raw / d,
            Self::DivideReal(d) => (raw as f64 / d) as i32,
            Self::DivideAtLeastOne(d) => (raw / d).max(1),
            Self::ReplenishRate => {
                if raw > 0 {
                    (2 / raw).max(1)
                } else {
                    raw
                }
            }
            Self::Multiply(m) => raw.wrapping_mul(m),
            Self::AtLeast(floor) => raw.max(floor),
        }
    }
}

const TRANSFORMS: &[(StatId, Transform)] = &[
    (StatId::Life, Transform::FixedPoint),
    (StatId::MaxLife, Transform::FixedPoint),
    (StatId::Mana, Transform::FixedPoint),
    (StatId::MaxMana, Transform::FixedPoint),
    (StatId::Stamina, Transform::FixedPoint),
    (StatId::MaxStamina, Transform::FixedPoint),
    (StatId::ColdLength, Transform::Divide(25)),
    (StatId::PoisonLength, Transform::Divide(25)),
    (StatId::DeadlyStrikePerLevel, Transform::DivideReal(0.8)),
    (StatId::HitCausesMonsterToFlee, Transform::DivideReal(1.28)),
    (StatId::AttackRatingUndeadPerLevel, Transform::Divide(2)),
    (StatId::MagicFindPerLevel, Transform::DivideAtLeastOne(8)),
    (StatId::ExtraGoldPerLevel, Transform::DivideAtLeastOne(8)),
    (StatId::DamageDemonPerLevel, Transform::DivideAtLeastOne(8)),
    (StatId::DamageUndeadPerLevel, Transform::DivideAtLeastOne(8)),
    (StatId::DefensePerLevel, Transform::DivideAtLeastOne(8)),
    (StatId::MaxDamagePerLevel, Transform::DivideAtLeastOne(8)),
    (StatId::MaxDamagePercentPerLevel, Transform::DivideAtLeastOne(8)),
    (StatId::StrengthPerLevel, Transform::DivideAtLeastOne(8)),
    (StatId::DexterityPerLevel, Transform::DivideAtLeastOne(8)),
    (StatId::VitalityPerLevel, Transform::DivideAtLeastOne(8)),
    (StatId::ThornsPerLevel, Transform::DivideAtLeastOne(8)),
    (StatId::LifePerLevel, Transform::DivideAtLeastOne(2048)),
    (StatId::ManaPerLevel, Transform::DivideAtLeastOne(2048)),
    (StatId::ReplenishDurability, Transform::ReplenishRate),
    (StatId::ReplenishQuantity, Transform::ReplenishRate),
    (StatId::RegenStaminaPerLevel, Transform::Multiply(10)),
    (StatId::LevelRequirePercent, Transform::Multiply(-1)),
    (StatId::AttackRatingPerLevel, Transform::AtLeast(15)),
];

/// Transform registered for a raw stat code, if any
pub fn transform_for(stat: u16) -> Option<Transform> {
    TRANSFORMS
        .iter()
        .find(|(id, _)| id.code() == stat)
        .map(|(_, transform)| *transform)
}

/// Decode a raw stat value; unmapped stats pass through unchanged
pub fn apply_transform(stat: u16, raw: i32) -> i32 {
    match transform_for(stat) {
        Some(transform) => transform.apply(raw),
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(id: StatId, raw: i32) -> i32 {
        apply_transform(id.code(), raw)
    }

    #[test]
    fn test_fixed_point_stats() {
        assert_eq!(decode(StatId::Life, 2560), 10);
        assert_eq!(decode(StatId::MaxMana, 0x1_2380), 0x123);
        // arithmetic shift keeps the sign
        assert_eq!(decode(StatId::Stamina, -512), -2);
    }

    #[test]
    fn test_duration_stats() {
        assert_eq!(decode(StatId::ColdLength, 250), 10);
        assert_eq!(decode(StatId::PoisonLength, 49), 1);
    }

    #[test]
    fn test_real_division_truncates() {
        assert_eq!(decode(StatId::DeadlyStrikePerLevel, 4), 5);
        assert_eq!(decode(StatId::DeadlyStrikePerLevel, 3), 3);
        assert_eq!(decode(StatId::HitCausesMonsterToFlee, 128), 100);
        assert_eq!(decode(StatId::HitCausesMonsterToFlee, 32), 25);
    }

    #[test]
    fn test_per_level_stats_floor_at_one() {
        assert_eq!(decode(StatId::MagicFindPerLevel, 4), 1);
        assert_eq!(decode(StatId::MagicFindPerLevel, 24), 3);
        assert_eq!(decode(StatId::LifePerLevel, 2048 * 3), 3);
        assert_eq!(decode(StatId::ManaPerLevel, 100), 1);
        assert_eq!(decode(StatId::AttackRatingUndeadPerLevel, 9), 4);
    }

    #[test]
    fn test_replenish_rate() {
        assert_eq!(decode(StatId::ReplenishQuantity, 4), 1);
        assert_eq!(decode(StatId::ReplenishDurability, 1), 2);
        assert_eq!(decode(StatId::ReplenishDurability, 0), 0);
        assert_eq!(decode(StatId::ReplenishQuantity, -5), -5);
    }

    #[test]
    fn test_scaling_stats() {
        assert_eq!(decode(StatId::RegenStaminaPerLevel, 7), 70);
        assert_eq!(decode(StatId::LevelRequirePercent, -3), 3);
        assert_eq!(decode(StatId::LevelRequirePercent, 20), -20);
        assert_eq!(apply_transform(94, -3), 3);
        assert_eq!(decode(StatId::AttackRatingPerLevel, 5), 15);
        assert_eq!(decode(StatId::AttackRatingPerLevel, 40), 40);
    }

    #[test]
    fn test_unmapped_stats_pass_through() {
        assert_eq!(decode(StatId::Strength, 125), 125);
        assert_eq!(decode(StatId::FireResist, -40), -40);
        assert_eq!(decode(StatId::Requirements, -3), -3);
        assert_eq!(apply_transform(999, 77), 77);
        assert!(transform_for(StatId::Gold.code()).is_none());
    }

    #[test]
    fn test_hostile_values_do_not_panic() {
        assert_eq!(decode(StatId::LevelRequirePercent, i32::MIN), i32::MIN);
        decode(StatId::RegenStaminaPerLevel, i32::MAX);
        decode(StatId::DeadlyStrikePerLevel, i32::MAX);
    }
}
