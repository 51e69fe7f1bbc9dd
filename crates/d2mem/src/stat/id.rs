use serde::{Deserialize, Serialize};
use strum::{Display, FromRepr, IntoStaticStr};

/// Well-known stat codes (the game's ItemStatCost row index)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u16)]
pub enum StatId {
    Strength = 0,
    Energy = 1,
    Dexterity = 2,
    Vitality = 3,
    StatPoints = 4,
    SkillPoints = 5,
    Life = 6,
    MaxLife = 7,
    Mana = 8,
    MaxMana = 9,
    Stamina = 10,
    MaxStamina = 11,
    Level = 12,
    Experience = 13,
    Gold = 14,
    StashGold = 15,
    EnhancedDefense = 16,
    EnhancedDamageMax = 17,
    EnhancedDamageMin = 18,
    AttackRating = 19,
    ChanceToBlock = 20,
    MinDamage = 21,
    MaxDamage = 22,
    Defense = 31,
    FireResist = 39,
    MaxFireResist = 40,
    LightningResist = 41,
    MaxLightningResist = 42,
    ColdResist = 43,
    MaxColdResist = 44,
    PoisonResist = 45,
    MaxPoisonResist = 46,
    ColdLength = 56,
    PoisonLength = 59,
    LifeSteal = 60,
    ManaSteal = 62,
    Quantity = 70,
    Durability = 72,
    MaxDurability = 73,
    GoldFind = 79,
    MagicFind = 80,
    Requirements = 91,
    LevelRequire = 92,
    IncreasedAttackSpeed = 93,
    LevelRequirePercent = 94,
    FasterRunWalk = 96,
    FasterHitRecovery = 99,
    FasterBlockRate = 102,
    FasterCastRate = 105,
    HitCausesMonsterToFlee = 112,
    DeadlyStrike = 141,
    NumSockets = 194,
    DefensePerLevel = 214,
    LifePerLevel = 216,
    ManaPerLevel = 217,
    MaxDamagePerLevel = 218,
    MaxDamagePercentPerLevel = 219,
    StrengthPerLevel = 220,
    DexterityPerLevel = 221,
    VitalityPerLevel = 223,
    AttackRatingPerLevel = 224,
    ThornsPerLevel = 238,
    ExtraGoldPerLevel = 239,
    MagicFindPerLevel = 240,
    RegenStaminaPerLevel = 241,
    DamageDemonPerLevel = 243,
    DamageUndeadPerLevel = 244,
    AttackRatingUndeadPerLevel = 246,
    DeadlyStrikePerLevel = 250,
    ReplenishDurability = 252,
    ReplenishQuantity = 253,
}

impl StatId {
    pub fn from_u16(value: u16) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}
