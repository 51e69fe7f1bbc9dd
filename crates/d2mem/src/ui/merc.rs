use std::str::FromStr;

use serde::Serialize;
use strum::{Display, EnumString, FromRepr, IntoStaticStr};
use tracing::{debug, warn};

/// Skills a hireling can be offered with, keyed by game skill id
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[repr(u16)]
pub enum MercSkill {
    #[strum(serialize = "Fire Arrow")]
    FireArrow = 7,
    #[strum(serialize = "Inner Sight")]
    InnerSight = 8,
    #[strum(serialize = "Cold Arrow")]
    ColdArrow = 11,
    #[strum(serialize = "Slow Missiles")]
    SlowMissiles = 17,
    #[strum(serialize = "Charged Bolt")]
    ChargedBolt = 38,
    #[strum(serialize = "Frozen Armor")]
    FrozenArmor = 40,
    Inferno = 41,
    #[strum(serialize = "Ice Blast")]
    IceBlast = 45,
    #[strum(serialize = "Fire Ball")]
    FireBall = 47,
    Lightning = 49,
    #[strum(serialize = "Fire Wall")]
    FireWall = 51,
    #[strum(serialize = "Chain Lightning")]
    ChainLightning = 53,
    #[strum(serialize = "Glacial Spike")]
    GlacialSpike = 55,
    Might = 98,
    Prayer = 99,
    Thorns = 103,
    Defiance = 104,
    #[strum(serialize = "Blessed Aim")]
    BlessedAim = 108,
    #[strum(serialize = "Holy Freeze")]
    HolyFreeze = 114,
    Bash = 126,
    Stun = 139,
}

impl MercSkill {
    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn from_id(id: u16) -> Option<Self> {
        Self::from_repr(id)
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// One entry of the hire menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MercOption {
    /// Position in the hire list
    pub index: usize,
    pub name: String,
    pub skill: MercSkill,
    pub level: i32,
    pub life: i32,
    pub defense: i32,
    pub cost: i32,
}

#[derive(Debug, PartialEq, Eq)]
struct StatsLine<'a> {
    name: &'a str,
    level: i32,
    life: i32,
    defense: i32,
    cost: i32,
}

/// `<name> - Lvl: <n>  Life: <n>  Def: <n>  Cost: <n>`, whitespace-insensitive.
fn parse_stats_line(line: &str) -> Option<StatsLine<'_>> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;

    if tokens.next()? != "-" {
        return None;
    }

    let mut number = |label: &str| -> Option<i32> {
        if tokens.next()? != label {
            return None;
        }
        tokens.next()?.parse().ok()
    };

    Some(StatsLine {
        name,
        level: number("Lvl:")?,
        life: number("Life:")?,
        defense: number("Def:")?,
        cost: number("Cost:")?,
    })
}

/// Parse one hire list text box.
///
/// Returns `None` (and logs) when the stats line cannot be parsed or the
/// skill line names a skill that is not in [`MercSkill`].
pub fn parse_merc_entry(index: usize, text: &str) -> Option<MercOption> {
    let mut lines = text.lines();

    let Some(stats) = lines.next().and_then(parse_stats_line) else {
        debug!("Skipping unparseable hire list entry {}: {:?}", index, text);
        return None;
    };

    let skill_name = lines.next().map(str::trim).unwrap_or_default();
    let Ok(skill) = MercSkill::from_str(skill_name) else {
        warn!("Unknown merc skill: {}", skill_name);
        return None;
    };

    Some(MercOption {
        index,
        name: stats.name.to_string(),
        skill,
        level: stats.level,
        life: stats.life,
        defense: stats.defense,
        cost: stats.cost,
    })
}
