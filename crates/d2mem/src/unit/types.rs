use serde::{Deserialize, Serialize};
use strum::{Display, FromRepr, IntoStaticStr};

use crate::stat::Stats;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub u32);

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
#[repr(u32)]
pub enum UnitType {
    Player = 0,
    Monster = 1,
    Object = 2,
    Missile = 3,
    Item = 4,
    Entrance = 5,
}

impl UnitType {
    pub fn from_u32(value: u32) -> Option<Self> {
        Self::from_repr(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A player unit as found in the unit table, before stat decoding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPlayerUnit {
    pub address: u64,
    pub id: UnitId,
    pub name: String,
    pub area: u32,
    pub position: Position,
    pub is_main: bool,
    pub is_corpse: bool,
    pub is_hovered: bool,
    /// Address of the unit's stat list header
    pub stat_list: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerUnits(pub Vec<RawPlayerUnit>);

impl PlayerUnits {
    pub fn main_player(&self) -> Option<&RawPlayerUnit> {
        self.0.iter().find(|u| u.is_main && !u.is_corpse)
    }

    /// The main player's corpse, if one is lying around
    pub fn corpse(&self) -> Option<&RawPlayerUnit> {
        self.0.iter().find(|u| u.is_main && u.is_corpse)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawPlayerUnit> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerUnit {
    pub id: UnitId,
    pub name: String,
    pub area: u32,
    pub position: Position,
    pub stats: Stats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpse {
    pub found: bool,
    pub is_hovered: bool,
    pub position: Position,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub id: UnitId,
    pub class_id: u32,
    pub position: Position,
    pub is_hovered: bool,
    pub stats: Stats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: UnitId,
    pub class_id: u32,
    /// Raw storage location code
    pub location: u32,
    pub position: Position,
    pub is_hovered: bool,
    pub stats: Stats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<Item>,
}

impl Inventory {
    pub fn find(&self, id: UnitId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn hovered(&self) -> Option<&Item> {
        self.items.iter().find(|item| item.is_hovered)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldObject {
    pub id: UnitId,
    pub class_id: u32,
    pub position: Position,
    pub is_hovered: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrance {
    pub id: UnitId,
    pub class_id: u32,
    pub position: Position,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterMember {
    pub name: String,
    pub area: u32,
    pub position: Position,
}

/// Raw key binding block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings(pub Vec<u8>);
