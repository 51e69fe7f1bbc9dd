use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::memory::ByteBuffer;
use crate::ui::{HoverTarget, OpenMenus};
use crate::unit::{
    Corpse, Entrance, Inventory, KeyBindings, Monster, PlayerUnit, RosterMember, WorldObject,
};

/// Connection details of the current or last online game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OnlineGame {
    pub last_game_name: String,
    pub last_game_password: String,
    pub fps: u32,
    /// Round-trip latency in milliseconds
    pub ping: u32,
}

/// Raw quest progress buffer, one 16-bit word per quest slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestFlags(Vec<u8>);

impl QuestFlags {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Status word of quest slot `index`, zero when outside the buffer
    pub fn word(&self, index: usize) -> u16 {
        ByteBuffer::new(&self.0).u16_at(index * 2)
    }
}

/// One decoded view of the game state
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub captured_at: DateTime<Utc>,
    pub player: PlayerUnit,
    pub hover: HoverTarget,
    pub corpse: Corpse,
    pub monsters: Vec<Monster>,
    pub corpses: Vec<Monster>,
    pub inventory: Inventory,
    pub objects: Vec<WorldObject>,
    pub entrances: Vec<Entrance>,
    pub roster: Vec<RosterMember>,
    pub open_menus: OpenMenus,
    pub quests: QuestFlags,
    pub key_bindings: KeyBindings,
    pub game: OnlineGame,
    pub legacy_graphics: bool,
    pub is_ingame: bool,
    pub has_merc: bool,
    pub active_weapon_slot: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quest_words() {
        let flags = QuestFlags::new(vec![0x01, 0x10, 0x00, 0x00, 0x22]);
        assert_eq!(flags.word(0), 0x1001);
        assert_eq!(flags.word(1), 0);
        // a trailing half word reads as zero
        assert_eq!(flags.word(2), 0);
        assert!(QuestFlags::default().is_empty());
    }
}
