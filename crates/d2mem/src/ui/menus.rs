use serde::Serialize;

use crate::memory::ByteBuffer;
use crate::memory::layout::ui;

/// Which in-game menus are currently open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpenMenus {
    pub inventory: bool,
    pub character: bool,
    pub skill_select: bool,
    pub skill_tree: bool,
    pub chat_open: bool,
    pub new_stats: bool,
    pub new_skills: bool,
    pub npc_interact: bool,
    pub quit_menu: bool,
    pub npc_shop: bool,
    pub anvil: bool,
    pub quest_log: bool,
    pub cinematic: bool,
    pub waypoint: bool,
    pub stash: bool,
    pub cube: bool,
    pub belt_rows: bool,
    pub portraits_shown: bool,
    pub merc_inventory: bool,
    pub loading_screen: bool,
    pub map_shown: bool,
}

impl OpenMenus {
    /// Decode the menu flag buffer read from `ui - 0xA`.
    ///
    /// `map_byte` is the separate byte at `ui` itself.
    pub fn decode(buffer: ByteBuffer<'_>, map_byte: u8) -> Self {
        Self {
            inventory: buffer.flag_at(ui::INVENTORY),
            character: buffer.flag_at(ui::CHARACTER),
            skill_select: buffer.flag_at(ui::SKILL_SELECT),
            skill_tree: buffer.flag_at(ui::SKILL_TREE),
            chat_open: buffer.flag_at(ui::CHAT_OPEN),
            new_stats: buffer.flag_at(ui::NEW_STATS),
            new_skills: buffer.flag_at(ui::NEW_SKILLS),
            npc_interact: buffer.flag_at(ui::NPC_INTERACT),
            quit_menu: buffer.flag_at(ui::QUIT_MENU),
            npc_shop: buffer.flag_at(ui::NPC_SHOP),
            anvil: buffer.flag_at(ui::ANVIL),
            quest_log: buffer.flag_at(ui::QUEST_LOG),
            cinematic: buffer.flag_at(ui::CINEMATIC),
            waypoint: buffer.flag_at(ui::WAYPOINT),
            stash: buffer.flag_at(ui::STASH),
            cube: buffer.flag_at(ui::CUBE),
            belt_rows: buffer.flag_at(ui::BELT_ROWS),
            portraits_shown: buffer.flag_at(ui::PORTRAITS_SHOWN),
            merc_inventory: buffer.flag_at(ui::MERC_INVENTORY),
            loading_screen: buffer.flag_at(ui::LOADING_SCREEN),
            map_shown: map_byte != 0,
        }
    }

    /// True if any menu that takes over the screen is open
    pub fn is_menu_open(&self) -> bool {
        self.inventory
            || self.character
            || self.skill_tree
            || self.npc_interact
            || self.npc_shop
            || self.quit_menu
            || self.stash
            || self.waypoint
            || self.cube
            || self.anvil
            || self.quest_log
            || self.merc_inventory
    }
}
