//! Snapshot orchestration
//!
//! [`GameReader`] composes the decoders into one [`Snapshot`] per poll.
//! Monsters, objects and the inventory are comparatively expensive to decode
//! and sit behind per-category TTLs; everything else is read fresh on every
//! call. Panel-tree backed queries are not part of a snapshot and have to be
//! asked for explicitly.

mod cache;
mod snapshot;

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};

pub use cache::CacheSlot;
pub use snapshot::{OnlineGame, QuestFlags, Snapshot};

use crate::character::{CharacterFlags, read_character_flags};
use crate::config::ReaderConfig;
use crate::error::Result;
use crate::memory::layout::{hover, ping, quests, text, ui};
use crate::memory::{ByteBuffer, ReadMemory};
use crate::offset::{OffsetResolver, Offsets};
use crate::stat::read_stat_list;
use crate::ui::{
    HoverTarget, MercOption, OpenMenus, PanelNode, PanelTree, parse_merc_entry, read_panel_tree,
};
use crate::unit::{
    Corpse, Inventory, Monster, NoUnits, PlayerUnit, PlayerUnits, UnitSource, WorldObject,
};
use crate::widget::{self, WidgetFlag};

const CHARACTER_LIST_PATH: [&str; 5] = [
    "CharacterSelectPanel",
    "Background",
    "CharacterList",
    "View",
    "Container",
];
const HIRE_LIST_PATH: [&str; 4] = ["HireMenuPanel", "ListContainer", "View", "Container"];

/// Reads game state from a [`ReadMemory`] through resolved offsets.
///
/// The reader owns its cache slots and is meant to be driven from a single
/// polling thread.
pub struct GameReader<R, O, U = NoUnits> {
    reader: R,
    resolver: O,
    units: U,
    config: ReaderConfig,
    offsets: Offsets,
    monsters: CacheSlot<Vec<Monster>>,
    inventory: CacheSlot<Inventory>,
    objects: CacheSlot<Vec<WorldObject>>,
}

impl<R, O, U> GameReader<R, O, U>
where
    R: ReadMemory,
    O: OffsetResolver,
    U: UnitSource,
{
    /// Resolve offsets once and set up empty caches
    pub fn new(reader: R, resolver: O, units: U, config: ReaderConfig) -> Result<Self> {
        let offsets = resolver.resolve()?;
        info!(
            "Offsets resolved (version: {}, unit table: {:#x})",
            offsets.version, offsets.unit_table
        );

        Ok(Self {
            reader,
            resolver,
            units,
            config,
            offsets,
            monsters: CacheSlot::default(),
            inventory: CacheSlot::default(),
            objects: CacheSlot::default(),
        })
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn units(&self) -> &U {
        &self.units
    }

    pub fn offsets(&self) -> &Offsets {
        &self.offsets
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Re-resolve offsets if the unit table reads as zero
    fn ensure_offsets(&mut self) {
        if self.offsets.is_resolved() {
            return;
        }

        match self.resolver.resolve() {
            Ok(offsets) => {
                info!(
                    "Re-resolved offsets (version: {}, unit table: {:#x})",
                    offsets.version, offsets.unit_table
                );
                self.offsets = offsets;
                self.monsters.invalidate();
                self.inventory.invalidate();
                self.objects.invalidate();
            }
            Err(e) => warn!("Failed to re-resolve offsets: {}", e),
        }
    }

    fn address(&self, offset: u64) -> u64 {
        Offsets::absolute(self.reader.base_address(), offset)
    }

    /// Start of the menu flag buffer, just before the UI offset
    fn menu_buffer_address(&self) -> u64 {
        match self.address(self.offsets.ui) {
            0 => 0,
            ui_base => ui_base.wrapping_sub(ui::MENU_BUFFER_BACKSTEP),
        }
    }

    pub fn snapshot(&mut self) -> Snapshot {
        self.snapshot_at(Instant::now())
    }

    /// Build a snapshot, judging cache ages against `now`
    pub fn snapshot_at(&mut self, now: Instant) -> Snapshot {
        self.ensure_offsets();

        let units = self.player_units();
        let player = self.player_unit(&units);
        let hover = self.hovered();
        let origin = player.position;

        let monsters = self
            .monsters
            .get_or_refresh(now, self.config.monsters_ttl, false, || {
                debug!("Refreshing monsters");
                self.units.monsters(&self.reader, &self.offsets, origin, &hover)
            })
            .clone();

        let inventory = self
            .inventory
            .get_or_refresh(now, self.config.inventory_ttl, hover.is_item(), || {
                debug!("Refreshing inventory (item hovered: {})", hover.is_item());
                self.units.inventory(&self.reader, &self.offsets, &units, &hover)
            })
            .clone();

        let objects = self
            .objects
            .get_or_refresh(now, self.config.objects_ttl, false, || {
                debug!("Refreshing objects");
                self.units.objects(&self.reader, &self.offsets, origin, &hover)
            })
            .clone();

        let corpse = units
            .corpse()
            .map(|unit| Corpse {
                found: unit.address != 0,
                is_hovered: unit.is_hovered,
                position: unit.position,
            })
            .unwrap_or_default();

        Snapshot {
            captured_at: Utc::now(),
            corpses: self.units.corpses(&self.reader, &self.offsets, origin, &hover),
            entrances: self.units.entrances(&self.reader, &self.offsets, origin, &hover),
            roster: self.units.roster(&self.reader, &self.offsets, &units),
            key_bindings: self.units.key_bindings(&self.reader, &self.offsets),
            open_menus: self.open_menus(),
            quests: self.quests(),
            game: self.online_game(),
            legacy_graphics: self.legacy_graphics(),
            is_ingame: self.is_ingame(),
            has_merc: self.has_merc(),
            active_weapon_slot: self.active_weapon_slot(),
            player,
            hover,
            corpse,
            monsters,
            inventory,
            objects,
        }
    }

    pub fn player_units(&self) -> PlayerUnits {
        self.units.player_units(&self.reader, &self.offsets)
    }

    /// The main player with its stat list decoded, or a default unit
    pub fn player_unit(&self, units: &PlayerUnits) -> PlayerUnit {
        let Some(raw) = units.main_player() else {
            return PlayerUnit::default();
        };

        PlayerUnit {
            id: raw.id,
            name: raw.name.clone(),
            area: raw.area,
            position: raw.position,
            stats: read_stat_list(&self.reader, raw.stat_list),
        }
    }

    /// Decode the inventory now, bypassing the cache
    pub fn inventory(&self) -> Inventory {
        let units = self.player_units();
        let hover = self.hovered();
        self.units.inventory(&self.reader, &self.offsets, &units, &hover)
    }

    pub fn hovered(&self) -> HoverTarget {
        let address = self.address(self.offsets.hover);
        if address == 0 {
            return HoverTarget::default();
        }
        let bytes = self.reader.read_bytes(address, hover::SIZE);
        HoverTarget::decode(ByteBuffer::new(&bytes))
    }

    pub fn open_menus(&self) -> OpenMenus {
        let address = self.menu_buffer_address();
        if address == 0 {
            return OpenMenus::default();
        }
        let buffer = self.reader.read_bytes(address, ui::MENU_BUFFER_SIZE);
        let map_byte = self.reader.read_u8(self.address(self.offsets.ui));
        OpenMenus::decode(ByteBuffer::new(&buffer), map_byte)
    }

    /// The game's own in-game flag
    pub fn is_ingame(&self) -> bool {
        let address = self.menu_buffer_address();
        address != 0 && self.reader.read_u8(address.wrapping_add(ui::IN_GAME as u64)) == 1
    }

    /// A main player with a plausible id, position and area exists
    pub fn in_game(&self) -> bool {
        let units = self.player_units();
        units.main_player().is_some_and(|player| {
            player.id.0 > 0 && player.position.x > 0 && player.position.y > 0 && player.area > 0
        })
    }

    pub fn has_merc(&self) -> bool {
        let address = self.address(self.offsets.ui);
        address != 0 && self.reader.read_u8(address.wrapping_add(ui::HAS_MERC)) != 0
    }

    pub fn legacy_graphics(&self) -> bool {
        let address = self.address(self.offsets.legacy_graphics);
        address != 0 && self.reader.read_u8(address) != 0
    }

    pub fn fps(&self) -> u32 {
        match self.address(self.offsets.fps) {
            0 => 0,
            address => self.reader.read_u32(address),
        }
    }

    pub fn ping(&self) -> u32 {
        let slot = self.address(self.offsets.ping);
        if slot == 0 {
            return 0;
        }
        match self.reader.read_ptr(slot) {
            0 => 0,
            stats => self.reader.read_u32(stats.wrapping_add(ping::VALUE)),
        }
    }

    fn game_string(&self, offset: u64) -> String {
        match self.address(offset) {
            0 => String::new(),
            address => self.reader.read_string(address, text::MAX_GAME_STRING),
        }
    }

    pub fn last_game_name(&self) -> String {
        self.game_string(self.offsets.last_game_name)
    }

    pub fn last_game_password(&self) -> String {
        self.game_string(self.offsets.last_game_password)
    }

    pub fn selected_character_name(&self) -> String {
        self.game_string(self.offsets.selected_character_name)
    }

    pub fn online_game(&self) -> OnlineGame {
        OnlineGame {
            last_game_name: self.last_game_name(),
            last_game_password: self.last_game_password(),
            fps: self.fps(),
            ping: self.ping(),
        }
    }

    pub fn quests(&self) -> QuestFlags {
        let slot = self.address(self.offsets.quest_info);
        if slot == 0 {
            return QuestFlags::default();
        }
        let quest_data = self.reader.read_ptr(slot);
        if quest_data == 0 {
            return QuestFlags::default();
        }
        match self.reader.read_ptr(quest_data) {
            0 => QuestFlags::default(),
            buffer => QuestFlags::new(self.reader.read_bytes(buffer, quests::BUFFER_SIZE)),
        }
    }

    /// State byte for a widget flag key; `None` when the table or the key is absent
    pub fn widget_state(&self, key: u64) -> Option<u8> {
        match self.address(self.offsets.widget_states) {
            0 => None,
            slot => widget::lookup(&self.reader, slot, key),
        }
    }

    /// 0 for the primary weapon set, 1 for the secondary
    pub fn active_weapon_slot(&self) -> u8 {
        self.widget_state(WidgetFlag::WeaponSwap.key()).unwrap_or(0)
    }

    pub fn character_flags(&self, name: &str) -> Result<CharacterFlags> {
        read_character_flags(&self.reader, self.address(self.offsets.char_data), name)
    }

    /// Decode the full panel tree
    pub fn panels(&self) -> PanelTree {
        read_panel_tree(&self.reader, self.address(self.offsets.panel_manager))
    }

    /// Resolve a panel path; the empty sentinel when any step is missing
    pub fn panel<S: AsRef<str>>(&self, path: &[S]) -> PanelNode {
        self.panels().take(path)
    }

    fn panel_active(&self, path: &[&str]) -> bool {
        self.panels().resolve(path).is_active()
    }

    pub fn is_online(&self) -> bool {
        self.panel_active(&["MainMenuPanel", "SecondaryContextButton"])
    }

    pub fn in_lobby(&self) -> bool {
        self.panel_active(&["LobbyBackgroundPanel"])
    }

    pub fn in_character_selection(&self) -> bool {
        self.panel_active(&["CharacterSelectPanel"])
    }

    pub fn in_character_creation(&self) -> bool {
        self.panel_active(&["CharacterCreatePanel"])
    }

    /// A blocking popup or an error modal is up
    pub fn is_blocking(&self) -> bool {
        let tree = self.panels();
        tree.resolve(&["BlockingPanel"]).is_active()
            || tree.resolve(&["DismissableModal"]).is_active()
    }

    /// Whether the error modal is showing, and its prompt text
    pub fn dismissable_modal(&self) -> (bool, String) {
        let modal = self.panel(&["DismissableModal"]);
        if modal.is_empty() {
            return (false, String::new());
        }
        let prompt = modal.descend(&["Frame", "Prompt"]).extra_text3.clone();
        (modal.is_active(), prompt)
    }

    /// Character names in list order, as shown on the selection screen
    pub fn character_list(&self) -> Vec<String> {
        let container = self.panel(&CHARACTER_LIST_PATH);
        (0..container.num_children)
            .map(|i| {
                container
                    .child(&format!("ListItem{i}"))
                    .child("Name")
                    .extra_text3
                    .clone()
            })
            .collect()
    }

    /// Parse the hire menu. Entries that do not parse are skipped.
    pub fn merc_list(&self) -> Vec<MercOption> {
        let container = self.panel(&HIRE_LIST_PATH);
        (0..container.num_children)
            .filter_map(|i| {
                let text = &container
                    .child(&format!("ListItem{i}"))
                    .child("TextBox")
                    .extra_text3;
                parse_merc_entry(i, text)
            })
            .collect()
    }
}
