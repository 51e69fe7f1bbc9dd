//! # d2mem
//!
//! Reads a structured snapshot of Diablo II: Resurrected's state straight
//! out of the game's memory.
//!
//! This crate provides:
//! - A narrow memory access boundary (`ReadMemory`) with a Windows process
//!   backend
//! - Offsets loaded from JSON and re-resolved when they go stale
//! - Stat list decoding with per-stat value transforms
//! - UI panel tree decoding with name-path lookup
//! - Widget state lookups through the game's internal hash table
//! - Character summary flag decoding
//! - A TTL-caching snapshot orchestrator (`GameReader`)
//!
//! ```ignore
//! use d2mem::prelude::*;
//!
//! let process = ProcessHandle::find_and_open("D2R.exe")?;
//! let resolver = FileOffsetResolver::new("offsets.json");
//! let mut game = GameReader::new(process, resolver, NoUnits, ReaderConfig::default())?;
//! let snapshot = game.snapshot();
//! ```

pub mod character;
pub mod config;
pub mod error;
pub mod memory;
pub mod offset;
pub mod prelude;
pub mod reader;
pub mod stat;
pub mod ui;
pub mod unit;
pub mod widget;

pub use character::{CharacterFlags, read_character_flags};
pub use config::{ReaderConfig, ReaderConfigBuilder};
pub use error::{Error, Result};
#[cfg(target_os = "windows")]
pub use memory::ProcessHandle;
pub use memory::{ByteBuffer, DEFAULT_PROCESS_NAME, ReadMemory, Width};
pub use offset::{FileOffsetResolver, OffsetResolver, Offsets, load_offsets, save_offsets};
pub use reader::{CacheSlot, GameReader, OnlineGame, QuestFlags, Snapshot};
pub use stat::{StatId, StatRecord, Stats, Transform, apply_transform, read_stat_list};
pub use ui::{
    HoverTarget, MercOption, MercSkill, OpenMenus, PanelNode, PanelTree, parse_merc_entry,
    read_panel_tree,
};
pub use unit::{
    Corpse, Entrance, Inventory, Item, KeyBindings, Monster, NoUnits, PlayerUnit, PlayerUnits,
    Position, RawPlayerUnit, RosterMember, UnitId, UnitSource, UnitType, WorldObject,
};
pub use widget::{WidgetFlag, bucket_index, mix_flag};
