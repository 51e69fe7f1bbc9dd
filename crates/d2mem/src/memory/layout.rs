//! Memory layout constants for Diablo II: Resurrected data structures
//!
//! This module centralizes every reverse-engineered byte offset used by the
//! decoders. Constants are grouped by structure. Offsets marked "relative to
//! `Offsets::x`" are added to the module base plus that named offset;
//! everything else is relative to the start of the structure itself.

/// Hover slot (12 bytes at `Offsets::hover`)
pub mod hover {
    pub const SIZE: usize = 12;

    /// u16, non-zero while a unit is under the cursor
    pub const IS_HOVERED: usize = 0x00;
    /// u32 unit type
    pub const UNIT_TYPE: usize = 0x04;
    /// u32 unit id
    pub const UNIT_ID: usize = 0x08;
}

/// UI state block around `Offsets::ui`
pub mod ui {
    /// The menu flag buffer starts this many bytes before `Offsets::ui`
    pub const MENU_BUFFER_BACKSTEP: u64 = 0xA;
    pub const MENU_BUFFER_SIZE: usize = 0x16D;

    /// Byte at the start of the menu buffer: 1 while in game
    pub const IN_GAME: usize = 0x00;
    /// Relative to `Offsets::ui`
    pub const HAS_MERC: u64 = 0x08;

    // Offsets into the menu flag buffer
    pub const INVENTORY: usize = 0x01;
    pub const CHARACTER: usize = 0x02;
    pub const SKILL_SELECT: usize = 0x03;
    pub const SKILL_TREE: usize = 0x04;
    pub const CHAT_OPEN: usize = 0x05;
    pub const NEW_STATS: usize = 0x06;
    pub const NEW_SKILLS: usize = 0x07;
    pub const NPC_INTERACT: usize = 0x08;
    pub const QUIT_MENU: usize = 0x09;
    pub const NPC_SHOP: usize = 0x0B;
    pub const ANVIL: usize = 0x0D;
    pub const QUEST_LOG: usize = 0x0E;
    pub const CINEMATIC: usize = 0x11;
    pub const WAYPOINT: usize = 0x13;
    pub const STASH: usize = 0x18;
    pub const CUBE: usize = 0x19;
    pub const BELT_ROWS: usize = 0x1A;
    pub const PORTRAITS_SHOWN: usize = 0x1D;
    pub const MERC_INVENTORY: usize = 0x1E;
    pub const LOADING_SCREEN: usize = 0x168;
}

/// Stat list header and records
///
/// ```text
/// Header (0x10 bytes)           Record (8 bytes)
/// 0x00  records ptr   u64       0x00  layer  u16
/// 0x08  record count  u64       0x02  stat   u16
///                               0x04  value  i32
/// ```
pub mod stat_list {
    pub const HEADER_SIZE: usize = 0x10;
    pub const RECORDS_PTR: usize = 0x00;
    pub const RECORD_COUNT: usize = 0x08;

    pub const RECORD_SIZE: usize = 8;
    pub const LAYER: usize = 0x00;
    pub const STAT_ID: usize = 0x02;
    pub const VALUE: usize = 0x04;

    /// Counts above this are treated as corrupt metadata
    pub const MAX_RECORDS: u64 = 1024;
}

/// Panel manager, pointed to by `Offsets::panel_manager`
pub mod panel_manager {
    /// Pointer to the array of top-level panel pointers
    pub const ROOTS_PTR: u64 = 0x58;
    /// u64 number of top-level panels
    pub const ROOTS_COUNT: u64 = 0x60;
}

/// A single UI widget node
///
/// ```text
/// Offset   Field              Size
/// ─────────────────────────────────
/// 0x08     name ptr           8
/// 0x10     name length        8
/// 0x50     enabled            1
/// 0x51     visible            1
/// 0x60     children ptr       8
/// 0x68     children count     8
/// 0x78     extra text ptr     8
/// 0x80     extra text 2 ptr   8
/// 0x88     extra text 3 ptr   8
/// ```
pub mod panel {
    pub const NODE_SIZE: usize = 0x90;

    pub const NAME_PTR: usize = 0x08;
    pub const NAME_LEN: usize = 0x10;
    pub const ENABLED: usize = 0x50;
    pub const VISIBLE: usize = 0x51;
    pub const CHILDREN_PTR: usize = 0x60;
    pub const CHILDREN_COUNT: usize = 0x68;
    pub const EXTRA_TEXT_PTR: usize = 0x78;
    pub const EXTRA_TEXT2_PTR: usize = 0x80;
    pub const EXTRA_TEXT3_PTR: usize = 0x88;

    pub const MAX_NAME_LEN: usize = 128;
    pub const MAX_TEXT_LEN: usize = 1024;
    pub const MAX_CHILDREN: u64 = 512;
    pub const MAX_DEPTH: usize = 32;
}

/// Widget state hash table, pointed to by `Offsets::widget_states`
///
/// ```text
/// Header                 Entry
/// 0x00  capacity  u64    0x00  next   ptr
/// 0x08  buckets   ptr    0x08  key    u64
///                        0x10  holder ptr -> +0x10 value ptr -> u8
/// ```
pub mod widget_table {
    pub const CAPACITY: u64 = 0x00;
    pub const BUCKETS_PTR: u64 = 0x08;
    pub const BUCKET_SIZE: u64 = 8;

    pub const ENTRY_NEXT: u64 = 0x00;
    pub const ENTRY_KEY: u64 = 0x08;
    pub const ENTRY_HOLDER: u64 = 0x10;
    pub const HOLDER_VALUE: u64 = 0x10;

    /// Hard stop for chain walks over foreign memory
    pub const MAX_CHAIN: usize = 4096;
}

/// Character summary array at `Offsets::char_data`
pub mod char_data {
    pub const HEADER_SIZE: usize = 16;
    pub const ARRAY_PTR: usize = 0x00;
    /// i64 entry count
    pub const COUNT: usize = 0x08;
    pub const MAX_COUNT: i64 = 47;

    /// Offsets within a character record
    pub const NAME: u64 = 0x010;
    pub const FLAGS: u64 = 0x122;
    pub const MAX_NAME_LEN: usize = 64;

    pub const FLAG_HARDCORE: u16 = 0x04;
    pub const FLAG_DEAD: u16 = 0x08;
    pub const FLAG_EXPANSION: u16 = 0x20;
    pub const FLAG_LADDER: u16 = 0x40;
}

/// Network latency structure, pointed to by `Offsets::ping`
pub mod ping {
    pub const VALUE: u64 = 36;
}

/// Quest flag buffer reached through `Offsets::quest_info`
pub mod quests {
    pub const BUFFER_SIZE: usize = 82;
}

/// Generic string limits
pub mod text {
    pub const MAX_GAME_STRING: usize = 64;
}
