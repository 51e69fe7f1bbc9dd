//! Widget state lookups
//!
//! The game keeps per-widget UI state in an open-chaining hash table keyed by
//! 64-bit flags. [`lookup`] replays the game's own lookup over foreign memory:
//! the same finalizer mix, power-of-two bucket masking and chain walk.
//!
//! ```text
//! table slot -> header { capacity, buckets }
//! buckets[(capacity - 1) & mix(key)] -> entry { next, key, holder }
//! holder + 0x10 -> value ptr -> u8
//! ```

use serde::Serialize;
use strum::{Display, EnumString, FromRepr, IntoStaticStr};
use tracing::debug;

use crate::memory::ReadMemory;
use crate::memory::layout::widget_table as layout;

const MIX_C1: u64 = 0xFF51_AFD7_ED55_8CCD;
const MIX_C2: u64 = 0xC4CE_B9FE_1A85_EC53;

/// Known widget state keys
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
#[repr(u64)]
pub enum WidgetFlag {
    /// Active weapon set (0 = primary, 1 = secondary)
    WeaponSwap = 0xF2D7_CF8E_9CC0_8212,
}

impl WidgetFlag {
    pub fn key(self) -> u64 {
        self as u64
    }

    pub fn from_key(key: u64) -> Option<Self> {
        Self::from_repr(key)
    }
}

/// Two-round 64-bit avalanche finalizer used by the game's table
pub const fn mix_flag(flag: u64) -> u64 {
    let mut h = flag ^ (flag >> 33);
    h = h.wrapping_mul(MIX_C1);
    h ^= h >> 33;
    h = h.wrapping_mul(MIX_C2);
    h ^ (h >> 33)
}

/// Bucket for a mixed key. `capacity` is a power of two.
pub const fn bucket_index(mixed: u64, capacity: u64) -> u64 {
    capacity.wrapping_sub(1) & mixed
}

/// Look up the state byte stored for `key`.
///
/// `table_slot` is the absolute address holding the table pointer. Returns
/// `None` when the table, its buckets or the value chain are absent, or when
/// no entry carries the key.
pub fn lookup<R: ReadMemory + ?Sized>(reader: &R, table_slot: u64, key: u64) -> Option<u8> {
    let table = reader.read_ptr(table_slot);
    if table == 0 {
        return None;
    }

    let buckets = reader.read_ptr(table.wrapping_add(layout::BUCKETS_PTR));
    if buckets == 0 {
        return None;
    }

    let capacity = reader.read_u64(table.wrapping_add(layout::CAPACITY));
    if capacity == 0 {
        return None;
    }

    let bucket = bucket_index(mix_flag(key), capacity);

    // `link` is the address of the pointer that led to `entry`: the bucket
    // slot for the head, otherwise the previous entry's next field. On a match
    // it therefore dereferences to the matched entry; on a miss to null.
    let mut link = buckets.wrapping_add(bucket.wrapping_mul(layout::BUCKET_SIZE));
    let mut entry = reader.read_ptr(link);
    let mut steps = 0;

    while entry != 0 {
        if reader.read_u64(entry.wrapping_add(layout::ENTRY_KEY)) == key {
            break;
        }
        steps += 1;
        if steps >= layout::MAX_CHAIN {
            debug!("Widget chain for {:#x} exceeded {} entries", key, layout::MAX_CHAIN);
            return None;
        }
        link = entry.wrapping_add(layout::ENTRY_NEXT);
        entry = reader.read_ptr(link);
    }

    let resolved = reader.read_ptr(link);
    if resolved == 0 {
        return None;
    }

    let holder = reader.read_ptr(resolved.wrapping_add(layout::ENTRY_HOLDER));
    if holder == 0 {
        return None;
    }
    let value = reader.read_ptr(holder.wrapping_add(layout::HOLDER_VALUE));
    if value == 0 {
        return None;
    }

    Some(reader.read_u8(value))
}
