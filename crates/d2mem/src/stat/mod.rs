//! Stat list decoding
//!
//! A stat list is a header pointing at a contiguous array of fixed-width
//! records (see `memory::layout::stat_list`). Decoding preserves record order
//! and applies the per-stat transforms from [`Transform`].

mod id;
mod transform;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::memory::layout::stat_list;
use crate::memory::{ByteBuffer, ReadMemory};

pub use id::StatId;
pub use transform::{Transform, apply_transform, transform_for};

/// One decoded stat entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    pub id: u16,
    pub layer: u16,
    /// Value after the stat's transform
    pub value: i32,
}

impl StatRecord {
    pub fn stat_id(&self) -> Option<StatId> {
        StatId::from_u16(self.id)
    }
}

/// Ordered stat records as they appear in memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stats(Vec<StatRecord>);

impl Stats {
    pub fn new(records: Vec<StatRecord>) -> Self {
        Self(records)
    }

    /// First record for a stat, on any layer
    pub fn find(&self, id: StatId) -> Option<&StatRecord> {
        self.0.iter().find(|r| r.id == id.code())
    }

    pub fn find_layer(&self, id: StatId, layer: u16) -> Option<&StatRecord> {
        self.0
            .iter()
            .find(|r| r.id == id.code() && r.layer == layer)
    }

    pub fn value(&self, id: StatId) -> Option<i32> {
        self.find(id).map(|r| r.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatRecord> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<StatRecord> {
        self.0
    }
}

/// Decode up to `count` records from a raw record array.
///
/// Only complete records are decoded, so a short buffer yields a shorter
/// list rather than garbage.
pub fn decode_records(buffer: &[u8], count: usize) -> Stats {
    let records = buffer
        .chunks_exact(stat_list::RECORD_SIZE)
        .take(count)
        .map(|chunk| {
            let record = ByteBuffer::new(chunk);
            let id = record.u16_at(stat_list::STAT_ID);
            let raw = record.i32_at(stat_list::VALUE);
            StatRecord {
                id,
                layer: record.u16_at(stat_list::LAYER),
                value: apply_transform(id, raw),
            }
        })
        .collect();
    Stats(records)
}

/// Read and decode the stat list whose header lives at `header_address`
pub fn read_stat_list<R: ReadMemory + ?Sized>(reader: &R, header_address: u64) -> Stats {
    if header_address == 0 {
        return Stats::default();
    }

    let header = reader.read_bytes(header_address, stat_list::HEADER_SIZE);
    let header = ByteBuffer::new(&header);
    let records_ptr = header.u64_at(stat_list::RECORDS_PTR);
    let count = header.u64_at(stat_list::RECORD_COUNT);

    if count == 0 || records_ptr == 0 {
        return Stats::default();
    }
    if count > stat_list::MAX_RECORDS {
        warn!(
            "Stat list at {:#x} reports {} records, ignoring",
            header_address, count
        );
        return Stats::default();
    }

    let count = count as usize;
    let buffer = reader.read_bytes(records_ptr, count * stat_list::RECORD_SIZE);
    decode_records(&buffer, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MockMemoryBuilder;

    fn record(layer: u16, id: StatId, raw: i32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8);
        bytes.extend_from_slice(&layer.to_le_bytes());
        bytes.extend_from_slice(&id.code().to_le_bytes());
        bytes.extend_from_slice(&raw.to_le_bytes());
        bytes
    }

    #[test]
    fn test_decode_preserves_order_and_transforms() {
        let buffer = [
            record(0, StatId::Strength, 80),
            record(0, StatId::Life, 2560),
            record(1, StatId::ColdLength, 250),
        ]
        .concat();

        let stats = decode_records(&buffer, 3);
        let ids: Vec<u16> = stats.iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                StatId::Strength.code(),
                StatId::Life.code(),
                StatId::ColdLength.code()
            ]
        );
        assert_eq!(stats.value(StatId::Strength), Some(80));
        assert_eq!(stats.value(StatId::Life), Some(10));
        assert_eq!(stats.find_layer(StatId::ColdLength, 1).unwrap().value, 10);
        assert!(stats.find_layer(StatId::ColdLength, 0).is_none());
    }

    #[test]
    fn test_decode_short_buffer() {
        let mut buffer = [
            record(0, StatId::Level, 90),
            record(0, StatId::Experience, 1),
        ]
        .concat();
        buffer.truncate(12);

        let stats = decode_records(&buffer, 2);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats.value(StatId::Level), Some(90));
    }

    #[test]
    fn test_read_stat_list_from_memory() {
        let records = [
            record(0, StatId::AttackRatingPerLevel, 5),
            record(0, StatId::ReplenishQuantity, 4),
            record(0, StatId::LevelRequirePercent, -3),
        ]
        .concat();
        let mem = MockMemoryBuilder::new()
            .u64(0x1000, 0x2000)
            .u64(0x1008, 3)
            .bytes(0x2000, records)
            .build();

        let stats = read_stat_list(&mem, 0x1000);
        assert_eq!(stats.len(), 3);
        assert_eq!(stats.value(StatId::AttackRatingPerLevel), Some(15));
        assert_eq!(stats.value(StatId::ReplenishQuantity), Some(1));
        assert_eq!(stats.value(StatId::LevelRequirePercent), Some(3));
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mem = MockMemoryBuilder::new()
            .u64(0x1000, 0x2000)
            .u64(0x1008, 0)
            .build();
        assert!(read_stat_list(&mem, 0x1000).is_empty());
    }

    #[test]
    fn test_unreadable_or_corrupt_header_is_empty() {
        let mem = MockMemoryBuilder::new()
            .u64(0x1000, 0x2000)
            .u64(0x1008, 1_000_000)
            .build();
        assert!(read_stat_list(&mem, 0x1000).is_empty());
        assert!(read_stat_list(&mem, 0x8000).is_empty());
        assert!(read_stat_list(&mem, 0).is_empty());
    }
}
