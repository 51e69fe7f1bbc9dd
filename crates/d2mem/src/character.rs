//! Character summary records
//!
//! The game keeps one summary record per character on the account, reached
//! through a bounded pointer array:
//!
//! ```text
//! header (16 bytes)          record
//! 0x00  array ptr  u64       0x010  name   char[]
//! 0x08  count      i64       0x122  flags  u16
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::memory::layout::char_data;
use crate::memory::{ByteBuffer, ReadMemory};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CharacterFlags {
    pub hardcore: bool,
    pub has_ever_died: bool,
    pub expansion: bool,
    pub ladder: bool,
}

impl CharacterFlags {
    pub fn from_bits(bits: u16) -> Self {
        Self {
            hardcore: bits & char_data::FLAG_HARDCORE != 0,
            has_ever_died: bits & char_data::FLAG_DEAD != 0,
            expansion: bits & char_data::FLAG_EXPANSION != 0,
            ladder: bits & char_data::FLAG_LADDER != 0,
        }
    }
}

/// Find the record named `name` (exact, case-sensitive) and decode its flags.
///
/// `header_address` is the absolute address of the array header. Fails with
/// [`Error::CorruptMetadata`] when the header holds a null array or a count
/// outside `1..=47`, and with [`Error::CharacterNotFound`] when no record
/// matches.
pub fn read_character_flags<R: ReadMemory + ?Sized>(
    reader: &R,
    header_address: u64,
    name: &str,
) -> Result<CharacterFlags> {
    if header_address == 0 {
        return Err(Error::InvalidOffset(
            "character data pointer is invalid".to_string(),
        ));
    }

    let header = reader.read_bytes(header_address, char_data::HEADER_SIZE);
    if header.len() < char_data::HEADER_SIZE {
        return Err(Error::MemoryReadFailed {
            address: header_address,
            message: format!(
                "character data header: read {} of {} bytes",
                header.len(),
                char_data::HEADER_SIZE
            ),
        });
    }

    let header = ByteBuffer::new(&header);
    let array_ptr = header.u64_at(char_data::ARRAY_PTR);
    let count = header.i64_at(char_data::COUNT);

    if array_ptr == 0 || count <= 0 || count > char_data::MAX_COUNT {
        return Err(Error::CorruptMetadata { array_ptr, count });
    }

    for record in reader.read_ptr_array(array_ptr, count as usize) {
        if record == 0 {
            continue;
        }

        let record_name =
            reader.read_string(record.wrapping_add(char_data::NAME), char_data::MAX_NAME_LEN);
        if record_name == name {
            let bits = reader.read_u16(record.wrapping_add(char_data::FLAGS));
            debug!("Character {} flags: {:#06x}", name, bits);
            return Ok(CharacterFlags::from_bits(bits));
        }
    }

    Err(Error::CharacterNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MockMemory, MockMemoryBuilder};

    const HEADER: u64 = 0x100;
    const ARRAY: u64 = 0x1000;

    fn record(builder: MockMemoryBuilder, addr: u64, name: &str, bits: u16) -> MockMemoryBuilder {
        builder
            .string(addr + char_data::NAME, name)
            .u16(addr + char_data::FLAGS, bits)
    }

    fn header(builder: MockMemoryBuilder, array_ptr: u64, count: i64) -> MockMemoryBuilder {
        builder.u64(HEADER, array_ptr).i64(HEADER + 8, count)
    }

    #[test]
    fn test_flag_bits() {
        let flags = CharacterFlags::from_bits(0x04 | 0x20);
        assert!(flags.hardcore);
        assert!(flags.expansion);
        assert!(!flags.has_ever_died);
        assert!(!flags.ladder);

        let all = CharacterFlags::from_bits(0xFFFF);
        assert!(all.hardcore && all.has_ever_died && all.expansion && all.ladder);
    }

    #[test]
    fn test_find_by_name() {
        let builder = header(MockMemory::builder(), ARRAY, 2)
            .u64(ARRAY, 0x2000)
            .u64(ARRAY + 8, 0x3000);
        let builder = record(builder, 0x2000, "Sorc", 0x40);
        let reader = record(builder, 0x3000, "Pally", 0x04 | 0x20).build();

        let flags = read_character_flags(&reader, HEADER, "Pally").unwrap();
        assert_eq!(flags, CharacterFlags::from_bits(0x24));
        assert!(read_character_flags(&reader, HEADER, "Sorc").unwrap().ladder);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let builder = header(MockMemory::builder(), ARRAY, 1).u64(ARRAY, 0x2000);
        let reader = record(builder, 0x2000, "Pally", 0x04).build();

        let err = read_character_flags(&reader, HEADER, "pally").unwrap_err();
        assert!(matches!(err, Error::CharacterNotFound(ref n) if n == "pally"));
    }

    #[test]
    fn test_null_slot_is_skipped() {
        let builder = header(MockMemory::builder(), ARRAY, 2)
            .u64(ARRAY, 0)
            .u64(ARRAY + 8, 0x3000);
        let reader = record(builder, 0x3000, "Necro", 0x08).build();

        let flags = read_character_flags(&reader, HEADER, "Necro").unwrap();
        assert!(flags.has_ever_died);
    }

    #[test]
    fn test_count_out_of_range_is_corrupt() {
        let too_many = header(MockMemory::builder(), ARRAY, 48).build();
        let err = read_character_flags(&too_many, HEADER, "Any").unwrap_err();
        assert!(err.is_corrupt_metadata());
        assert!(err.to_string().contains("count=48"));

        let zero = header(MockMemory::builder(), ARRAY, 0).build();
        assert!(read_character_flags(&zero, HEADER, "Any")
            .unwrap_err()
            .is_corrupt_metadata());

        let negative = header(MockMemory::builder(), ARRAY, -1).build();
        assert!(read_character_flags(&negative, HEADER, "Any")
            .unwrap_err()
            .is_corrupt_metadata());
    }

    #[test]
    fn test_null_array_is_corrupt() {
        let reader = header(MockMemory::builder(), 0, 3).build();
        let err = read_character_flags(&reader, HEADER, "Any").unwrap_err();
        assert!(matches!(err, Error::CorruptMetadata { array_ptr: 0, count: 3 }));
    }

    #[test]
    fn test_max_count_is_accepted() {
        let reader = header(MockMemory::builder(), ARRAY, 47)
            .zeroed(ARRAY, 47 * 8)
            .build();
        let err = read_character_flags(&reader, HEADER, "Any").unwrap_err();
        assert!(matches!(err, Error::CharacterNotFound(_)));
    }

    #[test]
    fn test_short_header_fails() {
        let reader = MockMemory::builder().u64(HEADER, ARRAY).build();
        let err = read_character_flags(&reader, HEADER, "Any").unwrap_err();
        assert!(matches!(err, Error::MemoryReadFailed { address: HEADER, .. }));

        let err = read_character_flags(&reader, 0, "Any").unwrap_err();
        assert!(matches!(err, Error::InvalidOffset(_)));
    }
}
