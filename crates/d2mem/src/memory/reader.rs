use super::buffer::{ByteBuffer, Width};

/// Chunk size used when scanning for a string terminator
const STRING_CHUNK: usize = 32;

/// Read access to the target process's address space.
///
/// This is the only place absolute addresses are dereferenced. Reads never
/// fail loudly: an unmapped page, a terminated process or a revoked handle
/// all surface as a short (possibly empty) byte vector, which the decoders
/// treat as empty/default state.
pub trait ReadMemory {
    /// Base address of the game's main module
    fn base_address(&self) -> u64;

    /// Read up to `len` bytes at `address`.
    ///
    /// Returns fewer bytes than requested when the range is only partially
    /// readable, and an empty vector when nothing could be read.
    fn read_bytes(&self, address: u64, len: usize) -> Vec<u8>;

    fn read_uint(&self, address: u64, width: Width) -> u64 {
        let bytes = self.read_bytes(address, width.len());
        ByteBuffer::new(&bytes).uint_at(0, width)
    }

    fn read_u8(&self, address: u64) -> u8 {
        self.read_uint(address, Width::U8) as u8
    }

    fn read_u16(&self, address: u64) -> u16 {
        self.read_uint(address, Width::U16) as u16
    }

    fn read_u32(&self, address: u64) -> u32 {
        self.read_uint(address, Width::U32) as u32
    }

    fn read_i32(&self, address: u64) -> i32 {
        self.read_u32(address) as i32
    }

    fn read_u64(&self, address: u64) -> u64 {
        self.read_uint(address, Width::U64)
    }

    /// Read a pointer-sized value (the target is 64-bit)
    fn read_ptr(&self, address: u64) -> u64 {
        self.read_u64(address)
    }

    /// Read an array of `count` pointers; a short read yields fewer entries
    fn read_ptr_array(&self, address: u64, count: usize) -> Vec<u64> {
        if address == 0 || count == 0 {
            return Vec::new();
        }
        self.read_bytes(address, count.saturating_mul(8))
            .chunks_exact(8)
            .map(|chunk| ByteBuffer::new(chunk).u64_at(0))
            .collect()
    }

    /// Read a NUL-terminated string of at most `max_len` bytes.
    ///
    /// The string is read in small chunks so one ending just before an
    /// unmapped page still decodes. Invalid UTF-8 is replaced lossily.
    fn read_string(&self, address: u64, max_len: usize) -> String {
        let mut out = Vec::new();
        let mut cursor = address;

        while out.len() < max_len {
            let want = STRING_CHUNK.min(max_len - out.len());
            let chunk = self.read_bytes(cursor, want);
            if chunk.is_empty() {
                break;
            }
            if let Some(nul) = memchr::memchr(0, &chunk) {
                out.extend_from_slice(&chunk[..nul]);
                break;
            }
            out.extend_from_slice(&chunk);
            if chunk.len() < want {
                break;
            }
            cursor = cursor.wrapping_add(chunk.len() as u64);
        }

        String::from_utf8_lossy(&out).into_owned()
    }
}

impl<T: ReadMemory + ?Sized> ReadMemory for &T {
    fn base_address(&self) -> u64 {
        (**self).base_address()
    }

    fn read_bytes(&self, address: u64, len: usize) -> Vec<u8> {
        (**self).read_bytes(address, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MockMemoryBuilder;

    #[test]
    fn test_read_integers() {
        let mem = MockMemoryBuilder::new()
            .u16(0x1000, 0xBEEF)
            .u32(0x1010, 0xDEAD_BEEF)
            .u64(0x1020, 0x0123_4567_89AB_CDEF)
            .build();

        assert_eq!(mem.read_u16(0x1000), 0xBEEF);
        assert_eq!(mem.read_u8(0x1000), 0xEF);
        assert_eq!(mem.read_u32(0x1010), 0xDEAD_BEEF);
        assert_eq!(mem.read_i32(0x1010), 0xDEAD_BEEFu32 as i32);
        assert_eq!(mem.read_u64(0x1020), 0x0123_4567_89AB_CDEF);
        assert_eq!(mem.read_uint(0x1020, Width::U32), 0x89AB_CDEF);
    }

    #[test]
    fn test_unmapped_reads_zero() {
        let mem = MockMemoryBuilder::new().u8(0x2000, 7).build();
        assert_eq!(mem.read_u64(0x9000), 0);
        // half-mapped value is a short read, decoded as zero
        assert_eq!(mem.read_u16(0x2000), 0);
        assert!(mem.read_bytes(0x9000, 16).is_empty());
    }

    #[test]
    fn test_read_ptr_array() {
        let mem = MockMemoryBuilder::new()
            .u64(0x6000, 0xA0)
            .u64(0x6008, 0)
            .u64(0x6010, 0xC0)
            .build();
        assert_eq!(mem.read_ptr_array(0x6000, 3), vec![0xA0, 0, 0xC0]);
        // only the mapped prefix comes back
        assert_eq!(mem.read_ptr_array(0x6000, 5).len(), 3);
        assert!(mem.read_ptr_array(0, 3).is_empty());
    }

    #[test]
    fn test_read_string_stops_at_nul() {
        let mem = MockMemoryBuilder::new()
            .string(0x3000, "Sorceress")
            .u8(0x300A, b'X')
            .build();
        assert_eq!(mem.read_string(0x3000, 64), "Sorceress");
    }

    #[test]
    fn test_read_string_respects_max_len() {
        let long = "A".repeat(80);
        let mem = MockMemoryBuilder::new().string(0x4000, &long).build();
        assert_eq!(mem.read_string(0x4000, 40), "A".repeat(40));
        assert_eq!(mem.read_string(0x4000, 0), "");
    }

    #[test]
    fn test_read_string_before_unmapped_page() {
        // no terminator: the string runs straight into unmapped memory
        let mem = MockMemoryBuilder::new().bytes(0x5000, b"Amazon".to_vec()).build();
        assert_eq!(mem.read_string(0x5000, 64), "Amazon");
    }
}
