/// Width of an unsigned integer read from foreign memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    U8,
    U16,
    U32,
    U64,
}

impl Width {
    pub const fn len(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
            Self::U64 => 8,
        }
    }
}

/// Little-endian field access into a buffer read from the target process.
///
/// Every accessor reads zero when the field does not fit entirely inside the
/// buffer, so a short read decodes as empty state instead of panicking.
#[derive(Debug, Clone, Copy)]
pub struct ByteBuffer<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteBuffer<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.bytes
    }

    fn field<const N: usize>(&self, offset: usize) -> [u8; N] {
        let mut out = [0u8; N];
        if let Some(src) = offset
            .checked_add(N)
            .and_then(|end| self.bytes.get(offset..end))
        {
            out.copy_from_slice(src);
        }
        out
    }

    pub fn u8_at(&self, offset: usize) -> u8 {
        self.bytes.get(offset).copied().unwrap_or(0)
    }

    pub fn u16_at(&self, offset: usize) -> u16 {
        u16::from_le_bytes(self.field(offset))
    }

    pub fn u32_at(&self, offset: usize) -> u32 {
        u32::from_le_bytes(self.field(offset))
    }

    pub fn i32_at(&self, offset: usize) -> i32 {
        i32::from_le_bytes(self.field(offset))
    }

    pub fn u64_at(&self, offset: usize) -> u64 {
        u64::from_le_bytes(self.field(offset))
    }

    pub fn i64_at(&self, offset: usize) -> i64 {
        i64::from_le_bytes(self.field(offset))
    }

    pub fn uint_at(&self, offset: usize, width: Width) -> u64 {
        match width {
            Width::U8 => self.u8_at(offset) as u64,
            Width::U16 => self.u16_at(offset) as u64,
            Width::U32 => self.u32_at(offset) as u64,
            Width::U64 => self.u64_at(offset),
        }
    }

    /// Non-zero test for a single flag byte
    pub fn flag_at(&self, offset: usize) -> bool {
        self.u8_at(offset) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_fields() {
        let bytes = [0x34, 0x12, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x01];
        let buf = ByteBuffer::new(&bytes);
        assert_eq!(buf.u16_at(0), 0x1234);
        assert_eq!(buf.i32_at(2), -1);
        assert_eq!(buf.u32_at(2), u32::MAX);
        assert_eq!(buf.u8_at(8), 1);
        assert_eq!(buf.uint_at(0, Width::U16), 0x1234);
    }

    #[test]
    fn test_out_of_range_reads_zero() {
        let bytes = [0xAA, 0xBB, 0xCC];
        let buf = ByteBuffer::new(&bytes);
        assert_eq!(buf.u32_at(0), 0);
        assert_eq!(buf.u16_at(2), 0);
        assert_eq!(buf.u8_at(3), 0);
        assert_eq!(buf.u64_at(usize::MAX), 0);
        assert!(!buf.flag_at(10));
    }

    #[test]
    fn test_empty_buffer() {
        let buf = ByteBuffer::new(&[]);
        assert!(buf.is_empty());
        assert_eq!(buf.u64_at(0), 0);
        assert_eq!(buf.i64_at(0), 0);
    }
}
