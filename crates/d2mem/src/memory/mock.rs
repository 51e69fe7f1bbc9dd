//! Sparse synthetic address space for decoder tests

use std::collections::HashMap;

use super::ReadMemory;

/// Test double for the target process.
///
/// Only bytes written through the builder are mapped; a read stops at the
/// first unmapped byte, the same way a real read stops at an unmapped page.
#[derive(Debug, Clone, Default)]
pub struct MockMemory {
    base: u64,
    bytes: HashMap<u64, u8>,
}

impl MockMemory {
    pub fn builder() -> MockMemoryBuilder {
        MockMemoryBuilder::new()
    }

    /// Overwrite already-built memory, e.g. to simulate the game changing state
    pub fn write(&mut self, address: u64, data: &[u8]) {
        for (i, b) in data.iter().enumerate() {
            self.bytes.insert(address.wrapping_add(i as u64), *b);
        }
    }

    pub fn write_u64(&mut self, address: u64, value: u64) {
        self.write(address, &value.to_le_bytes());
    }

    pub fn write_u8(&mut self, address: u64, value: u8) {
        self.write(address, &[value]);
    }
}

impl ReadMemory for MockMemory {
    fn base_address(&self) -> u64 {
        self.base
    }

    fn read_bytes(&self, address: u64, len: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(len.min(4096));
        for i in 0..len as u64 {
            match self.bytes.get(&address.wrapping_add(i)) {
                Some(b) => out.push(*b),
                None => break,
            }
        }
        out
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockMemoryBuilder {
    memory: MockMemory,
}

impl MockMemoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, base: u64) -> Self {
        self.memory.base = base;
        self
    }

    pub fn bytes(mut self, address: u64, data: Vec<u8>) -> Self {
        self.memory.write(address, &data);
        self
    }

    /// Map `len` zero bytes
    pub fn zeroed(self, address: u64, len: usize) -> Self {
        self.bytes(address, vec![0; len])
    }

    pub fn u8(self, address: u64, value: u8) -> Self {
        self.bytes(address, vec![value])
    }

    pub fn u16(self, address: u64, value: u16) -> Self {
        self.bytes(address, value.to_le_bytes().to_vec())
    }

    pub fn u32(self, address: u64, value: u32) -> Self {
        self.bytes(address, value.to_le_bytes().to_vec())
    }

    pub fn i32(self, address: u64, value: i32) -> Self {
        self.bytes(address, value.to_le_bytes().to_vec())
    }

    pub fn u64(self, address: u64, value: u64) -> Self {
        self.bytes(address, value.to_le_bytes().to_vec())
    }

    pub fn i64(self, address: u64, value: i64) -> Self {
        self.bytes(address, value.to_le_bytes().to_vec())
    }

    /// NUL-terminated string
    pub fn string(self, address: u64, value: &str) -> Self {
        let mut data = value.as_bytes().to_vec();
        data.push(0);
        self.bytes(address, data)
    }

    pub fn build(self) -> MockMemory {
        self.memory
    }
}
