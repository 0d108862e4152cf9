use std::ops::{Index, IndexMut};

use crate::error::ExecutionFault;

/// Size of the flat address space (0x0000..=0xFFFF).
pub const MEMORY_SIZE: usize = 0x10000;

/// Flat, zero-initialized memory covering the full 16-bit address space.
///
/// There is no banking and no memory-mapped IO: every address, including the
/// 0xFF00 high page, is plain storage.
#[derive(Clone)]
pub struct Memory {
    ram: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.ram.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &self.ram.len())
            .field("non_zero", &used)
            .finish()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            ram: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Zero every byte.
    pub fn clear(&mut self) {
        self.ram.fill(0);
    }

    #[inline]
    pub fn read(&self, addr: u16) -> Result<u8, ExecutionFault> {
        let addr = usize::from(addr);
        self.ram
            .get(addr)
            .copied()
            .ok_or(ExecutionFault::AddressOutOfRange { addr })
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) -> Result<(), ExecutionFault> {
        let addr = usize::from(addr);
        let slot = self
            .ram
            .get_mut(addr)
            .ok_or(ExecutionFault::AddressOutOfRange { addr })?;
        *slot = value;
        Ok(())
    }

    /// Copy `bytes` into memory starting at `addr`.
    ///
    /// The whole image must fit below the top of the address space; nothing
    /// is written otherwise.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) -> Result<(), ExecutionFault> {
        let start = usize::from(addr);
        let end = start + bytes.len();
        if end > self.ram.len() {
            return Err(ExecutionFault::AddressOutOfRange { addr: end - 1 });
        }
        self.ram[start..end].copy_from_slice(bytes);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.ram
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.ram
    }
}

impl Index<u16> for Memory {
    type Output = u8;

    fn index(&self, addr: u16) -> &u8 {
        &self.ram[usize::from(addr)]
    }
}

impl IndexMut<u16> for Memory {
    fn index_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.ram[usize::from(addr)]
    }
}
