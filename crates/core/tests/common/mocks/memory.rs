//! Flat word-addressable mock memory.

use pipesim_core::common::addr::{Addr, Word};
use pipesim_core::mem::{MemFault, MemoryBackend};

/// A flat memory starting at address 0. Word accesses must be aligned;
/// anything past the end faults as unmapped.
pub struct FlatMemory {
    words: Vec<Word>,
}

impl FlatMemory {
    /// Creates `bytes` bytes of zeroed memory.
    pub fn new(bytes: usize) -> Self {
        Self {
            words: vec![0; bytes / 4],
        }
    }

    fn index(&self, addr: Addr) -> Result<usize, MemFault> {
        if addr % 4 != 0 {
            return Err(MemFault::Misaligned(addr));
        }
        let idx = (addr / 4) as usize;
        if idx >= self.words.len() {
            return Err(MemFault::Unmapped(addr));
        }
        Ok(idx)
    }
}

impl MemoryBackend for FlatMemory {
    fn read_word(&mut self, addr: Addr) -> Result<Word, MemFault> {
        self.index(addr).map(|i| self.words[i])
    }

    fn write_word(&mut self, addr: Addr, value: Word) -> Result<(), MemFault> {
        let i = self.index(addr)?;
        self.words[i] = value;
        Ok(())
    }
}
