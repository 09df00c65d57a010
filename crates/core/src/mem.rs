//! Memory backend seam.
//!
//! The raw word-addressable backing store is an external collaborator: the
//! core only ever moves whole aligned words across this trait, both for
//! instruction fetch and for cache fills, write-backs, and uncached
//! accesses. A fault is fatal to the simulation and is never retried.

use thiserror::Error;

use crate::common::addr::{Addr, Word};

/// Faults a [`MemoryBackend`] may signal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemFault {
    /// Word access at an address that is not word-aligned.
    #[error("misaligned word access at {0:#010x}")]
    Misaligned(Addr),

    /// Access outside the mapped address space.
    #[error("access outside mapped memory at {0:#010x}")]
    Unmapped(Addr),

    /// Write to a protected region.
    #[error("protection violation at {0:#010x}")]
    Protected(Addr),
}

impl MemFault {
    /// The faulting address.
    pub fn addr(self) -> Addr {
        match self {
            Self::Misaligned(a) | Self::Unmapped(a) | Self::Protected(a) => a,
        }
    }
}

/// Word-addressed backing store behind the cache and the fetch stage.
pub trait MemoryBackend {
    /// Reads the aligned word at `addr`.
    fn read_word(&mut self, addr: Addr) -> Result<Word, MemFault>;

    /// Writes the aligned word at `addr`.
    fn write_word(&mut self, addr: Addr, value: Word) -> Result<(), MemFault>;
}
