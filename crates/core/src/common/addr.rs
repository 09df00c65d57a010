//! Address and word type definitions.
//!
//! The simulated machine is a 32-bit target: addresses and data words are
//! both 32 bits wide. Addresses are byte-granular but every access the core
//! performs is a whole aligned word; halves and bytes never cross the
//! pipeline/memory seam.

/// A byte-granular address in the simulated address space.
pub type Addr = u32;

/// A 32-bit data word, the unit of every pipeline and cache access.
pub type Word = u32;

/// Bytes per data word.
pub const WORD_BYTES: Addr = 4;

/// Bytes per fetched instruction (two encoding words).
pub const INST_BYTES: Addr = 8;

/// Address of the `i`-th word at or after `base`.
#[inline]
pub fn word_addr(base: Addr, i: usize) -> Addr {
    base.wrapping_add(i as Addr * WORD_BYTES)
}
