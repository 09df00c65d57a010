//! Common types shared across the simulator.
//!
//! This module provides the building blocks used by every component:
//! 1. **Addresses and words:** the word-oriented address space the pipeline
//!    and cache operate on.
//! 2. **Error handling:** the fatal error taxonomy that stops the cycle loop.
//! 3. **Register file:** the unified architectural register bank.

/// Address and word type definitions.
pub mod addr;

/// Fatal simulation errors.
pub mod error;

/// Architectural register file.
pub mod reg;

pub use addr::{Addr, INST_BYTES, WORD_BYTES, Word};
pub use error::SimError;
pub use reg::RegisterFile;
