//! Cycle-level simulator of a five-stage pipelined processor with an
//! attached write-back data cache.
//!
//! This crate models instruction flow through fetch, decode, execute,
//! memory, and writeback via single-generation inter-stage buffers, with:
//! 1. **Forwarding:** operand resolution against the two downstream buffer
//!    generations before the register file.
//! 2. **Branch resolution:** direct jumps resolved in decode with a fixed
//!    one-instruction latency, plus the (inert) squash mechanism.
//! 3. **Cache:** a set-associative write-back cache with round-robin
//!    victim selection and a flat miss penalty.
//! 4. **Counters:** cycle, memory-access, hit/miss/replace/write-back, and
//!    retirement counts per simulator instance.
//!
//! Binary loading, per-instruction decode and arithmetic, the backing
//! store, and system-call emulation are external collaborators behind the
//! traits in [`isa`] and [`mem`]. Execution is single-threaded and fully
//! deterministic: the same program image and initial state always produce
//! the same counters and final architectural state.

/// Common types (addresses, errors, register file).
pub mod common;
/// Simulator configuration.
pub mod config;
/// Simulator core (pipeline, cache, architectural state).
pub mod core;
/// Instruction-set and system-call seams.
pub mod isa;
/// Memory backend seam.
pub mod mem;
/// Cycle-loop driver.
pub mod sim;
/// Counters and reporting.
pub mod stats;

pub use crate::common::error::SimError;
pub use crate::config::Config;
pub use crate::core::Core;
pub use crate::sim::Simulator;
pub use crate::stats::SimStats;
