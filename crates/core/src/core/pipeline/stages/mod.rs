//! The five pipeline stage operations.
//!
//! The engine invokes these in reverse order — Writeback, Memory, Execute,
//! Decode, Fetch — once per simulated cycle, so each stage consumes its
//! upstream buffer before the upstream stage overwrites it.

/// Instruction decode and operand resolution.
pub mod decode;

/// Instruction execution.
pub mod execute;

/// Instruction fetch.
pub mod fetch;

/// Data-memory access.
pub mod memory;

/// Register commit and system calls.
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::memory_stage;
pub use writeback::writeback_stage;
