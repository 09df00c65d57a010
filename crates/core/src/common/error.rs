//! Fatal simulation errors.
//!
//! The simulator is a deterministic replay engine: once architectural state
//! diverges from the intended trace there is no meaningful local recovery,
//! so every error is non-retryable and stops the cycle loop. Each variant
//! carries the cycle at which the loop stopped plus the offending
//! address/opcode, so a diagnostic can be produced without replaying.

use thiserror::Error;

use crate::common::addr::Addr;
use crate::mem::MemFault;

/// Errors that terminate the simulation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The memory backend signaled a fault. Ignoring it mid-pipeline would
    /// corrupt cycle-accurate state, so the policy is report-and-halt.
    #[error("memory fault on cycle {cycle}: {fault}")]
    MemoryFault {
        /// The fault surfaced by the backend.
        fault: MemFault,
        /// Cycle at which the fault stopped the loop.
        cycle: u64,
    },

    /// Decode or execute met an opcode absent from the supplied table: a
    /// configuration mismatch between the simulator and the target binary.
    #[error("unknown opcode {opcode:#04x} at pc {pc:#010x} on cycle {cycle}")]
    UnknownOpcode {
        /// The raw opcode value.
        opcode: u16,
        /// Program counter of the offending instruction.
        pc: Addr,
        /// Cycle at which decode/execute gave up.
        cycle: u64,
    },

    /// A linking pseudo-opcode reached decode. These exist only for the
    /// loader's benefit and must never enter the pipeline.
    #[error("linking opcode {opcode:#04x} reached decode at pc {pc:#010x} on cycle {cycle}")]
    LinkOpcode {
        /// The raw opcode value.
        opcode: u16,
        /// Program counter of the offending instruction.
        pc: Addr,
        /// Cycle at which decode refused it.
        cycle: u64,
    },
}
