//! Inter-stage pipeline buffers.
//!
//! Each buffer is a single passive record reused every cycle: a stage
//! consumes the value its upstream neighbor produced in the prior cycle and
//! overwrites its own downstream buffer. The reverse stage-invocation order
//! in the engine exists precisely so each consumer reads before its
//! producer overwrites.

use crate::common::addr::{Addr, Word};
use crate::isa::{FuClass, Instr, Opcode};

/// Operand-port assignment for one instruction. Each field is either a
/// register number or `None`, the "no register" sentinel, which never
/// participates in a forwarding match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Port {
    /// First input register.
    pub src_a: Option<u8>,
    /// Second input register.
    pub src_b: Option<u8>,
    /// Third input register.
    pub src_c: Option<u8>,
    /// ALU-result destination register.
    pub dst_e: Option<u8>,
    /// Load-result destination register.
    pub dst_m: Option<u8>,
}

/// Fetch → Decode buffer. `next_fetch` doubles as the machine's next-fetch
/// pointer: fetch advances it sequentially and a jump resolved in decode
/// overwrites it within the same cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct IfId {
    /// The fetched instruction.
    pub inst: Instr,
    /// PC of the fetched instruction.
    pub pc: Addr,
    /// Address the next fetch will read from.
    pub next_fetch: Addr,
}

/// Decode → Execute buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdEx {
    /// The instruction in decode.
    pub inst: Instr,
    /// Its PC.
    pub pc: Addr,
    /// Opcode, or the no-op sentinel.
    pub op: Opcode,
    /// Functional-unit class from the opcode table.
    pub fu: FuClass,
    /// Flag bits from the opcode table.
    pub flags: u32,
    /// Operand-port assignment.
    pub port: Port,
    /// Resolved operand A.
    pub val_a: Word,
    /// Resolved operand B.
    pub val_b: Word,
}

/// Execute → Memory buffer. Also read back by decode's forwarding scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExMem {
    /// The instruction in execute.
    pub inst: Instr,
    /// Its PC.
    pub pc: Addr,
    /// Opcode, or the no-op sentinel.
    pub op: Opcode,
    /// Functional-unit class.
    pub fu: FuClass,
    /// Flag bits.
    pub flags: u32,
    /// Operand-port assignment.
    pub port: Port,
    /// Operand A, carried through for the store data path.
    pub val_a: Word,
    /// Computed E value (ALU result or effective address).
    pub val_e: Word,
    /// Branch-taken flag. Decode squashes the freshly fetched instruction
    /// when this is set; the current jump path never sets it (reserved for
    /// conditional transfers).
    pub taken: bool,
}

/// Memory → Writeback buffer. Also read back by decode's forwarding scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemWb {
    /// The instruction in the memory stage.
    pub inst: Instr,
    /// Its PC.
    pub pc: Addr,
    /// Opcode, or the no-op sentinel.
    pub op: Opcode,
    /// Functional-unit class.
    pub fu: FuClass,
    /// Flag bits.
    pub flags: u32,
    /// Operand-port assignment.
    pub port: Port,
    /// Computed E value.
    pub val_e: Word,
    /// Loaded M value (for loads).
    pub val_m: Word,
}
