//! Instruction-set seam.
//!
//! Per-instruction decode tables and arithmetic are external collaborators:
//! the core dispatches generically over an [`OpcodeTable`] and hard-codes no
//! per-instruction semantics. This module fixes the shapes both sides agree
//! on:
//! 1. **Encoding:** the two-word instruction layout and its field accessors.
//! 2. **Opcode records:** functional-unit class, flag bits, operand list,
//!    and execution effect, looked up per opcode.
//! 3. **System calls:** the handler seam writeback hands trap opcodes to.

use crate::common::addr::{Addr, Word};
use crate::common::reg::RegisterFile;
use crate::mem::{MemFault, MemoryBackend};

/// Instruction flag bits, as supplied by the opcode table.
pub mod flags {
    /// Integer computation.
    pub const ICOMP: u32 = 1 << 0;
    /// Floating-point computation.
    pub const FCOMP: u32 = 1 << 1;
    /// Control transfer.
    pub const CTRL: u32 = 1 << 2;
    /// Unconditional transfer (paired with `CTRL`).
    pub const UNCOND: u32 = 1 << 3;
    /// Conditional transfer (paired with `CTRL`).
    pub const COND: u32 = 1 << 4;
    /// Memory access.
    pub const MEM: u32 = 1 << 5;
    /// Memory load (paired with `MEM`).
    pub const LOAD: u32 = 1 << 6;
    /// Memory store (paired with `MEM`).
    pub const STORE: u32 = 1 << 7;
    /// Direct jump: target is formed from the instruction's target field.
    pub const DIRJMP: u32 = 1 << 8;
    /// Indirect jump: target comes from a register.
    pub const INDIRJMP: u32 = 1 << 9;
    /// Traps into the system-call handler at writeback.
    pub const TRAP: u32 = 1 << 10;
}

/// High nibble of the PC preserved across direct jumps (256 MiB segment).
pub const SEGMENT_MASK: Addr = 0xF000_0000;

/// An opcode value. `Opcode::NA` is the no-operation sentinel: a buffer
/// holding it propagates through the remaining stages without touching
/// registers, memory, or any non-cycle counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Opcode(pub u16);

impl Opcode {
    /// The no-operation sentinel.
    pub const NA: Self = Self(0);

    /// Whether this is the no-operation sentinel.
    #[inline]
    pub fn is_na(self) -> bool {
        self == Self::NA
    }
}

/// A fetched instruction: two 32-bit encoding words.
///
/// Word `a` carries the opcode in its low byte; word `b` packs the register
/// numbers, immediate, and jump target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Instr {
    /// Opcode word.
    pub a: Word,
    /// Operand word.
    pub b: Word,
}

impl Instr {
    /// The opcode, from the low byte of word `a`.
    #[inline]
    pub fn opcode(self) -> Opcode {
        Opcode((self.a & 0xff) as u16)
    }

    /// Source register 1 number.
    #[inline]
    pub fn rs(self) -> u8 {
        (self.b >> 24) as u8
    }

    /// Source register 2 number.
    #[inline]
    pub fn rt(self) -> u8 {
        (self.b >> 16) as u8
    }

    /// Destination register number.
    #[inline]
    pub fn rd(self) -> u8 {
        (self.b >> 8) as u8
    }

    /// Sign-extended 16-bit immediate.
    #[inline]
    pub fn imm(self) -> i32 {
        (self.b & 0xffff) as u16 as i16 as i32
    }

    /// 26-bit jump target field.
    #[inline]
    pub fn target(self) -> Word {
        self.b & 0x03ff_ffff
    }
}

/// Resolved target of a direct jump: the PC's segment bits joined with the
/// word-shifted target field.
#[inline]
pub fn jump_target(pc: Addr, inst: Instr) -> Addr {
    (pc & SEGMENT_MASK) | (inst.target() << 2)
}

/// Functional-unit class of an opcode. Decode routes the table's first
/// output to `dstE` for [`FuClass::IntAlu`] results and to `dstM` for
/// [`FuClass::RdPort`] loads; the memory stage keys its load/store behavior
/// off [`FuClass::RdPort`] and [`FuClass::WrPort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FuClass {
    /// No functional unit (no-ops, jumps, traps).
    #[default]
    None,
    /// Integer ALU.
    IntAlu,
    /// Integer multiplier.
    IntMult,
    /// Integer divider.
    IntDiv,
    /// Floating-point adder.
    FpAdd,
    /// Floating-point multiplier.
    FpMult,
    /// Memory read port (loads).
    RdPort,
    /// Memory write port (stores).
    WrPort,
}

/// One opcode's control record: everything decode and execute need, with no
/// per-instruction knowledge baked into the core.
pub trait Operation {
    /// Functional-unit class.
    fn fu_class(&self) -> FuClass;

    /// Flag bits (see [`flags`]).
    fn flags(&self) -> u32;

    /// First output register, if any. Decode routes it to `dstE` or `dstM`
    /// according to the functional-unit class.
    fn dest(&self, inst: Instr) -> Option<u8>;

    /// Input registers, in operand-port order (`srcA`, `srcB`, `srcC`).
    fn sources(&self, inst: Instr) -> [Option<u8>; 3];

    /// The opcode's computation: produces the E value from the resolved
    /// operands. For loads and stores this is the effective address.
    fn execute(&self, inst: Instr, pc: Addr, val_a: Word, val_b: Word) -> Word;
}

/// Opcode-indexed table of [`Operation`] records for one target ISA.
pub trait OpcodeTable {
    /// Looks up an opcode's record. `None` means the opcode does not exist
    /// in this ISA, which the pipeline treats as fatal.
    fn lookup(&self, op: Opcode) -> Option<&dyn Operation>;

    /// Whether `op` is a linking pseudo-opcode that must never execute.
    fn is_link(&self, op: Opcode) -> bool {
        let _ = op;
        false
    }
}

/// What a system call asked the simulator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyscallEffect {
    /// Resume the cycle loop.
    Continue,
    /// Program-exit trap: stop the loop with this exit code.
    Exit(Word),
}

/// System-call emulation seam. Writeback hands every trap-flagged
/// instruction here with full access to architectural state; a signaled
/// fault is fatal, like any other memory fault.
pub trait SyscallHandler {
    /// Emulates the system call requested by `inst`.
    fn syscall(
        &mut self,
        regs: &mut RegisterFile,
        mem: &mut dyn MemoryBackend,
        inst: Instr,
    ) -> Result<SyscallEffect, MemFault>;
}
