//! A minimal PISA-flavored opcode table for driving the pipeline in tests.
//!
//! Six opcodes cover every pipeline path: ALU register/immediate forms,
//! load, store, direct jump, and the system-call trap, plus one linking
//! pseudo-opcode that must never execute.

use std::collections::HashMap;

use pipesim_core::common::addr::{Addr, Word};
use pipesim_core::common::reg::RegisterFile;
use pipesim_core::isa::{
    FuClass, Instr, Opcode, OpcodeTable, Operation, SyscallEffect, SyscallHandler, flags,
};
use pipesim_core::mem::{MemFault, MemoryBackend};

/// `rd <- rs + rt`
pub const OP_ADD: u16 = 0x01;
/// `rd <- rs + imm`
pub const OP_ADDI: u16 = 0x02;
/// `rd <- mem[rs + imm]`
pub const OP_LW: u16 = 0x03;
/// `mem[rs + imm] <- rt`
pub const OP_SW: u16 = 0x04;
/// Direct unconditional jump.
pub const OP_JUMP: u16 = 0x05;
/// Trap to the system-call handler.
pub const OP_SYSCALL: u16 = 0x06;
/// Linking pseudo-opcode (loader-only).
pub const OP_LINK: u16 = 0x3f;

/// Register number as an operand-port field: register 0 is the "no
/// register" sentinel.
fn reg(n: u8) -> Option<u8> {
    (n != 0).then_some(n)
}

type DestFn = fn(Instr) -> Option<u8>;
type SrcsFn = fn(Instr) -> [Option<u8>; 3];
type ExecFn = fn(Instr, Addr, Word, Word) -> Word;

/// One table row: control info plus field-extraction and effect functions.
pub struct OpEntry {
    fu: FuClass,
    flags: u32,
    dest: DestFn,
    srcs: SrcsFn,
    exec: ExecFn,
}

impl Operation for OpEntry {
    fn fu_class(&self) -> FuClass {
        self.fu
    }

    fn flags(&self) -> u32 {
        self.flags
    }

    fn dest(&self, inst: Instr) -> Option<u8> {
        (self.dest)(inst)
    }

    fn sources(&self, inst: Instr) -> [Option<u8>; 3] {
        (self.srcs)(inst)
    }

    fn execute(&self, inst: Instr, pc: Addr, val_a: Word, val_b: Word) -> Word {
        (self.exec)(inst, pc, val_a, val_b)
    }
}

/// The test opcode table.
pub struct TestIsa {
    ops: HashMap<Opcode, OpEntry>,
}

impl Default for TestIsa {
    fn default() -> Self {
        Self::new()
    }
}

impl TestIsa {
    /// Builds the six-opcode table.
    pub fn new() -> Self {
        let mut ops = HashMap::new();
        ops.insert(
            Opcode(OP_ADD),
            OpEntry {
                fu: FuClass::IntAlu,
                flags: flags::ICOMP,
                dest: |i| reg(i.rd()),
                srcs: |i| [reg(i.rs()), reg(i.rt()), None],
                exec: |_, _, a, b| a.wrapping_add(b),
            },
        );
        ops.insert(
            Opcode(OP_ADDI),
            OpEntry {
                fu: FuClass::IntAlu,
                flags: flags::ICOMP,
                // Immediate form: rd's field overlaps the immediate, so the
                // destination rides in rt (as in PISA's I-format).
                dest: |i| reg(i.rt()),
                srcs: |i| [reg(i.rs()), None, None],
                exec: |i, _, a, _| a.wrapping_add(i.imm() as Word),
            },
        );
        ops.insert(
            Opcode(OP_LW),
            OpEntry {
                fu: FuClass::RdPort,
                flags: flags::MEM | flags::LOAD,
                // Immediate form: destination rides in rt (see OP_ADDI).
                dest: |i| reg(i.rt()),
                srcs: |i| [reg(i.rs()), None, None],
                exec: |i, _, a, _| a.wrapping_add(i.imm() as Word),
            },
        );
        ops.insert(
            Opcode(OP_SW),
            OpEntry {
                fu: FuClass::WrPort,
                flags: flags::MEM | flags::STORE,
                dest: |_| None,
                // srcA carries the store data, srcB the base register.
                srcs: |i| [reg(i.rt()), reg(i.rs()), None],
                exec: |i, _, _, b| b.wrapping_add(i.imm() as Word),
            },
        );
        ops.insert(
            Opcode(OP_JUMP),
            OpEntry {
                fu: FuClass::None,
                flags: flags::CTRL | flags::UNCOND | flags::DIRJMP,
                dest: |_| None,
                srcs: |_| [None, None, None],
                exec: |_, _, _, _| 0,
            },
        );
        ops.insert(
            Opcode(OP_SYSCALL),
            OpEntry {
                fu: FuClass::None,
                flags: flags::TRAP,
                dest: |_| None,
                srcs: |_| [None, None, None],
                exec: |_, _, _, _| 0,
            },
        );
        Self { ops }
    }
}

impl OpcodeTable for TestIsa {
    fn lookup(&self, op: Opcode) -> Option<&dyn Operation> {
        self.ops.get(&op).map(|e| e as &dyn Operation)
    }

    fn is_link(&self, op: Opcode) -> bool {
        op.0 == OP_LINK
    }
}

/// Test system-call handler: every trap exits with the value in `r2`.
pub struct ExitSyscalls;

impl SyscallHandler for ExitSyscalls {
    fn syscall(
        &mut self,
        regs: &mut RegisterFile,
        _mem: &mut dyn MemoryBackend,
        _inst: Instr,
    ) -> Result<SyscallEffect, MemFault> {
        Ok(SyscallEffect::Exit(regs.read(2)))
    }
}

// ──────────────────────────────────────────────────────────
// Instruction encoding helpers
// ──────────────────────────────────────────────────────────

fn enc(op: u16, rs: u8, rt: u8, rd: u8, imm: i16) -> Instr {
    Instr {
        a: op as Word,
        b: (rs as Word) << 24 | (rt as Word) << 16 | (rd as Word) << 8 | (imm as u16 as Word),
    }
}

/// `add rd, rs, rt`
pub fn add(rd: u8, rs: u8, rt: u8) -> Instr {
    enc(OP_ADD, rs, rt, rd, 0)
}

/// `addi rd, rs, imm` — the destination is encoded in the rt field, which
/// does not overlap the immediate.
pub fn addi(rd: u8, rs: u8, imm: i16) -> Instr {
    enc(OP_ADDI, rs, rd, 0, imm)
}

/// `lw rd, imm(rs)` — the destination is encoded in the rt field.
pub fn lw(rd: u8, rs: u8, imm: i16) -> Instr {
    enc(OP_LW, rs, rd, 0, imm)
}

/// `sw rt, imm(rs)`
pub fn sw(rt: u8, rs: u8, imm: i16) -> Instr {
    enc(OP_SW, rs, rt, 0, imm)
}

/// `j target` — `target` is a byte address within the current segment.
pub fn jump(target: Addr) -> Instr {
    Instr {
        a: OP_JUMP as Word,
        b: (target >> 2) & 0x03ff_ffff,
    }
}

/// `syscall`
pub fn syscall() -> Instr {
    enc(OP_SYSCALL, 0, 0, 0, 0)
}

/// A no-op slot (the all-zero encoding is the no-op sentinel).
pub fn nop() -> Instr {
    Instr::default()
}
