//! Simulator: owns the core and its external collaborators side-by-side.

use crate::common::addr::Word;
use crate::common::error::SimError;
use crate::core::Core;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, memory_stage, writeback_stage,
};
use crate::isa::{OpcodeTable, SyscallHandler};
use crate::stats::SimStats;

/// Top-level simulator: architectural state plus the opcode table and
/// system-call collaborators for the target program.
pub struct Simulator<T, S> {
    /// The simulation context.
    pub core: Core,
    /// Opcode table for the target ISA.
    pub table: T,
    /// System-call emulation.
    pub syscalls: S,
}

impl<T: OpcodeTable, S: SyscallHandler> Simulator<T, S> {
    /// Assembles a simulator from its parts.
    pub fn new(core: Core, table: T, syscalls: S) -> Self {
        Self {
            core,
            table,
            syscalls,
        }
    }

    /// Advances the simulation by one clock cycle.
    ///
    /// Bumps the cycle counter, re-stamps register 0, then runs the stages
    /// in reverse order — Writeback, Memory, Execute, Decode, Fetch — so
    /// each single mutable buffer is consumed before its producer
    /// overwrites it. A program-exit trap in writeback ends the cycle
    /// early; the younger in-flight instructions never complete.
    pub fn tick(&mut self) -> Result<(), SimError> {
        let core = &mut self.core;
        core.stats.cycles += 1;
        core.regs.enforce_zero();

        writeback_stage(core, &mut self.syscalls)?;
        if core.exit_code.is_some() {
            return Ok(());
        }
        memory_stage(core)?;
        execute_stage(core, &self.table)?;
        decode_stage(core, &self.table)?;
        fetch_stage(core)?;
        Ok(())
    }

    /// Runs the unbounded cycle loop until the program traps out, returning
    /// its exit code. Every error is fatal and surfaces immediately.
    pub fn run(&mut self) -> Result<Word, SimError> {
        loop {
            self.tick()?;
            if let Some(code) = self.core.take_exit() {
                return Ok(code);
            }
        }
    }

    /// Read-only view of the counters.
    pub fn stats(&self) -> &SimStats {
        &self.core.stats
    }
}
