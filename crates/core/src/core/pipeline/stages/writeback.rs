//! Writeback (WB) stage.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::Core;
use crate::isa::{SyscallEffect, SyscallHandler, flags};

/// Commits the instruction's results to the register file and hands
/// trap-flagged instructions to the system-call collaborator. The handler
/// may request exit, which is the cycle loop's only normal termination.
pub fn writeback_stage(core: &mut Core, syscalls: &mut dyn SyscallHandler) -> Result<(), SimError> {
    let mw = core.mem_wb;

    if let Some(r) = mw.port.dst_e {
        core.regs.write(r as usize, mw.val_e);
    }
    if let Some(r) = mw.port.dst_m {
        core.regs.write(r as usize, mw.val_m);
    }

    if mw.op.is_na() {
        return Ok(());
    }
    core.stats.instructions_retired += 1;
    trace!("WB  pc={:#010x} op={:#04x}", mw.pc, mw.op.0);

    if mw.flags & flags::TRAP != 0 {
        let cycle = core.stats.cycles;
        match syscalls.syscall(&mut core.regs, core.mem.as_mut(), mw.inst) {
            Ok(SyscallEffect::Continue) => {}
            Ok(SyscallEffect::Exit(code)) => {
                trace!("WB  pc={:#010x} exit({code})", mw.pc);
                core.exit_code = Some(code);
            }
            Err(fault) => return Err(SimError::MemoryFault { fault, cycle }),
        }
    }

    Ok(())
}
