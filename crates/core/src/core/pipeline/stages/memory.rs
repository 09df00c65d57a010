//! Memory access (MEM) stage.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::Core;
use crate::core::pipeline::latches::MemWb;
use crate::isa::FuClass;

/// Performs the instruction's data-memory access through the cache: a
/// write-port result stores operand A at the computed address, a read-port
/// result loads the M value from it. Everything else passes through
/// unmodified.
pub fn memory_stage(core: &mut Core) -> Result<(), SimError> {
    let em = core.ex_mem;
    let mut mw = MemWb {
        inst: em.inst,
        pc: em.pc,
        op: em.op,
        fu: em.fu,
        flags: em.flags,
        port: em.port,
        val_e: em.val_e,
        val_m: 0,
    };

    let cycle = core.stats.cycles;
    let Core {
        cache, mem, stats, ..
    } = core;

    match em.fu {
        FuClass::WrPort => {
            trace!("MEM pc={:#010x} store addr={:#010x}", em.pc, em.val_e);
            cache
                .write_word(mem.as_mut(), stats, em.val_e, em.val_a)
                .map_err(|fault| SimError::MemoryFault { fault, cycle })?;
        }
        FuClass::RdPort => {
            mw.val_m = cache
                .read_word(mem.as_mut(), stats, em.val_e)
                .map_err(|fault| SimError::MemoryFault { fault, cycle })?;
            trace!(
                "MEM pc={:#010x} load addr={:#010x} -> {:#010x}",
                em.pc, em.val_e, mw.val_m
            );
        }
        _ => {}
    }

    core.mem_wb = mw;
    Ok(())
}
