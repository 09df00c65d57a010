//! Execute (EX) stage.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::Core;
use crate::core::pipeline::latches::ExMem;
use crate::isa::OpcodeTable;

/// Applies the opcode's execution effect to the resolved operands and
/// produces the E value (ALU result, or effective address for loads and
/// stores).
///
/// The branch-taken flag is always left clear: direct jumps resolve in
/// decode, so nothing on this path ever sets it. The flag and decode's
/// squash response to it stay wired up for conditional transfers.
pub fn execute_stage(core: &mut Core, table: &dyn OpcodeTable) -> Result<(), SimError> {
    let de = core.id_ex;
    let mut em = ExMem {
        inst: de.inst,
        pc: de.pc,
        op: de.op,
        fu: de.fu,
        flags: de.flags,
        port: de.port,
        val_a: de.val_a,
        val_e: 0,
        taken: false,
    };

    if de.op.is_na() {
        core.ex_mem = em;
        return Ok(());
    }

    let Some(info) = table.lookup(de.op) else {
        return Err(SimError::UnknownOpcode {
            opcode: de.op.0,
            pc: de.pc,
            cycle: core.stats.cycles,
        });
    };

    em.val_e = info.execute(de.inst, de.pc, de.val_a, de.val_b);
    trace!("EX  pc={:#010x} op={:#04x} valE={:#010x}", de.pc, de.op.0, em.val_e);

    core.ex_mem = em;
    Ok(())
}
