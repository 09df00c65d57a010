//! Instruction fetch (IF) stage.

use tracing::trace;

use crate::common::addr::{INST_BYTES, word_addr};
use crate::common::error::SimError;
use crate::core::Core;
use crate::isa::Instr;

/// Reads the two instruction words at the next-fetch address straight from
/// the backing store (instruction fetch does not go through the data
/// cache), then advances the next-fetch pointer sequentially. A jump
/// resolved later this same cycle overwrites the pointer again.
pub fn fetch_stage(core: &mut Core) -> Result<(), SimError> {
    let pc = core.if_id.next_fetch;

    let a = core.mem.read_word(pc).map_err(|f| core.mem_fault(f))?;
    let b = core
        .mem
        .read_word(word_addr(pc, 1))
        .map_err(|f| core.mem_fault(f))?;

    let inst = Instr { a, b };
    trace!("IF  pc={pc:#010x} inst={:#010x}:{:#010x}", inst.a, inst.b);

    core.if_id.inst = inst;
    core.if_id.pc = pc;
    core.if_id.next_fetch = pc.wrapping_add(INST_BYTES);
    Ok(())
}
