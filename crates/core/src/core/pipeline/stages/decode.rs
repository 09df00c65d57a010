//! Instruction decode (ID) stage.
//!
//! Looks the fetched opcode up in the supplied table, builds the operand
//! port assignment, resolves both source operands through the forwarding
//! network, and resolves direct jumps — overwriting the next-fetch pointer
//! within the same cycle, a fixed one-instruction decode-to-fetch latency
//! with no prediction.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::Core;
use crate::core::pipeline::hazards::resolve_operand;
use crate::core::pipeline::latches::{IdEx, Port};
use crate::isa::{FuClass, OpcodeTable, flags, jump_target};

/// Runs decode for the instruction sitting in the IF/ID buffer.
pub fn decode_stage(core: &mut Core, table: &dyn OpcodeTable) -> Result<(), SimError> {
    let inst = core.if_id.inst;
    let pc = core.if_id.pc;

    // Squash: the immediately preceding execute result carries a taken
    // branch, so the instruction just fetched is wrong. Replace it with a
    // synthesized no-op instead of decoding it.
    if core.ex_mem.taken {
        trace!("ID  pc={pc:#010x} squashed");
        core.id_ex = IdEx {
            inst,
            pc,
            ..IdEx::default()
        };
        return Ok(());
    }

    let op = inst.opcode();
    if op.is_na() {
        core.id_ex = IdEx {
            inst,
            pc,
            ..IdEx::default()
        };
        return Ok(());
    }

    let cycle = core.stats.cycles;
    if table.is_link(op) {
        return Err(SimError::LinkOpcode {
            opcode: op.0,
            pc,
            cycle,
        });
    }
    let Some(info) = table.lookup(op) else {
        return Err(SimError::UnknownOpcode {
            opcode: op.0,
            pc,
            cycle,
        });
    };

    let fu = info.fu_class();
    let op_flags = info.flags();

    let mut port = Port::default();
    let [src_a, src_b, src_c] = info.sources(inst);
    port.src_a = src_a;
    port.src_b = src_b;
    port.src_c = src_c;
    match fu {
        FuClass::IntAlu => port.dst_e = info.dest(inst),
        FuClass::RdPort => port.dst_m = info.dest(inst),
        _ => {}
    }

    let Core {
        regs,
        ex_mem,
        mem_wb,
        cache,
        mem,
        stats,
        ..
    } = core;
    let val_a = resolve_operand(port.src_a, ex_mem, mem_wb, regs, cache, mem.as_mut(), stats)
        .map_err(|fault| SimError::MemoryFault { fault, cycle })?;
    let val_b = resolve_operand(port.src_b, ex_mem, mem_wb, regs, cache, mem.as_mut(), stats)
        .map_err(|fault| SimError::MemoryFault { fault, cycle })?;

    trace!("ID  pc={pc:#010x} op={:#04x} valA={val_a:#010x} valB={val_b:#010x}", op.0);

    core.id_ex = IdEx {
        inst,
        pc,
        op,
        fu,
        flags: op_flags,
        port,
        val_a,
        val_b,
    };

    // Direct unconditional jumps resolve right here: both the next-fetch
    // pointer and decode's view of the instruction stream move to the
    // target in the same cycle.
    if op_flags & flags::DIRJMP != 0 && op_flags & flags::COND == 0 {
        let target = jump_target(pc, inst);
        trace!("ID  pc={pc:#010x} jump -> {target:#010x}");
        core.if_id.next_fetch = target;
    }

    Ok(())
}
