//! Data-forwarding network.
//!
//! Resolves each source operand against the two downstream buffer
//! generations before falling back to the register file, so a dependent
//! instruction sees a producer's result before register-file commit. Both
//! operands resolve independently under identical rules.

use crate::common::addr::Word;
use crate::common::reg::RegisterFile;
use crate::core::cache::CacheSim;
use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::mem::{MemFault, MemoryBackend};
use crate::stats::SimStats;

/// Does `src` name the same register as `dst`? The `None` sentinel on
/// either side never matches.
#[inline]
fn forwards(src: Option<u8>, dst: Option<u8>) -> bool {
    src.is_some() && src == dst
}

/// Resolves one source operand, testing in strict priority order:
///
/// 1. EX/MEM ALU destination → the EX/MEM E value.
/// 2. EX/MEM load destination → an eager word read through the cache at
///    the load's just-computed address (the load's value one stage early).
/// 3. MEM/WB ALU destination → the MEM/WB E value.
/// 4. MEM/WB load destination → the MEM/WB loaded value.
/// 5. Otherwise the architectural register file; an absent operand reads
///    as zero.
pub fn resolve_operand(
    src: Option<u8>,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
    regs: &RegisterFile,
    cache: &mut CacheSim,
    mem: &mut dyn MemoryBackend,
    stats: &mut SimStats,
) -> Result<Word, MemFault> {
    if forwards(src, ex_mem.port.dst_e) {
        return Ok(ex_mem.val_e);
    }
    if forwards(src, ex_mem.port.dst_m) {
        return cache.read_word(mem, stats, ex_mem.val_e);
    }
    if forwards(src, mem_wb.port.dst_e) {
        return Ok(mem_wb.val_e);
    }
    if forwards(src, mem_wb.port.dst_m) {
        return Ok(mem_wb.val_m);
    }
    Ok(match src {
        Some(r) => regs.read(r as usize),
        None => 0,
    })
}
