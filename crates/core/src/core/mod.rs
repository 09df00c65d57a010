//! Simulator core: architectural state and the pipeline.
//!
//! [`Core`] is the single simulator-context value threaded through every
//! stage operation. All mutable simulation state — register file, PC
//! tracking, the four inter-stage buffers, the cache, and the counters —
//! lives in it, so independent simulations and isolated tests never share
//! anything.

/// Set-associative write-back data cache.
pub mod cache;

/// Pipeline buffers, forwarding, and stage operations.
pub mod pipeline;

use crate::common::addr::{Addr, Word};
use crate::common::error::SimError;
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::mem::{MemFault, MemoryBackend};
use crate::stats::SimStats;
use cache::CacheSim;
use pipeline::latches::{ExMem, IdEx, IfId, MemWb};

/// Architectural and microarchitectural state for one simulation.
pub struct Core {
    /// Architectural register file.
    pub regs: RegisterFile,
    /// Fetch → Decode buffer (also holds the next-fetch pointer).
    pub if_id: IfId,
    /// Decode → Execute buffer.
    pub id_ex: IdEx,
    /// Execute → Memory buffer.
    pub ex_mem: ExMem,
    /// Memory → Writeback buffer.
    pub mem_wb: MemWb,
    /// Data cache backing the memory stage.
    pub cache: CacheSim,
    /// Word-addressable backing store.
    pub mem: Box<dyn MemoryBackend>,
    /// Counter block.
    pub stats: SimStats,
    /// Set by the program-exit trap; ends the cycle loop.
    pub exit_code: Option<Word>,
}

impl Core {
    /// Creates a core over the given backing store.
    pub fn new(mem: Box<dyn MemoryBackend>, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            cache: CacheSim::new(&config.cache),
            mem,
            stats: SimStats::default(),
            exit_code: None,
        }
    }

    /// Points the next fetch at the program entry.
    pub fn set_entry(&mut self, pc: Addr) {
        self.if_id.next_fetch = pc;
    }

    /// Takes the pending exit code, if the program has trapped out.
    pub fn take_exit(&mut self) -> Option<Word> {
        self.exit_code.take()
    }

    /// Wraps a backend fault with the current cycle for the diagnostic.
    pub(crate) fn mem_fault(&self, fault: MemFault) -> SimError {
        SimError::MemoryFault {
            fault,
            cycle: self.stats.cycles,
        }
    }

    /// Dumps the PC tracking and register bank to stdout.
    pub fn dump_state(&self) {
        println!("PC  = {:#010x}", self.if_id.pc);
        let r = self.regs.dump();
        for i in (0..r.len()).step_by(2) {
            println!("r{:<2} = {:#010x}    r{:<2} = {:#010x}", i, r[i], i + 1, r[i + 1]);
        }
    }
}
