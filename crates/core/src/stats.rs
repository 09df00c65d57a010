//! Simulation statistics.
//!
//! All counters live here as fields of the simulator context — there is no
//! process-wide state, so independent simulator instances keep independent
//! books. The pipeline engine and the cache are the only writers; reporting
//! reads them after the run.

/// Counter block for one simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Simulated clock cycles, including flat cache-miss penalties.
    pub cycles: u64,
    /// Instructions that reached writeback as something other than a no-op.
    pub instructions_retired: u64,
    /// Backing-store accesses (cache misses and uncached accesses).
    pub mem_accesses: u64,
    /// Data-cache hits.
    pub cache_hits: u64,
    /// Data-cache misses.
    pub cache_misses: u64,
    /// Valid lines overwritten by a fill.
    pub cache_replaces: u64,
    /// Dirty victim lines flushed to the backing store.
    pub cache_writebacks: u64,
}

impl SimStats {
    /// Data-cache miss rate over all cache accesses, in [0, 1].
    pub fn miss_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_misses as f64 / total as f64
        }
    }

    /// Prints the counter report to stdout.
    pub fn print(&self) {
        println!("sim_cycle                {}", self.cycles);
        println!("sim_num_insn             {}", self.instructions_retired);
        println!("mem.accesses             {}", self.mem_accesses);
        println!("dl1.hits                 {}", self.cache_hits);
        println!("dl1.misses               {}", self.cache_misses);
        println!("dl1.replacements         {}", self.cache_replaces);
        println!("dl1.writebacks           {}", self.cache_writebacks);
        println!("dl1.miss_rate            {:.4}", self.miss_rate());
    }
}
