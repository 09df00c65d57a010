//! Set-associative write-back data cache.
//!
//! The cache mediates every data word moving between the memory stage and
//! the backing store. It models:
//! 1. **Lookup:** parametric tag/set/offset address decomposition.
//! 2. **Victim selection:** a rotating per-set fill cursor (round-robin,
//!    not LRU — no recency bookkeeping).
//! 3. **Write policy:** write-back on hit, write-through plus line fill on
//!    miss.
//! 4. **Latency:** a flat per-miss penalty added to the cycle counter;
//!    latency is only ever counter arithmetic, never actual waiting.

use tracing::trace;

use crate::common::addr::{Addr, WORD_BYTES, Word, word_addr};
use crate::config::CacheConfig;
use crate::mem::{MemFault, MemoryBackend};
use crate::stats::SimStats;

/// A decomposed cache address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAddr {
    /// High-order tag bits.
    pub tag: Addr,
    /// Set index.
    pub set: usize,
    /// Word index within the line.
    pub word: usize,
}

/// One cache line: a full line of data words plus its tag and state bits.
/// Lines are created or overwritten only by a line fill, never built up by
/// partial update.
#[derive(Debug, Clone)]
struct CacheLine {
    data: Vec<Word>,
    tag: Addr,
    dirty: bool,
    valid: bool,
}

/// One set: a fixed array of lines and the rotating fill cursor used for
/// victim selection.
#[derive(Debug, Clone)]
struct CacheSet {
    lines: Vec<CacheLine>,
    cursor: usize,
}

/// The data-cache model.
#[derive(Debug)]
pub struct CacheSim {
    sets: Vec<CacheSet>,
    ways: usize,
    word_mask: Addr,
    set_mask: Addr,
    set_shift: u32,
    tag_shift: u32,
    miss_penalty: u64,
    enabled: bool,
}

impl CacheSim {
    /// Builds a cache from its configuration. Geometry values are rounded
    /// up to powers of two.
    pub fn new(config: &CacheConfig) -> Self {
        let num_sets = config.sets.max(1).next_power_of_two();
        let ways = config.ways.max(1).next_power_of_two();
        let words_per_line = config.words_per_line.max(1).next_power_of_two();

        let offset_bits = words_per_line.trailing_zeros();
        let set_bits = num_sets.trailing_zeros();
        let word_shift = WORD_BYTES.trailing_zeros();

        let line = CacheLine {
            data: vec![0; words_per_line],
            tag: 0,
            dirty: false,
            valid: false,
        };
        let set = CacheSet {
            lines: vec![line; ways],
            cursor: 0,
        };

        Self {
            sets: vec![set; num_sets],
            ways,
            word_mask: words_per_line as Addr - 1,
            set_mask: num_sets as Addr - 1,
            set_shift: word_shift + offset_bits,
            tag_shift: word_shift + offset_bits + set_bits,
            miss_penalty: config.miss_penalty,
            enabled: config.enabled,
        }
    }

    /// Splits an address into its tag, set index, and word-within-line
    /// index.
    #[inline]
    pub fn decompose(&self, addr: Addr) -> LineAddr {
        LineAddr {
            tag: addr >> self.tag_shift,
            set: ((addr >> self.set_shift) & self.set_mask) as usize,
            word: ((addr / WORD_BYTES) & self.word_mask) as usize,
        }
    }

    /// Reconstructs a line's base address from its tag and set index. This
    /// is the exact inverse of [`CacheSim::decompose`] with a zero word
    /// index.
    #[inline]
    pub fn line_base(&self, tag: Addr, set: usize) -> Addr {
        (tag << self.tag_shift) | ((set as Addr) << self.set_shift)
    }

    /// Reads the word at `addr` through the cache.
    ///
    /// A hit returns the cached word. A miss charges the flat penalty,
    /// fetches the word straight from the backend for the immediate return
    /// value, then fills the whole line.
    pub fn read_word(
        &mut self,
        mem: &mut dyn MemoryBackend,
        stats: &mut SimStats,
        addr: Addr,
    ) -> Result<Word, MemFault> {
        if !self.enabled {
            stats.cycles += self.miss_penalty;
            stats.mem_accesses += 1;
            return mem.read_word(addr);
        }

        let la = self.decompose(addr);
        if let Some(way) = self.probe(la) {
            stats.cache_hits += 1;
            trace!("D$ read hit  addr={addr:#010x} set={} way={way}", la.set);
            return Ok(self.sets[la.set].lines[way].data[la.word]);
        }

        stats.cache_misses += 1;
        stats.mem_accesses += 1;
        stats.cycles += self.miss_penalty;
        trace!("D$ read miss addr={addr:#010x} set={}", la.set);

        let value = mem.read_word(addr)?;
        self.fill_line(mem, stats, self.line_base(la.tag, la.set))?;
        Ok(value)
    }

    /// Writes the word at `addr` through the cache.
    ///
    /// A hit updates the cached word in place and marks the line dirty; the
    /// backing store is not touched until eviction. A miss charges the flat
    /// penalty, writes the word through to the backend, then fills the line
    /// — so the fresh line already holds the just-written value but starts
    /// clean.
    pub fn write_word(
        &mut self,
        mem: &mut dyn MemoryBackend,
        stats: &mut SimStats,
        addr: Addr,
        value: Word,
    ) -> Result<(), MemFault> {
        if !self.enabled {
            stats.cycles += self.miss_penalty;
            stats.mem_accesses += 1;
            return mem.write_word(addr, value);
        }

        let la = self.decompose(addr);
        if let Some(way) = self.probe(la) {
            stats.cache_hits += 1;
            trace!("D$ write hit  addr={addr:#010x} set={} way={way}", la.set);
            let line = &mut self.sets[la.set].lines[way];
            line.data[la.word] = value;
            line.dirty = true;
            return Ok(());
        }

        stats.cache_misses += 1;
        stats.mem_accesses += 1;
        stats.cycles += self.miss_penalty;
        trace!("D$ write miss addr={addr:#010x} set={}", la.set);

        mem.write_word(addr, value)?;
        self.fill_line(mem, stats, self.line_base(la.tag, la.set))
    }

    /// Scans a set for a valid line with a matching tag.
    fn probe(&self, la: LineAddr) -> Option<usize> {
        self.sets[la.set]
            .lines
            .iter()
            .position(|line| line.valid && line.tag == la.tag)
    }

    /// Fills the line at `base` (a line-aligned address): picks the victim
    /// with the set's rotating cursor, writes it back if valid and dirty,
    /// then installs the new tag and loads the full line from the backend.
    fn fill_line(
        &mut self,
        mem: &mut dyn MemoryBackend,
        stats: &mut SimStats,
        base: Addr,
    ) -> Result<(), MemFault> {
        let la = self.decompose(base);
        let set_shift = self.set_shift;
        let tag_shift = self.tag_shift;
        let ways = self.ways;

        let set = &mut self.sets[la.set];
        let way = set.cursor % ways;
        set.cursor = set.cursor.wrapping_add(1);

        let line = &mut set.lines[way];
        if line.valid {
            stats.cache_replaces += 1;
            if line.dirty {
                let victim_base = (line.tag << tag_shift) | ((la.set as Addr) << set_shift);
                trace!("D$ write-back set={} way={way} base={victim_base:#010x}", la.set);
                for (i, word) in line.data.iter().enumerate() {
                    mem.write_word(word_addr(victim_base, i), *word)?;
                }
                stats.cache_writebacks += 1;
                line.dirty = false;
            }
        }

        line.tag = la.tag;
        line.dirty = false;
        line.valid = true;
        for (i, slot) in line.data.iter_mut().enumerate() {
            *slot = mem.read_word(word_addr(base, i))?;
        }
        Ok(())
    }
}
