//! Architectural register file.
//!
//! A single flat bank covering every register an operand port can name:
//! 32 general-purpose registers, 32 floating-point register slots, and the
//! HI/LO/FCC/TMP dependence slots. Register 0 is architecturally zero; the
//! convention is enforced by re-stamping it every cycle rather than by
//! filtering writes.

use crate::common::addr::Word;

/// Number of general-purpose registers.
pub const NUM_GPRS: usize = 32;

/// Total register-bank size: GPRs, FPR slots, and HI/LO/FCC/TMP.
pub const NUM_REGS: usize = 68;

/// Index of the hard-wired zero register.
pub const REG_ZERO: usize = 0;

/// The unified architectural register bank.
#[derive(Debug, Clone)]
pub struct RegisterFile {
    regs: [Word; NUM_REGS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with every register cleared.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads register `idx`.
    #[inline]
    pub fn read(&self, idx: usize) -> Word {
        self.regs[idx]
    }

    /// Writes register `idx`. Writes to register 0 land but are undone by
    /// [`RegisterFile::enforce_zero`] at the top of the next cycle.
    #[inline]
    pub fn write(&mut self, idx: usize, value: Word) {
        self.regs[idx] = value;
    }

    /// Re-stamps register 0 to zero.
    #[inline]
    pub fn enforce_zero(&mut self) {
        self.regs[REG_ZERO] = 0;
    }

    /// Returns a snapshot of the whole bank, for state dumps.
    pub fn dump(&self) -> [Word; NUM_REGS] {
        self.regs
    }
}
