//! Register File.
//!
//! This module provides the `RegisterFile` struct and the `Reg` index type. It provides:
//! 1. **Validated Indexing:** `Reg` can only name one of the eight registers, so reads
//!    and writes through it never fail.
//! 2. **Stack Pointer Access:** `R7` doubles as the stack pointer.
//! 3. **Observability:** Debugging utilities for dumping register state.

use std::fmt;

use super::constants::{NUM_REGISTERS, SP_REGISTER};

/// Index of one of the eight general-purpose registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reg(u8);

impl Reg {
    /// The stack pointer register, `R7`.
    pub const SP: Self = Self(SP_REGISTER);

    /// Creates a register index, or `None` if `idx` names no register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Raw operand byte.
    pub const fn new(idx: u8) -> Option<Self> {
        if (idx as usize) < NUM_REGISTERS {
            Some(Self(idx))
        } else {
            None
        }
    }

    /// Returns the raw register number.
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// Eight 8-bit registers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with every register zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    pub fn read(&self, reg: Reg) -> u8 {
        self.regs[usize::from(reg.0)]
    }

    /// Writes a register.
    pub fn write(&mut self, reg: Reg, val: u8) {
        self.regs[usize::from(reg.0)] = val;
    }

    /// Current stack pointer.
    pub fn sp(&self) -> u8 {
        self.read(Reg::SP)
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, val: u8) {
        self.write(Reg::SP, val);
    }

    /// Returns all register values in index order.
    pub const fn as_array(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }

    /// Dumps the contents of all registers to stderr.
    ///
    /// Displays registers in pairs in hexadecimal and decimal.
    pub fn dump(&self) {
        for i in (0..NUM_REGISTERS).step_by(2) {
            eprintln!(
                "R{:<1}={:#04x} ({:>3})  R{:<1}={:#04x} ({:>3})",
                i,
                self.regs[i],
                self.regs[i],
                i + 1,
                self.regs[i + 1],
                self.regs[i + 1]
            );
        }
    }
}
