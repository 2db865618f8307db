//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire machine
//! state. It coordinates the following:
//! 1. **State Management:** Registers, flags, program counter and halt state.
//! 2. **Memory:** The RAM shared by the program image and the stack.
//! 3. **Observability:** Trace lines, state dumps and run statistics.

/// Instruction execution (fetch, decode, dispatch).
pub mod execution;

/// Stack operations on main memory.
pub mod memory;

pub use execution::StepOutcome;

use std::fmt::Write;

use crate::common::{CpuError, Reg, RegisterFile};
use crate::config::Config;
use crate::core::arch::Flags;
use crate::core::units::alu::{Alu, AluOp};
use crate::soc::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all machine state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers; `R7` is the stack pointer.
    pub regs: RegisterFile,
    /// Condition flags.
    pub flags: Flags,
    /// Program Counter.
    pub pc: usize,
    /// Main memory.
    pub ram: Memory,
    /// Set once `HLT` executes.
    pub halted: bool,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Run statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with zeroed memory, registers and flags, PC at 0 and SP at
    /// the configured initial value.
    ///
    /// # Arguments
    ///
    /// * `config` - Machine configuration; assumed already validated.
    pub fn new(config: &Config) -> Self {
        let mut regs = RegisterFile::new();
        regs.set_sp(config.memory.initial_sp);
        Self {
            regs,
            flags: Flags::default(),
            pc: 0,
            ram: Memory::new(config.memory.size),
            halted: false,
            trace: config.general.trace_instructions || cfg!(feature = "always-trace"),
            stats: SimStats::default(),
        }
    }

    /// Current stack pointer.
    pub fn sp(&self) -> u8 {
        self.regs.sp()
    }

    /// Runs the ALU on two registers.
    pub fn alu(&mut self, op: AluOp, a: Reg, b: Reg) {
        Alu::apply(op, &mut self.regs, &mut self.flags, a, b);
    }

    /// Runs the ALU on two registers, selecting the operation by name.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::UnsupportedOperation` if `op` is not `ADD`, `MUL` or `CMP`.
    pub fn alu_named(&mut self, op: &str, a: Reg, b: Reg) -> Result<(), CpuError> {
        Alu::apply_named(op, &mut self.regs, &mut self.flags, a, b)
    }

    /// Formats the machine state at the current PC.
    ///
    /// `TRACE: PC | B0 B1 B2 | R0 R1 R2 R3 R4 R5 R6 R7`, all two-digit hex, where
    /// `B0`-`B2` are the bytes at `PC..PC+3`.
    pub fn trace_line(&self) -> String {
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            self.ram.peek(self.pc),
            self.ram.peek(self.pc + 1),
            self.ram.peek(self.pc + 2)
        );
        for val in self.regs.as_array() {
            let _ = write!(line, " {val:02X}");
        }
        line
    }

    /// Dumps PC, SP, flags and registers to stderr.
    pub fn dump_state(&self) {
        eprintln!(
            "PC={:#04x} SP={:#04x} FL={} ({:#05b})",
            self.pc,
            self.sp(),
            self.flags,
            self.flags.bits()
        );
        self.regs.dump();
    }
}
