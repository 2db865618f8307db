//! Main Execution Cycle.
//!
//! This module implements one fetch-decode-execute step. It performs the following:
//! 1. **Fetch/Decode:** Reads the opcode and operands at PC into an `Instruction`.
//! 2. **Dispatch:** One handler per instruction; each either advances PC by the
//!    instruction size or overwrites it with a target, never both.
//! 3. **Accounting:** Retired instructions are recorded in `SimStats`.
//! 4. **Observability:** Optional per-step trace at `trace` level.
//!
//! A step that fails leaves registers, flags, SP and PC as they were before it.

use tracing::{debug, trace, warn};

use super::Cpu;
use crate::common::{CpuError, Reg};
use crate::core::units::alu::AluOp;
use crate::isa::{Instruction, decode};
use crate::soc::OutputSink;

/// Machine state after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// More instructions remain.
    Running,
    /// `HLT` has executed.
    Halted,
}

impl Cpu {
    /// Executes one instruction.
    ///
    /// A halted CPU does nothing and reports `Halted` again.
    ///
    /// # Arguments
    ///
    /// * `out` - Receives the values printed by `PRN`.
    ///
    /// # Errors
    ///
    /// Any `CpuError` raised by decode, memory or stack access, or the output sink.
    pub fn step(&mut self, out: &mut dyn OutputSink) -> Result<StepOutcome, CpuError> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }

        if self.trace {
            trace!("{}", self.trace_line());
        }

        let inst = decode(self.ram.as_slice(), self.pc).inspect_err(|e| {
            warn!(pc = self.pc, error = %e, "decode fault");
        })?;

        let taken = self.execute(inst, out).inspect_err(|e| {
            warn!(pc = self.pc, inst = %inst, error = %e, "execution fault");
        })?;
        self.stats.retire(&inst, taken);

        if self.halted {
            debug!(pc = self.pc, retired = self.stats.instructions_retired, "halted");
            Ok(StepOutcome::Halted)
        } else {
            Ok(StepOutcome::Running)
        }
    }

    /// Executes a decoded instruction, returning whether it redirected control flow.
    fn execute(&mut self, inst: Instruction, out: &mut dyn OutputSink) -> Result<bool, CpuError> {
        let next = self.pc + inst.size();
        let mut taken = false;

        match inst {
            Instruction::Hlt => {
                self.halted = true;
                self.pc = next;
            }
            Instruction::Ldi { reg, imm } => {
                self.regs.write(reg, imm);
                self.pc = next;
            }
            Instruction::Prn { reg } => {
                out.print(self.regs.read(reg))?;
                self.pc = next;
            }
            Instruction::Mul { a, b } => {
                self.alu(AluOp::Mul, a, b);
                self.pc = next;
            }
            Instruction::Add { a, b } => {
                self.alu(AluOp::Add, a, b);
                self.pc = next;
            }
            Instruction::Cmp { a, b } => {
                self.alu(AluOp::Cmp, a, b);
                self.pc = next;
            }
            Instruction::Push { reg } => {
                self.push(self.regs.read(reg))?;
                self.pc = next;
            }
            Instruction::Pop { reg } => {
                let val = self.pop()?;
                // A pop into R7 overwrites the incremented SP.
                self.regs.write(reg, val);
                self.pc = next;
            }
            Instruction::Call { reg } => {
                let ret = u8::try_from(next)
                    .map_err(|_| CpuError::OutOfBoundsAccess { address: next })?;
                let target = self.regs.read(reg);
                self.push(ret)?;
                self.jump(target);
                taken = true;
            }
            Instruction::Ret => {
                let target = self.pop()?;
                self.jump(target);
                taken = true;
            }
            Instruction::Jeq { reg } => taken = self.branch(self.flags.equal, reg, next),
            Instruction::Jne { reg } => taken = self.branch(!self.flags.equal, reg, next),
            Instruction::Jmp { reg } => {
                self.jump(self.regs.read(reg));
                taken = true;
            }
        }

        Ok(taken)
    }

    /// Jumps to the address in `reg` if `cond` holds, else falls through to `next`.
    fn branch(&mut self, cond: bool, reg: Reg, next: usize) -> bool {
        if cond {
            self.jump(self.regs.read(reg));
        } else {
            self.pc = next;
        }
        cond
    }

    #[inline]
    fn jump(&mut self, target: u8) {
        self.pc = usize::from(target);
    }
}
