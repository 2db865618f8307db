//! Run statistics collection and reporting.
//!
//! This module tracks what a run executed. It provides:
//! 1. **Retirement:** Total instructions executed (one per step, independent of byte length).
//! 2. **Instruction mix:** Counts by category (load, ALU, stack, branch, I/O).
//! 3. **Control flow:** Number of branches, calls and returns that redirected PC.

use std::time::Instant;

use crate::isa::Instruction;

/// Run statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,
    /// Count of `LDI` instructions.
    pub inst_load: u64,
    /// Count of `ADD`, `MUL` and `CMP` instructions.
    pub inst_alu: u64,
    /// Count of `PUSH` and `POP` instructions.
    pub inst_stack: u64,
    /// Count of `CALL`, `RET`, `JMP`, `JEQ` and `JNE` instructions.
    pub inst_branch: u64,
    /// Count of `PRN` instructions.
    pub inst_io: u64,
    /// Count of `HLT` instructions.
    pub inst_system: u64,
    /// Control-flow instructions that changed PC to a target.
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_load: 0,
            inst_alu: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_io: 0,
            inst_system: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Returns the instant the run clock was last started.
    pub const fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Starts the run clock now, so `host_seconds` covers execution only.
    pub fn restart_clock(&mut self) {
        self.start_time = Instant::now();
    }

    /// Records one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `inst` - The instruction that completed.
    /// * `taken` - Whether it redirected PC.
    pub const fn retire(&mut self, inst: &Instruction, taken: bool) {
        self.instructions_retired += 1;
        let counter = match inst {
            Instruction::Hlt => &mut self.inst_system,
            Instruction::Ldi { .. } => &mut self.inst_load,
            Instruction::Add { .. } | Instruction::Mul { .. } | Instruction::Cmp { .. } => {
                &mut self.inst_alu
            }
            Instruction::Push { .. } | Instruction::Pop { .. } => &mut self.inst_stack,
            Instruction::Call { .. }
            | Instruction::Ret
            | Instruction::Jmp { .. }
            | Instruction::Jeq { .. }
            | Instruction::Jne { .. } => &mut self.inst_branch,
            Instruction::Prn { .. } => &mut self.inst_io,
        };
        *counter += 1;
        if taken {
            self.branches_taken += 1;
        }
    }

    /// Prints a summary to stdout.
    pub fn print(&self) {
        let elapsed = self.start_time.elapsed();
        let retired = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / retired) * 100.0;

        println!("\n==========================================================");
        println!("LS-8 RUN STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.6} s", elapsed.as_secs_f64());
        println!("sim_insts                {}", self.instructions_retired);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op_load                {:<10} ({:.1}%)", self.inst_load, pct(self.inst_load));
        println!("  op_alu                 {:<10} ({:.1}%)", self.inst_alu, pct(self.inst_alu));
        println!("  op_stack               {:<10} ({:.1}%)", self.inst_stack, pct(self.inst_stack));
        println!("  op_branch              {:<10} ({:.1}%)", self.inst_branch, pct(self.inst_branch));
        println!("  op_io                  {:<10} ({:.1}%)", self.inst_io, pct(self.inst_io));
        println!("  op_system              {:<10} ({:.1}%)", self.inst_system, pct(self.inst_system));
        println!("----------------------------------------------------------");
        println!("CONTROL FLOW");
        println!("  taken                  {}", self.branches_taken);
        println!("==========================================================");
    }
}
