use std::path::PathBuf;

use ls8_core::common::{CpuError, Reg};
use ls8_core::config::Config;
use ls8_core::core::{Cpu, StepOutcome};
use ls8_core::isa::Instruction;
use ls8_core::sim::{RunSummary, Simulator};
use ls8_core::soc::BufferSink;

use super::builder::{assemble, r};

/// Installs a test-writer subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("ls8_core=trace")
        .try_init();
}

/// Path of a sample program shipped in the repository's `programs/` directory.
pub fn program_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../programs")
        .join(name)
}

pub struct TestContext {
    pub sim: Simulator<BufferSink>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        init_tracing();
        let sim = Simulator::new(config, BufferSink::new()).unwrap();
        Self { sim }
    }

    /// Load raw bytes at address 0.
    pub fn load(mut self, bytes: &[u8]) -> Self {
        self.sim.load(bytes).unwrap();
        self
    }

    /// Assemble and load a program at address 0.
    pub fn load_program(self, insts: &[Instruction]) -> Self {
        self.load(&assemble(insts))
    }

    pub fn run(&mut self) -> Result<RunSummary, CpuError> {
        self.sim.run()
    }

    pub fn step(&mut self) -> Result<StepOutcome, CpuError> {
        self.sim.tick()
    }

    /// Step `n` instructions, panicking on any fault.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            let _ = self.step().unwrap();
        }
    }

    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    pub fn reg(&self, idx: u8) -> u8 {
        self.sim.cpu.regs.read(r(idx))
    }

    pub fn set_reg(&mut self, idx: u8, val: u8) {
        self.sim.cpu.regs.write(r(idx), val);
    }

    pub fn sp(&self) -> u8 {
        self.sim.cpu.regs.read(Reg::SP)
    }

    pub fn pc(&self) -> usize {
        self.sim.cpu.pc
    }

    /// Values printed so far.
    pub fn output(&self) -> &[u8] {
        &self.sim.console.values
    }
}
