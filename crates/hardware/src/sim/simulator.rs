//! Top-level run driver.
//!
//! `Simulator` owns the CPU and its console and runs the fetch-decode-execute loop
//! to completion. On top of `Cpu::step` it enforces:
//! 1. **Step limit:** `general.max_steps` bounds programs that never reach `HLT`.
//! 2. **Host stop:** A `StopHandle` lets another thread end the run between instructions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::common::{ConfigError, CpuError};
use crate::config::Config;
use crate::core::{Cpu, StepOutcome};
use crate::sim::loader;
use crate::soc::OutputSink;

/// Cloneable flag used to stop a running `Simulator` from another thread.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Creates an untriggered handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a stop before the next instruction.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns true once `stop` has been called.
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Result of a run that reached `HLT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions executed, `HLT` included.
    pub steps: u64,
    /// PC after `HLT`.
    pub pc: usize,
}

/// A CPU bound to an output sink, with run limits.
#[derive(Debug)]
pub struct Simulator<O: OutputSink> {
    /// The machine.
    pub cpu: Cpu,
    /// Receives `PRN` output.
    pub console: O,
    max_steps: Option<u64>,
    stop: StopHandle,
}

impl<O: OutputSink> Simulator<O> {
    /// Creates a simulator with a fresh CPU.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the configuration is out of range.
    pub fn new(config: &Config, console: O) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            cpu: Cpu::new(config),
            console,
            max_steps: config.general.max_steps,
            stop: StopHandle::new(),
        })
    }

    /// Loads a program image at address 0.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::ProgramTooLarge` if the image does not fit.
    pub fn load(&mut self, program: &[u8]) -> Result<(), CpuError> {
        loader::load(&mut self.cpu, program)
    }

    /// Returns a handle that stops this simulator when triggered.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Executes one instruction, honouring the stop handle and step limit.
    ///
    /// # Errors
    ///
    /// * `Stopped` if the stop handle was triggered.
    /// * `StepLimitExceeded` if the instruction budget is spent.
    /// * Any fault from `Cpu::step`.
    pub fn tick(&mut self) -> Result<StepOutcome, CpuError> {
        if self.cpu.halted {
            return Ok(StepOutcome::Halted);
        }
        if self.stop.is_stopped() {
            return Err(CpuError::Stopped { pc: self.cpu.pc });
        }
        if let Some(limit) = self.max_steps {
            if self.cpu.stats.instructions_retired >= limit {
                return Err(CpuError::StepLimitExceeded { steps: limit });
            }
        }
        self.cpu.step(&mut self.console)
    }

    /// Runs until `HLT` or a fault.
    ///
    /// # Errors
    ///
    /// The first fault raised by `tick`; the CPU is left at the faulting instruction.
    pub fn run(&mut self) -> Result<RunSummary, CpuError> {
        self.cpu.stats.restart_clock();
        debug!(pc = self.cpu.pc, max_steps = ?self.max_steps, "run started");
        while self.tick()? == StepOutcome::Running {}
        let summary = RunSummary {
            steps: self.cpu.stats.instructions_retired,
            pc: self.cpu.pc,
        };
        info!(steps = summary.steps, "run halted");
        Ok(summary)
    }
}
