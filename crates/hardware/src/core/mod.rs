//! Core processor implementation.
//!
//! This module contains the CPU state and execution cycle, the architectural
//! flags, and the ALU.

/// Architectural state (condition flags).
pub mod arch;

/// CPU core implementation and execution cycle.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, StepOutcome};
