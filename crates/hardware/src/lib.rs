//! LS-8 virtual CPU library.
//!
//! This crate implements an 8-bit virtual machine with the following:
//! 1. **Core:** Fetch-decode-execute engine, register file, condition flags and stack.
//! 2. **ALU:** Wrapping 8-bit `ADD`/`MUL` and the three-way `CMP`.
//! 3. **ISA:** Opcode table, decoder and disassembler for the thirteen instructions.
//! 4. **Devices:** Shared program/stack RAM and the console sink for `PRN`.
//! 5. **Simulation:** Loader, text program parser, run driver with step limit and stop handle.
//!
//! # Example
//!
//! ```
//! use ls8_core::{Config, Simulator};
//! use ls8_core::soc::BufferSink;
//!
//! // LDI R0,8; LDI R1,9; MUL R0,R1; PRN R0; HLT
//! let program = [
//!     0b1000_0010, 0, 8,
//!     0b1000_0010, 1, 9,
//!     0b1010_0010, 0, 1,
//!     0b0100_0111, 0,
//!     0b0000_0001,
//! ];
//!
//! let mut sim = Simulator::new(&Config::default(), BufferSink::new()).unwrap();
//! sim.load(&program).unwrap();
//! let summary = sim.run().unwrap();
//!
//! assert_eq!(sim.console.values, vec![72]);
//! assert_eq!(summary.steps, 5);
//! ```

/// Common types and constants (registers, errors).
pub mod common;
/// Machine configuration (memory layout, run limits, tracing).
pub mod config;
/// CPU core (state, execution, flags, ALU).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and run driver.
pub mod sim;
/// Memory and output devices.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Machine state and single-step execution.
pub use crate::core::Cpu;
/// Run driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
