//! Execution units.
//!
//! The LS-8 has a single functional unit, the ALU.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
