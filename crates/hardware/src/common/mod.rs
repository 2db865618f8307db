//! Common utilities and types used throughout the LS-8 machine.
//!
//! This module provides the building blocks shared across all components. It includes:
//! 1. **Constants:** Memory size, register count, and stack defaults.
//! 2. **Error Handling:** Execution faults, parse errors, and configuration errors.
//! 3. **Register Management:** The register file and validated register indices.

/// Machine-wide constants.
pub mod constants;

/// Error types for execution, parsing, and configuration.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{ConfigError, CpuError, ParseError};
pub use reg::{Reg, RegisterFile};
