//! Global Machine Constants.
//!
//! This module defines the fixed parameters of the LS-8 machine. It includes:
//! 1. **Memory Constants:** Default RAM size and the largest addressable size.
//! 2. **Register Constants:** Register count and the stack pointer slot.
//! 3. **Stack Constants:** Default initial stack pointer.

/// Default RAM size in bytes (the full 8-bit address space).
pub const DEFAULT_MEMORY_SIZE: usize = 256;

/// Largest supported RAM size; every address must fit in a byte.
pub const MAX_MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Register index reserved for the stack pointer.
pub const SP_REGISTER: u8 = 7;

/// Default initial stack pointer.
///
/// The first push lands at `0xFE`, one below the top of the address space.
pub const DEFAULT_INITIAL_SP: u8 = 0xFF;
