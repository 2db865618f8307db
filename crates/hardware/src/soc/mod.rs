//! System Components.
//!
//! This module organizes the components outside the CPU core:
//! 1. **Memory:** The RAM array holding program and stack.
//! 2. **Devices:** Output sinks for `PRN`.

/// Output devices.
pub mod devices;

/// Main memory.
pub mod memory;

pub use devices::{BufferSink, OutputSink, WriterSink};
pub use memory::Memory;
