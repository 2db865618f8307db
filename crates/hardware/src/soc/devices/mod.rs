//! Devices attached to the machine.
//!
//! The LS-8 has a single device, the console that receives `PRN` output.

/// Console output sinks.
pub mod console;

pub use console::{BufferSink, OutputSink, WriterSink};
