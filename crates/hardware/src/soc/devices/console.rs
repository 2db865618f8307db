//! Console Output Device.
//!
//! `PRN` is the only instruction with an externally visible effect. It hands the
//! register value to an `OutputSink`, which decides where the text goes:
//! 1. **`WriterSink`:** Decimal value plus newline to any `io::Write` (stdout in the CLI).
//! 2. **`BufferSink`:** Keeps the raw values in memory for embedding and tests.

use std::io::{self, Write};

use crate::common::CpuError;

/// Receiver for values printed by `PRN`.
pub trait OutputSink {
    /// Emits one printed register value.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::Output` if the value cannot be delivered.
    fn print(&mut self, value: u8) -> Result<(), CpuError>;
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn print(&mut self, value: u8) -> Result<(), CpuError> {
        (**self).print(value)
    }
}

impl<T: OutputSink + ?Sized> OutputSink for Box<T> {
    fn print(&mut self, value: u8) -> Result<(), CpuError> {
        (**self).print(value)
    }
}

/// Writes each value as a decimal line.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl WriterSink<io::Stdout> {
    /// Creates a sink on the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn print(&mut self, value: u8) -> Result<(), CpuError> {
        writeln!(self.writer, "{value}").map_err(|e| CpuError::Output(e.to_string()))
    }
}

/// Collects printed values in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferSink {
    /// Every value printed so far.
    pub values: Vec<u8>,
}

impl BufferSink {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for BufferSink {
    fn print(&mut self, value: u8) -> Result<(), CpuError> {
        self.values.push(value);
        Ok(())
    }
}
