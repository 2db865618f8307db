//! Error definitions.
//!
//! This module defines the error types surfaced by the machine. It provides:
//! 1. **Execution Faults:** Every condition that terminates a run (`CpuError`).
//! 2. **Program Parsing:** Failures reading the textual program format (`ParseError`).
//! 3. **Configuration:** Invalid or malformed configuration (`ConfigError`).
//!
//! All execution faults are unrecoverable for the current run. The machine state is
//! left exactly as it was when the faulting instruction was fetched.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Faults raised while loading or executing a program.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The ALU was asked for an operation outside `ADD`, `MUL` and `CMP`.
    #[error("unsupported ALU operation: {0}")]
    UnsupportedOperation(String),

    /// The byte at `pc` matches no opcode.
    #[error("illegal instruction {opcode:#010b} at pc {pc}")]
    IllegalInstruction {
        /// Address of the offending byte.
        pc: usize,
        /// The offending byte.
        opcode: u8,
    },

    /// The program does not fit in memory.
    #[error("program of {len} bytes exceeds memory capacity of {capacity} bytes")]
    ProgramTooLarge {
        /// Program length in words.
        len: usize,
        /// Memory size in bytes.
        capacity: usize,
    },

    /// A program word does not fit in a byte.
    #[error("program word {index} has value {value}, which does not fit in a byte")]
    InvalidWord {
        /// Position of the word in the program.
        index: usize,
        /// The rejected value.
        value: u32,
    },

    /// A read or write outside of memory.
    #[error("memory access out of bounds at address {address}")]
    OutOfBoundsAccess {
        /// The faulting address.
        address: usize,
    },

    /// An operand names a register that does not exist.
    #[error("invalid register R{index} referenced at pc {pc}")]
    InvalidRegister {
        /// Address of the instruction.
        pc: usize,
        /// The register operand.
        index: u8,
    },

    /// A push or call would move SP below address 0.
    #[error("stack overflow at pc {pc}")]
    StackOverflow {
        /// Address of the instruction.
        pc: usize,
    },

    /// A pop or return would move SP past the top of the address space.
    #[error("stack underflow at pc {pc}")]
    StackUnderflow {
        /// Address of the instruction.
        pc: usize,
    },

    /// The configured instruction budget ran out before `HLT`.
    #[error("step limit of {steps} instructions exceeded")]
    StepLimitExceeded {
        /// The configured limit.
        steps: u64,
    },

    /// The host requested a stop through a `StopHandle`.
    #[error("execution stopped by host at pc {pc}")]
    Stopped {
        /// Address of the next instruction that would have run.
        pc: usize,
    },

    /// The output sink failed.
    #[error("output error: {0}")]
    Output(String),
}

/// Errors reading a textual program.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A line is not an 8-bit binary literal.
    #[error("line {line}: invalid binary literal {text:?}")]
    InvalidLiteral {
        /// 1-based line number.
        line: usize,
        /// The rejected text, comment and whitespace stripped.
        text: String,
    },

    /// The program file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl ParseError {
    /// Returns true if the error is a missing program file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Errors building a `Config`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON input did not match the configuration schema.
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A field holds a value outside its valid range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
