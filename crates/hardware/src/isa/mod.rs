//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the decoded instruction type, the decoder and the
//! disassembler for the LS-8's thirteen instructions.

/// Instruction decoding from raw memory bytes.
pub mod decode;

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Decoded instruction representation.
pub mod instruction;

/// Opcode wire values.
pub mod opcodes;

pub use decode::decode;
pub use instruction::Instruction;
