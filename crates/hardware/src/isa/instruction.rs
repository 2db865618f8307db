//! Decoded Instruction Representation.
//!
//! An `Instruction` is one opcode together with its already-validated operands.
//! Each variant knows its wire opcode, its length in bytes and its mnemonic.

use std::fmt;

use super::opcodes;
use crate::common::Reg;

/// A decoded LS-8 instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Stop the machine.
    Hlt,
    /// `reg := imm`.
    Ldi {
        /// Destination register.
        reg: Reg,
        /// Immediate value.
        imm: u8,
    },
    /// Print `reg` in decimal.
    Prn {
        /// Source register.
        reg: Reg,
    },
    /// `a := a * b`.
    Mul {
        /// Destination and first operand.
        a: Reg,
        /// Second operand.
        b: Reg,
    },
    /// `a := a + b`.
    Add {
        /// Destination and first operand.
        a: Reg,
        /// Second operand.
        b: Reg,
    },
    /// Push `reg`.
    Push {
        /// Source register.
        reg: Reg,
    },
    /// Pop into `reg`.
    Pop {
        /// Destination register.
        reg: Reg,
    },
    /// Push the return address and jump to `reg`.
    Call {
        /// Register holding the subroutine address.
        reg: Reg,
    },
    /// Pop the return address into PC.
    Ret,
    /// Compare `a` with `b`.
    Cmp {
        /// Left operand.
        a: Reg,
        /// Right operand.
        b: Reg,
    },
    /// Jump to `reg` if equal.
    Jeq {
        /// Register holding the target.
        reg: Reg,
    },
    /// Jump to `reg` if not equal.
    Jne {
        /// Register holding the target.
        reg: Reg,
    },
    /// Jump to `reg`.
    Jmp {
        /// Register holding the target.
        reg: Reg,
    },
}

impl Instruction {
    /// Returns the wire opcode.
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::Hlt => opcodes::HLT,
            Self::Ldi { .. } => opcodes::LDI,
            Self::Prn { .. } => opcodes::PRN,
            Self::Mul { .. } => opcodes::MUL,
            Self::Add { .. } => opcodes::ADD,
            Self::Push { .. } => opcodes::PUSH,
            Self::Pop { .. } => opcodes::POP,
            Self::Call { .. } => opcodes::CALL,
            Self::Ret => opcodes::RET,
            Self::Cmp { .. } => opcodes::CMP,
            Self::Jeq { .. } => opcodes::JEQ,
            Self::Jne { .. } => opcodes::JNE,
            Self::Jmp { .. } => opcodes::JMP,
        }
    }

    /// Returns the number of operand bytes.
    pub const fn operand_count(&self) -> usize {
        opcodes::operand_count(self.opcode())
    }

    /// Returns the encoded length in bytes, opcode included.
    pub const fn size(&self) -> usize {
        1 + self.operand_count()
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ldi { .. } => "LDI",
            Self::Prn { .. } => "PRN",
            Self::Mul { .. } => "MUL",
            Self::Add { .. } => "ADD",
            Self::Push { .. } => "PUSH",
            Self::Pop { .. } => "POP",
            Self::Call { .. } => "CALL",
            Self::Ret => "RET",
            Self::Cmp { .. } => "CMP",
            Self::Jeq { .. } => "JEQ",
            Self::Jne { .. } => "JNE",
            Self::Jmp { .. } => "JMP",
        }
    }

    /// Encodes the instruction back to its wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = vec![self.opcode()];
        match *self {
            Self::Hlt | Self::Ret => {}
            Self::Ldi { reg, imm } => bytes.extend([reg.index(), imm]),
            Self::Prn { reg }
            | Self::Push { reg }
            | Self::Pop { reg }
            | Self::Call { reg }
            | Self::Jeq { reg }
            | Self::Jne { reg }
            | Self::Jmp { reg } => bytes.push(reg.index()),
            Self::Mul { a, b } | Self::Add { a, b } | Self::Cmp { a, b } => {
                bytes.extend([a.index(), b.index()]);
            }
        }
        bytes
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.mnemonic();
        match *self {
            Self::Hlt | Self::Ret => write!(f, "{m}"),
            Self::Ldi { reg, imm } => write!(f, "{m} {reg}, {imm}"),
            Self::Prn { reg }
            | Self::Push { reg }
            | Self::Pop { reg }
            | Self::Call { reg }
            | Self::Jeq { reg }
            | Self::Jne { reg }
            | Self::Jmp { reg } => write!(f, "{m} {reg}"),
            Self::Mul { a, b } | Self::Add { a, b } | Self::Cmp { a, b } => {
                write!(f, "{m} {a}, {b}")
            }
        }
    }
}
