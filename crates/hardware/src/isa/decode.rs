//! Instruction Decoder.
//!
//! Turns the bytes at a program counter into an `Instruction`. It performs:
//! 1. **Opcode Match:** Exact comparison against the opcode table; no match is an
//!    `IllegalInstruction` fault, raised before any operand is read.
//! 2. **Operand Fetch:** Reads the 1-2 operand bytes, bounds-checked.
//! 3. **Register Validation:** Register operands must name `R0`-`R7`.

use super::instruction::Instruction;
use super::opcodes;
use crate::common::{CpuError, Reg};

/// Reads operand bytes following the opcode at `pc`.
struct Operands<'a> {
    mem: &'a [u8],
    pc: usize,
}

impl Operands<'_> {
    /// Raw operand byte `n` (1-based).
    fn byte(&self, n: usize) -> Result<u8, CpuError> {
        let address = self.pc + n;
        self.mem
            .get(address)
            .copied()
            .ok_or(CpuError::OutOfBoundsAccess { address })
    }

    /// Operand byte `n` interpreted as a register.
    fn reg(&self, n: usize) -> Result<Reg, CpuError> {
        let index = self.byte(n)?;
        Reg::new(index).ok_or(CpuError::InvalidRegister { pc: self.pc, index })
    }
}

/// Decodes the instruction starting at `pc`.
///
/// # Arguments
///
/// * `mem` - Memory contents.
/// * `pc` - Address of the opcode byte.
///
/// # Errors
///
/// * `OutOfBoundsAccess` if the opcode or an operand lies past the end of `mem`.
/// * `IllegalInstruction` if the opcode matches no table entry.
/// * `InvalidRegister` if a register operand is 8 or above.
pub fn decode(mem: &[u8], pc: usize) -> Result<Instruction, CpuError> {
    let opcode = mem
        .get(pc)
        .copied()
        .ok_or(CpuError::OutOfBoundsAccess { address: pc })?;
    let ops = Operands { mem, pc };

    let inst = match opcode {
        opcodes::HLT => Instruction::Hlt,
        opcodes::LDI => Instruction::Ldi {
            reg: ops.reg(1)?,
            imm: ops.byte(2)?,
        },
        opcodes::PRN => Instruction::Prn { reg: ops.reg(1)? },
        opcodes::MUL => Instruction::Mul {
            a: ops.reg(1)?,
            b: ops.reg(2)?,
        },
        opcodes::ADD => Instruction::Add {
            a: ops.reg(1)?,
            b: ops.reg(2)?,
        },
        opcodes::PUSH => Instruction::Push { reg: ops.reg(1)? },
        opcodes::POP => Instruction::Pop { reg: ops.reg(1)? },
        opcodes::CALL => Instruction::Call { reg: ops.reg(1)? },
        opcodes::RET => Instruction::Ret,
        opcodes::CMP => Instruction::Cmp {
            a: ops.reg(1)?,
            b: ops.reg(2)?,
        },
        opcodes::JEQ => Instruction::Jeq { reg: ops.reg(1)? },
        opcodes::JNE => Instruction::Jne { reg: ops.reg(1)? },
        opcodes::JMP => Instruction::Jmp { reg: ops.reg(1)? },
        _ => return Err(CpuError::IllegalInstruction { pc, opcode }),
    };
    Ok(inst)
}
