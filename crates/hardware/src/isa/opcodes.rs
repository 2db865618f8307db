//! LS-8 Opcodes.
//!
//! Wire values of every instruction. The two high bits of each opcode hold its
//! operand count, which `operand_count` relies on.

/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;

/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;

/// Print a register in decimal.
pub const PRN: u8 = 0b0100_0111;

/// Multiply two registers.
pub const MUL: u8 = 0b1010_0010;

/// Add two registers.
pub const ADD: u8 = 0b1010_0000;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Call the subroutine whose address is in a register.
pub const CALL: u8 = 0b0101_0000;

/// Return from a subroutine.
pub const RET: u8 = 0b0001_0001;

/// Compare two registers and set the flags.
pub const CMP: u8 = 0b1010_0111;

/// Jump if the equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the equal flag is clear.
pub const JNE: u8 = 0b0101_0110;

/// Unconditional jump.
pub const JMP: u8 = 0b0101_0100;

/// Every defined opcode, in dispatch priority order.
pub const ALL: [u8; 13] = [
    HLT, LDI, PRN, MUL, ADD, PUSH, POP, CALL, RET, CMP, JEQ, JNE, JMP,
];

/// Returns the number of operand bytes following `opcode` (bits 7-6).
pub const fn operand_count(opcode: u8) -> usize {
    (opcode >> 6) as usize
}
