//! Integer arithmetic operations.
//!
//! Registers are 8 bits wide; every result wraps modulo 256.

/// The arithmetic subset of the ALU operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    /// Wrapping addition.
    Add,
    /// Wrapping multiplication.
    Mul,
}

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The operation.
/// * `a` - First operand.
/// * `b` - Second operand.
///
/// # Returns
///
/// The wrapped 8-bit result.
#[inline]
pub const fn execute(op: ArithOp, a: u8, b: u8) -> u8 {
    match op {
        ArithOp::Add => a.wrapping_add(b),
        ArithOp::Mul => a.wrapping_mul(b),
    }
}
