//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the LS-8 ALU. It handles the two arithmetic operations and
//! the comparison that drives conditional branches.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul (8-bit wraparound)
//! - [`compare`]:    Cmp

/// Integer arithmetic operations (add, multiply).
pub mod arithmetic;

/// Three-way comparison producing condition flags.
pub mod compare;

use std::fmt;
use std::str::FromStr;

pub use arithmetic::ArithOp;

use crate::common::{CpuError, Reg, RegisterFile};
use crate::core::arch::Flags;

/// Operation selector for the ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// `a := a + b`
    Add,
    /// `a := a * b`
    Mul,
    /// Set flags from `a <=> b`
    Cmp,
}

impl AluOp {
    /// Returns the upper-case operation name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Cmp => "CMP",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AluOp {
    type Err = CpuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(Self::Add),
            "MUL" => Ok(Self::Mul),
            "CMP" => Ok(Self::Cmp),
            other => Err(CpuError::UnsupportedOperation(other.to_string())),
        }
    }
}

/// Arithmetic Logic Unit operating directly on the register file and flags.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Applies `op` to registers `a` and `b`.
    ///
    /// `Add` and `Mul` write the result into `a` and leave the flags alone. `Cmp`
    /// leaves both registers alone and replaces all three flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::common::{Reg, RegisterFile};
    /// use ls8_core::core::arch::Flags;
    /// use ls8_core::core::units::alu::{Alu, AluOp};
    ///
    /// let (r0, r1) = (Reg::new(0).unwrap(), Reg::new(1).unwrap());
    /// let mut regs = RegisterFile::new();
    /// let mut flags = Flags::default();
    /// regs.write(r0, 8);
    /// regs.write(r1, 9);
    ///
    /// Alu::apply(AluOp::Mul, &mut regs, &mut flags, r0, r1);
    /// assert_eq!(regs.read(r0), 72);
    ///
    /// // 200 + 100 wraps to 44
    /// regs.write(r0, 200);
    /// regs.write(r1, 100);
    /// Alu::apply(AluOp::Add, &mut regs, &mut flags, r0, r1);
    /// assert_eq!(regs.read(r0), 44);
    ///
    /// Alu::apply(AluOp::Cmp, &mut regs, &mut flags, r0, r1);
    /// assert!(flags.less && !flags.greater && !flags.equal);
    /// ```
    pub fn apply(op: AluOp, regs: &mut RegisterFile, flags: &mut Flags, a: Reg, b: Reg) {
        let va = regs.read(a);
        let vb = regs.read(b);
        match op {
            AluOp::Add => regs.write(a, arithmetic::execute(ArithOp::Add, va, vb)),
            AluOp::Mul => regs.write(a, arithmetic::execute(ArithOp::Mul, va, vb)),
            AluOp::Cmp => *flags = compare::execute(va, vb),
        }
    }

    /// Applies an operation given by name (`"ADD"`, `"MUL"` or `"CMP"`).
    ///
    /// # Errors
    ///
    /// Returns `CpuError::UnsupportedOperation` for any other name; registers and
    /// flags are untouched in that case.
    pub fn apply_named(
        name: &str,
        regs: &mut RegisterFile,
        flags: &mut Flags,
        a: Reg,
        b: Reg,
    ) -> Result<(), CpuError> {
        let op: AluOp = name.parse()?;
        Self::apply(op, regs, flags, a, b);
        Ok(())
    }
}
