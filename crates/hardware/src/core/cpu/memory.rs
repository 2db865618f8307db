//! Stack Access.
//!
//! The stack lives in main memory and grows downward from the initial SP.
//! Both operations commit SP only after the memory access succeeds, so a
//! faulting push or pop leaves the machine unchanged.

use super::Cpu;
use crate::common::CpuError;

impl Cpu {
    /// Decrements SP and stores `val` at the new top of stack.
    ///
    /// # Errors
    ///
    /// * `StackOverflow` if SP is already 0.
    /// * `OutOfBoundsAccess` if SP - 1 lies past the end of RAM.
    pub fn push(&mut self, val: u8) -> Result<(), CpuError> {
        let sp = self
            .sp()
            .checked_sub(1)
            .ok_or(CpuError::StackOverflow { pc: self.pc })?;
        self.ram.write(usize::from(sp), val)?;
        self.regs.set_sp(sp);
        Ok(())
    }

    /// Loads the value at the top of stack and increments SP.
    ///
    /// # Errors
    ///
    /// * `OutOfBoundsAccess` if SP lies past the end of RAM.
    /// * `StackUnderflow` if SP is already `0xFF`.
    pub fn pop(&mut self) -> Result<u8, CpuError> {
        let sp = self.sp();
        let val = self.ram.read(usize::from(sp))?;
        let next = sp
            .checked_add(1)
            .ok_or(CpuError::StackUnderflow { pc: self.pc })?;
        self.regs.set_sp(next);
        Ok(val)
    }
}
