//! Main Memory.
//!
//! This module implements the byte-addressable RAM shared by program and stack. It provides:
//! 1. **Bounds-checked Access:** Reads and writes outside the array are `OutOfBoundsAccess` faults.
//! 2. **Image Loading:** Validated bulk copy of a program to address 0.
//!
//! There is no separate stack region; the stack grows down from the top of this same array.

use crate::common::CpuError;

/// Byte-addressable RAM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Creates a zeroed RAM of `size` bytes.
    ///
    /// # Arguments
    ///
    /// * `size` - Size in bytes.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size],
        }
    }

    /// Returns the size of the RAM in bytes.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the RAM has no cells.
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::OutOfBoundsAccess` if `addr` is past the end of RAM.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, CpuError> {
        self.data
            .get(addr)
            .copied()
            .ok_or(CpuError::OutOfBoundsAccess { address: addr })
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::OutOfBoundsAccess` if `addr` is past the end of RAM.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), CpuError> {
        let cell = self
            .data
            .get_mut(addr)
            .ok_or(CpuError::OutOfBoundsAccess { address: addr })?;
        *cell = val;
        Ok(())
    }

    /// Reads a byte for diagnostics, returning 0 past the end of RAM.
    pub fn peek(&self, addr: usize) -> u8 {
        self.data.get(addr).copied().unwrap_or(0)
    }

    /// Copies `image` to addresses `0..image.len()`.
    ///
    /// Memory past the image is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::ProgramTooLarge` if the image is longer than RAM. Nothing is
    /// written in that case.
    pub fn load(&mut self, image: &[u8]) -> Result<(), CpuError> {
        if image.len() > self.data.len() {
            return Err(CpuError::ProgramTooLarge {
                len: image.len(),
                capacity: self.data.len(),
            });
        }
        self.data[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Returns the whole RAM as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}
