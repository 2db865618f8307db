//! Three-way comparison.

use crate::core::arch::Flags;

/// Compares two unsigned register values and returns the resulting flags.
#[inline]
pub fn execute(a: u8, b: u8) -> Flags {
    Flags::from_ordering(a.cmp(&b))
}
