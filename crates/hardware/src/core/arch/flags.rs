//! Condition Flags.
//!
//! This module defines the `FL` register. It implements the following:
//! 1. **Three-way Result:** Less-than, greater-than and equal, set together by `CMP`.
//! 2. **Exclusivity:** Built from a single `Ordering`, so exactly one flag is set.
//! 3. **Encoding:** Packed form `0b00000LGE` for traces and dumps.

use std::cmp::Ordering;
use std::fmt;

/// Less-than bit in the packed `FL` byte.
pub const FL_LESS: u8 = 0b100;
/// Greater-than bit in the packed `FL` byte.
pub const FL_GREATER: u8 = 0b010;
/// Equal bit in the packed `FL` byte.
pub const FL_EQUAL: u8 = 0b001;

/// Condition flags written by `CMP` and read by `JEQ`/`JNE`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Last comparison found `a < b`.
    pub less: bool,
    /// Last comparison found `a > b`.
    pub greater: bool,
    /// Last comparison found `a == b`.
    pub equal: bool,
}

impl Flags {
    /// Builds the flags for a comparison result, with exactly one flag set.
    pub const fn from_ordering(ord: Ordering) -> Self {
        Self {
            less: matches!(ord, Ordering::Less),
            greater: matches!(ord, Ordering::Greater),
            equal: matches!(ord, Ordering::Equal),
        }
    }

    /// Returns the packed `0b00000LGE` form.
    pub const fn bits(self) -> u8 {
        let mut bits = 0;
        if self.less {
            bits |= FL_LESS;
        }
        if self.greater {
            bits |= FL_GREATER;
        }
        if self.equal {
            bits |= FL_EQUAL;
        }
        bits
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = if self.less { 'L' } else { '-' };
        let g = if self.greater { 'G' } else { '-' };
        let e = if self.equal { 'E' } else { '-' };
        write!(f, "{l}{g}{e}")
    }
}
