//! LS-8 architectural state outside the register file.
//!
//! Currently only the condition flags written by `CMP`.

/// Condition flags.
pub mod flags;

pub use flags::Flags;
