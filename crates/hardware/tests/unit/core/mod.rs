
/// Condition flag encoding.
pub mod flags;


/// Property tests spanning several instructions.
pub mod properties;
