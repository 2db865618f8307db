//! Configuration system for the LS-8 machine.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline machine constants (RAM size, initial stack pointer).
//! 2. **Structures:** Config split into general run settings and memory layout.
//! 3. **Validation:** Range checks applied after deserialization.
//!
//! Configuration is supplied via JSON (`Config::from_json`) or use `Config::default()` for the CLI.

use serde::Deserialize;

use crate::common::ConfigError;
use crate::common::constants::{DEFAULT_INITIAL_SP, DEFAULT_MEMORY_SIZE, MAX_MEMORY_SIZE};

/// Root configuration structure.
///
/// Every field has a default, so an empty JSON object is a valid configuration.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_steps": 1000 },
///     "memory": { "size": 128, "initial_sp": 128 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, Some(1000));
/// assert_eq!(config.memory.size, 128);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// RAM and stack layout
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Malformed` if the JSON does not match the schema, or
    /// `ConfigError::Invalid` if a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field is within its valid range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.memory.size;
        if size == 0 || size > MAX_MEMORY_SIZE {
            return Err(ConfigError::Invalid(format!(
                "memory.size must be between 1 and {MAX_MEMORY_SIZE}, got {size}"
            )));
        }
        if usize::from(self.memory.initial_sp) > size {
            return Err(ConfigError::Invalid(format!(
                "memory.initial_sp {:#04x} lies beyond memory of {size} bytes",
                self.memory.initial_sp
            )));
        }
        if self.general.max_steps == Some(0) {
            return Err(ConfigError::Invalid(
                "general.max_steps must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `TRACE:` line at `trace` level before every instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Abort with `StepLimitExceeded` after this many instructions (unbounded when unset)
    #[serde(default)]
    pub max_steps: Option<u64>,
}

/// RAM size and stack placement.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// RAM size in bytes
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Initial value of the stack pointer (`R7`)
    #[serde(default = "MemoryConfig::default_initial_sp")]
    pub initial_sp: u8,
}

impl MemoryConfig {
    /// Returns the default RAM size.
    const fn default_size() -> usize {
        DEFAULT_MEMORY_SIZE
    }

    /// Returns the default initial stack pointer.
    const fn default_initial_sp() -> u8 {
        DEFAULT_INITIAL_SP
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_MEMORY_SIZE,
            initial_sp: DEFAULT_INITIAL_SP,
        }
    }
}
