//! # Configuration Tests
//!
//! Defaults, JSON deserialization, and range validation.

use ls8_core::common::ConfigError;
use ls8_core::common::constants::{DEFAULT_INITIAL_SP, DEFAULT_MEMORY_SIZE};
use ls8_core::config::Config;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.memory.size, DEFAULT_MEMORY_SIZE);
    assert_eq!(config.memory.initial_sp, DEFAULT_INITIAL_SP);
    assert_eq!(config.general.max_steps, None);
    assert!(!config.general.trace_instructions);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.memory.size, 256);
    assert_eq!(config.memory.initial_sp, 0xFF);
}

#[test]
fn test_partial_sections_fill_in_defaults() {
    let config = Config::from_json(r#"{ "memory": { "initial_sp": 244 } }"#).unwrap();
    assert_eq!(config.memory.size, 256);
    assert_eq!(config.memory.initial_sp, 0xF4);
    assert_eq!(config.general.max_steps, None);
}

#[test]
fn test_json_deserialization_with_limits_and_tracing() {
    let json = r#"{
        "general": { "trace_instructions": true, "max_steps": 5000 },
        "memory": { "size": 64, "initial_sp": 64 }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.max_steps, Some(5000));
    assert_eq!(config.memory.size, 64);
    assert_eq!(config.memory.initial_sp, 64);
}

#[rstest]
#[case::zero_size(r#"{ "memory": { "size": 0, "initial_sp": 0 } }"#)]
#[case::too_large(r#"{ "memory": { "size": 257 } }"#)]
#[case::sp_past_end(r#"{ "memory": { "size": 16, "initial_sp": 17 } }"#)]
#[case::zero_steps(r#"{ "general": { "max_steps": 0 } }"#)]
fn test_out_of_range_values_are_rejected(#[case] json: &str) {
    assert!(matches!(
        Config::from_json(json),
        Err(ConfigError::Invalid(_))
    ));
}

#[rstest]
#[case::not_json("memory = 256")]
#[case::wrong_type(r#"{ "memory": { "size": "big" } }"#)]
#[case::sp_wider_than_a_byte(r#"{ "memory": { "initial_sp": 256 } }"#)]
fn test_malformed_json_is_rejected(#[case] json: &str) {
    assert!(matches!(
        Config::from_json(json),
        Err(ConfigError::Malformed(_))
    ));
}
