//! # Configuration Tests
//!
//! Defaults, partial JSON documents and malformed input.

use nibblealu_core::config::{Config, GeneralConfig, ProgramConfig};
use nibblealu_core::isa::codebook::DEMO_SEQUENCE;
use nibblealu_core::isa::Opcode;
use nibblealu_core::sim::Program;
use nibblealu_core::CoreError;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace);
    assert_eq!(config.program.initial, 0);
    assert_eq!(config.program.operand2, 0);
    assert_eq!(config.program.codes.len(), DEMO_SEQUENCE.len());
}

#[test]
fn test_default_program_starts_with_demo_codes() {
    let program = ProgramConfig::default();
    // +6 → 0110, +7 → 0111, -5 → 0101
    assert_eq!(&program.codes[..3], ["0110", "0111", "0101"]);
}

#[test]
fn test_default_codes_follow_demo_program() {
    let codes: Vec<String> = Program::demo().ops().iter().map(Opcode::to_string).collect();
    assert_eq!(ProgramConfig::default().codes, codes);
    assert!(Program::from_codes(&ProgramConfig::default().codes).is_ok());
}

#[test]
fn test_general_defaults() {
    assert_eq!(GeneralConfig::default(), GeneralConfig { trace: false });
}

#[test]
fn test_empty_document_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_document() {
    let config = Config::from_json(r#"{ "program": { "initial": 200 } }"#).unwrap();
    assert_eq!(config.program.initial, 200);
    assert_eq!(config.program.operand2, 0);
    assert_eq!(config.program.codes, ProgramConfig::default().codes);
    assert!(!config.general.trace);
}

#[test]
fn test_full_document() {
    let json = r#"{
        "general": { "trace": true },
        "program": { "codes": ["0001", "1001"], "initial": 7, "operand2": 255 }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert!(config.general.trace);
    assert_eq!(config.program.codes, vec!["0001", "1001"]);
    assert_eq!(config.program.initial, 7);
    assert_eq!(config.program.operand2, 255);
}

#[test]
fn test_out_of_range_byte_is_rejected() {
    let err = Config::from_json(r#"{ "program": { "initial": 256 } }"#).unwrap_err();
    assert!(matches!(err, CoreError::Config(_)));
}

#[test]
fn test_wrong_type_is_rejected() {
    assert!(Config::from_json(r#"{ "general": { "trace": "yes" } }"#).is_err());
}

#[test]
fn test_json_round_trip() {
    let mut config = Config::default();
    config.general.trace = true;
    config.program.operand2 = 0x5A;
    let text = config.to_json().unwrap();
    assert_eq!(Config::from_json(&text).unwrap(), config);
}
