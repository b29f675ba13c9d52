//! # Codebook Tests

use std::collections::HashSet;

use nibblealu_core::isa::codebook::{self, DEMO_SEQUENCE};
use nibblealu_core::isa::Opcode;

#[test]
fn test_known_entries() {
    let pairs = [(6, "0110"), (-6, "1001"), (-1, "1011"), (8, "1110"), (-7, "1000")];
    for (value, code) in pairs {
        assert_eq!(codebook::encode(value).unwrap().to_string(), code);
    }
}

#[test]
fn test_values_without_entries() {
    for value in [0, 3, -3, 9, -9, i8::MIN, i8::MAX] {
        assert!(codebook::encode(value).is_none(), "{value}");
    }
}

#[test]
fn test_codebook_is_a_bijection() {
    let entries: Vec<_> = codebook::entries().collect();
    assert_eq!(entries.len(), 14);

    let codes: HashSet<Opcode> = entries.iter().map(|&(_, op)| op).collect();
    assert_eq!(codes.len(), 14);

    for (value, opcode) in entries {
        assert_eq!(codebook::decode_value(opcode), Some(value));
    }
}

#[test]
fn test_all_zero_and_all_one_have_no_value() {
    assert_eq!(codebook::decode_value(Opcode::new(0).unwrap()), None);
    assert_eq!(codebook::decode_value(Opcode::new(15).unwrap()), None);
}

#[test]
fn test_demo_sequence_is_fully_encodable() {
    assert_eq!(DEMO_SEQUENCE.len(), 37);
    assert!(DEMO_SEQUENCE.iter().all(|&v| codebook::encode(v).is_some()));
}
