//! ALU Properties and `transform` Scenarios
//!
//! Whole-domain properties that must hold for every byte value, checked
//! with proptest, plus the concrete scenarios from the opcode table.

use nibblealu_core::isa::AluOp;
use nibblealu_core::units::alu::{Alu, transform};
use proptest::prelude::*;

use crate::common::{init_tracing, malformed_opcode};

#[test]
fn transform_add_without_wrap() {
    init_tracing();
    assert_eq!(transform(0b0000_0101, "1011", 0b0000_0011), 0b0000_1000);
}

#[test]
fn transform_increment_wraps() {
    assert_eq!(transform(0xFF, "0001", 0), 0x00);
}

#[test]
fn transform_both_decrement_codes() {
    assert_eq!(transform(0x00, "1000", 0), 0xFF);
    assert_eq!(transform(0x00, "1110", 0), 0xFF);
}

#[test]
fn transform_explicit_nops() {
    for code in ["0000", "0101", "0111"] {
        assert_eq!(transform(0x5A, code, 0xFF), 0x5A, "{code}");
    }
}

fn apply_n(op: AluOp, mut v: u8, n: usize) -> u8 {
    for _ in 0..n {
        v = Alu::execute(op, v, 0);
    }
    v
}

proptest! {
    #[test]
    fn nop_is_identity(v in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(transform(v, "0000", b), v);
    }

    #[test]
    fn not_is_complement(v in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(transform(v, "1111", b), !v);
    }

    #[test]
    fn not_is_involution(v in any::<u8>()) {
        prop_assert_eq!(transform(transform(v, "1111", 0), "1111", 0), v);
    }

    #[test]
    fn rol_eight_times_is_identity(v in any::<u8>()) {
        prop_assert_eq!(apply_n(AluOp::Rol, v, 8), v);
    }

    #[test]
    fn ror_eight_times_is_identity(v in any::<u8>()) {
        prop_assert_eq!(apply_n(AluOp::Ror, v, 8), v);
    }

    #[test]
    fn add_is_modular(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(transform(a, "1011", b) as u16, (a as u16 + b as u16) % 256);
    }

    #[test]
    fn xor_then_xor_restores(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(transform(transform(a, "1101", b), "1101", b), a);
    }

    #[test]
    fn unary_ops_ignore_operand2(v in any::<u8>(), b1 in any::<u8>(), b2 in any::<u8>()) {
        for op in AluOp::ALL.into_iter().filter(|op| !op.is_binary()) {
            prop_assert_eq!(Alu::execute(op, v, b1), Alu::execute(op, v, b2));
        }
    }

    #[test]
    fn malformed_code_leaves_value(v in any::<u8>(), b in any::<u8>(), code in malformed_opcode()) {
        prop_assert_eq!(transform(v, &code, b), v);
    }
}
