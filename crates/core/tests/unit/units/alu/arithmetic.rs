//! ALU Arithmetic Operation Tests
//!
//! INC, DEC and ADD with wrapping at the 0x00/0xFF boundaries.

use nibblealu_core::isa::AluOp;

use crate::common::alu;

// ─── INC ─────────────────────────────────────────────────────────────────────

#[test]
fn inc_zero() {
    assert_eq!(alu(AluOp::Inc, 0x00, 0), 0x01);
}

#[test]
fn inc_wraps_at_max() {
    assert_eq!(alu(AluOp::Inc, 0xFF, 0), 0x00);
}

#[test]
fn inc_crosses_sign_boundary() {
    assert_eq!(alu(AluOp::Inc, 0x7F, 0), 0x80);
}

#[test]
fn inc_ignores_operand2() {
    assert_eq!(alu(AluOp::Inc, 0x10, 0xAB), 0x11);
}

// ─── DEC ─────────────────────────────────────────────────────────────────────

#[test]
fn dec_one() {
    assert_eq!(alu(AluOp::Dec, 0x01, 0), 0x00);
}

#[test]
fn dec_wraps_at_zero() {
    assert_eq!(alu(AluOp::Dec, 0x00, 0), 0xFF);
}

#[test]
fn dec_crosses_sign_boundary() {
    assert_eq!(alu(AluOp::Dec, 0x80, 0), 0x7F);
}

#[test]
fn dec_ignores_operand2() {
    assert_eq!(alu(AluOp::Dec, 0x10, 0xAB), 0x0F);
}

// ─── ADD ─────────────────────────────────────────────────────────────────────

#[test]
fn add_no_wrap() {
    assert_eq!(alu(AluOp::Add, 0b0000_0101, 0b0000_0011), 0b0000_1000);
}

#[test]
fn add_identity() {
    assert_eq!(alu(AluOp::Add, 0xC3, 0x00), 0xC3);
}

#[test]
fn add_wraps() {
    assert_eq!(alu(AluOp::Add, 0xF0, 0x20), 0x10);
}

#[test]
fn add_max_plus_max() {
    assert_eq!(alu(AluOp::Add, 0xFF, 0xFF), 0xFE);
}

#[test]
fn add_commutative() {
    assert_eq!(alu(AluOp::Add, 0x3C, 0xE1), alu(AluOp::Add, 0xE1, 0x3C));
}

#[test]
fn inc_then_dec_is_identity() {
    for v in 0..=u8::MAX {
        assert_eq!(alu(AluOp::Dec, alu(AluOp::Inc, v, 0), 0), v);
    }
}
