//! ALU Logic Operation Tests
//!
//! AND, OR, XOR, XNOR and NOT: identity, annihilation and complement laws
//! on single bytes.

use nibblealu_core::isa::AluOp;

use crate::common::alu;

const ALTERNATING_A: u8 = 0xAA;
const ALTERNATING_5: u8 = 0x55;

// ─── AND ─────────────────────────────────────────────────────────────────────

#[test]
fn and_identity() {
    assert_eq!(alu(AluOp::And, 0xB7, 0xFF), 0xB7);
}

#[test]
fn and_annihilation() {
    assert_eq!(alu(AluOp::And, 0xB7, 0x00), 0x00);
}

#[test]
fn and_complement() {
    assert_eq!(alu(AluOp::And, ALTERNATING_A, ALTERNATING_5), 0x00);
}

#[test]
fn and_nibble_mask() {
    assert_eq!(alu(AluOp::And, 0x9C, 0x0F), 0x0C);
}

// ─── OR ──────────────────────────────────────────────────────────────────────

#[test]
fn or_identity() {
    assert_eq!(alu(AluOp::Or, 0xB7, 0x00), 0xB7);
}

#[test]
fn or_annihilation() {
    assert_eq!(alu(AluOp::Or, 0xB7, 0xFF), 0xFF);
}

#[test]
fn or_complement() {
    assert_eq!(alu(AluOp::Or, ALTERNATING_A, ALTERNATING_5), 0xFF);
}

// ─── XOR ─────────────────────────────────────────────────────────────────────

#[test]
fn xor_identity() {
    assert_eq!(alu(AluOp::Xor, 0xB7, 0x00), 0xB7);
}

#[test]
fn xor_self_is_zero() {
    assert_eq!(alu(AluOp::Xor, 0xB7, 0xB7), 0x00);
}

#[test]
fn xor_all_ones_inverts() {
    assert_eq!(alu(AluOp::Xor, 0xB7, 0xFF), 0x48);
}

// ─── XNOR ────────────────────────────────────────────────────────────────────

#[test]
fn xnor_self_is_all_ones() {
    assert_eq!(alu(AluOp::Xnor, 0x3C, 0x3C), 0xFF);
}

#[test]
fn xnor_complement_is_zero() {
    assert_eq!(alu(AluOp::Xnor, ALTERNATING_A, ALTERNATING_5), 0x00);
}

#[test]
fn xnor_with_zero_is_not() {
    assert_eq!(alu(AluOp::Xnor, 0xB7, 0x00), 0x48);
}

#[test]
fn xnor_is_not_of_xor() {
    for (a, b) in [(0x12, 0x34), (0xF0, 0x0F), (0x00, 0x00), (0xFF, 0x01)] {
        assert_eq!(alu(AluOp::Xnor, a, b), !alu(AluOp::Xor, a, b));
    }
}

// ─── NOT ─────────────────────────────────────────────────────────────────────

#[test]
fn not_zero() {
    assert_eq!(alu(AluOp::Not, 0x00, 0), 0xFF);
}

#[test]
fn not_alternating() {
    assert_eq!(alu(AluOp::Not, ALTERNATING_A, 0), ALTERNATING_5);
}

#[test]
fn not_ignores_operand2() {
    assert_eq!(alu(AluOp::Not, 0x0F, 0x0F), 0xF0);
}

#[test]
fn xnor_of_complementary_nibbles() {
    assert_eq!(alu(AluOp::Xnor, 0xF0, 0xFF), 0xF0);
    assert_eq!(alu(AluOp::Xnor, 0xF0, 0x0F), 0x00);
}
