//! ALU logical operations.
//!
//! Implements bitwise AND, OR, XOR, XNOR and NOT over a single byte.
//! NOT is the only unary operation here and ignores the second operand.

use crate::isa::signals::AluOp;

/// Executes a bitwise logical operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand (ignored by `Not`).
///
/// # Returns
///
/// The resulting byte. Returns `a` unchanged for non-logic opcodes.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Xnor => !(a ^ b),
        AluOp::Not => !a,
        _ => a,
    }
}
