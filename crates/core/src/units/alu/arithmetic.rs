//! ALU arithmetic operations.
//!
//! Increment, decrement and add, all wrapping modulo 256 with no saturation.

use crate::isa::signals::AluOp;

/// Executes a wrapping arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand (used by `Add` only).
///
/// # Returns
///
/// The wrapped result. Returns `a` unchanged for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::Inc => a.wrapping_add(1),
        AluOp::Dec => a.wrapping_sub(1),
        AluOp::Add => a.wrapping_add(b),
        _ => a,
    }
}
