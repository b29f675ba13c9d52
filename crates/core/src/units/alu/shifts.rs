//! ALU shift and rotate operations.
//!
//! Shifts are logical and move by exactly one bit: the bit shifted out is
//! discarded and the vacated bit is zero. Rotates move by one bit and carry
//! bit 7 into bit 0 (`Rol`) or bit 0 into bit 7 (`Ror`).

use crate::common::constants::{BYTE_LSB, BYTE_MSB};
use crate::isa::signals::AluOp;

/// Executes a shift or rotate by one bit position.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift/rotate variant).
/// * `a`  - The value to shift.
///
/// # Returns
///
/// The shifted byte. Returns `a` unchanged for non-shift opcodes.
pub const fn execute(op: AluOp, a: u8) -> u8 {
    match op {
        AluOp::Shl => a << 1,
        AluOp::Shr => a >> 1,
        AluOp::Rol => (a << 1) | ((a & BYTE_MSB) >> 7),
        AluOp::Ror => (a >> 1) | ((a & BYTE_LSB) << 7),
        _ => a,
    }
}
