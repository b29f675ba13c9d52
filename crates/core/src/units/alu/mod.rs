//! Byte Arithmetic Logic Unit (ALU).
//!
//! This module applies one decoded [`AluOp`] to a byte. All arithmetic is
//! modulo 256 and every operation is total: there are no failure modes and
//! the result is always a valid `u8`.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Inc, Dec, Add
//! - [`logic`]:      And, Or, Xor, Xnor, Not
//! - [`shifts`]:     Shl, Shr, Rol, Ror

/// Wrapping arithmetic operations (increment, decrement, add).
pub mod arithmetic;

/// Bitwise logical operations (and, or, xor, xnor, not).
pub mod logic;

/// Shift and rotate operations (shl, shr, rol, ror).
pub mod shifts;

use tracing::trace;

use crate::isa::decode::decode;
use crate::isa::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for single-byte operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes a byte ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - Primary operand
    /// * `b`  - Second operand; read only by `And`, `Or`, `Xor`, `Xnor` and `Add`
    ///
    /// # Examples
    ///
    /// ```
    /// use nibblealu_core::isa::AluOp;
    /// use nibblealu_core::units::alu::Alu;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 5, 3), 8);
    /// assert_eq!(Alu::execute(AluOp::Inc, 0xFF, 0), 0x00);
    /// assert_eq!(Alu::execute(AluOp::Ror, 0b0000_0001, 0), 0b1000_0000);
    /// assert_eq!(Alu::execute(AluOp::Xnor, 0xF0, 0xFF), 0xF0);
    /// assert_eq!(Alu::execute(AluOp::Xnor, 0xF0, 0x0F), 0x00);
    /// ```
    pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
        match op {
            AluOp::Nop => a,

            AluOp::Inc | AluOp::Dec | AluOp::Add => arithmetic::execute(op, a, b),

            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Xnor | AluOp::Not => {
                logic::execute(op, a, b)
            }

            AluOp::Shl | AluOp::Shr | AluOp::Rol | AluOp::Ror => shifts::execute(op, a),
        }
    }
}

/// Decodes `code` and applies it to `value`.
///
/// Malformed codes decode to NOP, so `value` is returned unchanged.
///
/// # Examples
///
/// ```
/// use nibblealu_core::units::alu::transform;
///
/// assert_eq!(transform(0b0000_0101, "1011", 0b0000_0011), 0b0000_1000);
/// assert_eq!(transform(0x42, "bogus", 0x00), 0x42);
/// ```
pub fn transform(value: u8, code: &str, operand2: u8) -> u8 {
    let op = decode(code);
    let result = Alu::execute(op, value, operand2);
    trace!(%op, value, operand2, result, "alu");
    result
}
