//! Opcode Decoder.
//!
//! This module turns textual 4-bit opcodes into [`AluOp`]s. Decoding is total:
//! input of the wrong length, or containing anything other than `'0'` and
//! `'1'`, decodes to [`AluOp::Nop`] rather than failing.
//!
//! Opcode table (MSB first):
//!
//! | Code   | Op   | Code   | Op   |
//! |--------|------|--------|------|
//! | `0000` | nop  | `1000` | dec  |
//! | `0001` | inc  | `1001` | rol  |
//! | `0010` | xnor | `1010` | ror  |
//! | `0011` | shl  | `1011` | add  |
//! | `0100` | and  | `1100` | or   |
//! | `0101` | nop  | `1101` | xor  |
//! | `0110` | shr  | `1110` | dec  |
//! | `0111` | nop  | `1111` | not  |

use tracing::debug;

use crate::common::constants::OPCODE_WIDTH;
use crate::isa::signals::AluOp;

/// Operation selected by each raw opcode value.
///
/// `0101` and `0111` are NOPs; `1000` and `1110` are both DEC.
const OP_TABLE: [AluOp; 16] = [
    AluOp::Nop,  // 0000
    AluOp::Inc,  // 0001
    AluOp::Xnor, // 0010
    AluOp::Shl,  // 0011
    AluOp::And,  // 0100
    AluOp::Nop,  // 0101
    AluOp::Shr,  // 0110
    AluOp::Nop,  // 0111
    AluOp::Dec,  // 1000
    AluOp::Rol,  // 1001
    AluOp::Ror,  // 1010
    AluOp::Add,  // 1011
    AluOp::Or,   // 1100
    AluOp::Xor,  // 1101
    AluOp::Dec,  // 1110
    AluOp::Not,  // 1111
];

/// Parses exactly four binary digits, MSB first, into a value in `0..=15`.
///
/// Returns `None` for any other input.
pub fn parse_bits(code: &str) -> Option<u8> {
    let bytes = code.as_bytes();
    if bytes.len() != OPCODE_WIDTH {
        return None;
    }
    bytes.iter().try_fold(0u8, |acc, &c| match c {
        b'0' => Some(acc << 1),
        b'1' => Some((acc << 1) | 1),
        _ => None,
    })
}

/// Looks up the operation for a raw opcode value.
///
/// Only the low four bits of `value` are significant.
#[inline]
pub const fn op_for(value: u8) -> AluOp {
    OP_TABLE[(value & 0x0F) as usize]
}

/// Decodes a textual opcode into an ALU operation.
///
/// # Examples
///
/// ```
/// use nibblealu_core::isa::{decode, AluOp};
///
/// assert_eq!(decode("1011"), AluOp::Add);
/// assert_eq!(decode("1110"), AluOp::Dec);
/// assert_eq!(decode("10x1"), AluOp::Nop);
/// assert_eq!(decode(""), AluOp::Nop);
/// ```
pub fn decode(code: &str) -> AluOp {
    parse_bits(code).map_or_else(
        || {
            debug!(opcode = code, "malformed opcode decodes to nop");
            AluOp::Nop
        },
        op_for,
    )
}
