//! Crate-wide constants.

/// Number of characters in a textual opcode (`"0000"`..=`"1111"`).
pub const OPCODE_WIDTH: usize = 4;

/// Largest raw opcode value (4 bits).
pub const OPCODE_MAX: u8 = 0x0F;

/// Number of bits in a byte value.
pub const BYTE_BITS: u32 = 8;

/// Mask for the most significant bit of a byte.
pub const BYTE_MSB: u8 = 0x80;

/// Mask for the least significant bit of a byte.
pub const BYTE_LSB: u8 = 0x01;
