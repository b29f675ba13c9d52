//! Validated 4-bit opcodes.
//!
//! [`Opcode`] is the strict counterpart of [`decode`](super::decode::decode):
//! it can only hold values `0..=15`, and parsing text into it fails loudly
//! instead of degrading to NOP. Programs are built from `Opcode`s so that a
//! typo in a sequence is reported rather than silently skipped.

use std::fmt;
use std::str::FromStr;

use crate::common::constants::OPCODE_MAX;
use crate::common::error::CoreError;
use crate::isa::decode::{op_for, parse_bits};
use crate::isa::signals::AluOp;

/// A 4-bit opcode value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Opcode(u8);

impl Opcode {
    /// The all-zero opcode (`0000`, NOP).
    pub const NOP: Self = Self(0);

    /// Creates an opcode from a raw value, or `None` if it does not fit in 4 bits.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= OPCODE_MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw 4-bit value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Operation this opcode selects.
    #[inline]
    pub const fn op(self) -> AluOp {
        op_for(self.0)
    }

    /// Iterates over all sixteen opcodes in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=OPCODE_MAX).map(Self)
    }
}

impl FromStr for Opcode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bits(s)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidOpcode(s.to_owned()))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

impl From<Opcode> for AluOp {
    fn from(opcode: Opcode) -> Self {
        opcode.op()
    }
}
