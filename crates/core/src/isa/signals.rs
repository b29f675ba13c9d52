//! ALU operation kinds.
//!
//! The decoder produces one of these for every opcode; the ALU consumes it.
//! Kinds are computed per call and never retained.

use std::fmt;

/// ALU operation types selected by a 4-bit opcode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// No operation; the value passes through unchanged.
    #[default]
    Nop,

    /// Wrapping increment by one.
    Inc,

    /// Bitwise XNOR with the second operand.
    Xnor,

    /// Logical shift left by one bit.
    Shl,

    /// Bitwise AND with the second operand.
    And,

    /// Logical shift right by one bit.
    Shr,

    /// Wrapping decrement by one.
    Dec,

    /// Rotate left by one bit.
    Rol,

    /// Rotate right by one bit.
    Ror,

    /// Wrapping addition of the second operand.
    Add,

    /// Bitwise OR with the second operand.
    Or,

    /// Bitwise XOR with the second operand.
    Xor,

    /// Bitwise complement.
    Not,
}

impl AluOp {
    /// Every operation kind, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Nop,
        Self::Inc,
        Self::Xnor,
        Self::Shl,
        Self::And,
        Self::Shr,
        Self::Dec,
        Self::Rol,
        Self::Ror,
        Self::Add,
        Self::Or,
        Self::Xor,
        Self::Not,
    ];

    /// Lower-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "nop",
            Self::Inc => "inc",
            Self::Xnor => "xnor",
            Self::Shl => "shl",
            Self::And => "and",
            Self::Shr => "shr",
            Self::Dec => "dec",
            Self::Rol => "rol",
            Self::Ror => "ror",
            Self::Add => "add",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Not => "not",
        }
    }

    /// Returns `true` if the operation reads the second operand.
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Xor | Self::Xnor | Self::Add)
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
