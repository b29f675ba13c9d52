//! Instruction set for the 4-bit byte ALU.
//!
//! This module defines how opcodes are represented and interpreted. It provides:
//! 1. **Signals:** The closed set of ALU operation kinds.
//! 2. **Opcode:** A validated 4-bit opcode with strict text parsing.
//! 3. **Decode:** The lenient decoder mapping any text to an operation (malformed → NOP).
//! 4. **Codebook:** The signed-value ↔ opcode map used by replayed sequences.

/// Signed-value to opcode mapping and the demo sequence.
pub mod codebook;

/// Opcode text decoder and the opcode → operation table.
pub mod decode;

/// Validated 4-bit opcode type.
pub mod opcode;

/// ALU operation kinds.
pub mod signals;

pub use decode::decode;
pub use opcode::Opcode;
pub use signals::AluOp;
