//! Execution units.
//!
//! 1. **ALU:** Single-byte transformations selected by a 4-bit opcode.
//! 2. **Dataset:** Element-wise XOR of two byte sequences into an owned buffer.
//! 3. **Popcount:** Hamming weight and Hamming distance over byte sequences.

/// Byte Arithmetic Logic Unit.
pub mod alu;

/// Dataset XOR and the owned result buffer.
pub mod dataset;

/// Population count (Hamming weight).
pub mod popcount;
