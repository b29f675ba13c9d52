//! 4-bit opcode byte ALU library.
//!
//! This crate implements a small byte-transformation engine with the following:
//! 1. **ISA:** 4-bit opcodes, the lenient opcode decoder, and the signed-value codebook.
//! 2. **Units:** The byte ALU, dataset XOR with an owned result buffer, and population count.
//! 3. **API:** The flat call surface (`apply_single_byte_transformation`, `xor_datasets`,
//!    `calculate_hamming_weight`, `free_core_memory`).
//! 4. **Simulation:** A program runner that replays opcode sequences against an accumulator.
//! 5. **Configuration and statistics:** JSON run configuration and per-op execution counts.

/// Flat call surface over the units.
pub mod api;
/// Common types and constants (errors, bit widths).
pub mod common;
/// Run configuration (defaults, JSON deserialization).
pub mod config;
/// Instruction set (opcode, decoder, codebook).
pub mod isa;
/// Program runner with injected accumulator state.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;
/// Execution units (byte ALU, dataset XOR, population count).
pub mod units;

/// Crate-wide error type; see [`common::error`].
pub use crate::common::{CoreError, Result};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Decoded operation kind.
pub use crate::isa::AluOp;
/// Validated 4-bit opcode.
pub use crate::isa::Opcode;
/// Accumulator machine that executes programs.
pub use crate::sim::{Machine, Program};
/// Owned result of a dataset XOR.
pub use crate::units::dataset::XorBuffer;
