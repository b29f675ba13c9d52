//! Program runner.
//!
//! This module replays opcode sequences against an accumulator. It provides:
//! 1. **Programs:** Ordered opcode lists parsed from text or built from codebook values.
//! 2. **Machine:** The accumulator state, passed explicitly rather than held globally.

/// Accumulator machine and execution trace.
pub mod machine;

/// Program construction.
pub mod program;

pub use machine::{Machine, Step};
pub use program::Program;
