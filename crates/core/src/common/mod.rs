//! Common utilities and types used throughout the byte ALU.
//!
//! This module provides the building blocks shared by every unit. It includes:
//! 1. **Constants:** Opcode and byte widths, bit masks.
//! 2. **Error Handling:** The crate error type and `Result` alias.

/// Common constants used throughout the crate.
pub mod constants;

/// Error types.
pub mod error;

pub use constants::{BYTE_BITS, OPCODE_WIDTH};
pub use error::{CoreError, Result};
