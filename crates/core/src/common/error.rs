//! Error definitions.
//!
//! Only dataset operations and strict parsing can fail. The opcode decoder and
//! the byte transformer are total functions and never produce a `CoreError`:
//! malformed opcodes degrade to NOP instead.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by the byte ALU library.
///
/// Every variant is recoverable by the caller; nothing in the crate aborts
/// the process on bad input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// One of the dataset inputs was absent.
    #[error("dataset input `{0}` is missing")]
    MissingInput(&'static str),

    /// A dataset operation was given zero-length input.
    #[error("dataset is empty")]
    EmptyDataset,

    /// Dataset inputs do not share the same length.
    #[error("dataset length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Length every input was required to have.
        expected: usize,
        /// Offending length.
        actual: usize,
    },

    /// The result buffer could not be allocated.
    #[error("failed to allocate {len} byte result buffer")]
    AllocationFailed {
        /// Requested buffer length.
        len: usize,
        /// Allocator error.
        #[source]
        source: TryReserveError,
    },

    /// Strict opcode parsing rejected the input.
    #[error("invalid opcode {0:?}: expected 4 binary digits")]
    InvalidOpcode(String),

    /// A signed value has no entry in the codebook.
    #[error("value {0} has no codebook entry")]
    UnknownCodebookValue(i8),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenient Result type
pub type Result<T> = std::result::Result<T, CoreError>;
