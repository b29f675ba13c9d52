//! Flat call surface.
//!
//! These four functions are the entry points used by the CLI and by any
//! external driver. Inputs are optional the way a nullable reference would be:
//! an absent opcode decodes to NOP, an absent dataset is an error for XOR and
//! weighs zero for the population counter.

use tracing::debug;

use crate::common::error::{CoreError, Result};
use crate::units::alu::transform;
use crate::units::dataset::{self, XorBuffer};
use crate::units::popcount;

/// Applies the transformation selected by `code` to `byte_value`.
///
/// `operand2` is used only by the binary operations (AND, OR, XOR, XNOR, ADD).
/// An absent or malformed `code` leaves `byte_value` unchanged.
///
/// # Examples
///
/// ```
/// use nibblealu_core::api::apply_single_byte_transformation;
///
/// assert_eq!(apply_single_byte_transformation(0xFF, Some("0001"), 0), 0x00);
/// assert_eq!(apply_single_byte_transformation(0x5A, Some("1111"), 0), 0xA5);
/// assert_eq!(apply_single_byte_transformation(0x5A, None, 0), 0x5A);
/// ```
pub fn apply_single_byte_transformation(byte_value: u8, code: Option<&str>, operand2: u8) -> u8 {
    code.map_or(byte_value, |c| transform(byte_value, c, operand2))
}

/// XORs the first `data_len` bytes of two datasets into a new buffer.
///
/// Both inputs must be present and exactly `data_len` bytes long.
///
/// # Errors
///
/// - [`CoreError::MissingInput`] if either input is `None`.
/// - [`CoreError::EmptyDataset`] if `data_len` is zero.
/// - [`CoreError::LengthMismatch`] if either input is not `data_len` bytes long.
/// - [`CoreError::AllocationFailed`] if the result cannot be allocated.
pub fn xor_datasets(
    data_a: Option<&[u8]>,
    data_b: Option<&[u8]>,
    data_len: usize,
) -> Result<XorBuffer> {
    let a = data_a.ok_or(CoreError::MissingInput("data_a"))?;
    let b = data_b.ok_or(CoreError::MissingInput("data_b"))?;
    if data_len == 0 {
        debug!("rejecting zero-length xor");
        return Err(CoreError::EmptyDataset);
    }
    for actual in [a.len(), b.len()] {
        if actual != data_len {
            return Err(CoreError::LengthMismatch {
                expected: data_len,
                actual,
            });
        }
    }
    dataset::xor(a, b)
}

/// Counts the set bits in the first `data_len` bytes of `data`.
///
/// `data_len` is clamped to the length of `data`. Absent input weighs zero.
pub fn calculate_hamming_weight(data: Option<&[u8]>, data_len: usize) -> usize {
    data.map_or(0, |d| popcount::hamming_weight(&d[..data_len.min(d.len())]))
}

/// Releases a buffer returned by [`xor_datasets`].
///
/// Passing `None` is a no-op. Because the buffer is moved in, it cannot be
/// released twice or used afterwards.
pub fn free_core_memory(buffer: Option<XorBuffer>) {
    drop(buffer);
}
