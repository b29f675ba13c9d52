//! Dataset XOR.
//!
//! This module XORs two equal-length byte sequences element by element. It provides:
//! 1. **Validation:** Empty or mismatched inputs are reported, never truncated.
//! 2. **Fallible Allocation:** The result buffer is reserved with `try_reserve_exact`,
//!    so out-of-memory surfaces as [`CoreError::AllocationFailed`].
//! 3. **Ownership:** The result is an [`XorBuffer`], a move-only owned buffer
//!    released exactly once when it is dropped.

use std::ops::Deref;

use tracing::debug;

use crate::common::error::{CoreError, Result};

/// Owned result of a dataset XOR.
///
/// The buffer is never empty and is not `Clone`. Its storage is freed when
/// the owner drops it or passes it to [`crate::api::free_core_memory`].
#[derive(Debug, PartialEq, Eq)]
pub struct XorBuffer {
    bytes: Vec<u8>,
}

impl XorBuffer {
    /// Number of bytes in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; an empty XOR is rejected before allocation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrows the bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the buffer and returns the underlying vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl Deref for XorBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for XorBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<XorBuffer> for Vec<u8> {
    fn from(buffer: XorBuffer) -> Self {
        buffer.bytes
    }
}

/// Checks that two datasets can be combined element-wise.
///
/// # Errors
///
/// Returns [`CoreError::EmptyDataset`] if `a` is empty, or
/// [`CoreError::LengthMismatch`] if `b` differs in length from `a`.
pub fn check_pair(a: &[u8], b: &[u8]) -> Result<()> {
    if a.is_empty() {
        debug!("rejecting empty dataset");
        return Err(CoreError::EmptyDataset);
    }
    if a.len() != b.len() {
        debug!(left = a.len(), right = b.len(), "rejecting mismatched datasets");
        return Err(CoreError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// XORs two datasets into a newly allocated buffer.
///
/// # Errors
///
/// Returns [`CoreError::EmptyDataset`] or [`CoreError::LengthMismatch`] for
/// invalid input and [`CoreError::AllocationFailed`] if the result buffer
/// cannot be reserved. No buffer is returned on any error.
///
/// # Examples
///
/// ```
/// use nibblealu_core::units::dataset::xor;
///
/// let out = xor(&[0b1100, 0xFF], &[0b1010, 0x0F]).unwrap();
/// assert_eq!(out.as_bytes(), &[0b0110, 0xF0]);
/// assert!(xor(&[1, 2], &[1]).is_err());
/// ```
pub fn xor(a: &[u8], b: &[u8]) -> Result<XorBuffer> {
    check_pair(a, b)?;

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(a.len())
        .map_err(|source| CoreError::AllocationFailed {
            len: a.len(),
            source,
        })?;
    bytes.extend(a.iter().zip(b).map(|(x, y)| x ^ y));

    Ok(XorBuffer { bytes })
}
