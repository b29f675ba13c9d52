//! Population count.
//!
//! Hamming weight counts set bits per byte by repeatedly clearing the lowest
//! set bit, so each byte costs one iteration per set bit rather than eight.

use crate::common::error::Result;
use crate::units::dataset::check_pair;

/// Number of set bits in one byte.
#[inline]
pub const fn byte_weight(mut byte: u8) -> u32 {
    let mut weight = 0;
    while byte != 0 {
        byte &= byte - 1;
        weight += 1;
    }
    weight
}

/// Total number of set bits across `data`. Empty input has weight zero.
///
/// # Examples
///
/// ```
/// use nibblealu_core::units::popcount::hamming_weight;
///
/// assert_eq!(hamming_weight(&[0xFF]), 8);
/// assert_eq!(hamming_weight(&[0x00]), 0);
/// assert_eq!(hamming_weight(&[]), 0);
/// assert_eq!(hamming_weight(&[0b1010_0001, 0b0000_0110]), 5);
/// ```
pub fn hamming_weight(data: &[u8]) -> usize {
    data.iter().map(|&b| byte_weight(b) as usize).sum()
}

/// Number of bit positions at which `a` and `b` differ.
///
/// Counts the set bits of `a ^ b` without allocating the XOR result.
///
/// # Errors
///
/// Fails on the same inputs as [`crate::units::dataset::xor`]: empty or
/// mismatched datasets.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> Result<usize> {
    check_pair(a, b)?;
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| byte_weight(x ^ y) as usize)
        .sum())
}
