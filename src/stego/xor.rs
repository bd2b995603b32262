//! XOR masking of byte sequences.

use crate::error::{ParityError, Result};

/// XORs two byte sequences of equal length.
///
/// # Errors
/// [`ParityError::LengthMismatch`] if the operands differ in length. Callers are
/// expected to size both sides beforehand.
pub fn xor_bytes(left: &[u8], right: &[u8]) -> Result<Vec<u8>> {
    if left.len() != right.len() {
        return Err(ParityError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(left.iter().zip(right).map(|(a, b)| a ^ b).collect())
}

/// XORs `data` with `key` repeated to the length of `data`.
///
/// An empty key leaves the data unchanged. Applying the same key twice
/// returns the original data.
pub fn xor_key(key: &[u8], data: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .zip(key.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect()
}
