//! Conversion between byte sequences and big-endian bit sequences.
//!
//! A bit sequence is a `Vec<u8>` holding only `0` and `1`. Each byte expands to
//! eight bits, most significant first. Converting back consumes groups of eight
//! bits; a trailing group shorter than eight bits is dropped rather than padded,
//! so a round trip is only exact when the bit count is a multiple of 8.

use crate::error::{ParityError, Result};

/// Expands bytes into bits, most significant bit first.
pub fn bits_from_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Packs bits into bytes, first bit of each group is weight 2^7.
///
/// A final group of fewer than 8 bits is discarded.
pub fn bytes_from_bits(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|group| group.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1)))
        .collect()
}

/// Parses a user supplied parity string such as `"0110 1001"`.
///
/// ASCII whitespace is ignored; any other character besides `0` and `1` is rejected.
pub fn parse_bits(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            other => Err(ParityError::InvalidParity(other)),
        })
        .collect()
}

/// Renders bits as a `0`/`1` string.
pub fn format_bits(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}
