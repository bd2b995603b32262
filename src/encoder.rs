//! Message encoding.
//!
//! This module turns a message into the parity the cover text must carry:
//! 1. Read as many keystream bytes from the image as the message has
//! 2. XOR the message with the keystream
//! 3. XOR with the repeating key, if one is given
//! 4. Expand the result into bits (most significant first)
//!
//! The caller then writes cover text whose letters spell those bits.

use tracing::debug;

use crate::bits::{bits_from_bytes, format_bits};
use crate::error::Result;
use crate::stego::{xor_bytes, xor_key, ImageSource};

/// Result of encoding a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedParity {
    /// Required cover text parity, one element per bit.
    pub parity: Vec<u8>,
    /// Number of message bytes encoded.
    pub message_len: usize,
}

impl EncodedParity {
    /// The parity as a `0`/`1` string.
    pub fn parity_string(&self) -> String {
        format_bits(&self.parity)
    }
}

/// Configuration for the encoder.
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    /// Optional repeating XOR key. An empty key is the same as none.
    pub key: Option<Vec<u8>>,
}

/// Encodes a message with no extra key.
pub fn encode(message: &[u8], image: &ImageSource) -> Result<EncodedParity> {
    encode_with_config(message, image, &EncoderConfig::default())
}

/// Encodes a message with custom configuration.
///
/// # Errors
/// [`ParityError::InsufficientSource`](crate::ParityError::InsufficientSource)
/// if the image holds fewer keystream bytes than the message needs.
pub fn encode_with_config(
    message: &[u8],
    image: &ImageSource,
    config: &EncoderConfig,
) -> Result<EncodedParity> {
    let keystream = image.keystream(message.len())?;
    let mut masked = xor_bytes(message, &keystream)?;

    if let Some(key) = config.key.as_deref() {
        masked = xor_key(key, &masked);
    }

    let parity = bits_from_bytes(&masked);
    debug!(
        message_len = message.len(),
        parity_len = parity.len(),
        keyed = config.key.as_ref().map_or(false, |k| !k.is_empty()),
        "encoded message"
    );

    Ok(EncodedParity {
        parity,
        message_len: message.len(),
    })
}
