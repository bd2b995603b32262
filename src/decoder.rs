//! Message decoding.
//!
//! This module recovers a message from cover text:
//! 1. Convert the cover text to parity bits (groups and filters must match
//!    the ones the cover was written for)
//! 2. Pack the bits into bytes, dropping a trailing partial byte
//! 3. Read the same number of keystream bytes from the image
//! 4. XOR the keystream with the repeating key, if one is given
//! 5. XOR the packed bytes with the (keyed) keystream

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::bits::bytes_from_bits;
use crate::error::Result;
use crate::stego::{xor_bytes, xor_key, ImageSource};
use crate::text::ParityCodec;

/// Result of decoding a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    /// Recovered message bytes.
    pub data: Vec<u8>,
    /// Parity bits read from the cover text.
    pub parity_bits: usize,
    /// Trailing bits that did not fill a whole byte.
    pub dropped_bits: usize,
}

impl DecodedMessage {
    /// The message as text (lossy UTF-8).
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

/// Configuration for the decoder.
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    /// Optional repeating XOR key, same as used for encoding.
    pub key: Option<Vec<u8>>,
}

/// Decodes cover text with no extra key.
pub fn decode(cover: &str, image: &ImageSource, codec: &ParityCodec) -> Result<DecodedMessage> {
    decode_with_config(cover, image, codec, &DecoderConfig::default())
}

/// Decodes cover text with custom configuration.
///
/// The codec has already validated its groups, so the alphabet check happens
/// before any decoding work.
pub fn decode_with_config(
    cover: &str,
    image: &ImageSource,
    codec: &ParityCodec,
    config: &DecoderConfig,
) -> Result<DecodedMessage> {
    let parity = codec.text_to_bits(cover);
    let cover_bytes = bytes_from_bits(&parity);
    let dropped_bits = parity.len() % 8;

    if dropped_bits > 0 {
        warn!(
            parity_bits = parity.len(),
            dropped_bits, "cover parity is not a whole number of bytes; trailing bits dropped"
        );
    }

    let mut keystream = image.keystream(cover_bytes.len())?;
    if let Some(key) = config.key.as_deref() {
        keystream = xor_key(key, &keystream);
    }

    let data = xor_bytes(&cover_bytes, &keystream)?;
    debug!(
        parity_bits = parity.len(),
        bytes = data.len(),
        "decoded cover text"
    );

    Ok(DecodedMessage {
        data,
        parity_bits: parity.len(),
        dropped_bits,
    })
}
