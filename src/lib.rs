//! # paritysteg - hide a message in the letters you write
//!
//! paritysteg hides short messages in the *parity* of ordinary cover text.
//! Every letter belongs to one of two groups: GroupA letters stand for `0`,
//! GroupB letters for `1`. A sentence therefore spells a bit string, and the
//! sender writes (or generates) a sentence that spells the bits of the
//! message.
//!
//! ## Overview
//!
//! - The message is masked with a keystream read from the low bits of an
//!   image both parties hold (plus an optional repeating XOR key)
//! - The masked bytes become the **required parity** of the cover text
//! - The sender writes cover text with that parity, helped by dictionary
//!   word suggestions
//! - The receiver converts the cover text back to bits and unmasks them
//!   with the same image and key
//!
//! Filters change which letters count: vowels can be skipped, short words
//! can be skipped, or only the first letter of each word can carry a bit.
//! Sender and receiver must agree on groups and filters.
//!
//! The image keystream is a fixed raster scan, not a random stream. This is
//! concealment, not encryption.
//!
//! ## Example Usage
//!
//! ```rust
//! use image::{DynamicImage, ImageBuffer, Rgb};
//! use paritysteg::stego::ImageSource;
//! use paritysteg::text::{CharacterGroups, FilterOptions, ParityCodec};
//! use paritysteg::{decode, encode};
//!
//! let pixels = ImageBuffer::from_fn(8, 8, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
//! let image = ImageSource::from_image(DynamicImage::ImageRgb8(pixels));
//!
//! let encoded = encode(b"hi", &image).unwrap();
//!
//! // Spell the parity with one letter per bit: 'e' is GroupA (0), 't' is GroupB (1).
//! let cover: String = encoded
//!     .parity
//!     .iter()
//!     .map(|&bit| if bit == 0 { 'e' } else { 't' })
//!     .collect();
//!
//! let codec = ParityCodec::new(CharacterGroups::default(), FilterOptions::default()).unwrap();
//! let decoded = decode(&cover, &image, &codec).unwrap();
//! assert_eq!(decoded.data, b"hi");
//! ```
//!
//! ## Modules
//!
//! - [`bits`]: byte/bit conversion
//! - [`stego`]: image keystream and XOR masking
//! - [`text`]: character groups, filters, parity codec, word search
//! - [`encoder`]: message to required parity
//! - [`decoder`]: cover text to message
//! - [`config`]: persisted defaults

pub mod bits;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod stego;
pub mod text;

// Re-export commonly used types at the crate root
pub use bits::{bits_from_bytes, bytes_from_bits, format_bits, parse_bits};
pub use config::Settings;
pub use decoder::{decode, decode_with_config, DecodedMessage, DecoderConfig};
pub use encoder::{encode, encode_with_config, EncodedParity, EncoderConfig};
pub use error::{ParityError, Result};
pub use stego::ImageSource;
pub use text::{
    text_to_bits, CharacterGroups, Dictionary, FilterOptions, ParityCodec, RandomCover,
    WordCandidate, WordSearch, DEFAULT_GROUP_A, DEFAULT_GROUP_B,
};
