//! Keystream side of the pipeline.
//!
//! - Image LSB keystream (PNG, BMP, JPEG, ...)
//! - Repeating-key and plain XOR masking

pub mod image;
pub mod xor;

pub use image::{lsb_stream, ImageSource};
pub use xor::{xor_bytes, xor_key};
