//! Keystream extraction from image pixel LSBs.
//!
//! Reads the least significant bit of the red, green and blue channels of each
//! pixel, scanning rows top to bottom and pixels left to right. The bits are
//! packed big-endian into bytes (see [`crate::bits`]).
//!
//! The keystream is a fixed raster scan, so the same image always yields the
//! same bytes. It is a mask, not a cipher.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat};
use tracing::debug;

use crate::bits::bytes_from_bits;
use crate::error::{ParityError, Result};

/// Channels read per pixel (R, G, B).
const CHANNELS: usize = 3;

/// Collects `len` bytes from the low bits of an RGB pixel stream.
///
/// Every pixel contributes three bits, so the scan may overshoot the requested
/// bit count by up to two bits; the surplus is truncated before packing.
///
/// # Errors
/// [`ParityError::InsufficientSource`] if the pixels run out before `len * 8`
/// bits have been collected.
pub fn lsb_stream<I>(pixels: I, len: usize) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = [u16; 3]>,
{
    let needed = len * 8;
    let mut bits = Vec::with_capacity(needed + CHANNELS);

    if needed > 0 {
        for pixel in pixels {
            for channel in pixel {
                bits.push((channel & 1) as u8);
            }
            if bits.len() >= needed {
                break;
            }
        }
    }

    if bits.len() < needed {
        return Err(ParityError::InsufficientSource {
            requested: len,
            available: bits.len() / 8,
        });
    }

    bits.truncate(needed);
    Ok(bytes_from_bits(&bits))
}

/// An image used as the shared keystream source.
pub struct ImageSource {
    image: DynamicImage,
}

impl ImageSource {
    /// Loads an image from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let image = image::open(path).map_err(|e| ParityError::ImageLoad(e.to_string()))?;
        Ok(Self { image })
    }

    /// Loads an image from encoded bytes (PNG, BMP, ...).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| ParityError::ImageLoad(e.to_string()))?;
        Ok(Self { image })
    }

    /// Wraps an already decoded image.
    pub fn from_image(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Number of whole keystream bytes this image can supply.
    pub fn capacity(&self) -> usize {
        let (width, height) = self.image.dimensions();
        (width as usize) * (height as usize) * CHANNELS / 8
    }

    /// Returns exactly `len` keystream bytes.
    ///
    /// Samples are widened to 16 bits, which keeps the true LSB for both 8-bit
    /// and 16-bit images.
    pub fn keystream(&self, len: usize) -> Result<Vec<u8>> {
        debug!(
            requested = len,
            capacity = self.capacity(),
            "reading image keystream"
        );
        let rgb = self.image.to_rgb16();
        lsb_stream(rgb.pixels().map(|p| p.0), len)
    }

    /// Returns the image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| ParityError::ImageLoad(e.to_string()))?;
        Ok(bytes)
    }
}
