//! Decode command - recover a message from cover text.

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::Args;

use paritysteg::{decode_with_config, format_bits, DecoderConfig, ImageSource};

use super::{CommandExecutor, Context, ParityArgs};

/// Decode a message from cover text.
///
/// Groups and filters must match the ones the cover text was written for.
/// Without -o, the message is printed as text (lossy UTF-8).
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Path to the image used as keystream (must be the exact same file)
    #[arg(short, long)]
    pub image: PathBuf,

    /// Cover text (mutually exclusive with --cover-file)
    #[arg(short, long, conflicts_with = "cover_file")]
    pub cover: Option<String>,

    /// Read the cover text from a file
    #[arg(long, conflicts_with = "cover")]
    pub cover_file: Option<PathBuf>,

    /// Optional repeating XOR key (same as used for encoding)
    #[arg(short, long)]
    pub key: Option<String>,

    #[command(flatten)]
    pub parity: ParityArgs,

    /// Write the raw message bytes to this file instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        // Groups are checked before touching the image or cover text
        let codec = self.parity.codec(&ctx.settings)?;

        let cover = match (&self.cover, &self.cover_file) {
            (Some(c), None) => c.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read cover text from {}", path.display()))?,
            _ => bail!("Provide either --cover or --cover-file"),
        };

        let image = ImageSource::from_file(&self.image)
            .with_context(|| format!("Failed to load image {}", self.image.display()))?;

        let config = DecoderConfig {
            key: self.key.as_ref().map(|k| k.as_bytes().to_vec()),
        };
        let decoded = decode_with_config(&cover, &image, &codec, &config)?;

        if ctx.verbose {
            eprintln!("Cover parity: {}", format_bits(&codec.text_to_bits(&cover)));
            eprintln!(
                "Read {} parity bits -> {} bytes",
                decoded.parity_bits,
                decoded.data.len()
            );
        }
        if decoded.dropped_bits > 0 {
            eprintln!(
                "Warning: last {} parity bits do not fill a byte and were ignored",
                decoded.dropped_bits
            );
        }

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, &decoded.data)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            eprintln!("Decoded {} bytes to {}", decoded.data.len(), output_path.display());
        } else {
            println!("Recovered message: {}", decoded.text());
        }

        Ok(())
    }
}
