//! Encode command - compute the parity a cover text must carry.

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::Args;

use paritysteg::{encode_with_config, EncoderConfig, ImageSource};

use super::{CommandExecutor, Context};

/// Encode a message into the parity bits your cover text must spell.
///
/// The image is the shared secret: the receiver needs the exact same file.
/// Nothing is written into the image.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Path to the image used as keystream
    #[arg(short, long)]
    pub image: PathBuf,

    /// Text message to encode (mutually exclusive with --file)
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// File whose raw bytes are encoded (mutually exclusive with --message)
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Optional repeating XOR key
    #[arg(short, long)]
    pub key: Option<String>,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let message: Vec<u8> = match (&self.message, &self.file) {
            (Some(m), None) => m.as_bytes().to_vec(),
            (None, Some(path)) => std::fs::read(path)
                .with_context(|| format!("Failed to read message file {}", path.display()))?,
            _ => bail!("Provide either --message or --file"),
        };

        let image = ImageSource::from_file(&self.image)
            .with_context(|| format!("Failed to load image {}", self.image.display()))?;

        if ctx.verbose {
            eprintln!(
                "Message: {} bytes, image keystream capacity: {} bytes",
                message.len(),
                image.capacity()
            );
        }

        let config = EncoderConfig {
            key: self.key.as_ref().map(|k| k.as_bytes().to_vec()),
        };
        let encoded = encode_with_config(&message, &image, &config)?;

        println!("Required cover text parity: {}", encoded.parity_string());

        if ctx.verbose {
            eprintln!("Parity length: {} bits", encoded.parity.len());
        }

        Ok(())
    }
}
