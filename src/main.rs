//! Paritysteg - hide messages in the letter parity of ordinary text
//!
//! A CLI tool that turns a message into a parity string using an image as
//! a shared keystream, and helps write cover text that spells that parity.

mod commands;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CommandExecutor, ConfigCommand, Context, DecodeCommand, EncodeCommand, WordsCommand,
};
use paritysteg::Settings;

/// Paritysteg - hide messages in the letter parity of ordinary text
///
/// Every letter of the cover text belongs to Group A (bit 0) or Group B
/// (bit 1). The message is XORed with the least significant bits of a shared
/// image; the result is the parity your cover text has to carry.
#[derive(Parser)]
#[command(name = "paritysteg")]
#[command(version)]
#[command(about = "Hide messages in the letter parity of ordinary text")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file [default: ~/.paritysteg/config.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (also enables debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the cover text parity for a message
    Encode(EncodeCommand),

    /// Recover a message from cover text
    Decode(DecodeCommand),

    /// Suggest cover words for a parity string
    Words(WordsCommand),

    /// Show or create the settings file
    Config(ConfigCommand),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // `config --init` may be asked to create the file --config points at
    let settings = match (&cli.command, cli.config.as_deref()) {
        (Commands::Config(cmd), Some(path)) if cmd.init && !path.exists() => Settings::default(),
        (_, path) => Settings::load(path).context("Failed to load settings")?,
    };
    let ctx = Context {
        settings,
        config_path: cli.config,
        verbose: cli.verbose,
    };

    match &cli.command {
        Commands::Encode(cmd) => cmd.execute(&ctx),
        Commands::Decode(cmd) => cmd.execute(&ctx),
        Commands::Words(cmd) => cmd.execute(&ctx),
        Commands::Config(cmd) => cmd.execute(&ctx),
    }
}
