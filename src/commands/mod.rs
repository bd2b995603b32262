//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.
//! Options shared by the commands that read cover text live in [`ParityArgs`].

mod config;
mod decode;
mod encode;
mod words;

pub use config::ConfigCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use words::WordsCommand;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use paritysteg::text::{CharacterGroups, FilterOptions, ParityCodec};
use paritysteg::Settings;

/// State shared by every command.
pub struct Context {
    /// Settings file contents (or defaults).
    pub settings: Settings,
    /// Settings file given with `--config`, if any.
    pub config_path: Option<PathBuf>,
    /// Print extra detail to stderr.
    pub verbose: bool,
}

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self, ctx: &Context) -> Result<()>;
}

/// Character groups and filters. Unset options fall back to the settings file;
/// the `--no-*` switches turn off a filter the settings file enables.
#[derive(Args, Debug, Clone, Default)]
pub struct ParityArgs {
    /// Letters that encode 0 (Group A) [default: EAHISLUMCBKJQ]
    #[arg(short = 'a', long)]
    pub group_a: Option<String>,

    /// Letters that encode 1 (Group B) [default: TONRDWFYGPVXZ]
    #[arg(short = 'b', long)]
    pub group_b: Option<String>,

    /// Ignore vowels (AEIOUY) in the cover text
    #[arg(long, overrides_with = "no_ignore_vowels")]
    pub ignore_vowels: bool,

    /// Count vowels even if the settings file ignores them
    #[arg(long, overrides_with = "ignore_vowels")]
    pub no_ignore_vowels: bool,

    /// Ignore short words (three letters or fewer)
    #[arg(short = 's', long = "ignore-short", overrides_with = "no_ignore_short_words")]
    pub ignore_short_words: bool,

    /// Count short words even if the settings file ignores them
    #[arg(long = "no-ignore-short", overrides_with = "ignore_short_words")]
    pub no_ignore_short_words: bool,

    /// Use only the first letter of each word for parity
    #[arg(short = 'l', long, overrides_with = "no_by_word")]
    pub by_word: bool,

    /// Use every letter even if the settings file is per word
    #[arg(long, overrides_with = "by_word")]
    pub no_by_word: bool,
}

/// Resolves an on/off switch pair against the settings value.
fn switch(on: bool, off: bool, setting: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => setting,
    }
}

impl ParityArgs {
    /// Builds and validates the codec.
    pub fn codec(&self, settings: &Settings) -> Result<ParityCodec> {
        let groups = match (&self.group_a, &self.group_b) {
            (None, None) => settings.groups(),
            (a, b) => CharacterGroups::new(
                a.as_deref().unwrap_or(&settings.group_a),
                b.as_deref().unwrap_or(&settings.group_b),
            ),
        }
        .context("Invalid character groups")?;

        let defaults = settings.filters();
        let filters = FilterOptions {
            ignore_vowels: switch(self.ignore_vowels, self.no_ignore_vowels, defaults.ignore_vowels),
            ignore_short_words: switch(
                self.ignore_short_words,
                self.no_ignore_short_words,
                defaults.ignore_short_words,
            ),
            per_word: switch(self.by_word, self.no_by_word, defaults.per_word),
        };

        Ok(ParityCodec::new(groups, filters)?)
    }
}
