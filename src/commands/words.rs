//! Words command - suggest cover words for a parity string.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use paritysteg::text::{append_candidates, append_random_cover, WordCandidate};
use paritysteg::{format_bits, parse_bits, Dictionary, WordSearch};

use super::{CommandExecutor, Context, ParityArgs};

/// Help write cover text: list words that fit the next parity bits, or let
/// the tool pick a random sequence of words for the whole parity.
#[derive(Args, Debug)]
pub struct WordsCommand {
    /// Parity bits to cover (as printed by `encode`)
    #[arg(short, long)]
    pub parity: String,

    /// Cover text written so far; its parity is skipped
    #[arg(short, long, default_value = "")]
    pub cover: String,

    #[command(flatten)]
    pub filters: ParityArgs,

    /// Randomly pick words for the whole remaining parity
    #[arg(short, long)]
    pub random: bool,

    /// Seed for --random (reproducible output)
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Word list file [default: settings file, then /usr/share/dict/web2 or words]
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// Append suggestions to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for WordsCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let codec = self.filters.codec(&ctx.settings)?;
        let parity = parse_bits(&self.parity).context("Invalid parity string")?;

        let dictionary_path = self
            .dictionary
            .as_deref()
            .or(ctx.settings.dictionary.as_deref());
        let dictionary = Dictionary::load(dictionary_path).context("Failed to load word list")?;
        if ctx.verbose {
            eprintln!("Loaded {} words", dictionary.len());
        }

        let search = WordSearch::new(&dictionary, &codec);

        if self.random {
            let spent = codec.text_to_bits(&self.cover).len().min(parity.len());
            let target = &parity[spent..];

            let cover = match self.seed {
                Some(seed) => search.randomize(target, &mut ChaCha20Rng::seed_from_u64(seed)),
                None => search.randomize(target, &mut rand::thread_rng()),
            };

            println!("{}", cover.sentence());
            if !cover.is_complete() {
                println!("Left-over parity: {}", format_bits(&cover.leftover));
            }

            if let Some(path) = &self.output {
                append_random_cover(path, &cover)
                    .with_context(|| format!("Failed to append to {}", path.display()))?;
            }
            return Ok(());
        }

        let candidates = search.recommend(&parity, &self.cover);
        if candidates.is_empty() {
            eprintln!("No words match the remaining parity");
            return Ok(());
        }

        print_candidates(&candidates, ctx.verbose);

        if let Some(path) = &self.output {
            append_candidates(path, &candidates, ctx.verbose)
                .with_context(|| format!("Failed to append to {}", path.display()))?;
        }

        Ok(())
    }
}

/// Prints candidates grouped by the parity they consume.
fn print_candidates(candidates: &[WordCandidate], verbose: bool) {
    for group in candidates.chunk_by(|a, b| a.consumed.len() == b.consumed.len()) {
        let first = &group[0];
        println!("Length: {}", first.consumed.len());
        println!("Parity: {}", format_bits(&first.consumed));
        println!("Remaining: {}", format_bits(&first.remaining));
        if verbose {
            println!("Matches: {}", group.len());
        }
        let words: Vec<&str> = group.iter().map(|c| c.word.as_str()).collect();
        println!("{}", words.join(" "));
        println!();
    }
}
