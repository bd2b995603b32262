//! Word suggestions for a target parity.
//!
//! [`WordSearch::recommend`] lists every dictionary word whose letters produce
//! a prefix of the parity that is still unspent. [`WordSearch::randomize`]
//! keeps picking one of those words at random until the parity is used up or
//! no word fits what is left.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::bits::format_bits;
use crate::error::Result;
use crate::text::dictionary::Dictionary;
use crate::text::parity::ParityCodec;
use crate::text::pattern::ParityPattern;

/// A dictionary word that satisfies the front of the remaining parity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCandidate {
    /// Parity bits this word produces.
    pub consumed: Vec<u8>,
    /// The word itself.
    pub word: String,
    /// Parity still to be covered after this word.
    pub remaining: Vec<u8>,
}

/// Outcome of [`WordSearch::randomize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandomCover {
    /// Chosen words, in order.
    pub words: Vec<String>,
    /// Parity no word could satisfy.
    pub leftover: Vec<u8>,
}

impl RandomCover {
    /// The chosen words joined by spaces.
    pub fn sentence(&self) -> String {
        self.words.join(" ")
    }

    /// True if every parity bit was covered.
    pub fn is_complete(&self) -> bool {
        self.leftover.is_empty()
    }
}

/// Search over a dictionary for a fixed codec.
///
/// Visible words are grouped once by how many parity bits they produce, so a
/// trial length only scans words that could possibly fit. The parity pattern
/// still decides each match.
pub struct WordSearch<'a> {
    codec: &'a ParityCodec,
    buckets: BTreeMap<usize, Vec<&'a str>>,
}

impl<'a> WordSearch<'a> {
    pub fn new(dictionary: &'a Dictionary, codec: &'a ParityCodec) -> Self {
        let mut buckets: BTreeMap<usize, Vec<&'a str>> = BTreeMap::new();
        for word in dictionary.filtered(codec.filters()) {
            let bits = codec.text_to_bits(word).len();
            if bits > 0 {
                buckets.entry(bits).or_default().push(word);
            }
        }
        debug!(
            words = dictionary.len(),
            buckets = buckets.len(),
            "indexed dictionary"
        );
        Self { codec, buckets }
    }

    /// Words that cover the next bits of `target` after `consumed_cover`.
    ///
    /// Candidates are ordered by how many bits they consume, shortest first, and
    /// alphabetically within one length. In per-word mode only the first length
    /// that has matches is returned.
    pub fn recommend(&self, target: &[u8], consumed_cover: &str) -> Vec<WordCandidate> {
        let start = self.codec.text_to_bits(consumed_cover).len();
        let filters = self.codec.filters();
        let mut candidates = Vec::new();

        for end in start..target.len() {
            let slice = &target[start..=end];
            let Some(bucket) = self.buckets.get(&slice.len()) else {
                continue;
            };
            let pattern = ParityPattern::for_bits(slice, self.codec.groups(), filters);

            let before = candidates.len();
            for word in bucket.iter().filter(|w| pattern.matches(w)) {
                candidates.push(WordCandidate {
                    consumed: slice.to_vec(),
                    word: (*word).to_string(),
                    remaining: target[end + 1..].to_vec(),
                });
            }

            let found = candidates.len() - before;
            if found > 0 {
                debug!(parity = %format_bits(slice), found, "matched words");
                if filters.per_word {
                    break;
                }
            }
        }

        candidates
    }

    /// Builds a random word sequence covering `target`.
    ///
    /// Each round chooses uniformly among all candidates for the remaining
    /// parity and drops the bits the chosen word consumed. Stops when nothing is
    /// left or nothing fits; the unmatched tail is returned as leftover.
    pub fn randomize<R: Rng + ?Sized>(&self, target: &[u8], rng: &mut R) -> RandomCover {
        let min_len = self.codec.filters().min_parity_len();
        let mut remaining = target.to_vec();
        let mut words = Vec::new();

        while !remaining.is_empty() {
            if remaining.len() < min_len {
                break;
            }
            let candidates = self.recommend(&remaining, "");
            let Some(choice) = candidates.choose(rng) else {
                break;
            };
            words.push(choice.word.clone());
            remaining.drain(..choice.consumed.len());
        }

        if !remaining.is_empty() {
            info!(leftover = %format_bits(&remaining), "parity left uncovered");
        }

        RandomCover {
            words,
            leftover: remaining,
        }
    }
}

/// Appends a batch of candidates to a plain text log in one write.
///
/// Each line is `word remaining`, or `consumed word remaining` when verbose.
pub fn append_candidates(path: &Path, candidates: &[WordCandidate], verbose: bool) -> Result<()> {
    let mut batch = String::new();
    for candidate in candidates {
        if verbose {
            let _ = write!(batch, "{} ", format_bits(&candidate.consumed));
        }
        let _ = writeln!(batch, "{} {}", candidate.word, format_bits(&candidate.remaining));
    }
    append_batch(path, &batch)
}

/// Appends a randomly built cover sentence and its leftover parity.
pub fn append_random_cover(path: &Path, cover: &RandomCover) -> Result<()> {
    let mut batch = String::new();
    let _ = writeln!(batch, "{}", cover.sentence());
    if !cover.is_complete() {
        let _ = writeln!(batch, "Left-over parity: {}", format_bits(&cover.leftover));
    }
    append_batch(path, &batch)
}

fn append_batch(path: &Path, batch: &str) -> Result<()> {
    if batch.is_empty() {
        return Ok(());
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(batch.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::filter::FilterOptions;
    use crate::text::groups::CharacterGroups;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    const WORDS: &[&str] = &[
        "tea", "the", "time", "tomb", "team", "seat", "shoe", "hat", "at", "a", "east", "nest",
        "toast", "tone", "dart", "herb", "apple", "ozone", "iris", "zebra",
    ];

    fn codec(filters: FilterOptions) -> ParityCodec {
        ParityCodec::new(CharacterGroups::default(), filters).unwrap()
    }

    #[test]
    fn test_recommend_candidates_reproduce_their_parity() {
        let dictionary = Dictionary::from_words(WORDS);
        for filters in [
            FilterOptions::default(),
            FilterOptions {
                ignore_vowels: true,
                ..Default::default()
            },
            FilterOptions {
                per_word: true,
                ..Default::default()
            },
            FilterOptions {
                ignore_short_words: true,
                ..Default::default()
            },
            FilterOptions {
                per_word: true,
                ignore_vowels: true,
                ..Default::default()
            },
        ] {
            let codec = codec(filters);
            let search = WordSearch::new(&dictionary, &codec);
            let target = [1, 0, 0, 1, 0, 1, 1, 0];
            let candidates = search.recommend(&target, "");
            assert!(!candidates.is_empty(), "no candidates for {:?}", filters);
            for c in &candidates {
                assert_eq!(codec.text_to_bits(&c.word), c.consumed, "{:?} {:?}", c, filters);
                assert_eq!(
                    [c.consumed.as_slice(), c.remaining.as_slice()].concat(),
                    target.to_vec()
                );
            }
        }
    }

    #[test]
    fn test_recommend_orders_by_length_then_alphabetically() {
        let dictionary = Dictionary::from_words(WORDS);
        let codec = codec(FilterOptions::default());
        let search = WordSearch::new(&dictionary, &codec);

        // "a" = 0, "at" = 0 1, "hat" = 0 0 1; nothing spells 0 0 1 1
        let candidates = search.recommend(&[0, 0, 1, 1], "");
        let words: Vec<&str> = candidates.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["a", "hat"]);
        assert_eq!(candidates[0].remaining, vec![0, 1, 1]);
        assert_eq!(candidates[1].remaining, vec![1]);
    }

    #[test]
    fn test_recommend_skips_consumed_cover() {
        let dictionary = Dictionary::from_words(WORDS);
        let codec = codec(FilterOptions::default());
        let search = WordSearch::new(&dictionary, &codec);

        // "tea" already spends 1 0 0
        let candidates = search.recommend(&[1, 0, 0, 1, 0, 0], "tea");
        assert!(candidates.iter().any(|c| c.word == "tea"));
        assert!(candidates.iter().all(|c| c.consumed.len() + c.remaining.len() == 3));
    }

    #[test]
    fn test_recommend_short_words_hidden() {
        let dictionary = Dictionary::from_words(WORDS);
        let codec = codec(FilterOptions {
            ignore_short_words: true,
            ..Default::default()
        });
        let search = WordSearch::new(&dictionary, &codec);
        let candidates = search.recommend(&[1, 0, 0, 1], "");
        assert!(candidates.iter().all(|c| c.word.len() > 3));
    }

    #[test]
    fn test_per_word_stops_at_first_length() {
        let dictionary = Dictionary::from_words(WORDS);
        let codec = codec(FilterOptions {
            per_word: true,
            ..Default::default()
        });
        let search = WordSearch::new(&dictionary, &codec);
        let candidates = search.recommend(&[1, 1, 0], "");
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|c| c.consumed == vec![1]));
        assert!(candidates.iter().all(|c| c.remaining == vec![1, 0]));
    }

    #[test]
    fn test_per_word_ignoring_vowels_skips_vowel_initial_words() {
        let dictionary = Dictionary::from_words(["apple", "tree", "house"]);
        let codec = codec(FilterOptions {
            per_word: true,
            ignore_vowels: true,
            ..Default::default()
        });
        let search = WordSearch::new(&dictionary, &codec);

        let words: Vec<String> = search.recommend(&[1], "").into_iter().map(|c| c.word).collect();
        assert_eq!(words, vec!["tree"]);
    }

    #[test]
    fn test_randomize_short_words_stops_below_four_bits() {
        let dictionary = Dictionary::from_words(WORDS);
        let codec = codec(FilterOptions {
            ignore_short_words: true,
            ..Default::default()
        });
        let search = WordSearch::new(&dictionary, &codec);
        let mut rng = ChaCha20Rng::seed_from_u64(5);

        // "tea" would fit but is hidden; nothing visible is under four bits
        let cover = search.randomize(&[1, 0, 0], &mut rng);
        assert!(cover.words.is_empty());
        assert_eq!(cover.leftover, vec![1, 0, 0]);

        // "time" or "team" takes 1 0 0 0, the last three bits are left over
        let cover = search.randomize(&[1, 0, 0, 0, 1, 0, 0], &mut rng);
        assert_eq!(cover.words.len(), 1);
        assert!(cover.words[0] == "time" || cover.words[0] == "team");
        assert_eq!(cover.leftover, vec![1, 0, 0]);
    }

    #[test]
    fn test_randomize_short_words_ignoring_vowels() {
        // Visible: "area" (r = 1) and "tree" (t r = 1 1); no long word spells 0
        let dictionary = Dictionary::from_words(["area", "tree", "tea", "the", "he"]);
        let codec = codec(FilterOptions {
            ignore_short_words: true,
            ignore_vowels: true,
            ..Default::default()
        });
        let search = WordSearch::new(&dictionary, &codec);
        let mut rng = ChaCha20Rng::seed_from_u64(9);

        let cover = search.randomize(&[1, 1, 0], &mut rng);
        assert!(!cover.words.is_empty());
        assert!(cover.words.iter().all(|w| w == "area" || w == "tree"));
        assert_eq!(cover.leftover, vec![0]);

        let cover = search.randomize(&[1], &mut rng);
        assert_eq!(cover.words, vec!["area"]);
        assert!(cover.is_complete());
    }

    #[test]
    fn test_randomize_short_words_per_word() {
        let dictionary = Dictionary::from_words(["tea", "hat", "tree", "house", "apple"]);
        let codec = codec(FilterOptions {
            ignore_short_words: true,
            per_word: true,
            ..Default::default()
        });
        let search = WordSearch::new(&dictionary, &codec);
        let mut rng = ChaCha20Rng::seed_from_u64(13);

        // One bit per word, so three bits still complete
        let target = vec![1, 0, 1];
        let cover = search.randomize(&target, &mut rng);
        assert!(cover.is_complete());
        assert_eq!(cover.words.len(), 3);
        assert_eq!(cover.words[0], "tree");
        assert_eq!(cover.words[2], "tree");
        assert_eq!(codec.text_to_bits(&cover.sentence()), target);
    }

    #[test]
    fn test_randomize_empty_target() {
        let dictionary = Dictionary::from_words(WORDS);
        let codec = codec(FilterOptions::default());
        let search = WordSearch::new(&dictionary, &codec);
        let mut rng = ChaCha20Rng::seed_from_u64(7);

        let cover = search.randomize(&[], &mut rng);
        assert!(cover.words.is_empty());
        assert!(cover.leftover.is_empty());
        assert!(cover.is_complete());
    }

    #[test]
    fn test_randomize_unsatisfiable_target() {
        // Every word here starts with a GroupB letter.
        let dictionary = Dictionary::from_words(["tone", "dart", "ozone"]);
        let codec = codec(FilterOptions::default());
        let search = WordSearch::new(&dictionary, &codec);
        let mut rng = ChaCha20Rng::seed_from_u64(7);

        let target = vec![0, 0, 0, 0];
        let cover = search.randomize(&target, &mut rng);
        assert!(cover.words.is_empty());
        assert_eq!(cover.leftover, target);
    }

    #[test]
    fn test_randomize_covers_target() {
        let dictionary = Dictionary::from_words(WORDS);
        let codec = codec(FilterOptions::default());
        let search = WordSearch::new(&dictionary, &codec);
        let mut rng = ChaCha20Rng::seed_from_u64(42);

        // Every branch ends in "a", "at", "tone" or "ozone", so this always finishes.
        let target = vec![0, 1, 1, 1, 1, 0, 0];
        let cover = search.randomize(&target, &mut rng);
        assert!(cover.is_complete());
        assert_eq!(codec.text_to_bits(&cover.sentence()), target);
    }

    #[test]
    fn test_randomize_is_reproducible_with_seed() {
        let dictionary = Dictionary::from_words(WORDS);
        let codec = codec(FilterOptions::default());
        let search = WordSearch::new(&dictionary, &codec);
        let target = vec![1, 0, 0, 1, 0, 0, 0, 1, 1];

        let a = search.randomize(&target, &mut ChaCha20Rng::seed_from_u64(3));
        let b = search.randomize(&target, &mut ChaCha20Rng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_append_candidates_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.log");
        let candidates = vec![WordCandidate {
            consumed: vec![1, 0, 0],
            word: "tea".to_string(),
            remaining: vec![1, 1],
        }];

        append_candidates(&path, &candidates, false).unwrap();
        append_candidates(&path, &candidates, true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "tea 11\n100 tea 11\n");
    }

    #[test]
    fn test_append_random_cover_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("random.log");
        let cover = RandomCover {
            words: vec!["tone".to_string(), "a".to_string()],
            leftover: vec![1],
        };

        append_random_cover(&path, &cover).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "tone a\nLeft-over parity: 1\n");
    }
}
