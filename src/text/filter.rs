//! Cover text filters.
//!
//! The same filters must be applied to the cover text and to the dictionary,
//! otherwise the words suggested by the search will not decode to the parity
//! they were chosen for.

use serde::{Deserialize, Serialize};

use crate::text::groups::VOWELS;

/// Words of at most this many letters count as short.
pub const MAX_SHORT_WORD_LEN: usize = 3;

/// Which parts of the cover text carry parity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Skip `AEIOUY`.
    pub ignore_vowels: bool,
    /// Skip words of 1-3 letters.
    pub ignore_short_words: bool,
    /// Only the first letter of each word carries a bit.
    pub per_word: bool,
}

impl FilterOptions {
    /// Smallest parity length a single dictionary word can satisfy.
    ///
    /// Without vowel skipping every letter of a word carries a bit, so once short
    /// words are excluded no word produces fewer than four bits.
    pub fn min_parity_len(&self) -> usize {
        if self.ignore_short_words && !self.ignore_vowels && !self.per_word {
            MAX_SHORT_WORD_LEN + 1
        } else {
            1
        }
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Length of the letter run starting at `start`.
fn letter_run(chars: &[char], start: usize) -> usize {
    chars
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|&&c| is_letter(c)).count())
}

fn is_short(run: usize) -> bool {
    (1..=MAX_SHORT_WORD_LEN).contains(&run)
}

/// Removes literal `0` and `1` so they cannot be mistaken for parity.
pub fn strip_parity_digits(text: &str) -> String {
    text.chars().filter(|&c| c != '0' && c != '1').collect()
}

/// Removes short words together with their bounding non-letters.
///
/// Three single left-to-right passes are made: words inside the text
/// (`[^A-Z][A-Z]{1,3}[^A-Z]`), a word at the start (`^[A-Z]{1,3}[^A-Z]`) and a
/// word at the end (`[^A-Z][A-Z]{1,3}$`). The boundary characters go with the
/// word, so of two short words separated by a single non-letter only the first
/// is removed by the interior pass. This is not iterated to a fixed point.
pub fn strip_short_words(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let chars = strip_interior_short_words(&chars);
    let chars = strip_leading_short_word(chars);
    let chars = strip_trailing_short_word(chars);
    chars.into_iter().collect()
}

fn strip_interior_short_words(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if !is_letter(chars[i]) {
            let run = letter_run(chars, i + 1);
            let closing = i + 1 + run;
            if is_short(run) && closing < chars.len() {
                i = closing + 1;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

fn strip_leading_short_word(mut chars: Vec<char>) -> Vec<char> {
    let run = letter_run(&chars, 0);
    if is_short(run) && run < chars.len() {
        chars.drain(..=run);
    }
    chars
}

fn strip_trailing_short_word(mut chars: Vec<char>) -> Vec<char> {
    let end = chars.len();
    let run = chars.iter().rev().take_while(|&&c| is_letter(c)).count();
    if is_short(run) && run < end {
        chars.truncate(end - run - 1);
    }
    chars
}

/// Removes `AEIOUY` in either case.
pub fn strip_vowels(text: &str) -> String {
    text.chars().filter(|&c| !VOWELS.contains(c)).collect()
}

/// Keeps only the first letter of each word.
///
/// A letter counts if it opens the text or directly follows a non-letter.
pub fn first_letters(text: &str) -> String {
    let mut out = String::new();
    let mut previous: Option<char> = None;
    for c in text.chars() {
        if is_letter(c) && previous.map_or(true, |p| !is_letter(p)) {
            out.push(c);
        }
        previous = Some(c);
    }
    out
}

/// True if `word` is dropped from the dictionary under these filters.
pub fn is_filtered_word(word: &str, filters: &FilterOptions) -> bool {
    filters.ignore_short_words && word.chars().count() <= MAX_SHORT_WORD_LEN
}
