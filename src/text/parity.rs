//! Cover text to parity bits.

use tracing::debug;

use crate::error::Result;
use crate::text::filter::{
    first_letters, strip_parity_digits, strip_short_words, strip_vowels, FilterOptions,
};
use crate::text::groups::CharacterGroups;

/// Converts cover text into its parity bits.
///
/// Steps, in order: drop literal `0`/`1`, drop short words, drop vowels, reduce
/// to first letters (each only when the matching filter is on), then map
/// GroupA letters to `0` and GroupB letters to `1`. Anything that is not a
/// group letter is discarded.
pub fn text_to_bits(cover: &str, groups: &CharacterGroups, filters: &FilterOptions) -> Vec<u8> {
    let mut text = strip_parity_digits(cover);

    if filters.ignore_short_words {
        text = strip_short_words(&text);
    }
    if filters.ignore_vowels {
        text = strip_vowels(&text);
    }
    if filters.per_word {
        text = first_letters(&text);
    }

    text.chars().filter_map(|c| groups.bit_for(c)).collect()
}

/// Validated groups plus filters, shared by decoding and word search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParityCodec {
    groups: CharacterGroups,
    filters: FilterOptions,
}

impl ParityCodec {
    /// Creates a codec after checking that the groups cover the alphabet.
    pub fn new(groups: CharacterGroups, filters: FilterOptions) -> Result<Self> {
        groups.validate(&filters)?;
        debug!(
            group_a = %groups.group_a(),
            group_b = %groups.group_b(),
            ?filters,
            "parity codec ready"
        );
        Ok(Self { groups, filters })
    }

    /// Parity bits carried by `cover`.
    pub fn text_to_bits(&self, cover: &str) -> Vec<u8> {
        text_to_bits(cover, &self.groups, &self.filters)
    }

    pub fn groups(&self) -> &CharacterGroups {
        &self.groups
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }
}
