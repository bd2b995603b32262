//! Text side of the pipeline.
//!
//! This module provides:
//! - Character groups mapping letters to parity bits
//! - Cover text filters (vowels, short words, first letters)
//! - The text to parity codec
//! - Word list loading and parity-driven word suggestions

pub mod dictionary;
pub mod filter;
pub mod groups;
pub mod parity;
pub mod pattern;
pub mod search;

pub use dictionary::Dictionary;
pub use filter::FilterOptions;
pub use groups::{CharacterGroups, LetterSet, DEFAULT_GROUP_A, DEFAULT_GROUP_B, VOWELS};
pub use parity::{text_to_bits, ParityCodec};
pub use pattern::ParityPattern;
pub use search::{append_candidates, append_random_cover, RandomCover, WordCandidate, WordSearch};
