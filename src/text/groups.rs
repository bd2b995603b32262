//! Character groups that map letters to parity bits.
//!
//! GroupA letters encode `0`, GroupB letters encode `1`. Together with the
//! vowels (when those are ignored) the two groups must partition A-Z.

use std::fmt;

use crate::error::{ParityError, Result};
use crate::text::filter::FilterOptions;

/// Default GroupA (bit 0).
///
/// Built by alternating letters between the groups in order of English letter
/// frequency (Suen 1979, after Thorndike & Lorge).
pub const DEFAULT_GROUP_A: &str = "EAHISLUMCBKJQ";

/// Default GroupB (bit 1).
pub const DEFAULT_GROUP_B: &str = "TONRDWFYGPVXZ";

/// Letters removed when vowels are ignored.
pub const VOWELS: LetterSet = LetterSet::from_ascii("AEIOUY");

/// A set of ASCII letters, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// All 26 letters.
    pub const ALPHABET: Self = Self((1 << 26) - 1);

    /// Builds a set from a string, skipping anything that is not an ASCII letter.
    pub const fn from_ascii(letters: &str) -> Self {
        let bytes = letters.as_bytes();
        let mut mask = 0u32;
        let mut i = 0;
        while i < bytes.len() {
            let upper = bytes[i].to_ascii_uppercase();
            if upper.is_ascii_uppercase() {
                mask |= 1 << (upper - b'A');
            }
            i += 1;
        }
        Self(mask)
    }

    /// Builds a set from a group definition, rejecting non-letters.
    pub fn parse(letters: &str) -> Result<Self> {
        let mut set = Self::EMPTY;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(ParityError::InvalidGroupLetter(c));
            }
            set.insert(c);
        }
        Ok(set)
    }

    fn bit(c: char) -> Option<u32> {
        c.is_ascii_alphabetic()
            .then(|| 1 << (c.to_ascii_uppercase() as u32 - 'A' as u32))
    }

    /// Returns true if `c` (either case) is in the set.
    pub fn contains(self, c: char) -> bool {
        Self::bit(c).map_or(false, |bit| self.0 & bit != 0)
    }

    /// Adds `c` to the set; non-letters are ignored.
    pub fn insert(&mut self, c: char) {
        if let Some(bit) = Self::bit(c) {
            self.0 |= bit;
        }
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Uppercase letters of the set in alphabetical order.
    pub fn letters(self) -> String {
        ('A'..='Z').filter(|&c| self.contains(c)).collect()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters())
    }
}

/// The GroupA / GroupB pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterGroups {
    zeros: LetterSet,
    ones: LetterSet,
}

impl Default for CharacterGroups {
    fn default() -> Self {
        Self {
            zeros: LetterSet::from_ascii(DEFAULT_GROUP_A),
            ones: LetterSet::from_ascii(DEFAULT_GROUP_B),
        }
    }
}

impl CharacterGroups {
    /// Parses two group definitions. Case does not matter.
    ///
    /// This only checks that both strings contain letters; coverage of the
    /// alphabet is checked by [`CharacterGroups::validate`].
    pub fn new(group_a: &str, group_b: &str) -> Result<Self> {
        Ok(Self {
            zeros: LetterSet::parse(group_a)?,
            ones: LetterSet::parse(group_b)?,
        })
    }

    /// Checks that the groups, plus the vowels when those are ignored, cover
    /// A-Z and that no parity-carrying letter sits in both groups.
    pub fn validate(&self, filters: &FilterOptions) -> Result<()> {
        let mut covered = self.zeros.union(self.ones);
        if filters.ignore_vowels {
            covered = covered.union(VOWELS);
        }

        let missing = LetterSet::ALPHABET.difference(covered);
        if !missing.is_empty() {
            return Err(ParityError::IncompleteAlphabet {
                missing: missing.letters(),
            });
        }

        let shared = self
            .class_for(0, filters)
            .intersection(self.class_for(1, filters));
        if !shared.is_empty() {
            return Err(ParityError::OverlappingGroups {
                shared: shared.letters(),
            });
        }

        Ok(())
    }

    /// Parity bit carried by `c`, if any.
    pub fn bit_for(&self, c: char) -> Option<u8> {
        if self.zeros.contains(c) {
            Some(0)
        } else if self.ones.contains(c) {
            Some(1)
        } else {
            None
        }
    }

    /// Letters that may stand for `bit` under the given filters.
    pub fn class_for(&self, bit: u8, filters: &FilterOptions) -> LetterSet {
        let group = if bit == 0 { self.zeros } else { self.ones };
        if filters.ignore_vowels {
            group.difference(VOWELS)
        } else {
            group
        }
    }

    pub fn group_a(&self) -> LetterSet {
        self.zeros
    }

    pub fn group_b(&self) -> LetterSet {
        self.ones
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_groups_cover_alphabet() {
        let groups = CharacterGroups::default();
        assert!(groups.validate(&FilterOptions::default()).is_ok());
        assert_eq!(groups.group_a().union(groups.group_b()), LetterSet::ALPHABET);
    }

    #[test]
    fn test_incomplete_groups_rejected() {
        let groups = CharacterGroups::new("ABC", "DEF").unwrap();
        let result = groups.validate(&FilterOptions::default());
        match result {
            Err(ParityError::IncompleteAlphabet { missing }) => {
                assert_eq!(missing, "GHIJKLMNOPQRSTUVWXYZ");
            }
            other => panic!("expected IncompleteAlphabet, got {:?}", other),
        }
    }

    #[test]
    fn test_vowels_may_be_left_out_when_ignored() {
        let groups = CharacterGroups::new("HSLMCBKJQ", "TNRDWFGPVXZ").unwrap();
        assert!(groups.validate(&FilterOptions::default()).is_err());

        let filters = FilterOptions {
            ignore_vowels: true,
            ..Default::default()
        };
        assert!(groups.validate(&filters).is_ok());
    }

    #[test]
    fn test_overlap_rejected() {
        let groups = CharacterGroups::new("EAHISLUMCBKJQT", DEFAULT_GROUP_B).unwrap();
        let result = groups.validate(&FilterOptions::default());
        assert!(matches!(
            result,
            Err(ParityError::OverlappingGroups { ref shared }) if shared == "T"
        ));
    }

    #[test]
    fn test_vowel_overlap_ignored_with_vowels_off() {
        // Y in both groups only matters when vowels carry parity.
        let groups = CharacterGroups::new("EAHISLUMCBKJQY", DEFAULT_GROUP_B).unwrap();
        assert!(groups.validate(&FilterOptions::default()).is_err());

        let filters = FilterOptions {
            ignore_vowels: true,
            ..Default::default()
        };
        assert!(groups.validate(&filters).is_ok());
    }

    #[test]
    fn test_invalid_group_letter() {
        let result = CharacterGroups::new("ABC1", "XYZ");
        assert!(matches!(result, Err(ParityError::InvalidGroupLetter('1'))));
    }

    #[test]
    fn test_bit_for_is_case_insensitive() {
        let groups = CharacterGroups::default();
        assert_eq!(groups.bit_for('t'), Some(1));
        assert_eq!(groups.bit_for('T'), Some(1));
        assert_eq!(groups.bit_for('e'), Some(0));
        assert_eq!(groups.bit_for('!'), None);
    }

    #[test]
    fn test_class_without_vowels() {
        let groups = CharacterGroups::default();
        let filters = FilterOptions {
            ignore_vowels: true,
            ..Default::default()
        };
        assert_eq!(groups.class_for(0, &filters).letters(), "BCHJKLMQS");
        assert_eq!(groups.class_for(1, &filters).letters(), "DFGNPRTVWXZ");
    }
}
