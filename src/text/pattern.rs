//! Word matcher for a parity slice.
//!
//! A pattern is a flat list of steps, each either exactly one letter from a
//! set or any number of letters from a set. It is evaluated directly against
//! a whole word; there is no regex engine involved.

use crate::text::filter::FilterOptions;
use crate::text::groups::{CharacterGroups, LetterSet, VOWELS};

/// One matcher step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Exactly one letter from the set.
    One(LetterSet),
    /// Zero or more letters from the set.
    Many(LetterSet),
}

/// Matcher for words whose letters produce a given parity slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityPattern {
    steps: Vec<Step>,
}

impl ParityPattern {
    /// Builds the matcher for `bits`.
    ///
    /// Per letter: one class per bit, with optional vowels before the first class
    /// and after each class when vowels are ignored. Per word: only the first bit
    /// counts, as a leading class followed by any letters. The word must open
    /// with that class even when vowels are ignored.
    pub fn for_bits(bits: &[u8], groups: &CharacterGroups, filters: &FilterOptions) -> Self {
        let mut steps = Vec::new();
        let Some(&first) = bits.first() else {
            return Self { steps };
        };

        if filters.per_word {
            steps.push(Step::One(groups.class_for(first, filters)));
            steps.push(Step::Many(LetterSet::ALPHABET));
            return Self { steps };
        }

        if filters.ignore_vowels {
            steps.push(Step::Many(VOWELS));
        }
        for &bit in bits {
            steps.push(Step::One(groups.class_for(bit, filters)));
            if filters.ignore_vowels {
                steps.push(Step::Many(VOWELS));
            }
        }
        Self { steps }
    }

    /// True if the whole of `word` matches.
    pub fn matches(&self, word: &str) -> bool {
        if self.steps.is_empty() {
            return false;
        }
        let chars: Vec<char> = word.chars().collect();
        match_steps(&self.steps, &chars)
    }
}

fn match_steps(steps: &[Step], word: &[char]) -> bool {
    let Some((step, rest)) = steps.split_first() else {
        return word.is_empty();
    };

    match *step {
        Step::One(set) => match word.split_first() {
            Some((&c, tail)) => set.contains(c) && match_steps(rest, tail),
            None => false,
        },
        Step::Many(set) => {
            let mut taken = 0;
            loop {
                if match_steps(rest, &word[taken..]) {
                    return true;
                }
                match word.get(taken) {
                    Some(&c) if set.contains(c) => taken += 1,
                    _ => return false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> CharacterGroups {
        CharacterGroups::default()
    }

    #[test]
    fn test_per_letter_exact_length() {
        let pattern = ParityPattern::for_bits(&[1, 0, 0], &groups(), &FilterOptions::default());
        assert!(pattern.matches("tea"));
        assert!(pattern.matches("TEA"));
        assert!(!pattern.matches("teas"));
        assert!(!pattern.matches("ten"));
        assert!(!pattern.matches("te"));
    }

    #[test]
    fn test_vowels_are_wildcards() {
        let filters = FilterOptions {
            ignore_vowels: true,
            ..Default::default()
        };
        let pattern = ParityPattern::for_bits(&[1, 0], &groups(), &filters);
        // t=1 m=0, vowels anywhere
        assert!(pattern.matches("time"));
        assert!(pattern.matches("atom"));
        assert!(pattern.matches("tomeau"));
        assert!(!pattern.matches("ti"));
        assert!(!pattern.matches("trim"));
    }

    #[test]
    fn test_per_word_only_first_letter() {
        let filters = FilterOptions {
            per_word: true,
            ..Default::default()
        };
        let pattern = ParityPattern::for_bits(&[0, 1, 1], &groups(), &filters);
        assert!(pattern.matches("elephant"));
        assert!(pattern.matches("h"));
        assert!(!pattern.matches("tiger"));
        assert!(!pattern.matches("e-mail"));
    }

    #[test]
    fn test_per_word_ignoring_vowels_needs_leading_consonant() {
        let filters = FilterOptions {
            per_word: true,
            ignore_vowels: true,
            ..Default::default()
        };
        let pattern = ParityPattern::for_bits(&[1], &groups(), &filters);
        assert!(pattern.matches("tree"));
        assert!(pattern.matches("pear"));
        assert!(!pattern.matches("apple"));
        assert!(!pattern.matches("you"));
        assert!(!pattern.matches("house"));
    }

    #[test]
    fn test_empty_bits_match_nothing() {
        let pattern = ParityPattern::for_bits(&[], &groups(), &FilterOptions::default());
        assert!(!pattern.matches(""));
        assert!(!pattern.matches("word"));
    }

    #[test]
    fn test_non_letters_never_match() {
        let pattern = ParityPattern::for_bits(&[0, 0, 1, 0], &groups(), &FilterOptions::default());
        assert!(pattern.matches("shoe"));
        assert!(!pattern.matches("shoe's"));
    }
}
