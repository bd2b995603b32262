//! Error types shared by the parity pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while encoding, decoding or searching for cover words.
#[derive(Error, Debug)]
pub enum ParityError {
    /// GroupA, GroupB and the ignored vowels do not cover A-Z.
    #[error("GroupA and GroupB must cover the entire ASCII alphabet (A-Z); missing: {missing}")]
    IncompleteAlphabet {
        /// Letters found in neither group.
        missing: String,
    },

    /// A letter was assigned to both groups.
    #[error("GroupA and GroupB must not share letters; shared: {shared}")]
    OverlappingGroups {
        /// Letters present in both groups.
        shared: String,
    },

    /// A group definition contains something other than an ASCII letter.
    #[error("Invalid character in group definition: {0:?}")]
    InvalidGroupLetter(char),

    /// The image (or dictionary) cannot supply the requested amount of data.
    #[error("Source too small: requested {requested} bytes, only {available} available")]
    InsufficientSource {
        /// Bytes requested by the caller.
        requested: usize,
        /// Whole bytes the source could provide.
        available: usize,
    },

    /// XOR operands have different lengths.
    #[error("XOR operands differ in length: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// A parity string contained something other than 0/1.
    #[error("Invalid parity character: {0:?} (expected '0' or '1')")]
    InvalidParity(char),

    /// The word list produced no usable words.
    #[error("Dictionary {} contains no words", .0.display())]
    EmptyDictionary(PathBuf),

    #[error("Image load error: {0}")]
    ImageLoad(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, ParityError>;
