//! # Error Types
//!
//! The digest engine itself cannot fail: every finite byte sequence has a
//! digest. The only fallible surface in this crate is parsing a textual
//! digest back into a [`Digest`](crate::Digest).

use thiserror::Error;

/// Error produced when a hex string cannot be decoded into a digest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// The input did not contain exactly 64 hex characters.
    #[error("digest must be {expected} hex chars, got {actual}")]
    InvalidLength {
        /// Required number of hex characters.
        expected: usize,
        /// Number of characters actually supplied.
        actual: usize,
    },

    /// A character outside `[0-9a-fA-F]` was found.
    #[error("invalid hex character {character:?} at position {position}")]
    InvalidHexCharacter {
        /// Zero-based character offset within the trimmed input.
        position: usize,
        /// The offending character.
        character: char,
    },
}
