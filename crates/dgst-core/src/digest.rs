//! # SHA-256 Digest Value
//!
//! Defines [`Digest`], the 32-byte output of the engine. Textual form is
//! always 64 lowercase hex characters, most significant nibble first. The
//! same form is used for serde, so a digest embedded in JSON reads exactly
//! like the `dgst hash` output.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DigestError;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Length of a SHA-256 digest rendered as hex.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// A finalized SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wrap raw digest bytes.
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw 32 digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a digest from 64 hex characters.
    ///
    /// Surrounding whitespace is ignored and both cases are accepted, so
    /// the output of `sha256sum` or `dgst hash` can be fed back in directly.
    pub fn from_hex(s: &str) -> Result<Self, DigestError> {
        let s = s.trim();
        let len = s.chars().count();
        if len != DIGEST_HEX_LEN {
            return Err(DigestError::InvalidLength {
                expected: DIGEST_HEX_LEN,
                actual: len,
            });
        }

        let mut bytes = [0u8; DIGEST_LEN];
        let mut nibbles = s.chars().enumerate().map(|(position, character)| {
            character
                .to_digit(16)
                .map(|d| d as u8)
                .ok_or(DigestError::InvalidHexCharacter {
                    position,
                    character,
                })
        });
        for byte in bytes.iter_mut() {
            // Length was checked above, so both nibbles are present.
            let hi = nibbles.next().transpose()?.unwrap_or_default();
            let lo = nibbles.next().transpose()?.unwrap_or_default();
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
