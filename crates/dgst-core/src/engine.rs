//! # Streaming SHA-256 Engine
//!
//! [`Sha256`] is the incremental digest state machine: it buffers input
//! shorter than one block, hands every complete 64-byte block to the
//! compression function, and applies Merkle-Damgard padding on
//! [`finish`](Sha256::finish).
//!
//! ## Lifecycle
//!
//! `new()` → `update()` zero or more times → `finish()`. `finish` consumes
//! the engine, so feeding or finalizing a completed computation does not
//! compile. Clone an engine mid-stream to fork a computation that shares a
//! prefix.
//!
//! ## Streaming Equivalence
//!
//! Any partition of a message into `update` calls yields the same digest as
//! one call with the whole message. Internal buffering is never observable.

use std::io;

use crate::compress::{compress, BLOCK_LEN, IV};
use crate::digest::{Digest, DIGEST_LEN};

/// Offset within the final block at which the 64-bit length field starts.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Incremental SHA-256 hasher.
#[derive(Clone)]
pub struct Sha256 {
    /// Chaining state H0..H7.
    state: [u32; 8],
    /// Unprocessed tail of the input.
    buffer: [u8; BLOCK_LEN],
    /// Valid bytes in `buffer`; always `< BLOCK_LEN` between calls.
    buffer_len: usize,
    /// Total bytes ingested.
    total_len: u64,
}

impl Sha256 {
    /// Start a new digest computation.
    pub fn new() -> Self {
        Self {
            state: IV,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Feed bytes into the computation.
    ///
    /// Chunks of any length, including empty ones, may be passed in any
    /// number of calls.
    pub fn update(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        let mut data = data;

        if self.buffer_len > 0 {
            let take = (BLOCK_LEN - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < BLOCK_LEN {
                return;
            }
            let block = self.buffer;
            compress(&mut self.state, &block);
            self.buffer_len = 0;
        }

        let (blocks, tail) = data.split_at(data.len() - data.len() % BLOCK_LEN);
        compress(&mut self.state, blocks);

        self.buffer[..tail.len()].copy_from_slice(tail);
        self.buffer_len = tail.len();
    }

    /// Builder-style [`update`](Self::update).
    #[must_use]
    pub fn chain(mut self, data: impl AsRef<[u8]>) -> Self {
        self.update(data.as_ref());
        self
    }

    /// Total number of bytes fed so far.
    pub fn len(&self) -> u64 {
        self.total_len
    }

    /// Returns `true` if no bytes have been fed yet.
    pub fn is_empty(&self) -> bool {
        self.total_len == 0
    }

    /// Apply padding and return the digest. Terminal.
    pub fn finish(mut self) -> Digest {
        let bit_len = self.total_len.wrapping_mul(8);

        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        if self.buffer_len > LENGTH_OFFSET {
            // No room for the length field: flush a zero-filled block first.
            self.buffer[self.buffer_len..].fill(0);
            let block = self.buffer;
            compress(&mut self.state, &block);
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..LENGTH_OFFSET].fill(0);
        self.buffer[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
        let block = self.buffer;
        compress(&mut self.state, &block);

        let mut out = [0u8; DIGEST_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Digest::new(out)
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print buffered message bytes.
        f.debug_struct("Sha256")
            .field("total_len", &self.total_len)
            .field("buffer_len", &self.buffer_len)
            .finish_non_exhaustive()
    }
}

impl io::Write for Sha256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Compute the SHA-256 digest of `data` in one call.
pub fn sha256(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finish()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Split `data` at the given cut points (taken modulo its length).
    fn split_at_cuts<'a>(data: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
        let mut points: Vec<usize> = cuts
            .iter()
            .map(|c| if data.is_empty() { 0 } else { c % (data.len() + 1) })
            .collect();
        points.push(0);
        points.push(data.len());
        points.sort_unstable();
        points.windows(2).map(|w| &data[w[0]..w[1]]).collect()
    }

    proptest! {
        /// Any chunking produces the same digest as a single update.
        #[test]
        fn streaming_equivalence(
            data in prop::collection::vec(any::<u8>(), 0..600),
            cuts in prop::collection::vec(any::<usize>(), 0..12),
        ) {
            let mut hasher = Sha256::new();
            for chunk in split_at_cuts(&data, &cuts) {
                hasher.update(chunk);
            }
            prop_assert_eq!(hasher.finish(), sha256(&data));
        }

        /// Chunking on exact block boundaries is equivalent too.
        #[test]
        fn block_aligned_streaming(
            data in prop::collection::vec(any::<u8>(), 0..640),
            blocks_per_chunk in 1usize..4,
        ) {
            let mut hasher = Sha256::new();
            for chunk in data.chunks(blocks_per_chunk * BLOCK_LEN) {
                hasher.update(chunk);
            }
            prop_assert_eq!(hasher.finish(), sha256(&data));
        }

        /// Hashing is deterministic across fresh engines.
        #[test]
        fn deterministic(data in prop::collection::vec(any::<u8>(), 0..300)) {
            prop_assert_eq!(sha256(&data), sha256(&data));
        }

        /// Flipping any single bit changes the digest.
        #[test]
        fn single_bit_flip_changes_digest(
            data in prop::collection::vec(any::<u8>(), 1..200),
            index in any::<usize>(),
            bit in 0u8..8,
        ) {
            let mut flipped = data.clone();
            let i = index % flipped.len();
            flipped[i] ^= 1 << bit;
            prop_assert_ne!(sha256(&data), sha256(&flipped));
        }

        /// Agreement with the `sha2` crate on arbitrary input.
        #[test]
        fn matches_reference(data in prop::collection::vec(any::<u8>(), 0..1024)) {
            use sha2::Digest as _;
            let expected: [u8; 32] = sha2::Sha256::digest(&data).into();
            let computed = sha256(&data);
            prop_assert_eq!(computed.as_bytes(), &expected);
        }
    }
}
