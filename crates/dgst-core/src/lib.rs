//! # dgst-core — Portable SHA-256
//!
//! A from-scratch, dependency-light implementation of FIPS 180-4 SHA-256:
//!
//! - **[`Sha256`]** — the streaming engine. `new()` → `update()` any number
//!   of times → `finish()`. Arbitrary chunking is observationally identical
//!   to hashing the concatenated message in one call.
//! - **[`Digest`]** — the 32-byte result, rendered and parsed as 64 lowercase
//!   hex characters (also its serde form).
//! - **[`selftest`]** — the known-answer vectors the `dgst test` command runs.
//!
//! ```
//! use dgst_core::Sha256;
//!
//! let mut hasher = Sha256::new();
//! hasher.update(b"ab");
//! hasher.update(b"c");
//! assert_eq!(
//!     hasher.finish().to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
//! );
//! ```
//!
//! ## Crate Policy
//!
//! - Portable reference algorithm only: no SIMD or CPU intrinsics.
//! - No I/O and no logging; the engine cannot fail.
//! - No `unsafe` code.

#![forbid(unsafe_code)]

pub mod compress;
pub mod digest;
pub mod engine;
pub mod error;
pub mod selftest;

pub use compress::BLOCK_LEN;
pub use digest::{Digest, DIGEST_HEX_LEN, DIGEST_LEN};
pub use engine::{sha256, Sha256};
pub use error::DigestError;
pub use selftest::{run_self_tests, SelfTestReport, TestVector, VectorOutcome, TEST_VECTORS};
