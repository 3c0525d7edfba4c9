//! # Built-in Validation Vectors
//!
//! Known-answer tests shipped with the engine so a deployed binary can
//! check itself (`dgst test`). Each vector runs on a fresh engine; the last
//! one is fed in two 1000-byte chunks to exercise the buffering path.

use serde::Serialize;

use crate::digest::Digest;
use crate::engine::Sha256;

/// How a vector's input is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VectorInput {
    /// A literal message fed in one `update`.
    Literal {
        /// Message bytes (ASCII for every built-in vector).
        message: &'static str,
    },
    /// `byte` repeated `chunk_len` times, fed `chunks` times.
    Repeated {
        /// Fill byte.
        byte: u8,
        /// Length of each chunk.
        chunk_len: usize,
        /// Number of `update` calls.
        chunks: usize,
    },
}

impl VectorInput {
    /// Total number of message bytes.
    pub fn len(&self) -> usize {
        match self {
            Self::Literal { message } => message.len(),
            Self::Repeated {
                chunk_len, chunks, ..
            } => chunk_len * chunks,
        }
    }

    /// Returns `true` for the empty message.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn feed(&self, hasher: &mut Sha256) {
        match *self {
            Self::Literal { message } => hasher.update(message.as_bytes()),
            Self::Repeated {
                byte,
                chunk_len,
                chunks,
            } => {
                let chunk = vec![byte; chunk_len];
                for _ in 0..chunks {
                    hasher.update(&chunk);
                }
            }
        }
    }
}

/// A known-answer test vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestVector {
    /// Input message.
    pub input: VectorInput,
    /// Expected digest, lowercase hex.
    pub expected: &'static str,
}

impl TestVector {
    /// Hash this vector's input on a fresh engine.
    pub fn compute(&self) -> Digest {
        let mut hasher = Sha256::new();
        self.input.feed(&mut hasher);
        hasher.finish()
    }

    /// Run the vector and compare against the expected digest.
    pub fn run(&self) -> VectorOutcome {
        let computed = self.compute();
        VectorOutcome {
            input: self.input,
            input_len: self.input.len(),
            passed: computed.to_hex() == self.expected,
            computed,
            expected: self.expected,
        }
    }
}

/// The built-in vectors, in execution order.
pub const TEST_VECTORS: [TestVector; 4] = [
    TestVector {
        input: VectorInput::Literal { message: "" },
        expected: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    TestVector {
        input: VectorInput::Literal { message: "abc" },
        expected: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    TestVector {
        input: VectorInput::Literal {
            message: "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        },
        expected: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    TestVector {
        input: VectorInput::Repeated {
            byte: b'a',
            chunk_len: 1000,
            chunks: 2,
        },
        expected: "c4a700f85b7e9e5cdbdc51170409ee2ad48bebe2f2f0957a067937531a0a3c42",
    },
];

/// Result of running one vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorOutcome {
    /// The vector's input description.
    pub input: VectorInput,
    /// Message length in bytes.
    pub input_len: usize,
    /// Whether `computed` matched `expected`.
    pub passed: bool,
    /// Digest produced by the engine.
    pub computed: Digest,
    /// Digest the vector expects.
    pub expected: &'static str,
}

/// Aggregate result of a self-test run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfTestReport {
    /// Per-vector outcomes in execution order.
    pub outcomes: Vec<VectorOutcome>,
    /// Number of vectors that passed.
    pub passed: usize,
    /// Number of vectors run.
    pub total: usize,
}

impl SelfTestReport {
    /// Returns `true` when every vector passed.
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Run every vector in `vectors`.
pub fn run_vectors(vectors: &[TestVector]) -> SelfTestReport {
    let outcomes: Vec<VectorOutcome> = vectors.iter().map(TestVector::run).collect();
    let passed = outcomes.iter().filter(|o| o.passed).count();
    SelfTestReport {
        total: outcomes.len(),
        passed,
        outcomes,
    }
}

/// Run the built-in [`TEST_VECTORS`].
pub fn run_self_tests() -> SelfTestReport {
    run_vectors(&TEST_VECTORS)
}
