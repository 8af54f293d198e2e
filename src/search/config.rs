//! Configuration types for hash search

use crate::digest::HashAlgorithm;
use crate::encoding::Encoding;
use crate::error::BruteError;

/// Digest-then-encode pipeline applied to every candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    pub algorithm: HashAlgorithm,
    pub encoding: Encoding,
}

impl Transform {
    pub fn new(algorithm: HashAlgorithm, encoding: Encoding) -> Self {
        Self {
            algorithm,
            encoding,
        }
    }

    /// `encode(digest(utf8(word)))`
    #[cfg(test)]
    pub fn apply(&self, word: &str) -> String {
        self.encoding.encode(&self.algorithm.digest(word.as_bytes()))
    }

    /// Digest a candidate must produce to match `target`.
    ///
    /// Encodings are injective, so `apply(word) == target` exactly when the
    /// digest of `word` equals these bytes. None means no candidate can match:
    /// `target` is not canonical text of this encoding or has the wrong length.
    pub fn expected_digest(&self, target: &str) -> Option<Vec<u8>> {
        self.encoding
            .decode(target)
            .filter(|bytes| bytes.len() == self.algorithm.output_len())
    }

    #[inline(always)]
    pub fn matches(&self, word: &str, expected: &[u8]) -> bool {
        self.algorithm.digest_matches(word.as_bytes(), expected)
    }
}

/// Main search configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Encoded digest to resolve
    pub target_hash: String,
    /// Hash algorithm name (see [`HashAlgorithm`])
    pub algorithm: String,
    /// Digest encoding name (see [`Encoding`])
    pub encoding: String,
    /// Worker count; zero or negative means one per available CPU
    pub degree_of_parallelism: i64,
}

impl SearchConfig {
    pub fn new(target_hash: impl Into<String>, algorithm: impl Into<String>) -> Self {
        Self {
            target_hash: target_hash.into(),
            algorithm: algorithm.into(),
            encoding: Encoding::default().to_string(),
            degree_of_parallelism: -1,
        }
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_parallelism(mut self, degree: i64) -> Self {
        self.degree_of_parallelism = degree;
        self
    }

    /// Resolve the algorithm and encoding names.
    ///
    /// The algorithm is checked first, so a config naming two unknowns reports
    /// `UnsupportedAlgorithm`.
    pub fn transform(&self) -> Result<Transform, BruteError> {
        let algorithm: HashAlgorithm = self.algorithm.parse()?;
        let encoding: Encoding = self.encoding.parse()?;
        Ok(Transform::new(algorithm, encoding))
    }

    /// Number of workers this config asks for.
    pub fn worker_count(&self) -> usize {
        if self.degree_of_parallelism <= 0 {
            num_cpus::get()
        } else {
            self.degree_of_parallelism as usize
        }
    }
}
