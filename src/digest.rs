//! Hash algorithm selection and digest computation
//!
//! The set of algorithms is closed: every supported name maps to one
//! `HashAlgorithm` variant, and every variant to one RustCrypto hasher.
//! Digests are computed over the UTF-8 bytes of a candidate.

use crate::error::BruteError;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Supported hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    #[cfg(test)]
    pub const ALL: [HashAlgorithm; 5] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    /// Compute the digest of `data`.
    #[inline]
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Md5 => Md5::digest(data).to_vec(),
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }

    /// Whether the digest of `data` equals `expected`.
    ///
    /// The digest stays on the stack, so the hot loop does not allocate.
    #[inline]
    pub fn digest_matches(&self, data: &[u8], expected: &[u8]) -> bool {
        match self {
            HashAlgorithm::Md5 => Md5::digest(data).as_slice() == expected,
            HashAlgorithm::Sha1 => Sha1::digest(data).as_slice() == expected,
            HashAlgorithm::Sha256 => Sha256::digest(data).as_slice() == expected,
            HashAlgorithm::Sha384 => Sha384::digest(data).as_slice() == expected,
            HashAlgorithm::Sha512 => Sha512::digest(data).as_slice() == expected,
        }
    }

    /// Digest size in bytes
    pub fn output_len(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::Md5 => write!(f, "md5"),
            HashAlgorithm::Sha1 => write!(f, "sha1"),
            HashAlgorithm::Sha256 => write!(f, "sha256"),
            HashAlgorithm::Sha384 => write!(f, "sha384"),
            HashAlgorithm::Sha512 => write!(f, "sha512"),
        }
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = BruteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" | "sha-1" => Ok(HashAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "sha384" | "sha-384" => Ok(HashAlgorithm::Sha384),
            "sha512" | "sha-512" => Ok(HashAlgorithm::Sha512),
            _ => Err(BruteError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Digest `data` with the algorithm called `algorithm`.
pub fn digest(algorithm: &str, data: &[u8]) -> Result<Vec<u8>, BruteError> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    Ok(algorithm.digest(data))
}
