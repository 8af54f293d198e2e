//! Text encodings for digest bytes

use crate::error::BruteError;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;

/// Supported digest encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// Bitcoin Base58 alphabet, no padding
    Base58,
    /// Standard alphabet with `=` padding
    #[default]
    Base64,
    /// Lowercase, no separators
    Hex,
}

impl Encoding {
    #[cfg(test)]
    pub const ALL: [Encoding; 3] = [Encoding::Base58, Encoding::Base64, Encoding::Hex];

    #[inline]
    pub fn encode(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::Base58 => bs58::encode(bytes).into_string(),
            Encoding::Base64 => BASE64_STANDARD.encode(bytes),
            Encoding::Hex => hex::encode(bytes),
        }
    }

    /// Bytes whose encoding is exactly `text`, or None when `text` is not the
    /// canonical output of this encoding.
    pub fn decode(&self, text: &str) -> Option<Vec<u8>> {
        let bytes = match self {
            Encoding::Base58 => bs58::decode(text).into_vec().ok()?,
            Encoding::Base64 => BASE64_STANDARD.decode(text).ok()?,
            Encoding::Hex => hex::decode(text).ok()?,
        };
        // Uppercase hex and similar spellings decode but never compare equal
        (self.encode(&bytes) == text).then_some(bytes)
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Base58 => write!(f, "base58"),
            Encoding::Base64 => write!(f, "base64"),
            Encoding::Hex => write!(f, "hex"),
        }
    }
}

impl std::str::FromStr for Encoding {
    type Err = BruteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "base58" => Ok(Encoding::Base58),
            "base64" => Ok(Encoding::Base64),
            "hex" => Ok(Encoding::Hex),
            _ => Err(BruteError::UnsupportedEncoding(s.to_string())),
        }
    }
}

/// Encode `bytes` with the encoding called `encoding`.
pub fn encode(encoding: &str, bytes: &[u8]) -> Result<String, BruteError> {
    let encoding: Encoding = encoding.parse()?;
    Ok(encoding.encode(bytes))
}
