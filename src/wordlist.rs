//! Word list loading
//!
//! A word list is a UTF-8 text file with one candidate per line. Lines are
//! deduplicated byte-exactly, keeping the first occurrence, and lines that
//! start with the comment marker are dropped according to a
//! [`CommentPolicy`].

use crate::error::BruteError;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Prefix of comment lines, matched ASCII case-insensitively.
pub const COMMENT_MARKER: &str = "#!comment: ";

/// How comment lines in a word list are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentPolicy {
    /// Drop every comment line wherever it appears
    #[default]
    FilterAll,
    /// Drop only the comment lines at the head of the list
    SkipLeading,
    /// Treat comment lines as ordinary candidates
    Keep,
}

/// Ordered, duplicate-free list of candidate words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load a word list from `path`, dropping every comment line.
    #[allow(dead_code)]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BruteError> {
        Self::load_with(path, CommentPolicy::default())
    }

    /// Load a word list from `path` with an explicit comment policy.
    pub fn load_with(path: impl AsRef<Path>, policy: CommentPolicy) -> Result<Self, BruteError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| BruteError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::from_lines(&text, policy);
        tracing::debug!(
            "Loaded {} unique words from {}",
            list.len(),
            path.display()
        );
        Ok(list)
    }

    /// Build a word list from in-memory text.
    ///
    /// Duplicates are removed before the comment policy is applied, so with
    /// [`CommentPolicy::SkipLeading`] a repeat of a header comment further
    /// down is dropped as a duplicate rather than kept as a candidate.
    pub fn from_lines(text: &str, policy: CommentPolicy) -> Self {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut words = Vec::new();
        let mut in_header = true;

        for line in text.lines() {
            if !seen.insert(line) {
                continue;
            }

            let comment = is_comment(line);
            if !comment {
                in_header = false;
            }

            let skip = match policy {
                CommentPolicy::FilterAll => comment,
                CommentPolicy::SkipLeading => comment && in_header,
                CommentPolicy::Keep => false,
            };
            if !skip {
                words.push(line.to_string());
            }
        }

        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

fn is_comment(line: &str) -> bool {
    line.get(..COMMENT_MARKER.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(COMMENT_MARKER))
}
