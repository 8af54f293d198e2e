//! Error types for word list loading and hash search

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BruteError {
    #[error("Algorithm {0} is not supported")]
    UnsupportedAlgorithm(String),

    #[error("Encoding {0} is not supported")]
    UnsupportedEncoding(String),

    #[error("Failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Worker {worker_id} failed: {message}")]
    WorkerFailure { worker_id: usize, message: String },
}

impl BruteError {
    /// Short label for the error kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            BruteError::UnsupportedAlgorithm(_) => "UnsupportedAlgorithm",
            BruteError::UnsupportedEncoding(_) => "UnsupportedEncoding",
            BruteError::Io { .. } => "IoError",
            BruteError::WorkerFailure { .. } => "WorkerFailure",
        }
    }
}
