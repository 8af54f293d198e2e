//! Configuration for parallel search execution.

#![allow(dead_code)]

/// Bounds applied to the automatic chunk size.
const MIN_CHUNK: usize = 100;
const MAX_CHUNK: usize = 10_000;
/// Target number of chunks per worker.
const CHUNKS_PER_WORKER: usize = 12;

/// Configuration for parallel search execution.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of worker threads to spawn.
    pub num_workers: usize,
    /// Candidates claimed per cursor step (None = derived from list size).
    pub chunk_size: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            chunk_size: None,
        }
    }
}

impl ParallelConfig {
    /// Set the worker count, raising zero to one.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set a fixed chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size.max(1));
        self
    }

    /// Chunk size for a list of `total` candidates.
    pub fn chunk_size_for(&self, total: usize) -> usize {
        self.chunk_size.unwrap_or_else(|| {
            // More workers than candidates cannot shrink the chunk further
            let workers = self.num_workers.min(total.max(1));
            (total / workers.saturating_mul(CHUNKS_PER_WORKER)).clamp(MIN_CHUNK, MAX_CHUNK)
        })
    }

    /// Workers actually worth spawning for `total` candidates: no more than
    /// there are chunks, and at least one.
    pub fn effective_workers(&self, total: usize) -> usize {
        let chunks = total.div_ceil(self.chunk_size_for(total));
        self.num_workers.min(chunks).max(1)
    }
}
