//! Hash search over a word list
//!
//! This module resolves a target digest back to the word that produced it:
//! - `config`: search parameters and the digest-then-encode [`Transform`]
//! - `parallel`: the worker pool, shared match slot and coordinator
//! - `result`: the search outcome and statistics

pub mod config;
pub mod parallel;
pub mod result;

#[allow(unused_imports)]
pub use config::{SearchConfig, Transform};
#[allow(unused_imports)]
pub use parallel::{ParallelConfig, run_parallel_search, run_parallel_search_observed};
#[allow(unused_imports)]
pub use result::{SearchOutcome, SearchStatistics};

use std::sync::atomic::{AtomicU64, Ordering};

/// Instrumentation hook called by a worker right before it hashes a candidate.
pub trait CandidateObserver: Send + Sync {
    fn observe(&self, worker_id: usize, candidate: &str);
}

/// Observer that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CandidateObserver for NoopObserver {
    #[inline(always)]
    fn observe(&self, _worker_id: usize, _candidate: &str) {}
}

/// Observer that counts the candidates hashed across all workers
#[derive(Debug, Default)]
pub struct CountingObserver {
    count: AtomicU64,
}

#[allow(dead_code)]
impl CountingObserver {
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}

impl CandidateObserver for CountingObserver {
    fn observe(&self, _worker_id: usize, _candidate: &str) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}
