//! Search outcome types and statistics

use std::time::Duration;

/// Result of a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// The word whose transformed digest equals the target, if any
    pub word: Option<String>,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

impl SearchOutcome {
    pub fn no_match(statistics: SearchStatistics) -> Self {
        Self {
            word: None,
            statistics,
        }
    }

    pub fn with_match(word: String, statistics: SearchStatistics) -> Self {
        Self {
            word: Some(word),
            statistics,
        }
    }

    pub fn matched(&self) -> bool {
        self.word.is_some()
    }
}

/// Statistics from a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Number of workers spawned
    pub workers: usize,
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Candidates hashed, summed over all workers
    pub candidates_evaluated: u64,
    /// Candidates hashed by each worker, indexed by worker id
    pub worker_candidates: Vec<u64>,
    /// Worker that reported the recorded match
    pub matched_by: Option<usize>,
}

impl SearchStatistics {
    /// Get candidates evaluated per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.candidates_evaluated as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Workers: {}\n", self.workers));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!(
            "Candidates evaluated: {}\n",
            self.candidates_evaluated
        ));
        s.push_str(&format!(
            "Throughput: {:.0} candidates/sec\n",
            self.throughput()
        ));
        s.push_str(&format!("Per worker: {:?}\n", self.worker_candidates));
        if let Some(worker_id) = self.matched_by {
            s.push_str(&format!("Matched by worker: {}\n", worker_id));
        }
        s
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.word {
            Some(ref word) => write!(f, "Found: {}", word),
            None => write!(f, "Not found."),
        }
    }
}
