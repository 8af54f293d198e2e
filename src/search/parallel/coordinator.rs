//! Parallel search coordinator that manages worker threads.

#![allow(dead_code)]

use crate::error::BruteError;
use crate::search::config::{SearchConfig, Transform};
use crate::search::parallel::channel::{
    CoordinatorChannels, WorkerChannels, WorkerMessage, create_channels,
};
use crate::search::parallel::config::ParallelConfig;
use crate::search::result::{SearchOutcome, SearchStatistics};
use crate::search::{CandidateObserver, NoopObserver};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Read-only state shared by every worker of one search.
struct WorkerContext<'a> {
    transform: Transform,
    /// Digest bytes of the target; None when nothing can match.
    expected: Option<&'a [u8]>,
    words: &'a [String],
    chunk_size: usize,
    /// Index of the next unclaimed candidate.
    cursor: &'a AtomicUsize,
    observer: &'a dyn CandidateObserver,
}

/// What the coordinator loop saw from the workers.
struct CoordinatorReport {
    worker_candidates: Vec<u64>,
    matched_by: Option<usize>,
    failure: Option<BruteError>,
}

/// Search `words` for the candidate whose transformed digest equals the
/// configured target.
pub fn run_parallel_search(
    config: &SearchConfig,
    words: &[String],
) -> Result<SearchOutcome, BruteError> {
    run_parallel_search_observed(config, words, &NoopObserver)
}

/// Like [`run_parallel_search`], calling `observer` before each candidate is
/// hashed.
pub fn run_parallel_search_observed(
    config: &SearchConfig,
    words: &[String],
    observer: &dyn CandidateObserver,
) -> Result<SearchOutcome, BruteError> {
    // Unknown names fail here, before any worker exists
    let transform = config.transform()?;
    let parallel_config = ParallelConfig::default().with_workers(config.worker_count());

    search_words(
        transform,
        &config.target_hash,
        words,
        &parallel_config,
        observer,
    )
}

/// Run the worker pool over `words` with an already resolved transform.
pub fn search_words(
    transform: Transform,
    target: &str,
    words: &[String],
    parallel_config: &ParallelConfig,
    observer: &dyn CandidateObserver,
) -> Result<SearchOutcome, BruteError> {
    let start_time = Instant::now();
    let num_workers = parallel_config.effective_workers(words.len());
    let chunk_size = parallel_config.chunk_size_for(words.len());

    tracing::info!(
        "Searching {} candidates with {} workers ({} {}, chunk size {})",
        words.len(),
        num_workers,
        transform.algorithm,
        transform.encoding,
        chunk_size
    );

    let (coordinator_channels, worker_channels) = create_channels(num_workers);
    let shared = std::sync::Arc::clone(&coordinator_channels.shared);
    let cursor = AtomicUsize::new(0);

    // Decoded once so workers compare raw digests without allocating
    let expected = transform.expected_digest(target);
    if expected.is_none() {
        tracing::debug!(
            "Target is not a {} {} digest",
            transform.algorithm,
            transform.encoding
        );
    }

    let context = WorkerContext {
        transform,
        expected: expected.as_deref(),
        words,
        chunk_size,
        cursor: &cursor,
        observer,
    };

    // Scoped threads borrow the word list instead of cloning it per worker
    let report = std::thread::scope(|scope| {
        for channels in worker_channels {
            let context = &context;
            scope.spawn(move || run_worker(context, channels));
        }

        run_coordinator(coordinator_channels, num_workers)
    });

    let statistics = SearchStatistics {
        workers: num_workers,
        elapsed_time: start_time.elapsed(),
        candidates_evaluated: report.worker_candidates.iter().sum(),
        worker_candidates: report.worker_candidates,
        matched_by: report.matched_by,
    };

    if let Some(failure) = report.failure {
        tracing::warn!("Search aborted: {}", failure);
        return Err(failure);
    }

    tracing::info!(
        "Search finished in {:.2?}, {} candidates evaluated",
        statistics.elapsed_time,
        statistics.candidates_evaluated
    );

    Ok(match shared.recorded() {
        Some(word) => SearchOutcome::with_match(word, statistics),
        None => SearchOutcome::no_match(statistics),
    })
}

/// Coordinator loop that receives messages until every worker has finished.
fn run_coordinator(channels: CoordinatorChannels, num_workers: usize) -> CoordinatorReport {
    let mut report = CoordinatorReport {
        worker_candidates: vec![0; num_workers],
        matched_by: None,
        failure: None,
    };
    let mut finished_count = 0;

    while finished_count < num_workers {
        match channels.from_workers.recv() {
            Ok(WorkerMessage::Match { worker_id, word }) => {
                tracing::debug!("Worker {} matched {:?}", worker_id, word);
                // Only the worker whose word landed in the slot is credited
                if report.matched_by.is_none()
                    && channels.shared.recorded().as_deref() == Some(word.as_str())
                {
                    report.matched_by = Some(worker_id);
                }
            }
            Ok(WorkerMessage::Finished {
                worker_id,
                candidates_evaluated,
            }) => {
                tracing::debug!(
                    "Worker {} finished after {} candidates",
                    worker_id,
                    candidates_evaluated
                );
                report.worker_candidates[worker_id] = candidates_evaluated;
                finished_count += 1;
            }
            Ok(WorkerMessage::Error { worker_id, message }) => {
                tracing::warn!("Worker {} error: {}", worker_id, message);
                channels.shared.signal_stop();
                if report.failure.is_none() {
                    report.failure = Some(BruteError::WorkerFailure { worker_id, message });
                }
            }
            Err(_) => {
                // All senders dropped, we're done
                break;
            }
        }
    }

    report
}

/// Worker function: claims chunks until the list is exhausted or a stop is
/// signalled, then reports how many candidates it hashed.
fn run_worker(context: &WorkerContext<'_>, channels: WorkerChannels) {
    let worker_id = channels.worker_id;
    let mut candidates_evaluated = 0u64;

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        scan_chunks(context, &channels, &mut candidates_evaluated)
    }));

    if let Err(payload) = result {
        channels.shared.signal_stop();
        let _ = channels.to_coordinator.send(WorkerMessage::Error {
            worker_id,
            message: panic_message(payload.as_ref()),
        });
    }

    let _ = channels.to_coordinator.send(WorkerMessage::Finished {
        worker_id,
        candidates_evaluated,
    });
}

fn scan_chunks(context: &WorkerContext<'_>, channels: &WorkerChannels, evaluated: &mut u64) {
    let words = context.words;
    let transform = context.transform;

    loop {
        if channels.shared.should_stop() {
            return;
        }

        let start = context.cursor.fetch_add(context.chunk_size, Ordering::Relaxed);
        if start >= words.len() {
            return;
        }
        let end = (start + context.chunk_size).min(words.len());

        for word in &words[start..end] {
            if channels.shared.should_stop() {
                return;
            }

            context.observer.observe(channels.worker_id, word);
            *evaluated += 1;

            let matched = context
                .expected
                .is_some_and(|expected| transform.matches(word, expected));
            if matched {
                channels.shared.try_record(word);
                let _ = channels.to_coordinator.send(WorkerMessage::Match {
                    worker_id: channels.worker_id,
                    word: word.clone(),
                });
                return;
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}
