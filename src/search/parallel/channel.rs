//! Worker-to-coordinator channel and shared match state.

#![allow(dead_code)]

use crossbeam_channel::{Receiver, Sender, unbounded};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Message sent from workers to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Worker found a candidate matching the target.
    Match { worker_id: usize, word: String },
    /// Worker has finished searching.
    Finished {
        worker_id: usize,
        candidates_evaluated: u64,
    },
    /// Worker panicked while processing a candidate.
    Error { worker_id: usize, message: String },
}

/// First-match slot and stop flag shared by all workers of one search.
#[derive(Debug, Default)]
pub struct SharedMatch {
    /// Written at most once.
    slot: Mutex<Option<String>>,
    /// Set on match or worker failure; checked before every candidate.
    should_stop: AtomicBool,
}

impl SharedMatch {
    /// Record `word` if no match has been recorded yet, and signal all workers
    /// to stop. Returns true if this call wrote the slot.
    pub fn try_record(&self, word: &str) -> bool {
        let written = {
            let mut slot = self.slot.lock();
            if slot.is_none() {
                *slot = Some(word.to_string());
                true
            } else {
                false
            }
        };
        self.signal_stop();
        written
    }

    /// Check if we should stop searching.
    #[inline(always)]
    pub fn should_stop(&self) -> bool {
        self.should_stop.load(Ordering::Acquire)
    }

    /// Signal all workers to stop.
    pub fn signal_stop(&self) {
        self.should_stop.store(true, Ordering::Release);
    }

    /// The recorded match, if any.
    pub fn recorded(&self) -> Option<String> {
        self.slot.lock().clone()
    }
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    pub worker_id: usize,
    /// Send messages to coordinator.
    pub to_coordinator: Sender<WorkerMessage>,
    pub shared: Arc<SharedMatch>,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive messages from workers.
    pub from_workers: Receiver<WorkerMessage>,
    pub shared: Arc<SharedMatch>,
}

/// Create channels for a search with the given number of workers.
///
/// The coordinator keeps no sender, so its receiver disconnects once every
/// worker has dropped its endpoints.
pub fn create_channels(num_workers: usize) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    let shared = Arc::new(SharedMatch::default());

    // Unbounded so workers never block on a busy coordinator
    let (worker_tx, coordinator_rx) = unbounded();

    let worker_channels = (0..num_workers)
        .map(|worker_id| WorkerChannels {
            worker_id,
            to_coordinator: worker_tx.clone(),
            shared: Arc::clone(&shared),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        shared,
    };

    (coordinator, worker_channels)
}
