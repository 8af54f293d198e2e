//! Parallel search execution over a shared word list.
//!
//! # Architecture
//!
//! The parallel search system consists of:
//! - A **coordinator** that spawns scoped worker threads and collects their reports
//! - Multiple **workers** that claim chunks of the word list through an atomic
//!   cursor and hash each candidate
//! - A **channel** carrying match, failure and completion reports to the coordinator
//! - **Shared state**: a write-once match slot and a stop flag checked before
//!   every candidate
//!
//! A match or a worker panic sets the stop flag; every other worker returns
//! before starting its next candidate.
//!
//! # Example
//!
//! ```ignore
//! let config = SearchConfig::new("5f4dcc3b5aa765d61d8327deb882cf99", "md5")
//!     .with_encoding("hex")
//!     .with_parallelism(4);
//!
//! let outcome = run_parallel_search(&config, words.as_slice())?;
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;

pub use config::ParallelConfig;
pub use coordinator::{run_parallel_search, run_parallel_search_observed};
