use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

mod digest;
mod encoding;
mod error;
mod metrics;
mod search;
mod wordlist;

use error::BruteError;
use metrics::{TrackingAllocator, allocated_bytes, pretty_size};
use search::{SearchConfig, run_parallel_search};
use wordlist::{CommentPolicy, WordList};

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "hashfind")]
#[command(about = "hashfind - resolve a hash digest against a word list")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// CLI comment handling for word lists
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum CliCommentPolicy {
    /// Drop every `#!comment: ` line
    #[default]
    FilterAll,
    /// Drop only the `#!comment: ` lines at the top of the list
    SkipLeading,
    /// Treat comment lines as candidates
    Keep,
}

impl From<CliCommentPolicy> for CommentPolicy {
    fn from(cli: CliCommentPolicy) -> Self {
        match cli {
            CliCommentPolicy::FilterAll => CommentPolicy::FilterAll,
            CliCommentPolicy::SkipLeading => CommentPolicy::SkipLeading,
            CliCommentPolicy::Keep => CommentPolicy::Keep,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Find the word whose hash matches the given digest
    Find {
        /// The encoded digest to search for
        hash: String,
        /// Hash algorithm (md5, sha1, sha256, sha384, sha512)
        #[arg(long, short = 'a')]
        algorithm: String,
        /// Word list file with one candidate per line
        #[arg(long = "wordlist", short = 'w')]
        wordlist: PathBuf,
        /// Digest encoding (base58, base64, hex)
        #[arg(long, short = 'e', default_value = "base64")]
        encoding: String,
        /// Number of worker threads (zero or negative = one per CPU)
        #[arg(
            long,
            short = 't',
            default_value_t = -1,
            allow_negative_numbers = true,
            env = "HASHFIND_THREADS"
        )]
        threads: i64,
        /// How `#!comment: ` lines in the word list are handled
        #[arg(long, value_enum, default_value = "filter-all")]
        comments: CliCommentPolicy,
    },
    /// Print the encoded digest of a single word
    Digest {
        /// Word to hash
        word: String,
        /// Hash algorithm (md5, sha1, sha256, sha384, sha512)
        #[arg(long, short = 'a')]
        algorithm: String,
        /// Digest encoding (base58, base64, hex)
        #[arg(long, short = 'e', default_value = "base64")]
        encoding: String,
    },
}

/// Options for the find command
struct FindOptions {
    config: SearchConfig,
    wordlist: PathBuf,
    comments: CommentPolicy,
}

// --- Find ---

fn run_find(options: &FindOptions) -> anyhow::Result<()> {
    let config = &options.config;

    // Reject unknown names before reading a possibly huge word list
    config.transform()?;

    println!("Algorithm: {}", config.algorithm.to_uppercase());
    println!("HashEncoding: {}", config.encoding.to_uppercase());
    println!("Threads: {}", config.worker_count());
    println!();

    println!("Loading word list...");
    let starting_memory = allocated_bytes();

    let words = WordList::load_with(&options.wordlist, options.comments)
        .context("Word list could not be loaded")?;
    if words.is_empty() {
        tracing::warn!("Word list {} has no candidates", options.wordlist.display());
    }
    tracing::debug!("{} unique candidates", words.len());

    println!("Starting brute force search...");
    println!();

    let start_time = Instant::now();
    let outcome = run_parallel_search(config, words.as_slice())?;
    let elapsed_seconds = start_time.elapsed().as_secs_f64();

    if outcome.matched() {
        println!("{} in {}s", outcome, elapsed_seconds);
    } else {
        println!("{} ({}s)", outcome, elapsed_seconds);
    }
    tracing::debug!("\n{}", outcome.statistics.format_summary());

    let ending_memory = allocated_bytes();
    println!(
        "Memory Consumed: {}",
        pretty_size(ending_memory - starting_memory)
    );

    Ok(())
}

// --- Digest ---

fn run_digest(word: &str, algorithm_name: &str, encoding_name: &str) -> anyhow::Result<()> {
    let bytes = digest::digest(algorithm_name, word.as_bytes())?;
    println!("{}", encoding::encode(encoding_name, &bytes)?);
    Ok(())
}

fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<BruteError>() {
        Some(brute) => eprintln!("error: {}: {:#}", brute.kind(), err),
        None => eprintln!("error: {:#}", err),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match args.command {
        Commands::Find {
            hash,
            algorithm,
            wordlist,
            encoding,
            threads,
            comments,
        } => {
            let options = FindOptions {
                config: SearchConfig::new(hash, algorithm)
                    .with_encoding(encoding)
                    .with_parallelism(threads),
                wordlist,
                comments: comments.into(),
            };
            run_find(&options)
        }
        Commands::Digest {
            word,
            algorithm,
            encoding,
        } => run_digest(&word, &algorithm, &encoding),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}
