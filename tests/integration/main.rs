//! End-to-end tests that drive the `hashfind` binary.

mod digest_test;
mod find_test;

use std::path::PathBuf;
use std::process::{Command, Output};

fn hashfind(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hashfind"))
        .args(args)
        .env_remove("HASHFIND_THREADS")
        .output()
        .expect("Failed to execute hashfind")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Write a word list under the system temp directory and return its path.
fn write_wordlist(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "hashfind-it-{}-{}.txt",
        std::process::id(),
        name
    ));
    std::fs::write(&path, contents).expect("Failed to write word list");
    path
}
