use super::{hashfind, stderr, stdout, write_wordlist};
use std::process::Command;

const PASSWORD_MD5_HEX: &str = "5f4dcc3b5aa765d61d8327deb882cf99";

fn digest_of(word: &str, algorithm: &str, encoding: &str) -> String {
    let output = hashfind(&["digest", word, "-a", algorithm, "-e", encoding]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    stdout(&output).trim().to_string()
}

#[test]
fn test_find_password_md5_hex() {
    let list = write_wordlist("basic", "abc\npassword\nletmein\n");

    let output = hashfind(&[
        "find",
        PASSWORD_MD5_HEX,
        "-a",
        "md5",
        "-e",
        "hex",
        "-w",
        list.to_str().unwrap(),
    ]);
    let _ = std::fs::remove_file(&list);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Algorithm: MD5"), "stdout: {}", out);
    assert!(out.contains("HashEncoding: HEX"), "stdout: {}", out);
    assert!(out.contains("Found: password in "), "stdout: {}", out);
    assert!(out.contains("Memory Consumed: "), "stdout: {}", out);
}

#[test]
fn test_find_default_encoding_is_base64() {
    let target = digest_of("letmein", "sha1", "base64");
    let list = write_wordlist("base64", "abc\npassword\nletmein\n");

    let output = hashfind(&["find", &target, "-a", "sha1", "-w", list.to_str().unwrap()]);
    let _ = std::fs::remove_file(&list);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Found: letmein in "));
}

#[test]
fn test_find_base58_sha512() {
    let words: Vec<String> = (0..5_000).map(|i| format!("word{}", i)).collect();
    let target = digest_of("word4321", "sha-512", "base58");
    let list = write_wordlist("base58", &words.join("\n"));

    let output = hashfind(&[
        "find",
        &target,
        "-a",
        "sha-512",
        "-e",
        "base58",
        "-t",
        "4",
        "-w",
        list.to_str().unwrap(),
    ]);
    let _ = std::fs::remove_file(&list);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Threads: 4"), "stdout: {}", out);
    assert!(out.contains("Found: word4321 in "), "stdout: {}", out);
}

#[test]
fn test_find_not_found() {
    let list = write_wordlist("missing-word", "abc\nletmein\n");

    let output = hashfind(&[
        "find",
        PASSWORD_MD5_HEX,
        "-a",
        "md5",
        "-e",
        "hex",
        "-w",
        list.to_str().unwrap(),
    ]);
    let _ = std::fs::remove_file(&list);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Not found. ("));
}

#[test]
fn test_find_unsupported_algorithm_skips_word_list() {
    // The word list does not exist: the algorithm error must come first
    let output = hashfind(&[
        "find",
        "whatever",
        "-a",
        "rot13",
        "-e",
        "hex",
        "-w",
        "/nonexistent/hashfind/words.txt",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("error: UnsupportedAlgorithm"), "stderr: {}", err);
    assert!(!stdout(&output).contains("Loading word list"));
}

#[test]
fn test_find_unsupported_encoding() {
    let output = hashfind(&[
        "find",
        "whatever",
        "-a",
        "md5",
        "-e",
        "uuencode",
        "-w",
        "/nonexistent/hashfind/words.txt",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error: UnsupportedEncoding"));
}

#[test]
fn test_find_missing_word_list() {
    let output = hashfind(&[
        "find",
        PASSWORD_MD5_HEX,
        "-a",
        "md5",
        "-e",
        "hex",
        "-w",
        "/nonexistent/hashfind/words.txt",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("error: IoError"), "stderr: {}", err);
    assert!(err.contains("/nonexistent/hashfind/words.txt"), "stderr: {}", err);
}

#[test]
fn test_find_comment_lines() {
    let secret = "#!comment: secret";
    let target = digest_of(secret, "md5", "hex");
    let list = write_wordlist("comments", "#!comment: header\nabc\n#!comment: secret\n");
    let path = list.to_str().unwrap();

    // Filtered everywhere by default
    let filtered = hashfind(&["find", &target, "-a", "md5", "-e", "hex", "-w", path]);
    assert!(stdout(&filtered).contains("Not found. ("));

    // Only the leading run is skipped
    let leading = hashfind(&[
        "find",
        &target,
        "-a",
        "md5",
        "-e",
        "hex",
        "-w",
        path,
        "--comments",
        "skip-leading",
    ]);
    assert!(stdout(&leading).contains("Found: #!comment: secret in "));

    let kept = hashfind(&[
        "find", &target, "-a", "md5", "-e", "hex", "-w", path, "--comments", "keep",
    ]);
    assert!(stdout(&kept).contains("Found: #!comment: secret in "));

    let _ = std::fs::remove_file(&list);
}

#[test]
fn test_find_threads_from_environment() {
    let list = write_wordlist("env-threads", "abc\npassword\n");

    let output = Command::new(env!("CARGO_BIN_EXE_hashfind"))
        .args([
            "find",
            PASSWORD_MD5_HEX,
            "-a",
            "md5",
            "-e",
            "hex",
            "-w",
            list.to_str().unwrap(),
        ])
        .env("HASHFIND_THREADS", "3")
        .output()
        .expect("Failed to execute hashfind");
    let _ = std::fs::remove_file(&list);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Threads: 3"), "stdout: {}", out);
    assert!(out.contains("Found: password in "), "stdout: {}", out);
}

#[test]
fn test_find_negative_threads_uses_all_cpus() {
    let list = write_wordlist("negative-threads", "password\n");

    let output = hashfind(&[
        "find",
        PASSWORD_MD5_HEX,
        "-a",
        "md5",
        "-e",
        "hex",
        "-t",
        "-1",
        "-w",
        list.to_str().unwrap(),
    ]);
    let _ = std::fs::remove_file(&list);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Threads: "));
    assert!(stdout(&output).contains("Found: password in "));
}

#[test]
fn test_find_huge_thread_count() {
    let list = write_wordlist("huge-threads", "abc\npassword\n");

    let output = hashfind(&[
        "find",
        PASSWORD_MD5_HEX,
        "-a",
        "md5",
        "-e",
        "hex",
        "-t",
        "4611686018427387904",
        "-w",
        list.to_str().unwrap(),
    ]);
    let _ = std::fs::remove_file(&list);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Found: password in "));
}
