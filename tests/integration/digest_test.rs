use super::{hashfind, stderr, stdout};

#[test]
fn test_digest_md5_hex() {
    let output = hashfind(&["digest", "password", "-a", "md5", "-e", "hex"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "5f4dcc3b5aa765d61d8327deb882cf99");
}

#[test]
fn test_digest_defaults_to_base64() {
    let output = hashfind(&["digest", "password", "-a", "MD5"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "X03MO1qnZdYdgyfeuILPmQ==");
}

#[test]
fn test_digest_sha256_aliases_agree() {
    let plain = hashfind(&["digest", "abc", "-a", "sha256", "-e", "hex"]);
    let dashed = hashfind(&["digest", "abc", "-a", "SHA-256", "-e", "HEX"]);

    assert!(plain.status.success());
    assert_eq!(
        stdout(&plain).trim(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(stdout(&plain), stdout(&dashed));
}

#[test]
fn test_digest_unsupported_algorithm() {
    let output = hashfind(&["digest", "abc", "-a", "rot13", "-e", "hex"]);

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("UnsupportedAlgorithm"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_digest_unsupported_encoding() {
    let output = hashfind(&["digest", "abc", "-a", "md5", "-e", "uuencode"]);

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("UnsupportedEncoding"),
        "stderr: {}",
        stderr(&output)
    );
}
