//! Tests for `kmsenv decrypt`.

use crate::support::*;

#[test]
fn test_decrypt_literal_scenario() {
    let t = Test::with_file(
        "app.env",
        &format!("FOO=bar\nBAZ=secret:{}", sealed("qux")),
    );

    let output = t.decrypt("app.env");
    assert_success(&output);
    assert_eq!(stdout(&output), "FOO=bar\nBAZ=qux\n");
}

#[test]
fn test_decrypt_mixed_file_keeps_order() {
    let (content, expected) = mixed_file();
    let t = Test::with_file("app.env", &content);

    let output = t.decrypt("app.env");
    assert_success(&output);
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_decrypt_plain_file_passes_through() {
    let t = Test::with_file("plain.env", "A=1\nB=two words\nC=x=y\n");

    let output = t.decrypt("plain.env");
    assert_success(&output);
    assert_eq!(stdout(&output), "A=1\nB=two words\nC=x=y\n");
}

#[test]
fn test_decrypt_duplicate_keys_kept() {
    let t = Test::with_file("dup.env", &format!("A=1\nA=secret:{}", sealed("2")));

    let output = t.decrypt("dup.env");
    assert_success(&output);
    assert_eq!(stdout(&output), "A=1\nA=2\n");
}

#[test]
fn test_decrypt_empty_file() {
    let t = Test::with_file("empty.env", "  \n\n");

    let output = t.decrypt("empty.env");
    assert_success(&output);
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn test_decrypt_needs_no_key_id() {
    let t = Test::with_file("app.env", &format!("K=secret:{}", sealed("v")));

    // decrypt() passes no --key-id and the environment is scrubbed
    let output = t.decrypt("app.env");
    assert_success(&output);
    assert_eq!(stdout(&output), "K=v\n");
}

#[test]
fn test_decrypt_verbose_logs_to_stderr_only() {
    let t = Test::with_file("app.env", &format!("K=secret:{}", sealed("v")));

    let output = t
        .cmd()
        .args(["--verbose", "decrypt", "app.env"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "K=v\n");
    assert_stderr_contains(&output, "resolving entries");
}

#[test]
fn test_decrypt_log_env_var() {
    let t = Test::with_file("app.env", "K=v");

    let output = t
        .cmd()
        .env("KMSENV_LOG", "debug")
        .args(["decrypt", "app.env"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "K=v\n");
    assert_stderr_contains(&output, "resolving entries");
}

#[test]
fn test_default_no_log_output() {
    let t = Test::with_file("app.env", "K=v");

    let output = t.decrypt("app.env");
    assert_success(&output);
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}
