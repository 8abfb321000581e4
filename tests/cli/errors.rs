//! Error handling and exit status.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_decrypt_missing_file() {
    let t = Test::new();

    let output = t.decrypt("missing.env");
    assert_failure(&output);
    assert_stdout_empty(&output);
    assert_stderr_contains(&output, "io error");
}

#[test]
fn test_invalid_base64_is_cipher_error() {
    let t = Test::with_file("app.env", "A=1\nBAD=secret:!!not-base64!!");

    let output = t.decrypt("app.env");
    assert_failure(&output);
    assert_stdout_empty(&output);
    assert_stderr_contains(&output, "failed to decrypt BAD");
    assert_stderr_contains(&output, "invalid base64");
}

#[test]
fn test_one_bad_entry_fails_whole_file() {
    let t = Test::with_file(
        "app.env",
        &format!(
            "K1=secret:{}\nK2=secret:{}\nK3=secret:aGVsbG8=\nK4=secret:{}\nK5=plain",
            sealed("one"),
            sealed("two"),
            sealed("four"),
        ),
    );

    let output = t.decrypt("app.env");
    assert_failure(&output);
    assert_stdout_empty(&output);
    assert_stderr_contains(&output, "K3");
}

#[test]
fn test_malformed_line_rejected() {
    let t = Test::with_file("app.env", "A=1\nJUST_A_WORD\nB=2");

    let output = t.decrypt("app.env");
    assert_failure(&output);
    assert_stdout_empty(&output);
    assert_stderr_contains(&output, "line 2: expected KEY=value");
}

#[test]
fn test_half_credentials_rejected() {
    let t = Test::with_file("app.env", "A=1");

    let output = t
        .cmd()
        .args(["--access-key-id", "AKIA123", "decrypt", "app.env"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "secret access key");
    assert_stderr_contains(&output, "--profile");
}

#[test]
fn test_empty_env_credentials_ignored() {
    let t = Test::with_file("app.env", "A=1");

    let output = t
        .cmd()
        .env("AWS_ACCESS_KEY_ID", "")
        .args(["decrypt", "app.env"])
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_unknown_command() {
    let t = Test::new();

    t.cmd()
        .arg("rotate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
