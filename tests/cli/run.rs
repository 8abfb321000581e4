//! Tests for `kmsenv run`.

#![cfg(unix)]

use crate::support::*;

#[test]
fn test_run_injects_decrypted_values() {
    let (content, _) = mixed_file();
    let t = Test::with_file("app.env", &content);

    let output = t
        .cmd()
        .args(["run", "app.env", "--", "sh", "-c", "printf '%s|%s' \"$API_KEY\" \"$REGION\""])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "sk-test-12345|eu-west-1");
}

#[test]
fn test_run_propagates_exit_code() {
    let t = Test::with_file("app.env", "A=1");

    let output = t
        .cmd()
        .args(["run", "app.env", "--", "sh", "-c", "exit 3"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_run_does_not_start_on_decrypt_failure() {
    let t = Test::with_file("app.env", "BAD=secret:%%%");

    let output = t
        .cmd()
        .args(["run", "app.env", "--", "sh", "-c", "echo started"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stdout_empty(&output);
}
