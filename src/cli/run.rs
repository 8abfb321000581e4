//! Run command.
//!
//! Executes a command with a decrypted file injected as environment variables.

use tokio::process::Command;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::core::config::Settings;
use crate::core::env;
use crate::error::{Error, Result};

/// Run a command with the file's entries as environment variables, then
/// exit with the child's status.
pub async fn execute(file: &str, command: &[String], settings: &Settings) -> Result<()> {
    let kms = cipher::connect(settings).await?;
    let exit_code = run_with_secrets(file, command, kms.as_ref()).await?;
    std::process::exit(exit_code);
}

/// Decrypt `file` and run `command` with the result in its environment.
///
/// Later duplicates of a key override earlier ones. Returns the child's exit
/// code, or 1 if it was terminated by a signal.
pub async fn run_with_secrets(
    file: &str,
    command: &[String],
    kms: &dyn cipher::KmsBackend,
) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Other("no command specified".to_string()))?;

    let pairs = env::decrypt_file(file, kms).await?;
    debug!(count = pairs.len(), program = %program, "injecting entries");

    let mut cmd = Command::new(program);
    cmd.args(args);

    // Wipe plaintexts once they have been handed to the child's environment
    for (key, value) in pairs {
        let value = Zeroizing::new(value);
        cmd.env(key, value.as_str());
    }

    let status = cmd.status().await?;
    Ok(status.code().unwrap_or(1))
}
