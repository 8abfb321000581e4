//! Add command.
//!
//! Encrypts the value of a `KEY=value` argument and appends it to a file.

use tracing::info;

use crate::cli::output;
use crate::core::cipher;
use crate::core::config::Settings;
use crate::core::env;
use crate::error::Result;

/// Append `KEY=secret:<ciphertext>` to `file`.
///
/// The argument is validated before any KMS call, and the file is only
/// touched once encryption has succeeded.
pub async fn execute(file: &str, content: &str, settings: &Settings) -> Result<()> {
    let (key, value) = env::split_pair(content)?;
    info!("Adding secret: {}", key);

    let kms = cipher::connect(settings).await?;
    let ciphertext = kms.encrypt(value).await?;
    env::append(file, key, &ciphertext).await?;

    output::success(&format!(
        "added {} to {}",
        output::key(key),
        output::path(file)
    ));
    Ok(())
}
