//! Encrypt command.
//!
//! Prints the bare base64 ciphertext (no `secret:` prefix) for pasting into
//! a file by hand.

use tracing::info;

use crate::cli::output;
use crate::core::cipher;
use crate::core::config::Settings;
use crate::error::Result;

/// Encrypt a single value to stdout.
pub async fn execute(value: &str, settings: &Settings) -> Result<()> {
    info!("Encrypting value ({} bytes)", value.len());

    let kms = cipher::connect(settings).await?;
    let ciphertext = kms.encrypt(value).await?;

    output::data(&ciphertext)
}
