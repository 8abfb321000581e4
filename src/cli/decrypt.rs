//! Decrypt command.
//!
//! Prints a file with every tagged value replaced by its plaintext.

use tracing::info;

use crate::cli::output;
use crate::core::cipher;
use crate::core::config::Settings;
use crate::core::env;
use crate::error::Result;

/// Decrypt a file to stdout.
///
/// Nothing is printed unless every entry resolves.
pub async fn execute(file: &str, settings: &Settings) -> Result<()> {
    info!("Decrypting {}", file);

    let kms = cipher::connect(settings).await?;
    let pairs = env::decrypt_file(file, kms.as_ref()).await?;

    output::data(&env::serialize(&pairs))
}
