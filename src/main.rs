//! kmsenv - KMS-encrypted values in plain key=value files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kmsenv::cli::output;
use kmsenv::cli::{execute, Cli};
use kmsenv::core::constants::{KEY_ID_ENV, LOG_ENV};
use kmsenv::error::{CipherError, ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for command output
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("kmsenv=debug")
        } else {
            EnvFilter::new("kmsenv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.kms.into()) {
        let suggestion = match &e {
            Error::Cipher(CipherError::MissingKeyId) => {
                Some(format!("pass --key-id or set {}", KEY_ID_ENV))
            }
            Error::Config(ConfigError::IncompleteCredentials(_)) => Some(
                "pass both --access-key-id and --secret-access-key, or use --profile".to_string(),
            ),
            Error::Decrypt {
                source: CipherError::DecryptionFailed(_),
                ..
            } => {
                Some("check the credentials and region can use the key".to_string())
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
