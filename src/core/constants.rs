//! Constants used throughout kmsenv.
//!
//! Centralizes magic strings.

/// Marker prefix identifying an encrypted value (`KEY=secret:<base64>`).
pub const SECRET_PREFIX: &str = "secret:";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "KMSENV_LOG";

/// Environment variable holding the KMS key id used when no `--key-id` is given.
pub const KEY_ID_ENV: &str = "AWS_KMS_KEY_ID";
