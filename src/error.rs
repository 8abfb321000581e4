//! Error types.
//!
//! One top-level [`Error`] with a sub-enum per failure domain, so callers
//! can match on the domain while `?` still works everywhere.

use thiserror::Error;

/// Top-level error for every kmsenv operation.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing the config file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The KMS gateway rejected an encrypt request or a standalone decrypt.
    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// A tagged value could not be decrypted while resolving a file.
    #[error("failed to decrypt {key}: {source}")]
    Decrypt {
        key: String,
        #[source]
        source: CipherError,
    },

    /// The file or an argument is not in `KEY=value` form.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Credentials or options could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(String),
}

/// Failures of the remote encrypt/decrypt capability.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("no KMS key id configured")]
    MissingKeyId,

    #[error("invalid base64 ciphertext: {0}")]
    InvalidBase64(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),
}

/// Malformed `KEY=value` input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("line {line}: expected KEY=value")]
    MissingSeparator { line: usize },

    #[error("line {line}: empty key")]
    EmptyKey { line: usize },

    #[error("invalid argument '{0}': expected KEY=value")]
    InvalidPair(String),
}

/// Credential and option resolution failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("both an access key id and a secret access key are required, got only the {0}")]
    IncompleteCredentials(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
