//! KMS gateway.
//!
//! The line codec never talks to a key management service directly. It
//! goes through [`KmsBackend`], a two-operation capability that real
//! providers and test doubles both implement.
//!
//! ## Backends
//!
//! - **AWS KMS** ([`aws::AwsKms`]): the production backend.
//! - **Mock** ([`mock::MockKms`]): deterministic, offline. Compiled for unit
//!   tests and with the `test-kms` feature.

use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine;
use async_trait::async_trait;
use tracing::debug;

use crate::core::config::Settings;
use crate::error::{CipherError, Result};

pub mod aws;

#[cfg(any(test, feature = "test-kms"))]
pub mod mock;

pub use aws::AwsKms;

/// Remote encrypt/decrypt capability.
///
/// Both operations are single-shot request/response. Implementations do
/// no caching or batching of their own.
#[async_trait]
pub trait KmsBackend: Send + Sync {
    /// Encrypt `plaintext` under the configured key.
    ///
    /// # Returns
    ///
    /// The ciphertext blob, base64-encoded.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MissingKeyId` when no key is configured, or
    /// `CipherError::EncryptionFailed` when the service rejects the request.
    async fn encrypt(&self, plaintext: &str) -> std::result::Result<String, CipherError>;

    /// Decrypt a base64-encoded ciphertext blob.
    ///
    /// The key is recovered from the blob itself, so no key id is needed.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidBase64` for a malformed payload, or
    /// `CipherError::DecryptionFailed` when the service cannot decrypt it.
    async fn decrypt(&self, ciphertext: &str) -> std::result::Result<String, CipherError>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

/// Build the gateway for the current build.
///
/// Production builds talk to AWS KMS. Builds with the `test-kms` feature
/// use [`mock::MockKms`] so the CLI runs without credentials; credential
/// settings are still validated.
///
/// # Errors
///
/// Returns `ConfigError` if the credential settings are inconsistent.
pub async fn connect(settings: &Settings) -> Result<Box<dyn KmsBackend>> {
    backend(settings).await
}

#[cfg(feature = "test-kms")]
async fn backend(settings: &Settings) -> Result<Box<dyn KmsBackend>> {
    settings.credential_source()?;
    debug!("creating mock-kms backend");
    Ok(Box::new(mock::MockKms::new(settings.key_id.clone())))
}

#[cfg(not(feature = "test-kms"))]
async fn backend(settings: &Settings) -> Result<Box<dyn KmsBackend>> {
    debug!("creating aws-kms backend");
    Ok(Box::new(AwsKms::connect(settings).await?))
}

/// Decode a stored ciphertext payload into raw blob bytes.
pub(crate) fn decode_blob(ciphertext: &str) -> std::result::Result<Vec<u8>, CipherError> {
    STANDARD
        .decode(ciphertext)
        .map_err(|e| CipherError::InvalidBase64(e.to_string()))
}

/// Encode raw blob bytes for storage in a text file.
pub(crate) fn encode_blob(blob: &[u8]) -> String {
    STANDARD.encode(blob)
}
