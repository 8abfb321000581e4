//! Mock KMS backend for testing.
//!
//! The "ciphertext" is `base64("mock-kms:" + plaintext)`. NOT secure, it
//! only exercises the plumbing: base64 validation, key-id checks and the
//! marker convention behave as they do against the real service.

use async_trait::async_trait;

use super::{decode_blob, encode_blob, KmsBackend};
use crate::error::CipherError;

const MOCK_TAG: &str = "mock-kms:";

/// Offline, deterministic KMS stand-in.
#[derive(Debug, Clone, Default)]
pub struct MockKms {
    key_id: Option<String>,
}

impl MockKms {
    /// Create a mock that, like the real backend, refuses to encrypt
    /// without a key id.
    pub fn new(key_id: Option<String>) -> Self {
        Self { key_id }
    }

    /// Mock with a fixed key id.
    pub fn with_key() -> Self {
        Self::new(Some("alias/mock".to_string()))
    }

    /// Ciphertext this backend would produce for `plaintext`.
    pub fn seal(plaintext: &str) -> String {
        encode_blob(format!("{}{}", MOCK_TAG, plaintext).as_bytes())
    }
}

#[async_trait]
impl KmsBackend for MockKms {
    fn name(&self) -> &'static str {
        "mock-kms"
    }

    async fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        if self.key_id.is_none() {
            return Err(CipherError::MissingKeyId);
        }
        Ok(Self::seal(plaintext))
    }

    async fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let blob = decode_blob(ciphertext)?;
        let text = String::from_utf8(blob)
            .map_err(|e| CipherError::DecryptionFailed(format!("invalid utf8: {}", e)))?;
        text.strip_prefix(MOCK_TAG)
            .map(str::to_string)
            .ok_or_else(|| CipherError::DecryptionFailed("not a mock-kms ciphertext".to_string()))
    }
}
