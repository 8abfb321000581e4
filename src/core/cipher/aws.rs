//! AWS KMS backend.
//!
//! Credentials come from [`Settings`]: an explicit key pair, a named
//! profile, or the SDK's default provider chain. KMS stores the key
//! reference inside the ciphertext blob, so decryption needs no key id.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_kms::config::{Credentials, Region};
use aws_sdk_kms::error::DisplayErrorContext;
use aws_sdk_kms::primitives::Blob;
use tracing::{debug, trace};

use super::{decode_blob, encode_blob, KmsBackend};
use crate::core::config::{CredentialSource, Settings};
use crate::error::{CipherError, Result};

/// Provider name attached to explicitly supplied credentials.
const CREDENTIALS_PROVIDER: &str = "kmsenv";

/// AWS KMS gateway.
#[derive(Debug, Clone)]
pub struct AwsKms {
    client: aws_sdk_kms::Client,
    key_id: Option<String>,
}

impl AwsKms {
    /// Build a client from resolved settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the credential settings are inconsistent.
    pub async fn connect(settings: &Settings) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }

        match settings.credential_source()? {
            CredentialSource::Static {
                access_key_id,
                secret_access_key,
                session_token,
            } => {
                debug!(access_key_id = %access_key_id, "using explicit AWS credentials");
                loader = loader.credentials_provider(Credentials::new(
                    access_key_id,
                    secret_access_key,
                    session_token,
                    None,
                    CREDENTIALS_PROVIDER,
                ));
            }
            CredentialSource::Profile(Some(profile)) => {
                debug!(profile = %profile, "using AWS profile");
                loader = loader.profile_name(profile);
            }
            CredentialSource::Profile(None) => {
                debug!("using default AWS credential chain");
            }
        }

        let config = loader.load().await;
        Ok(Self::from_client(
            aws_sdk_kms::Client::new(&config),
            settings.key_id.clone(),
        ))
    }

    /// Wrap an existing client.
    pub fn from_client(client: aws_sdk_kms::Client, key_id: Option<String>) -> Self {
        Self { client, key_id }
    }
}

#[async_trait]
impl KmsBackend for AwsKms {
    fn name(&self) -> &'static str {
        "aws-kms"
    }

    async fn encrypt(&self, plaintext: &str) -> std::result::Result<String, CipherError> {
        let key_id = self.key_id.as_deref().ok_or(CipherError::MissingKeyId)?;

        trace!(
            key_id = %key_id,
            plaintext_len = plaintext.len(),
            "encrypting with AWS KMS"
        );

        let result = self
            .client
            .encrypt()
            .key_id(key_id)
            .plaintext(Blob::new(plaintext.as_bytes()))
            .send()
            .await
            .map_err(|e| {
                CipherError::EncryptionFailed(format!(
                    "KMS encrypt failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        let blob = result
            .ciphertext_blob()
            .ok_or_else(|| CipherError::EncryptionFailed("no ciphertext returned".into()))?;

        let encoded = encode_blob(blob.as_ref());
        trace!(ciphertext_len = encoded.len(), "encrypted with AWS KMS");
        Ok(encoded)
    }

    async fn decrypt(&self, ciphertext: &str) -> std::result::Result<String, CipherError> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting with AWS KMS");

        let blob = decode_blob(ciphertext)?;

        let result = self
            .client
            .decrypt()
            .ciphertext_blob(Blob::new(blob))
            .send()
            .await
            .map_err(|e| {
                CipherError::DecryptionFailed(format!(
                    "KMS decrypt failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        let plaintext = result
            .plaintext()
            .ok_or_else(|| CipherError::DecryptionFailed("no plaintext returned".into()))?;

        let plaintext = String::from_utf8(plaintext.as_ref().to_vec())
            .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)))?;

        trace!(plaintext_len = plaintext.len(), "decrypted with AWS KMS");
        Ok(plaintext)
    }
}
