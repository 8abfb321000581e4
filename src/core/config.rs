//! Credential and option resolution.
//!
//! [`Settings`] is filled once from command-line flags, which already fall
//! back to environment variables, and is then turned into a
//! [`CredentialSource`] before any gateway is built.
//!
//! Precedence: explicit flag > environment variable > profile/default chain.

use std::fmt;

use crate::error::{ConfigError, Result};

/// Resolved options for talking to KMS.
#[derive(Clone, Default)]
pub struct Settings {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub key_id: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

/// Where AWS credentials come from.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// An explicit key pair, optionally with an STS session token.
    Static {
        access_key_id: String,
        secret_access_key: String,
        session_token: Option<String>,
    },
    /// A named profile from the shared config files, or the default chain
    /// when `None`.
    Profile(Option<String>),
}

impl Settings {
    /// Drop empty strings so that `AWS_REGION=` behaves like an unset variable.
    pub fn normalized(self) -> Self {
        Self {
            region: non_empty(self.region),
            profile: non_empty(self.profile),
            key_id: non_empty(self.key_id),
            access_key_id: non_empty(self.access_key_id),
            secret_access_key: non_empty(self.secret_access_key),
            session_token: non_empty(self.session_token),
        }
    }

    /// Pick the credential source.
    ///
    /// An explicit key pair wins over any profile. Supplying only half of
    /// the pair is an error rather than a silent fallback to the profile.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::IncompleteCredentials` if exactly one of the
    /// access key id and secret access key is set.
    pub fn credential_source(&self) -> Result<CredentialSource> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(id), Some(secret)) => Ok(CredentialSource::Static {
                access_key_id: id.clone(),
                secret_access_key: secret.clone(),
                session_token: self.session_token.clone(),
            }),
            (Some(_), None) => Err(ConfigError::IncompleteCredentials("access key id").into()),
            (None, Some(_)) => {
                Err(ConfigError::IncompleteCredentials("secret access key").into())
            }
            (None, None) => Ok(CredentialSource::Profile(self.profile.clone())),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("region", &self.region)
            .field("profile", &self.profile)
            .field("key_id", &self.key_id)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &self.secret_access_key.as_ref().map(|_| "***"))
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .finish()
    }
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static { access_key_id, .. } => f
                .debug_struct("Static")
                .field("access_key_id", access_key_id)
                .finish_non_exhaustive(),
            Self::Profile(name) => f.debug_tuple("Profile").field(name).finish(),
        }
    }
}
