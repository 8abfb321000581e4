//! Line codec for `KEY=value` files.
//!
//! One entry per non-empty line, key and value separated by the first `=`.
//! A value starting with [`SECRET_PREFIX`] is KMS ciphertext:
//!
//! ```text
//! KEY1=value1
//! KEY2=secret:BASE64CIPHERTEXT
//! ```
//!
//! There is no quoting or escaping. Values may contain `=`; keys may not.

use std::fmt;
use std::path::Path;

use futures::future::try_join_all;
use tokio::io::AsyncWriteExt;
use tracing::{debug, trace};

use crate::core::cipher::KmsBackend;
use crate::core::constants::SECRET_PREFIX;
use crate::error::{Error, FormatError, Result};

/// A value as stored in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Plain(String),
    /// Base64 ciphertext, marker prefix already stripped.
    Encrypted(String),
}

impl Value {
    /// Classify a raw value by its marker prefix. Case-sensitive, no
    /// whitespace tolerance.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(SECRET_PREFIX) {
            Some(payload) => Self::Encrypted(payload.to_string()),
            None => Self::Plain(raw.to_string()),
        }
    }

    pub fn is_encrypted(&self) -> bool {
        matches!(self, Self::Encrypted(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(v) => f.write_str(v),
            Self::Encrypted(payload) => f.write_str(&format_tagged(payload)),
        }
    }
}

/// A single `KEY=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: Value,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Parse file text into entries, preserving file order.
///
/// Trailing whitespace is trimmed and blank lines are skipped, so an empty
/// or whitespace-only file yields no entries. Keys need not be unique.
///
/// # Errors
///
/// Returns `FormatError::MissingSeparator` for a line without `=` and
/// `FormatError::EmptyKey` for a line starting with `=`. Line numbers are
/// 1-based and count blank lines.
pub fn parse(text: &str) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for (idx, line) in text.trim_end().lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or(FormatError::MissingSeparator { line: line_no })?;
        if key.is_empty() {
            return Err(FormatError::EmptyKey { line: line_no }.into());
        }

        entries.push(Entry::new(key, Value::parse(value)));
    }

    trace!(count = entries.len(), "parsed entries");
    Ok(entries)
}

/// Split a single `KEY=value` argument on its first `=`.
///
/// # Errors
///
/// Returns `FormatError::InvalidPair` if there is no `=`, or the key is
/// empty or contains a line break (it would not parse back as one line).
pub fn split_pair(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() && !key.contains(['\n', '\r']) => {
            Ok((key, value))
        }
        _ => Err(FormatError::InvalidPair(pair.to_string()).into()),
    }
}

/// Join `key=value` pairs with `\n`. No trailing newline is added.
pub fn serialize<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k.as_ref(), v.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Canonical on-disk form of an encrypted value: `secret:<ciphertext>`.
pub fn format_tagged(ciphertext: &str) -> String {
    format!("{}{}", SECRET_PREFIX, ciphertext)
}

/// Decrypt every tagged value, returning `(key, plaintext)` pairs in file
/// order.
///
/// All decrypt calls are in flight at once. Results are joined by position,
/// so completion order does not matter. The first failure aborts the whole
/// resolution and no pairs are returned.
///
/// # Errors
///
/// Returns `Error::Decrypt` naming the key whose value failed.
pub async fn resolve(entries: &[Entry], kms: &dyn KmsBackend) -> Result<Vec<(String, String)>> {
    let encrypted = entries.iter().filter(|e| e.value.is_encrypted()).count();
    debug!(
        entries = entries.len(),
        encrypted,
        backend = kms.name(),
        "resolving entries"
    );

    let pending = entries.iter().map(|entry| async move {
        let plaintext = match &entry.value {
            Value::Plain(v) => v.clone(),
            Value::Encrypted(payload) => {
                kms.decrypt(payload).await.map_err(|source| Error::Decrypt {
                    key: entry.key.clone(),
                    source,
                })?
            }
        };
        Ok::<_, Error>((entry.key.clone(), plaintext))
    });

    try_join_all(pending).await
}

/// Read and parse a file.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read, or a `FormatError`.
pub async fn read(path: impl AsRef<Path>) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading file");
    let text = tokio::fs::read_to_string(path).await?;
    parse(&text)
}

/// Read a file and decrypt it into `(key, plaintext)` pairs.
pub async fn decrypt_file(
    path: impl AsRef<Path>,
    kms: &dyn KmsBackend,
) -> Result<Vec<(String, String)>> {
    let entries = read(path).await?;
    resolve(&entries, kms).await
}

/// Append `\nKEY=secret:<ciphertext>` to a file, creating it if missing.
///
/// Existing content is never read or rewritten. The line is written with a
/// single append call; concurrent writers are not coordinated.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be opened or written.
pub async fn append(path: impl AsRef<Path>, key: &str, ciphertext: &str) -> Result<()> {
    let path = path.as_ref();
    let line = format!("\n{}={}", key, format_tagged(ciphertext));

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await?;

    debug!(path = %path.display(), key = %key, "appended encrypted entry");
    Ok(())
}
