//! kmsenv - KMS-encrypted values in plain key=value files.
//!
//! Selected values in a `KEY=value` file are stored as AWS KMS ciphertext
//! behind a `secret:` marker and decrypted transparently on read.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── decrypt       # Print a file with secrets decrypted
//! │   ├── add           # Append an encrypted KEY=value line
//! │   ├── encrypt       # Print ciphertext for one value
//! │   ├── run           # Run a command with secrets injected
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── env           # Line codec and concurrent resolution
//!     ├── cipher/       # KMS gateway
//!     │   ├── mod       # KmsBackend trait
//!     │   ├── aws       # AWS KMS implementation
//!     │   └── mock      # Offline test double
//!     ├── config        # Credential resolution
//!     └── constants     # Marker prefix, env var names
//! ```

pub mod cli;
pub mod core;
pub mod error;
