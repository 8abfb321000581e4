//! Core library components.
//!
//! The line codec, the KMS gateway abstraction and its backends, and
//! credential resolution. Nothing here touches argument parsing or the
//! terminal.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod env;
