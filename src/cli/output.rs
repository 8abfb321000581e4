//! Shared CLI output helpers.
//!
//! Status lines go to stderr so that stdout carries only command data
//! (decrypted files, ciphertext). Color respects NO_COLOR.
//!
//! - Green: success
//! - Red: errors
//! - Cyan: keys, paths, hints

use std::io::{self, Write};

use console::style;

use crate::error::Result;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err() && console::colors_enabled_stderr()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ added DB_PASSWORD to .env`
pub fn success(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✓").for_stderr().green(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Print an error message (red).
///
/// Example: `✗ no KMS key id configured`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").for_stderr().red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ pass --key-id or set AWS_KMS_KEY_ID`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").for_stderr().cyan(), style(msg).for_stderr().cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Format a key name in cyan.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        style(k).for_stderr().cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Format a path string in cyan.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        style(p).for_stderr().cyan().to_string()
    } else {
        p.to_string()
    }
}

/// Write command data (a decrypted file, a ciphertext) to stdout.
///
/// A closed stdout surfaces as `Error::Io` instead of a panic.
pub fn data(text: &str) -> Result<()> {
    write_data(&mut io::stdout().lock(), text)?;
    Ok(())
}

fn write_data(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text)?;
    out.flush()
}
