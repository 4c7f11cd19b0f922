//! Key file loading.
//!
//! The key file is plain text with one encoded key per line. Lines are trimmed
//! and only those starting with [`KEY_PREFIX`] are kept; everything else
//! (blank lines, comments, other key formats) is skipped silently.

use std::fs;
use std::path::Path;

use crate::keys::error::LoadError;
use crate::network::KEY_PREFIX;

/// Read `path` and return the encoded keys it contains, in file order.
///
/// Duplicates are preserved. A missing or unreadable file is an error; a file
/// with no recognized keys yields an empty vector.
pub fn load_keys(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let keys = filter_keys(&contents);
    tracing::debug!(path = %path.display(), count = keys.len(), "Loaded private keys");
    Ok(keys)
}

/// Keys read from a key file, or the notice to show when it has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyBatch {
    /// At least one recognized key, in file order.
    Keys(Vec<String>),
    /// No recognized keys. Holds the message for the user.
    NoKeys(String),
}

/// Load `path` and decide whether there is anything to process.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read.
pub fn load_key_batch(path: impl AsRef<Path>) -> Result<KeyBatch, LoadError> {
    let path = path.as_ref();
    let keys = load_keys(path)?;
    if keys.is_empty() {
        return Ok(KeyBatch::NoKeys(no_keys_message(path)));
    }
    Ok(KeyBatch::Keys(keys))
}

/// Message printed when a key file holds no recognized keys.
pub fn no_keys_message(path: &Path) -> String {
    format!("No valid private keys found in {}", path.display())
}

/// Extract encoded keys from file contents.
///
/// Trimming also strips U+FEFF, so a byte-order mark in front of the first
/// key does not hide it.
pub fn filter_keys(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}'))
        .filter(|line| line.starts_with(KEY_PREFIX))
        .map(str::to_owned)
        .collect()
}
