//! Built-in charsets and JSON charset files.

use crate::{AsciiArtError, Result};
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::Path;

/// Charset a fresh session starts with.
pub const DEFAULT_CHARSET: RangeInclusive<char> = '0'..='9';

/// Printable ASCII, used by `add all` / `remove all`.
pub const PRINTABLE_ASCII: RangeInclusive<char> = ' '..='~';

#[derive(Deserialize)]
struct CharsetFile {
    chars: Vec<String>,
}

/// Load a charset from JSON of the form `{"chars": ["a", "b", ...]}`.
///
/// Only the first character of each entry is used; empty entries are skipped.
pub fn load_charset(path: impl AsRef<Path>) -> Result<Vec<char>> {
    let text = std::fs::read_to_string(path)?;
    parse_charset(&text)
}

pub fn parse_charset(json: &str) -> Result<Vec<char>> {
    let file: CharsetFile =
        serde_json::from_str(json).map_err(|e| AsciiArtError::Charset(e.to_string()))?;
    Ok(file.chars.iter().filter_map(|s| s.chars().next()).collect())
}
