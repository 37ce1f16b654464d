//! Match-file parsing.
//!
//! The match-file format is one pattern per line. `#` starts a comment,
//! blank lines are ignored, and surrounding whitespace is trimmed.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{FilterError, Result};

/// Parse a pattern list from text.
pub fn parse_patterns(text: &str) -> Vec<String> {
    let mut patterns = Vec::new();

    for line in text.lines() {
        let line = match line.find('#') {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        patterns.push(line.to_string());
    }

    patterns
}

/// Parse a pattern list from a file.
pub fn parse_patterns_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| FilterError::MatchFile {
        path: path.display().to_string(),
        source,
    })?;
    let patterns = parse_patterns(&text);
    debug!("read {} patterns from {}", patterns.len(), path.display());
    Ok(patterns)
}
