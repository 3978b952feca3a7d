//! File access for response texts and keyword lists.

use std::path::Path;
use tracing::debug;

use crate::error::JojoError;
use crate::types::{KeywordSet, ResponseText};
use crate::Result;

/// Read a UTF-8 response file. Missing, unreadable, or non-UTF-8 files fail
/// with [`JojoError::FileAccess`].
pub fn load_text(path: &Path) -> Result<ResponseText> {
    let content = std::fs::read_to_string(path).map_err(|e| JojoError::file_access(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "loaded response text");
    Ok(ResponseText::new(content))
}

/// Parse a keyword file: one keyword per line; blank lines and lines starting
/// with `#` are skipped.
pub fn parse_keyword_lines(content: &str) -> KeywordSet {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .collect()
}

pub fn load_keywords(path: &Path) -> Result<KeywordSet> {
    let content = std::fs::read_to_string(path).map_err(|e| JojoError::file_access(path, e))?;
    let keywords = parse_keyword_lines(&content);
    debug!(path = %path.display(), count = keywords.len(), "loaded keywords");
    Ok(keywords)
}
