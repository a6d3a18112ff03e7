//! Parser module: normalize raw bytes, then build a declaration tree.

pub mod go;

use crate::error::{Error, Result};
use crate::model::{self, SourceFile, SourceText};
use std::borrow::Cow;

/// Pre-parse normalization: UTF-8 validation, byte-order mark removal,
/// LF line endings, no trailing blanks on any line and one space after a
/// column-1 `//` marker.
pub fn normalize(source: &SourceText) -> Result<String> {
    let text = std::str::from_utf8(&source.bytes).map_err(|e| Error::Format {
        origin: source.origin.clone(),
        message: format!("invalid UTF-8 at byte {}", e.valid_up_to()),
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut normalized = text
        .lines()
        .map(|line| space_comment_marker(line.trim_end_matches([' ', '\t'])))
        .collect::<Vec<_>>()
        .join("\n");
    if text.ends_with('\n') {
        normalized.push('\n');
    }
    Ok(normalized)
}

// `//text` becomes `// text`, as the Go formatter rewrites doc comments.
// Directives, blank comment lines and indented text are left alone.
fn space_comment_marker(line: &str) -> Cow<'_, str> {
    match line.strip_prefix("//") {
        Some(body)
            if !body.is_empty()
                && !body.starts_with([' ', '\t', '/'])
                && !model::is_directive(body) =>
        {
            Cow::Owned(format!("// {body}"))
        }
        _ => Cow::Borrowed(line),
    }
}

/// Normalize and parse one input.
pub fn parse_source(source: &SourceText) -> Result<SourceFile> {
    let text = normalize(source)?;
    go::parse(&source.origin, &text)
}
