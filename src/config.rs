//! Run configuration, built from command-line flags.

use crate::error::{Error, Result};
use crate::input::{InputSource, ScanOptions};
use crate::render::PackageStyle;
use glob::Pattern;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Config {
    pub input: InputSource,
    /// Destination file; `None` prints to standard output.
    pub output: Option<PathBuf>,
    pub style: PackageStyle,
    pub scan: ScanOptions,
}

/// Compile `--exclude` globs, failing on the first invalid one.
pub fn compile_excludes(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| Error::Pattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

/// Pick the input source: directory, then piped standard input, then file.
///
/// `stdin` is consulted unless a directory is given; it returns `None` when
/// standard input is a terminal. Empty piped input counts as nothing piped.
pub fn select_input(
    recursive: Option<PathBuf>,
    file: Option<PathBuf>,
    stdin: impl FnOnce() -> Result<Option<Vec<u8>>>,
) -> Result<InputSource> {
    if let Some(dir) = recursive {
        return Ok(InputSource::Directory(dir));
    }
    if let Some(bytes) = stdin()?.filter(|b| !b.is_empty()) {
        return Ok(InputSource::Stream(bytes));
    }
    match file {
        Some(path) => Ok(InputSource::File(path)),
        None => Err(Error::NoInput),
    }
}
