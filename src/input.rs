//! Input resolution: a single file, a directory tree, or standard input.

use crate::error::{Error, Result};
use crate::model::SourceText;
use glob::Pattern;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Origin label used for standard input.
pub const STDIN_ORIGIN: &str = "<stdin>";

/// Where a run takes its sources from.
#[derive(Debug)]
pub enum InputSource {
    /// Recursive scan of a directory.
    Directory(PathBuf),
    /// One named source file.
    File(PathBuf),
    /// Bytes already read from standard input.
    Stream(Vec<u8>),
}

/// A single unit of work, read on demand.
#[derive(Debug)]
pub enum Input {
    File(PathBuf),
    Stream(Vec<u8>),
}

impl Input {
    pub fn origin(&self) -> String {
        match self {
            Input::File(path) => path.display().to_string(),
            Input::Stream(_) => STDIN_ORIGIN.to_string(),
        }
    }

    pub fn read(self) -> Result<SourceText> {
        match self {
            Input::File(path) => {
                let origin = path.display().to_string();
                let bytes = fs::read(&path).map_err(|source| Error::Read {
                    origin: origin.clone(),
                    source,
                })?;
                Ok(SourceText { origin, bytes })
            }
            Input::Stream(bytes) => Ok(SourceText {
                origin: STDIN_ORIGIN.to_string(),
                bytes,
            }),
        }
    }
}

/// Directory scan filters.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File name suffix a source file must end with.
    pub extension: String,
    /// Paths matching any of these are skipped.
    pub exclude: Vec<Pattern>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: ".go".to_string(),
            exclude: Vec::new(),
        }
    }
}

/// Expand an input source into the ordered list of inputs to process.
pub fn resolve(source: InputSource, options: &ScanOptions) -> Result<Vec<Input>> {
    match source {
        InputSource::Directory(root) => Ok(scan_directory(&root, options)?
            .into_iter()
            .map(Input::File)
            .collect()),
        InputSource::File(path) => Ok(vec![Input::File(path)]),
        InputSource::Stream(bytes) => Ok(vec![Input::Stream(bytes)]),
    }
}

/// Recursively collect source files under `root`, sorted by file name at
/// each level. Any walk error aborts the scan.
pub fn scan_directory(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| Error::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        if !entry
            .file_name()
            .to_string_lossy()
            .ends_with(options.extension.as_str())
        {
            continue;
        }
        let path = entry.into_path();
        if is_excluded(&path, root, &options.exclude) {
            debug!(path = %path.display(), "excluded");
            continue;
        }
        files.push(path);
    }
    Ok(files)
}

// Patterns are tried against the path relative to the scan root and against
// the path as walked.
fn is_excluded(path: &Path, root: &Path, exclude: &[Pattern]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    exclude
        .iter()
        .any(|p| p.matches_path(relative) || p.matches_path(path))
}

/// Read all of standard input.
pub fn read_stdin() -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|source| Error::Read {
            origin: STDIN_ORIGIN.to_string(),
            source,
        })?;
    Ok(bytes)
}
