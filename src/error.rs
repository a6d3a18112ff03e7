//! Error taxonomy for a go2md run.
//!
//! Per-file errors (read, format, parse) are logged and the file is skipped.
//! Everything else aborts the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to normalize {origin}: {message}")]
    Format { origin: String, message: String },

    #[error("failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("invalid exclude pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No input provided!")]
    NoInput,
}

impl Error {
    /// Whether the error ends the whole run rather than a single file.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Error::Read { .. } | Error::Format { .. } | Error::Parse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_file_errors_are_recoverable() {
        let err = Error::Parse {
            origin: "a.go".into(),
            message: "syntax error at 1:1".into(),
        };
        assert!(!err.is_fatal());
        let err = Error::Format {
            origin: "a.go".into(),
            message: "invalid UTF-8".into(),
        };
        assert!(!err.is_fatal());
    }

    #[test]
    fn run_level_errors_are_fatal() {
        assert!(Error::NoInput.is_fatal());
        let err = Error::Output {
            path: PathBuf::from("/nope/out.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_fatal());
    }

    #[test]
    fn no_input_message() {
        assert_eq!(Error::NoInput.to_string(), "No input provided!");
    }
}
