//! Output sink: a named file or standard output.

use crate::error::{Error, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Write the rendered document.
///
/// With a destination the file is created or overwritten and a confirmation
/// line goes to standard output; otherwise the document itself is printed.
pub fn write(text: &str, destination: Option<&Path>) -> Result<()> {
    match destination {
        Some(path) => {
            write_file(text, path)?;
            println!("Documentation saved to {}!", path.display());
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| Error::Output {
                    path: "<stdout>".into(),
                    source,
                })
        }
    }
}

pub fn write_file(text: &str, path: &Path) -> Result<()> {
    fs::write(path, text).map_err(|source| Error::Output {
        path: path.to_path_buf(),
        source,
    })
}
