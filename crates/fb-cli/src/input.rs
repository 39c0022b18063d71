//! Log file acquisition.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures while acquiring the input log. Both variants are fatal.
#[derive(Debug, Error)]
pub enum InputError {
    /// The path does not resolve to a readable file.
    #[error("no such file {}", path.display())]
    NotFound { path: PathBuf },

    /// Any other I/O failure while reading.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads the whole log into memory as lines.
///
/// The full log is needed up front: the last observed timestamp fills
/// missing session end times, so streaming would not help.
pub fn read_log(path: &Path) -> Result<Vec<String>, InputError> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            InputError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            InputError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    Ok(contents.lines().map(String::from).collect())
}
