// src/error.rs
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a report scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Malformed record on line {line}: hit count '{field}' is not an integer")]
    MalformedRecord {
        line: usize,
        field: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Failed to read coverage file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
