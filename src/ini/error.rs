//! Error types for loading documents
//!
//! Parsing itself never fails: malformed lines are skipped. The only failures are getting the
//! bytes in the first place.

use std::path::PathBuf;
use thiserror::Error;

/// Error that can occur when loading a document
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stream could not be read
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
