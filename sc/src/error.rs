//! Document loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a document from being validated at all
///
/// These are distinct from validation findings, which always end up in a
/// [`ValidationReport`](crate::ValidationReport).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: expected a list of collections, found {found}", path.display())]
    NotAList { path: PathBuf, found: &'static str },
}

impl LoadError {
    /// Path of the document that failed to load
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Read { path, .. } => path,
            LoadError::Parse { path, .. } => path,
            LoadError::NotAList { path, .. } => path,
        }
    }

    /// Check if the document exists but is not well-formed
    pub fn is_malformed(&self) -> bool {
        match self {
            LoadError::Read { .. } => false,
            LoadError::Parse { .. } => true,
            LoadError::NotAList { .. } => true,
        }
    }
}
