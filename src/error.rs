//! Error type for the search engine.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`crate::search::search`].
///
/// Only argument validation fails a search. Problems with individual
/// entries during the walk are logged and skipped, never surfaced here.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The pattern was empty. Raised before touching the filesystem.
    #[error("search pattern cannot be empty")]
    EmptyPattern,

    /// The root did not exist or could not be accessed.
    #[error("invalid search path: {}", .0.display())]
    InvalidPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, SearchError>;
