//! Match records produced by the search walk

use std::fs::Metadata;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Timestamp layout used for `MatchRecord::modified`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A snapshot of one matching file, taken when the walk visited it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Full path to the file
    pub path: PathBuf,
    /// Final component of `path`
    pub name: String,
    /// Size in bytes
    pub size: i64,
    /// Local modification time, formatted with [`TIMESTAMP_FORMAT`]
    pub modified: String,
}

impl MatchRecord {
    /// Build a record from a visited entry's metadata.
    ///
    /// Fails only if the platform cannot report a modification time.
    pub fn from_metadata(path: PathBuf, name: String, metadata: &Metadata) -> io::Result<Self> {
        let modified = format_timestamp(metadata.modified()?);
        Ok(Self {
            path,
            name,
            size: i64::try_from(metadata.len()).unwrap_or(i64::MAX),
            modified,
        })
    }
}

/// Format a system time in local time as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
