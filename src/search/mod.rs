//! Filename search over a directory tree
//!
//! `search` walks the tree depth-first from a root, prunes skipped
//! directories, and tests every remaining file name against the pattern.
//! The result is an unordered `Vec<MatchRecord>`.

mod config;
mod filter;
mod record;
mod walker;

pub use config::SearchConfig;
pub use filter::{NameMatcher, SKIPPED_DIRS, is_hidden, should_skip_dir};
pub use record::{MatchRecord, TIMESTAMP_FORMAT, format_timestamp};
pub use walker::{Searcher, search};
