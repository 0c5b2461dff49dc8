//! Sift - find files by name and list them in a readable table

pub mod error;
pub mod output;
pub mod search;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, SearchError};
pub use output::{OutputConfig, ResultPresenter, format_size, truncate};
pub use search::{MatchRecord, SearchConfig, Searcher, search};
