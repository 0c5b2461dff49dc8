//! Configuration types for the search engine

/// Configuration for a single search.
///
/// All fields are positive-sense. The CLI is responsible for mapping its
/// `--no-recursive` and `--ignore-case` flags onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Descend into subdirectories below the root.
    pub recursive: bool,
    /// Require the whole filename to equal the pattern instead of containing it.
    pub exact_match: bool,
    /// Compare names verbatim. When false both sides are lower-cased first.
    pub case_sensitive: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            exact_match: false,
            case_sensitive: true,
        }
    }
}
