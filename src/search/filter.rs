//! Skip rules and filename matching for the search walk

use std::borrow::Cow;

use super::config::SearchConfig;

/// Directory names that are never descended into, regardless of config.
///
/// Matched case-sensitively against the exact base name.
pub const SKIPPED_DIRS: &[&str] = &["node_modules", "Library", "System", "Applications"];

/// Check if a name follows the hidden-entry convention (leading dot).
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Check if a directory with this base name should be excluded along with
/// its whole subtree.
pub fn should_skip_dir(name: &str) -> bool {
    is_hidden(name) || SKIPPED_DIRS.contains(&name)
}

/// Filename matcher built once per search from the pattern and config.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    pattern: String,
    exact_match: bool,
    case_sensitive: bool,
}

impl NameMatcher {
    pub fn new(pattern: &str, config: &SearchConfig) -> Self {
        let pattern = if config.case_sensitive {
            pattern.to_string()
        } else {
            pattern.to_lowercase()
        };
        Self {
            pattern,
            exact_match: config.exact_match,
            case_sensitive: config.case_sensitive,
        }
    }

    /// Check if a base filename matches.
    pub fn is_match(&self, name: &str) -> bool {
        let name: Cow<'_, str> = if self.case_sensitive {
            Cow::Borrowed(name)
        } else {
            // Full Unicode lowercase mapping, not just ASCII
            Cow::Owned(name.to_lowercase())
        };

        if self.exact_match {
            name == self.pattern.as_str()
        } else {
            name.contains(self.pattern.as_str())
        }
    }
}
