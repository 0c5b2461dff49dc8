//! Searcher - walks a directory tree and collects files whose names match

use std::path::Path;

use ignore::{DirEntry, Walk, WalkBuilder};

use crate::error::{Result, SearchError};

use super::config::SearchConfig;
use super::filter::{NameMatcher, is_hidden, should_skip_dir};
use super::record::MatchRecord;

/// Depth-first, single-threaded filename search.
///
/// Directories caught by the skip rule are pruned before the walker reads
/// them, so their subtrees are never visited. Errors on individual entries
/// are logged at debug level and the walk carries on with the rest.
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Search `root` for files whose base name matches `pattern`.
    ///
    /// Records come back in walk order. Callers that need a stable order
    /// should sort them (the presenter does).
    pub fn search(&self, pattern: &str, root: &Path) -> Result<Vec<MatchRecord>> {
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }
        let metadata = match std::fs::metadata(root) {
            Ok(metadata) => metadata,
            Err(err) => {
                tracing::debug!("Cannot access search root {}: {}", root.display(), err);
                return Err(SearchError::InvalidPath(root.to_path_buf()));
            }
        };
        // The skip rule covers the root too; a root without a final
        // component (`.`, `/`) has no name to check
        if metadata.is_dir()
            && root
                .file_name()
                .is_some_and(|name| should_skip_dir(&name.to_string_lossy()))
        {
            tracing::debug!("Skipping directory {}", root.display());
            return Ok(Vec::new());
        }

        let matcher = NameMatcher::new(pattern, &self.config);
        let mut results = Vec::new();

        for entry in self.build_walker(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };
            if let Some(record) = self.visit(&entry, &matcher) {
                results.push(record);
            }
        }

        tracing::debug!(
            "Search for '{}' in {} found {} files",
            pattern,
            root.display(),
            results.len()
        );
        Ok(results)
    }

    fn build_walker(&self, root: &Path) -> Walk {
        let mut builder = WalkBuilder::new(root);
        builder
            // No .gitignore/.ignore/hidden handling; the skip rule below is the only filter
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| !prune_dir(entry));

        if !self.config.recursive {
            // Root is depth 0; its children are listed but never descended
            builder.max_depth(Some(1));
        }

        builder.build()
    }

    /// Test a single non-directory entry and snapshot it if it matches.
    fn visit(&self, entry: &DirEntry, matcher: &NameMatcher) -> Option<MatchRecord> {
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            return None;
        }

        let name = entry.file_name().to_string_lossy();
        if is_hidden(&name) || !matcher.is_match(&name) {
            return None;
        }

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                tracing::debug!("Skipping {}: {}", entry.path().display(), err);
                return None;
            }
        };

        match MatchRecord::from_metadata(entry.path().to_path_buf(), name.into_owned(), &metadata)
        {
            Ok(record) => {
                tracing::trace!("Matched {}", record.path.display());
                Some(record)
            }
            Err(err) => {
                tracing::debug!("Skipping {}: {}", entry.path().display(), err);
                None
            }
        }
    }
}

/// Check if a walk entry below the root is a directory that must not be
/// descended into. The root is checked up front by `Searcher::search`.
fn prune_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return false;
    }
    let skip = should_skip_dir(&entry.file_name().to_string_lossy());
    if skip {
        tracing::debug!("Skipping directory {}", entry.path().display());
    }
    skip
}

/// Search `root` for files whose base name matches `pattern`.
///
/// Fails with [`SearchError::EmptyPattern`] or [`SearchError::InvalidPath`];
/// everything else that goes wrong during the walk only drops the affected
/// entries from the result.
pub fn search(pattern: &str, root: &Path, config: &SearchConfig) -> Result<Vec<MatchRecord>> {
    Searcher::new(*config).search(pattern, root)
}


#[cfg(test)]
mod property_tests {
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    use proptest::prelude::*;

    use super::*;
    use crate::test_utils::TestTree;

    /// Expected result set computed from the relative paths alone.
    fn expected_matches(paths: &[String], pattern: &str, config: &SearchConfig) -> BTreeSet<PathBuf> {
        let matcher = NameMatcher::new(pattern, config);
        paths
            .iter()
            .filter(|p| {
                let parts: Vec<&str> = p.split('/').collect();
                let (file, dirs) = parts.split_last().expect("non-empty path");
                dirs.iter().all(|d| !should_skip_dir(d))
                    && (config.recursive || dirs.is_empty())
                    && !is_hidden(file)
                    && matcher.is_match(file)
            })
            .map(PathBuf::from)
            .collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        /// The walk returns exactly the surviving files, whatever the tree shape
        #[test]
        fn test_search_matches_model(
            paths in prop::collection::vec(
                "((\\.?[a-c]{1,2}_d|node_modules|Library)/){0,2}\\.?[a-cA-C]{1,3}(\\.f)?",
                1..12,
            ),
            pattern in "[a-cA-C]{1,3}",
            recursive in any::<bool>(),
            exact_match in any::<bool>(),
            case_sensitive in any::<bool>(),
        ) {
            let tree = TestTree::new();
            for path in &paths {
                tree.add_file(path, "x");
            }
            let config = SearchConfig { recursive, exact_match, case_sensitive };

            let results = search(&pattern, tree.path(), &config).unwrap();
            let found: BTreeSet<PathBuf> = results
                .iter()
                .map(|r| r.path.strip_prefix(tree.path()).unwrap().to_path_buf())
                .collect();

            prop_assert_eq!(found.len(), results.len(), "no duplicates");
            prop_assert_eq!(found, expected_matches(&paths, &pattern, &config));
        }
    }
}
