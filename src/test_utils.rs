//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};

/// A temporary directory tree for testing.
///
/// Provides methods for creating files, directories, and symlinks.
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    ///
    /// The directory name is not hidden, so the tree root itself is never
    /// caught by the skip rule.
    pub fn new() -> Self {
        let dir = Builder::new()
            .prefix("sift-")
            .tempdir()
            .expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a tree resembling a home directory, with documents, source
    /// projects, media, hidden tool directories, and a `node_modules`.
    pub fn sample() -> Self {
        let tree = Self::new();

        tree.add_file("Documents/report-2024.pdf", "pdf content");
        tree.add_file("Documents/meeting-notes.txt", "meeting notes");
        tree.add_file("Documents/presentation slides.pptx", "presentation");
        tree.add_file("Documents/budget 2024.xlsx", "budget data");
        tree.add_file("Documents/résumé.pdf", "resume");
        tree.add_file("Documents/документ.txt", "document");
        tree.add_file("Documents/executable.sh", "#!/bin/bash");

        tree.add_file("Projects/go/main.go", "package main");
        tree.add_file("Projects/go/test.go", "package test");
        tree.add_file("Projects/python/script.py", "python code");
        tree.add_file("Projects/node/package.json", "{}");
        tree.add_file("Projects/node/node_modules/lib.js", "library");
        tree.add_file(
            "Projects/test-file-with-very-very-very-very-very-long-name.txt",
            "test",
        );

        tree.add_file("Media/vacation2024.jpg", "image");
        tree.add_file("Media/profile-pic.png", "profile");
        tree.add_file("Media/video-2024.mp4", "video");

        tree.add_file(".git/config", "git config");
        tree.add_file(".vscode/settings.json", "settings");

        tree.add_dir("Empty Directory");

        #[cfg(unix)]
        tree.add_symlink("Documents/report-2024.pdf", "Documents/link-to-report.pdf");

        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a symlink at `link` pointing to `target`, both relative to the tree root.
    #[cfg(unix)]
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        let link_path = self.dir.path().join(link);
        if let Some(parent) = link_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::os::unix::fs::symlink(self.dir.path().join(target), &link_path)
            .expect("Failed to create symlink");
        link_path
    }

    /// Populate the tree with `count` files spread over nested directories.
    ///
    /// Every tenth file lands in a `node_modules` directory so that pruning
    /// has work to do.
    pub fn populate(&self, count: usize) {
        for i in 0..count {
            let path = match i % 10 {
                0 => format!("pkg_{}/node_modules/dep_{}.js", i / 10, i),
                1..=4 => format!("src/mod_{}/file_{}.rs", i % 5, i),
                5..=7 => format!("docs/section_{}/page_{}.md", i % 3, i),
                _ => format!("file_{}.txt", i),
            };
            self.add_file(&path, "content");
        }
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
