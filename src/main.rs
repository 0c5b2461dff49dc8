//! CLI entry point for sift

use std::io::{self, IsTerminal};
use std::path::{Component, Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use sift::{OutputConfig, ResultPresenter, SearchConfig, search};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(about = "Find files by name and list them in a readable table")]
#[command(
    long_about = "Find files whose names contain PATTERN under PATH (default: current directory).\n\n\
    Search is recursive and case-sensitive by default. Hidden files and directories, \
    node_modules, Library, System and Applications are never searched."
)]
#[command(version)]
struct Args {
    /// Text to look for in file names
    pattern: String,

    /// Directory to search
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Only search the top-level directory (by default search is recursive)
    #[arg(short = 'n', long = "no-recursive")]
    no_recursive: bool,

    /// Match the whole file name (by default matches substrings)
    #[arg(short = 'e', long = "exact")]
    exact: bool,

    /// Case insensitive search (by default search is case sensitive)
    #[arg(short = 'i', long = "ignore-case")]
    ignore_case: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            recursive: !self.no_recursive,
            exact_match: self.exact,
            case_sensitive: !self.ignore_case,
        }
    }
}

/// Lexically clean an absolute path: drop `.` components and resolve `..`
/// against the preceding component, without touching the filesystem.
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if matches!(cleaned.components().next_back(), Some(Component::Normal(_))) {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

/// Log to stderr so diagnostics never mix with the results table.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let args = Args::parse();

    let root = match std::path::absolute(&args.path) {
        Ok(root) => clean_path(&root),
        Err(e) => {
            eprintln!("sift: error resolving path: {}", e);
            process::exit(1);
        }
    };

    // Other access failures are reported by the search itself
    if std::fs::metadata(&root).is_err_and(|e| e.kind() == io::ErrorKind::NotFound) {
        eprintln!("sift: directory does not exist: {}", root.display());
        process::exit(1);
    }

    println!("Searching for '{}' in {}...", args.pattern, root.display());

    let results = match search(&args.pattern, &root, &args.search_config()) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("sift: error searching files: {}", e);
            process::exit(1);
        }
    };

    let presenter = ResultPresenter::new(OutputConfig {
        use_color: should_use_color(args.color),
    });
    if let Err(e) = presenter.print(results) {
        eprintln!("sift: error writing output: {}", e);
        process::exit(1);
    }
}
