//! Table formatter for search results
//!
//! Renders the collected matches as a fixed-width table: a summary line,
//! a header row, and one row per file sorted by name.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::search::MatchRecord;

use super::config::OutputConfig;
use super::utils::{format_size, truncate};

const NAME_WIDTH: usize = 50;
const SIZE_WIDTH: usize = 20;
const MODIFIED_WIDTH: usize = 15;
/// Leaves a few columns of slack inside `NAME_WIDTH` after truncation.
const NAME_MAX_LEN: usize = 47;
const RULE_WIDTH: usize = 100;

/// Presenter for a completed set of search results.
pub struct ResultPresenter {
    config: OutputConfig,
}

impl ResultPresenter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the results as plain text, without colors.
    pub fn format(&self, results: Vec<MatchRecord>) -> io::Result<String> {
        let mut out = NoColor::new(Vec::new());
        write_results(&mut out, results)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }

    /// Print the results to stdout, colored if enabled.
    pub fn print(&self, results: Vec<MatchRecord>) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        write_results(&mut stdout, results)
    }
}

/// Sort results by name, breaking ties by path so output is reproducible.
pub fn sort_results(results: &mut [MatchRecord]) {
    results.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
}

/// Sum of all record sizes.
///
/// Plain 64-bit arithmetic: an aggregate past `i64::MAX` wraps rather than
/// saturating or failing.
pub fn total_size(results: &[MatchRecord]) -> i64 {
    results.iter().fold(0i64, |acc, r| acc.wrapping_add(r.size))
}

/// Write the full report for `results` to `out`.
pub fn write_results<W: WriteColor>(out: &mut W, mut results: Vec<MatchRecord>) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out)?;
        return write_colored_line(out, Color::Yellow, "No files found");
    }

    sort_results(&mut results);
    let total = total_size(&results);

    writeln!(out)?;
    write_colored_line(
        out,
        Color::Green,
        &format!(
            "Found {} files (Total size: {})",
            results.len(),
            format_size(total)
        ),
    )?;
    write_rule(out)?;

    write_colored_line(
        out,
        Color::Blue,
        &format!(
            "{:<name_w$} {:<size_w$} {:<mod_w$} {}",
            "NAME",
            "SIZE",
            "MODIFIED",
            "PATH",
            name_w = NAME_WIDTH,
            size_w = SIZE_WIDTH,
            mod_w = MODIFIED_WIDTH,
        ),
    )?;
    write_rule(out)?;

    for record in &results {
        writeln!(
            out,
            "{:<name_w$} {:<size_w$} {:<mod_w$} {}",
            truncate(&record.name, NAME_MAX_LEN),
            format_size(record.size),
            record.modified,
            record.path.display(),
            name_w = NAME_WIDTH,
            size_w = SIZE_WIDTH,
            mod_w = MODIFIED_WIDTH,
        )?;
    }
    write_rule(out)
}

fn write_rule<W: WriteColor>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

fn write_colored_line<W: WriteColor>(out: &mut W, color: Color, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(out, "{}", text)?;
    out.reset()?;
    writeln!(out)
}
