//! CLI output formatting for the build, check, and links commands.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each deck leads
//! with its positional index and name; filesystem paths and error detail
//! are indented context lines beneath it.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! 001 intro → dist/intro/index.html
//! 002 missing — missing input
//! 003 broken — build failed
//!     slidev exited with exit status: 1: template error
//! Built 1 of 3 decks (1 missing, 1 failed)
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 Course Introduction
//!     Source: decks/intro.md
//!     Output: dist/intro/
//! 002 advanced traits (missing)
//!     Source: decks/advanced-traits.md
//! Checked 2 decks (1 missing)
//! ```
//!
//! ## Links
//!
//! ```text
//! 001 Ownership → https://site.example/ownership/index.html
//!     Theory: The Book, ch. 4 → https://doc.rust-lang.org/book/ch04.html
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::batch::{BatchReport, OutcomeKind};
use crate::manifest::SlideEntry;
use crate::task::BuildTask;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Build output
// ============================================================================

/// Format a batch report: one header line per deck, indented error detail
/// for failures, and a closing summary line.
pub fn format_batch_report(report: &BatchReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, outcome) in report.outcomes.iter().enumerate() {
        let index = format_index(i + 1);
        let name = &outcome.task.name;
        match &outcome.kind {
            OutcomeKind::Built { .. } => {
                lines.push(format!(
                    "{} {} \u{2192} {}/index.html",
                    index,
                    name,
                    outcome.task.out_dir.display()
                ));
            }
            OutcomeKind::Missing => {
                lines.push(format!("{} {} \u{2014} missing input", index, name));
            }
            OutcomeKind::Failed { error } => {
                lines.push(format!("{} {} \u{2014} build failed", index, name));
                lines.push(format!("    {}", error));
            }
        }
    }

    lines.push(format!(
        "Built {} of {} decks ({} missing, {} failed)",
        report.built(),
        report.outcomes.len(),
        report.missing(),
        report.failed()
    ));

    lines
}

/// Print a batch report to stdout.
pub fn print_batch_report(report: &BatchReport) {
    for line in format_batch_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// One deck as shown by `check`: derived task, resolved title, existence.
#[derive(Debug)]
pub struct CheckEntry {
    pub task: BuildTask,
    pub title: String,
    pub exists: bool,
}

/// Format check output: title header, then source and derived output paths.
pub fn format_check_output(entries: &[CheckEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut missing = 0;

    for (i, entry) in entries.iter().enumerate() {
        let index = format_index(i + 1);
        if entry.exists {
            lines.push(format!("{} {}", index, entry.title));
            lines.push(format!("    Source: {}", entry.task.input.display()));
            lines.push(format!("    Output: {}/", entry.task.out_dir.display()));
        } else {
            missing += 1;
            lines.push(format!("{} {} (missing)", index, entry.title));
            lines.push(format!("    Source: {}", entry.task.input.display()));
        }
    }

    lines.push(format!(
        "Checked {} decks ({} missing)",
        entries.len(),
        missing
    ));

    lines
}

/// Print check output to stdout.
pub fn print_check_output(entries: &[CheckEntry]) {
    for line in format_check_output(entries) {
        println!("{}", line);
    }
}

// ============================================================================
// Links output
// ============================================================================

/// Format manifest entries: deck link headers with indented theory links.
pub fn format_links_output(entries: &[SlideEntry]) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            entry.title,
            entry.link
        ));
        for theory in &entry.theory {
            lines.push(format!("    Theory: {} \u{2192} {}", theory.title, theory.link));
        }
    }

    lines
}

/// Print links output to stdout.
pub fn print_links_output(entries: &[SlideEntry]) {
    for line in format_links_output(entries) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
