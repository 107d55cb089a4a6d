//! Shared test utilities for the deckmill test suite.
//!
//! Provides deck-file fixtures and outcome extractors used by the batch,
//! deck, and output tests.

use std::path::{Path, PathBuf};

use crate::batch::{BatchReport, OutcomeKind};

/// Write a deck file under `dir`, creating parent directories, and return
/// its path.
pub fn write_deck(dir: &Path, rel: &str, content: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

/// Outcome kinds as short labels, in report order.
///
/// Keeps order/count assertions readable:
///
/// ```rust
/// assert_eq!(outcome_labels(&report), vec!["built", "missing", "failed"]);
/// ```
pub fn outcome_labels(report: &BatchReport) -> Vec<&'static str> {
    report
        .outcomes
        .iter()
        .map(|o| match o.kind {
            OutcomeKind::Built { .. } => "built",
            OutcomeKind::Missing => "missing",
            OutcomeKind::Failed { .. } => "failed",
        })
        .collect()
}
