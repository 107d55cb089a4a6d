//! Deck discovery and title resolution.
//!
//! When the CLI is invoked without explicit deck arguments, the decks
//! directory is walked for markdown files. Discovery is sorted by path so a
//! directory of decks always builds in the same order.
//!
//! ## Title Resolution
//!
//! Slide decks carry their display title either in a leading `---`
//! frontmatter block (`title: Ownership & Borrowing`) or as the first
//! `# ` heading of the deck body. Resolution order, first hit wins:
//!
//! 1. `title:` key inside the leading frontmatter block
//! 2. first `# ` heading
//! 3. file stem with dashes converted to spaces
//!
//! Titles are display-only: the deck *name* used for output directories and
//! URLs always comes from the file stem (see [`crate::task`]).

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decks directory not found: {0}")]
    DirNotFound(PathBuf),
}

/// Discover deck files under `dir`: markdown files only, sorted by path.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, DeckError> {
    if !dir.is_dir() {
        return Err(DeckError::DirNotFound(dir.to_path_buf()));
    }

    let mut decks: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .map(|e| e.eq_ignore_ascii_case("md"))
                .unwrap_or(false)
        })
        .collect();

    decks.sort();
    Ok(decks)
}

/// Resolve the display title for a deck file.
///
/// Unreadable files fall back to the stem-derived title so display never
/// fails; existence is the batch's concern, not the title's.
pub fn resolve_title(path: &Path) -> String {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| title_from_content(&content))
        .unwrap_or_else(|| fallback_title(path))
}

/// Extract a title from deck content: frontmatter `title:` first, then the
/// first `# ` heading.
pub fn title_from_content(content: &str) -> Option<String> {
    frontmatter_title(content).or_else(|| {
        content
            .lines()
            .find(|line| line.starts_with("# "))
            .map(|line| line.trim_start_matches("# ").trim().to_string())
    })
}

/// Stem-derived fallback title: dashes become spaces.
fn fallback_title(path: &Path) -> String {
    crate::task::deck_name(path).replace('-', " ")
}

/// Look for a `title:` key inside a leading `---` frontmatter block.
fn frontmatter_title(content: &str) -> Option<String> {
    let mut lines = content.lines();
    if lines.next().map(str::trim) != Some("---") {
        return None;
    }

    for line in lines {
        if line.trim() == "---" {
            return None;
        }
        if let Some(value) = line.strip_prefix("title:") {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}
