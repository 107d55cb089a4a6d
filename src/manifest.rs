//! Slides manifest (`slides.json`) loading.
//!
//! The published site serves a JSON manifest listing each deck with its
//! public link and related theory material. This module parses that file
//! verbatim; the only contract is that a missing file or invalid JSON
//! propagates as an error to the caller.
//!
//! ## Format
//!
//! ```json
//! [
//!   {
//!     "title": "Ownership & Borrowing",
//!     "link": "https://site.example/ownership/index.html",
//!     "theory": [
//!       { "title": "The Book, ch. 4", "link": "https://doc.rust-lang.org/book/ch04-00-understanding-ownership.html" }
//!     ]
//!   }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default manifest location, relative to the working directory.
pub const DEFAULT_MANIFEST_PATH: &str = "public/slides.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Manifest not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A link to supporting theory material for one deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheoryLink {
    pub title: String,
    pub link: String,
}

/// One published deck in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideEntry {
    pub title: String,
    pub link: String,
    pub theory: Vec<TheoryLink>,
}

/// Load and parse the manifest, preserving entry order.
pub fn load(path: &Path) -> Result<Vec<SlideEntry>, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
