//! Build-task derivation.
//!
//! Every deck passed to a batch resolves to exactly one [`BuildTask`]: the
//! input path, the deck name (file stem), the per-deck output directory, and
//! the public base URL injected into the build so internal links resolve
//! correctly. Derivation is pure string/path manipulation — no filesystem
//! access — so re-running with the same inputs always yields the same tasks.
//!
//! ## Derivation Rules
//!
//! For input `decks/intro.md`, prefix `https://site.example`, and the default
//! output root:
//!
//! ```text
//! name     = "intro"                                  (stem, extension stripped)
//! out_dir  = "dist/intro"                             (<out_root>/<name>)
//! base_url = "https://site.example/intro/index.html"  (<prefix>/<name>/index.html)
//! ```
//!
//! The prefix is concatenated as given — no trailing-slash normalization —
//! so the URL handed to the external compiler matches the caller's input
//! exactly.

use std::path::{Path, PathBuf};

/// Default output parent directory for built decks.
pub const DEFAULT_OUT_ROOT: &str = "dist";

/// Everything the external compiler needs to build one deck.
///
/// Transient: a task exists for the duration of one build invocation and is
/// discarded after its outcome is observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTask {
    /// Path to the deck source file, as given by the caller.
    pub input: PathBuf,
    /// Deck name: input file stem with the extension stripped.
    pub name: String,
    /// Directory the external tool writes the built deck into.
    pub out_dir: PathBuf,
    /// Public URL prefix for the built deck's assets.
    pub base_url: String,
}

/// Derive the build task for one deck.
pub fn derive_task(input: &Path, base_prefix: &str, out_root: &Path) -> BuildTask {
    let name = deck_name(input);
    let out_dir = out_root.join(&name);
    let base_url = format!("{base_prefix}/{name}/index.html");
    BuildTask {
        input: input.to_path_buf(),
        name,
        out_dir,
        base_url,
    }
}

/// Derive tasks for a whole batch, preserving input order.
pub fn derive_tasks(inputs: &[PathBuf], base_prefix: &str, out_root: &Path) -> Vec<BuildTask> {
    inputs
        .iter()
        .map(|input| derive_task(input, base_prefix, out_root))
        .collect()
}

/// Deck name for an input path: the file stem, falling back to the full
/// file name when there is no stem to strip.
pub fn deck_name(input: &Path) -> String {
    input
        .file_stem()
        .or_else(|| input.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
