//! External slide-compiler invocation.
//!
//! The [`DeckBackend`] trait is the seam between the batch orchestrator and
//! the external tool. The production implementation is [`SlidevBackend`],
//! which shells out to the configured compiler command; tests swap in a
//! recording mock so orchestration logic can be exercised without the tool
//! installed.
//!
//! ## Invocation Shape
//!
//! For a task with input `decks/intro.md`, output `dist/intro`, and base URL
//! `https://site.example/intro/index.html`, the default configuration runs:
//!
//! ```text
//! slidev build decks/intro.md --out dist/intro --base https://site.example/intro/index.html
//! ```
//!
//! The tool's stdout is the build result for that deck. A non-zero exit maps
//! to [`BackendError::CommandFailed`] carrying the exit status and stderr.

use crate::task::BuildTask;
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    /// The command could not be spawned (not installed, not executable).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The command ran but exited non-zero.
    #[error("Build command failed: {0}")]
    CommandFailed(String),
    /// The command's stdout was not valid UTF-8.
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Trait for deck build backends.
///
/// One operation: build a single deck described by a [`BuildTask`] and
/// return the tool's textual output. Implementations must be `Sync` so a
/// backend reference can be shared freely.
pub trait DeckBackend: Sync {
    /// Build one deck, returning the tool's stdout.
    fn build(&self, task: &BuildTask) -> Result<String, BackendError>;
}

/// Production backend: shells out to the configured slide compiler.
///
/// `command` is the executable name or path; `args` are leading arguments
/// inserted before the deck path (the stock config uses `["build"]`, giving
/// `slidev build <deck> ...`).
pub struct SlidevBackend {
    command: String,
    args: Vec<String>,
}

impl SlidevBackend {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

impl DeckBackend for SlidevBackend {
    fn build(&self, task: &BuildTask) -> Result<String, BackendError> {
        let output = Command::new(&self.command)
            .args(&self.args)
            .arg(&task.input)
            .arg("--out")
            .arg(&task.out_dir)
            .arg("--base")
            .arg(&task.base_url)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BackendError::CommandFailed(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
