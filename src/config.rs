//! Build configuration module.
//!
//! Handles loading and validating `deckmill.toml`. Configuration is
//! optional: every field has a stock default, user files are sparse and
//! override only the values they name, and unknown keys are rejected to
//! catch typos early.
//!
//! ## Config File Location
//!
//! `deckmill.toml` is read from the working directory; `--config <path>`
//! points somewhere else. A missing file means stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # base_url = "https://site.example"  # Default base-URL prefix (no default)
//!
//! [build]
//! out_root = "dist"            # Per-deck output parent directory
//! decks_dir = "decks"          # Discovery root when no decks are given
//!
//! [builder]
//! command = "slidev"           # External slide compiler executable
//! args = ["build"]             # Leading arguments before the deck path
//!
//! [manifest]
//! path = "public/slides.json"  # Slides manifest read by `links`
//! ```
//!
//! CLI flags always win over config values, which win over stock defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "deckmill.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `deckmill.toml`.
///
/// All fields have stock defaults. User config files need only specify the
/// values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    /// Default base-URL prefix used when `--base` is not passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Output and discovery paths.
    pub build: BuildConfig,
    /// External compiler invocation.
    pub builder: BuilderConfig,
    /// Slides manifest location.
    pub manifest: ManifestConfig,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            build: BuildConfig::default(),
            builder: BuilderConfig::default(),
            manifest: ManifestConfig::default(),
        }
    }
}

impl DeckConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.builder.command.trim().is_empty() {
            return Err(ConfigError::Validation(
                "builder.command must not be empty".into(),
            ));
        }
        if self.build.out_root.trim().is_empty() {
            return Err(ConfigError::Validation(
                "build.out_root must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Output and discovery paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Parent directory built decks are written under.
    pub out_root: String,
    /// Directory walked for `.md` decks when none are passed on the CLI.
    pub decks_dir: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_root: crate::task::DEFAULT_OUT_ROOT.to_string(),
            decks_dir: "decks".to_string(),
        }
    }
}

/// External compiler invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    /// Executable name or path of the slide compiler.
    pub command: String,
    /// Leading arguments inserted before the deck path.
    pub args: Vec<String>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            command: "slidev".to_string(),
            args: vec!["build".to_string()],
        }
    }
}

/// Slides manifest location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    pub path: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: crate::manifest::DEFAULT_MANIFEST_PATH.to_string(),
        }
    }
}

/// Load a config file. The file must exist and parse.
pub fn load(path: &Path) -> Result<DeckConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: DeckConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load a config file, falling back to stock defaults when it is absent.
pub fn load_or_default(path: &Path) -> Result<DeckConfig, ConfigError> {
    if path.exists() {
        load(path)
    } else {
        Ok(DeckConfig::default())
    }
}

/// A stock `deckmill.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    r#"# deckmill configuration
# All options are optional - the values below are the defaults.

# Default base-URL prefix for built decks. No stock default; when unset,
# `deckmill build` requires --base.
# base_url = "https://site.example"

[build]
# Parent directory built decks are written under (one subdirectory per deck).
out_root = "dist"
# Directory walked for .md decks when no deck files are passed on the CLI.
decks_dir = "decks"

[builder]
# External slide compiler executable.
command = "slidev"
# Leading arguments inserted before the deck path. The full invocation is:
#   <command> <args...> <deck> --out <dir> --base <url>
args = ["build"]

[manifest]
# Slides manifest read by `deckmill links`.
path = "public/slides.json"
"#
    .to_string()
}
