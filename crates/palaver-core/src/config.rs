//! Configuration types for palaver.
//!
//! [`Config::load`] reads `~/.config/palaver/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] layers
//! an explicit file instead. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
empty_query  = "none"
follow_links = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/palaver/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// What an empty or whitespace-only query returns.
    #[serde(default)]
    pub empty_query: EmptyQuery,
    /// Surface nodes that link to a node whose name matches.
    #[serde(default = "default_follow_links")]
    pub follow_links: bool,
}

fn default_follow_links() -> bool { true }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            empty_query: EmptyQuery::default(),
            follow_links: default_follow_links(),
        }
    }
}

/// Result policy for a query with no visible characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum EmptyQuery {
    #[default]
    #[serde(rename = "none")]
    MatchNone,
    #[serde(rename = "all")]
    MatchAll,
}

impl FromStr for EmptyQuery {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(EmptyQuery::MatchNone),
            "all" => Ok(EmptyQuery::MatchAll),
            other => Err(Error::InvalidSetting {
                key: "search.empty_query".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl Config {
    /// Load from `~/.config/palaver/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&path, false)
    }

    /// Load an explicit config file, layered on top of the built-in defaults.
    /// The file must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::layered(path.as_ref(), true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn layered(path: &Path, required: bool) -> Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .build()?
            .try_deserialize()?;
        tracing::debug!(path = %path.display(), ?cfg, "config: loaded");
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("palaver")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
