//! Configuration file loading for the terminal front-end.
//!
//! Settings come from a TOML file (`chess-play.toml` by default). Every
//! field has a default, so a missing file or a partial one is fine.

use chess_engine::{RuleSet, ShuffledHeavy, StandardChess};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Starting layout of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// The usual chess starting position.
    #[default]
    Standard,
    /// Kings at home, heavy pieces scattered, no pawns.
    Shuffled,
}

impl Layout {
    /// Builds the rule set for this layout.
    ///
    /// Shuffled layouts are reproducible when a seed is given.
    pub fn rules(self, seed: Option<u64>) -> Box<dyn RuleSet> {
        match self {
            Layout::Standard => Box::new(StandardChess),
            Layout::Shuffled => match seed {
                Some(seed) => Box::new(ShuffledHeavy::seeded(seed)),
                None => Box::new(ShuffledHeavy::from_entropy()),
            },
        }
    }
}

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayConfig {
    /// Layout to start from. Defaults to `standard`.
    #[serde(default)]
    pub layout: Layout,
    /// Seed for shuffled layouts and autoplay. Unset means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Draw pieces as letters instead of Unicode glyphs.
    #[serde(default)]
    pub ascii: bool,
    /// List the destinations after a selection.
    #[serde(default = "default_show_moves")]
    pub show_moves: bool,
    /// Log filter used when `RUST_LOG` is not set. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_show_moves() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            layout: Layout::default(),
            seed: None,
            ascii: false,
            show_moves: default_show_moves(),
            log_level: default_log_level(),
        }
    }
}

impl PlayConfig {
    /// Loads the configuration from `path`.
    ///
    /// A file that does not exist yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
