//! Configuration for the preview app
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/composeful/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! CLI flags are applied on top of the loaded config by `main`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;
mod transitions;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};
pub use transitions::{FileTransitions, TransitionConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the theme name
pub const ENV_THEME: &str = "COMPOSEFUL_THEME";

/// Environment variable overriding the loading delay (milliseconds)
pub const ENV_DELAY_MS: &str = "COMPOSEFUL_DELAY_MS";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "auto", "dracula", "nord", "gruvbox", "monokai"
    pub theme: String,

    /// Name shown on the text button ("Hello {greeting}!" in the log)
    pub greeting: String,

    /// How long a click keeps its button loading
    pub loading_delay_ms: u64,

    /// Redraw / animation tick
    pub tick_ms: u64,

    /// Overlay enter/exit effects
    pub transitions: TransitionConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dracula".to_string(),
            greeting: "Android".to_string(),
            loading_delay_ms: 3000,
            tick_ms: 100,
            transitions: TransitionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub greeting: Option<String>,
    pub loading_delay_ms: Option<u64>,
    pub tick_ms: Option<u64>,

    /// Optional [transitions] section
    pub transitions: Option<FileTransitions>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/composeful/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("composeful").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Config is optional, so a failed template write is not fatal
        if let Err(e) = Self::write_default(&path) {
            tracing::debug!("Could not write config template: {e:#}");
        }
    }

    /// Write the default config to `path`, replacing whatever is there
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, Self::default().to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Read and parse the config file
    ///
    /// A missing file is not an error. A file that exists but cannot be read
    /// or parsed is: a broken config should fail fast rather than silently
    /// fall back to defaults.
    fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Cannot read config file {}", path.display())),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with environment lookups
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env(ENV_THEME).or(file.theme).unwrap_or(defaults.theme);

        // Greeting: file > default
        let greeting = file.greeting.unwrap_or(defaults.greeting);

        // Delay: env > file > default (unparseable env values are ignored)
        let loading_delay_ms = env(ENV_DELAY_MS)
            .and_then(|v| v.parse().ok())
            .or(file.loading_delay_ms)
            .unwrap_or(defaults.loading_delay_ms);

        // A zero tick would spin the event loop
        let tick_ms = file.tick_ms.unwrap_or(defaults.tick_ms).max(1);

        Self {
            theme,
            greeting,
            loading_delay_ms,
            tick_ms,
            transitions: TransitionConfig::from_file(file.transitions),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
