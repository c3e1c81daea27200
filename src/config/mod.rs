//! Configuration for the viewer
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (applied by the caller)
//! 2. Environment variables
//! 3. Config file (~/.config/thoughtbook/config.toml)
//! 4. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

mod logging;
mod serialization;


pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ENV_SOURCE: &str = "THOUGHTBOOK_SOURCE";
pub const ENV_PAGE_URL: &str = "THOUGHTBOOK_PAGE_URL";
pub const ENV_THEME: &str = "THOUGHTBOOK_THEME";

const DEFAULT_SOURCE: &str = "thoughts.json";
const DEFAULT_DEBOUNCE_MS: u64 = 300;
const DEFAULT_HIGHLIGHT_SECS: u64 = 2;
const DEFAULT_EXPORT_DIR: &str = "./site";

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// Color scheme for the TUI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    /// Parse theme name from config; unknown names fall back to dark
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path or http(s) URL of the thoughts JSON
    pub source: String,

    /// Page shared alongside quotes; omitted from share links when unset
    pub page_url: Option<String>,

    pub theme: ThemeChoice,

    /// Quiet window before a typed search is applied
    pub search_debounce_ms: u64,

    /// How long a cross-reference target stays highlighted
    pub highlight_secs: u64,

    /// Default output directory for `export`
    pub export_dir: PathBuf,

    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            page_url: None,
            theme: ThemeChoice::Dark,
            search_debounce_ms: DEFAULT_DEBOUNCE_MS,
            highlight_secs: DEFAULT_HIGHLIGHT_SECS,
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every key optional
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub source: Option<String>,
    pub page_url: Option<String>,
    pub theme: Option<String>,
    pub search_debounce_ms: Option<u64>,
    pub highlight_secs: Option<u64>,
    pub export_dir: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/thoughtbook/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("thoughtbook").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A file that exists but doesn't parse is an error rather than a silent
    /// fallback to defaults.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file_config(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Cannot read config file: {}", path.display())),
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Result<Self> {
        let file = Self::load_file_config()?;
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        // Source: env > file > default
        let source = non_empty(env(ENV_SOURCE))
            .or(non_empty(file.source))
            .unwrap_or(defaults.source);

        // Page URL: env > file > unset
        let page_url = non_empty(env(ENV_PAGE_URL)).or(non_empty(file.page_url));

        // Theme: env > file > default
        let theme = non_empty(env(ENV_THEME))
            .or(file.theme)
            .map(|s| ThemeChoice::from_str(&s))
            .unwrap_or(defaults.theme);

        Self {
            source,
            page_url,
            theme,
            search_debounce_ms: file.search_debounce_ms.unwrap_or(defaults.search_debounce_ms),
            highlight_secs: file.highlight_secs.unwrap_or(defaults.highlight_secs),
            export_dir: file
                .export_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn highlight_duration(&self) -> Duration {
        Duration::from_secs(self.highlight_secs)
    }
}
