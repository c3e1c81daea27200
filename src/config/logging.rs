//! Logging configuration: level, file output, rotation

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Log Rotation
// ─────────────────────────────────────────────────────────────────────────────

/// Log file rotation strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// Single log file
    Never,
}

impl LogRotation {
    /// Parse rotation string from config
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "daily" => Self::Daily,
            "never" => Self::Never,
            _ => Self::Daily, // Unknown values fall back to daily
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Enable JSON file logging (in addition to the TUI buffer or stderr)
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// Prefix for log file names ("thoughtbook" -> "thoughtbook.2026-01-15")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "thoughtbook".to_string(),
        }
    }
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

/// Levels `EnvFilter` accepts as a bare directive value
const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

impl LoggingConfig {
    /// Create from file config with defaults
    ///
    /// An unrecognized level falls back to the default rather than producing
    /// a filter directive that silently matches nothing.
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file
                .level
                .map(|level| level.trim().to_lowercase())
                .filter(|level| LEVELS.contains(&level.as_str()))
                .unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .map(|s| LogRotation::from_str(&s))
                .unwrap_or(defaults.file_rotation),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_section_uses_defaults() {
        let config = LoggingConfig::from_file(None);
        assert_eq!(config.level, "info");
        assert!(!config.file_enabled);
        assert_eq!(config.file_rotation, LogRotation::Daily);
        assert_eq!(config.file_prefix, "thoughtbook");
    }

    #[test]
    fn level_is_normalized_and_validated() {
        let config = LoggingConfig::from_file(Some(FileLogging {
            level: Some(" DEBUG ".to_string()),
            ..Default::default()
        }));
        assert_eq!(config.level, "debug");

        let config = LoggingConfig::from_file(Some(FileLogging {
            level: Some("chatty".to_string()),
            ..Default::default()
        }));
        assert_eq!(config.level, "info");
    }

    #[test]
    fn unknown_rotation_falls_back_to_daily() {
        let config = LoggingConfig::from_file(Some(FileLogging {
            file_enabled: Some(true),
            file_rotation: Some("weekly".to_string()),
            ..Default::default()
        }));
        assert!(config.file_enabled);
        assert_eq!(config.file_rotation, LogRotation::Daily);
        assert_eq!(LogRotation::from_str("Hourly"), LogRotation::Hourly);
    }
}
