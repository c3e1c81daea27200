//! Config serialization to TOML
//!
//! Single source of truth for the config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let page_url = match &self.page_url {
            Some(url) => format!("page_url = {}", toml_string(url)),
            None => "# page_url = \"https://example.com/thoughts/\"".to_string(),
        };

        format!(
            r#"# thoughtbook configuration

# Thoughts JSON: a file path or an http(s) URL
source = {source}

# Page shared alongside quotes (left out of share links when unset)
{page_url}

# Theme: dark, light
theme = "{theme}"

# Milliseconds of typing quiet before a search is applied
search_debounce_ms = {debounce}

# Seconds a cross-reference target stays highlighted
highlight_secs = {highlight}

# Default output directory for `thoughtbook export`
export_dir = {export_dir}

[logging]
# trace, debug, info, warn, error (RUST_LOG overrides)
level = "{level}"
# JSON log files in addition to the in-app status line
file_enabled = {file_enabled}
file_dir = {file_dir}
file_prefix = {file_prefix}
# hourly, daily, never
file_rotation = "{rotation}"
"#,
            source = toml_string(&self.source),
            page_url = page_url,
            theme = self.theme.as_str(),
            debounce = self.search_debounce_ms,
            highlight = self.highlight_secs,
            export_dir = toml_string(&self.export_dir.display().to_string()),
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            file_prefix = toml_string(&self.logging.file_prefix),
            rotation = self.logging.file_rotation.as_str(),
        )
    }

    /// Write the config to its standard path, creating the directory
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }
}

/// Quote a value as a TOML basic string
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
