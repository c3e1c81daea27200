// Data loader - fetches thoughts.json once at startup
//
// The source is either a local path or an http(s) URL. Either way the result
// is the full collection with positional ids assigned. Failures are typed so
// callers can log the cause while showing the user a single fallback message.

use super::{assign_ids, RawThought, Thought};
use std::fmt;
use std::path::{Path, PathBuf};

/// Message shown in place of content when loading fails
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load thoughts. Please try again later.";

/// Where the collection comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    /// Interpret a config/CLI value: anything with an http(s) scheme is a URL
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Source::Url(trimmed.to_string())
        } else {
            Source::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Errors that can occur while loading the collection
#[derive(Debug)]
pub enum LoadError {
    /// Server answered with a non-success status
    Status { url: String, status: u16 },
    /// Network failure before a response arrived
    Transport(String),
    /// Local file could not be read
    Io { path: PathBuf, source: std::io::Error },
    /// Body was not a JSON array of thoughts
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { url, status } => write!(f, "HTTP error! status: {} ({})", status, url),
            Self::Transport(msg) => write!(f, "Request failed: {}", msg),
            Self::Io { path, source } => write!(f, "Cannot read {}: {}", path.display(), source),
            Self::Parse(e) => write!(f, "Invalid thoughts data: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Load and id-stamp the collection from any source
pub async fn load(source: &Source) -> Result<Vec<Thought>, LoadError> {
    let body = match source {
        Source::File(path) => read_file(path).await?,
        Source::Url(url) => fetch_url(url).await?,
    };

    let thoughts = parse(&body)?;
    tracing::info!("Loaded {} thoughts from {}", thoughts.len(), source);
    Ok(thoughts)
}

/// Parse a JSON body into thoughts with positional ids
pub fn parse(body: &str) -> Result<Vec<Thought>, LoadError> {
    let raw: Vec<RawThought> = serde_json::from_str(body).map_err(LoadError::Parse)?;
    Ok(assign_ids(raw))
}

async fn read_file(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

async fn fetch_url(url: &str) -> Result<String, LoadError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thoughts::ThoughtId;
    use std::io::Write;

    #[test]
    fn parse_source_kinds() {
        assert_eq!(
            Source::parse("https://example.com/thoughts.json"),
            Source::Url("https://example.com/thoughts.json".to_string())
        );
        assert_eq!(
            Source::parse("data/thoughts.json"),
            Source::File(PathBuf::from("data/thoughts.json"))
        );
    }

    #[tokio::test]
    async fn load_from_file_assigns_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"quote":"Quote 1","author":"A","date":"D","explanation":"E"}},
                {{"quote":"Quote 2","author":"B","date":"D","explanation":"E","category":"Life"}}]"#
        )
        .unwrap();

        let thoughts = load(&Source::File(file.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(thoughts.len(), 2);
        assert_eq!(thoughts[1].id, ThoughtId(1));
        assert_eq!(thoughts[1].category.as_deref(), Some("Life"));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&Source::File(dir.path().join("nope.json")))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err = parse(r#"{"quote": "not an array"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn status_error_message_names_status() {
        let err = LoadError::Status {
            url: "http://x/thoughts.json".to_string(),
            status: 404,
        };
        assert!(err.to_string().contains("404"));
    }
}
