//! Process configuration from the environment
//!
//! The remote credential comes from `GOOGLE_API_KEY`, or failing that from a
//! local override file. No credential means demo mode, never an error.

use crate::llm::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::resolver::DEFAULT_MOCK_DELAY;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read key override {path}: {source}")]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Remote credential; `None` selects the demo rules
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub mock_delay: Duration,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            mock_delay: DEFAULT_MOCK_DELAY,
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let key_file = lookup("MYSPEND_KEY_FILE")
            .map(PathBuf::from)
            .or_else(|| lookup("HOME").map(|home| default_key_file(Path::new(&home))));

        let api_key = non_blank(lookup("GOOGLE_API_KEY")).or_else(|| {
            let path = key_file?;
            match read_key_override(&path) {
                Ok(key) => key,
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring unreadable key override");
                    None
                }
            }
        });

        let mock_delay = lookup("MYSPEND_MOCK_DELAY_MS")
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .map_or(defaults.mock_delay, Duration::from_millis);

        let port = lookup("MYSPEND_PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);

        Self {
            api_key,
            model: non_blank(lookup("GEMINI_MODEL")).unwrap_or(defaults.model),
            base_url: non_blank(lookup("GEMINI_BASE_URL")).unwrap_or(defaults.base_url),
            mock_delay,
            port,
        }
    }
}

/// `$HOME/.myspend/google_api_key`
pub fn default_key_file(home: &Path) -> PathBuf {
    home.join(".myspend").join("google_api_key")
}

/// Read the override file. A missing file is not an error.
pub fn read_key_override(path: &Path) -> Result<Option<String>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(non_blank(Some(content))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::KeyFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
