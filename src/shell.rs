//! Mobile shell navigation
//!
//! The shell asks for a server address, loads it, and falls back to an error
//! screen when loading fails. These are the pure parts; the blocking loader
//! lives in the `myspend-shell` binary.

use regex::Regex;
use std::sync::LazyLock;

/// Port assumed when the user types a bare IP address
pub const DEFAULT_PORT: u16 = crate::config::DEFAULT_PORT;

static IPV4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").expect("ipv4 pattern"));

/// Turn what the user typed into a loadable URL.
///
/// Returns `None` for blank input.
pub fn normalize_address(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if IPV4_RE.is_match(input) {
        return Some(format!("http://{input}:{DEFAULT_PORT}"));
    }
    if input.starts_with("http://") || input.starts_with("https://") {
        return Some(input.to_string());
    }
    Some(format!("http://{input}"))
}

/// Which screen the shell shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShellView {
    #[default]
    Connect,
    Browsing {
        url: String,
    },
    LoadError {
        url: String,
        description: String,
    },
}

impl ShellView {
    /// Leave the connect screen for `input`. Blank input stays put.
    #[must_use]
    pub fn connect(self, input: &str) -> Self {
        if !matches!(self, Self::Connect) {
            return self;
        }
        match normalize_address(input) {
            Some(url) => Self::Browsing { url },
            None => self,
        }
    }

    /// The page in view failed to load
    #[must_use]
    pub fn load_failed(self, description: impl Into<String>) -> Self {
        match self {
            Self::Browsing { url } => Self::LoadError {
                url,
                description: description.into(),
            },
            other => other,
        }
    }

    /// Try the same address again
    #[must_use]
    pub fn retry(self) -> Self {
        match self {
            Self::LoadError { url, .. } => Self::Browsing { url },
            other => other,
        }
    }

    /// Back to the connect screen
    #[must_use]
    pub fn back(self) -> Self {
        Self::Connect
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Connect => None,
            Self::Browsing { url } | Self::LoadError { url, .. } => Some(url),
        }
    }
}
