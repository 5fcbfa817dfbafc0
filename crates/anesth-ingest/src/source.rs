//! Where schedule CSV text comes from: a local file or a published export URL.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::blocking::Client;
use reqwest::header::{CACHE_CONTROL, USER_AGENT};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Identification sent with every request and shown in diagnostics.
pub const CLIENT_ID: &str = concat!("anesth-finder/", env!("CARGO_PKG_VERSION"));

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameter appended to defeat intermediate caches.
const CACHE_BUST_PARAM: &str = "_ts";

/// Location of the schedule CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleSource {
    File(PathBuf),
    Url(String),
}

impl ScheduleSource {
    /// `http://` and `https://` locations are URLs, anything else a path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl FromStr for ScheduleSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ScheduleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Produces the raw CSV text for a source.
pub trait ScheduleReader {
    fn read_text(&self, source: &ScheduleSource) -> Result<String>;
}

/// Options for [`ScheduleFetcher`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Append a timestamp query parameter to URLs.
    pub cache_bust: bool,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            cache_bust: true,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Reads schedule text from files and over HTTP. One attempt, no retry.
pub struct ScheduleFetcher {
    client: Client,
    options: FetchOptions,
}

impl ScheduleFetcher {
    pub fn new(options: FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(IngestError::HttpClient)?;
        Ok(Self { client, options })
    }

    fn fetch_url(&self, url: &str) -> Result<String> {
        let request_url = if self.options.cache_bust {
            cache_busted_url(url, unix_millis())
        } else {
            url.to_string()
        };
        debug!(url = %request_url, "fetching schedule");

        let response = self
            .client
            .get(&request_url)
            .header(USER_AGENT, CLIENT_ID)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .map_err(|source| IngestError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().map_err(|source| IngestError::Network {
            url: url.to_string(),
            source,
        })?;
        info!(url, bytes = text.len(), "schedule downloaded");
        Ok(text)
    }
}

impl ScheduleReader for ScheduleFetcher {
    fn read_text(&self, source: &ScheduleSource) -> Result<String> {
        match source {
            ScheduleSource::File(path) => read_file(path),
            ScheduleSource::Url(url) => self.fetch_url(url),
        }
    }
}

/// Reads a local schedule file; invalid UTF-8 is replaced, not rejected.
pub fn read_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "schedule file read");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Appends `_ts=<millis>` before any fragment, respecting an existing query.
pub fn cache_busted_url(url: &str, millis: u128) -> String {
    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };
    let separator = if base.contains('?') { '&' } else { '?' };
    let mut out = format!("{base}{separator}{CACHE_BUST_PARAM}={millis}");
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            ScheduleSource::parse("https://docs.example.org/export?format=csv"),
            ScheduleSource::Url("https://docs.example.org/export?format=csv".to_string())
        );
        assert_eq!(
            ScheduleSource::parse(" HTTP://host/data.csv "),
            ScheduleSource::Url("HTTP://host/data.csv".to_string())
        );
        assert_eq!(
            ScheduleSource::parse("data.csv"),
            ScheduleSource::File(PathBuf::from("data.csv"))
        );
        assert!(!ScheduleSource::parse("./https.csv").is_remote());
    }

    #[test]
    fn test_cache_busted_url() {
        assert_eq!(
            cache_busted_url("https://host/data.csv", 42),
            "https://host/data.csv?_ts=42"
        );
        assert_eq!(
            cache_busted_url("https://host/export?format=csv&gid=0", 42),
            "https://host/export?format=csv&gid=0&_ts=42"
        );
        assert_eq!(
            cache_busted_url("https://host/export?format=csv#gid=0", 7),
            "https://host/export?format=csv&_ts=7#gid=0"
        );
    }

    #[test]
    fn test_client_id_names_crate_version() {
        assert!(CLIENT_ID.starts_with("anesth-finder/"));
    }
}
