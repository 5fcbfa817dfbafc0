//! Error types for schedule ingestion.
//!
//! Only failures that prevent obtaining the CSV text are errors. Malformed
//! rows, bad dates and short inputs are skipped during the build and
//! reported through [`crate::BuildReport`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while obtaining schedule data.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Schedule file not found.
    #[error("schedule file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the schedule file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Network Errors ===
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The request could not be completed.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
