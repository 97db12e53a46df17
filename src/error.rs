//! Error types for export runs

use std::time::Duration;
use thiserror::Error;

/// Result alias used by the fetch and export layers
pub type Result<T> = std::result::Result<T, ExportError>;

/// Fatal conditions that abort an export run.
///
/// Running out of pages is not represented here: the fetcher reports it as
/// `Ok(None)` and the exporter treats it as normal termination.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Parameters rejected before any network activity
    #[error("invalid parameters: {0}")]
    Validation(String),

    /// Connection or transport failure
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request did not complete within the configured timeout
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    /// Response body was not a valid search response
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The first page carried no hits, so no header can be derived
    #[error("query returned no results")]
    NoResults,

    /// Writing CSV output failed
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Classify a reqwest failure for the given URL
    pub fn from_request(url: &str, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                timeout,
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                source: err,
            }
        }
    }
}
