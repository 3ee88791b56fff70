//! Blocking HTTP fetch of the source document

use super::DocumentFetcher;
use olympos_core::RawDocument;
use std::time::Duration;
use thiserror::Error;

/// Failures of the fetch collaborator. None of them is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, timeout or malformed URL
    #[error("request to {url} failed: {source}")]
    Request {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{url} returned HTTP status {status}")]
    Status {
        /// Requested URL
        url: String,
        /// Status code received
        status: u16,
    },

    /// The response body could not be read or decoded
    #[error("failed to read response body from {url}: {source}")]
    Body {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client for plain-text documents.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the given request timeout and User-Agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }
}

impl DocumentFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;
        log::info!("fetched {} bytes from {url}", text.len());

        Ok(RawDocument::new(text))
    }
}
