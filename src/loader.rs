//! Flight document loader.
//!
//! Fetches the JSON array once, either over HTTP(S) or from a local file.
//! Parsing is split out into `parse_flights` so it can be tested without I/O.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::LoadError;
use crate::flight::FlightRecord;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// SOURCE
// =============================================================================

/// Where the flight document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` locations are URLs, anything else is a path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_owned())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// =============================================================================
// LOADER
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for LoadTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

pub struct FlightLoader {
    http: reqwest::Client,
}

impl FlightLoader {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeouts: LoadTimeouts) -> Result<Self, LoadError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LoadError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http })
    }

    /// Fetch and parse the flight document. No retries.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, an unreadable
    /// file, or a body that is not a JSON array of flight records.
    pub async fn fetch(&self, source: &DataSource) -> Result<Vec<FlightRecord>, LoadError> {
        let body = match source {
            DataSource::Url(url) => self.fetch_url(url).await?,
            DataSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io { path: path.display().to_string(), source })?,
        };
        debug!(%source, bytes = body.len(), "flight document read");

        let flights = parse_flights(&body)?;
        info!(%source, count = flights.len(), "flight document loaded");
        Ok(flights)
    }

    async fn fetch_url(&self, url: &str) -> Result<String, LoadError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Request { url: url.to_owned(), message: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status { url: url.to_owned(), status: status.as_u16() });
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Request { url: url.to_owned(), message: e.to_string() })
    }
}

/// Parse a JSON array of flight records.
///
/// # Errors
///
/// Returns an error if the body is not a JSON array of flight records.
pub fn parse_flights(body: &str) -> Result<Vec<FlightRecord>, LoadError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
