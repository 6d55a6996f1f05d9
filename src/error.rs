//! Error types for loading flight data and reading configuration.
//!
//! DESIGN
//! ======
//! Malformed duration and price strings never surface here: the parsers in
//! `flight::parse` fall back to zero values instead. Only whole-document
//! failures (transport, status, body) and bad configuration are errors.

/// Message shown to the user whenever the flight document cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Flugdaten konnten nicht geladen werden.";

/// Stable machine-readable code for an error variant.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

// =============================================================================
// LOAD ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response.
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The server answered with a non-2xx status.
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The local file could not be read.
    #[error("reading {path} failed: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The body was not a JSON array of flight records.
    #[error("flight document parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    /// The single user-facing message for any load failure.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }
}

impl ErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Request { .. } => "E_REQUEST",
            Self::Status { .. } => "E_STATUS",
            Self::Io { .. } => "E_IO",
            Self::Parse(_) => "E_PARSE",
        }
    }
}

// =============================================================================
// CONFIG ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => "E_CONFIG_INVALID",
        }
    }
}
