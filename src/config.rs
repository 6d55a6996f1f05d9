//! Runtime configuration parsed from environment variables.

use std::time::Duration;

use crate::error::{ConfigError, ErrorCode};
use crate::flight::SearchUpdate;
use crate::loader::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, DataSource, LoadTimeouts};
use crate::tabs::DEFAULT_SETTLE_MS;

pub const DEFAULT_FLIGHTS_SOURCE: &str = "ressources/data/flights.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: DataSource,
    /// Seed for departure jitter; `None` draws from the OS.
    pub seed: Option<u64>,
    pub timeouts: LoadTimeouts,
    pub tab_settle: Duration,
    /// Search form values applied once after loading.
    pub initial_search: SearchUpdate,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `FLIGHTS_SOURCE`: URL or file path, default `ressources/data/flights.json`
    /// - `FLIGHTS_SEED`: `u64` seed for reproducible departure times
    /// - `FLIGHTS_REQUEST_TIMEOUT_SECS`: default 10
    /// - `FLIGHTS_CONNECT_TIMEOUT_SECS`: default 5
    /// - `TAB_SETTLE_MS`: default 600
    /// - `SEARCH_ORIGIN`, `SEARCH_DESTINATION`: airport codes, empty means unset
    /// - `SEARCH_MAX_PRICE`, `SEARCH_MAX_STOPS`: integers
    /// - `SEARCH_NONSTOP`: `true`/`1` limits stops to 0
    ///
    /// # Errors
    ///
    /// Returns an error if the seed or a search value is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `from_env`, or the defaults when a value is malformed.
    #[must_use]
    pub fn from_env_or_default() -> Self {
        Self::from_lookup_or_default(|key| std::env::var(key).ok())
    }

    /// `from_lookup`, logging the error and falling back to the defaults.
    #[must_use]
    pub fn from_lookup_or_default(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            tracing::warn!(error = %e, code = e.error_code(), "invalid configuration; using defaults");
            Self::default()
        })
    }

    /// Same as `from_env`, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed or a search value is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let source = DataSource::parse(
            &non_empty(lookup("FLIGHTS_SOURCE")).unwrap_or_else(|| DEFAULT_FLIGHTS_SOURCE.to_owned()),
        );
        let seed = parse_optional("FLIGHTS_SEED", lookup("FLIGHTS_SEED"))?;
        let timeouts = LoadTimeouts {
            request_secs: parse_or("FLIGHTS_REQUEST_TIMEOUT_SECS", &lookup, DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_or("FLIGHTS_CONNECT_TIMEOUT_SECS", &lookup, DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let tab_settle = Duration::from_millis(parse_or("TAB_SETTLE_MS", &lookup, DEFAULT_SETTLE_MS));
        let initial_search = search_from_lookup(&lookup)?;

        Ok(Self { source, seed, timeouts, tab_settle, initial_search })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: DataSource::parse(DEFAULT_FLIGHTS_SOURCE),
            seed: None,
            timeouts: LoadTimeouts::default(),
            tab_settle: Duration::from_millis(DEFAULT_SETTLE_MS),
            initial_search: SearchUpdate::new(),
        }
    }
}

fn search_from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<SearchUpdate, ConfigError> {
    let mut update = SearchUpdate::new();
    if let Some(origin) = non_empty(lookup("SEARCH_ORIGIN")) {
        update = update.origin(origin);
    }
    if let Some(destination) = non_empty(lookup("SEARCH_DESTINATION")) {
        update = update.destination(destination);
    }
    if let Some(max_price) = parse_optional("SEARCH_MAX_PRICE", lookup("SEARCH_MAX_PRICE"))? {
        update = update.max_price(max_price);
    }
    if let Some(max_stops) = parse_optional("SEARCH_MAX_STOPS", lookup("SEARCH_MAX_STOPS"))? {
        update = update.max_stops(max_stops);
    }
    if let Some(raw) = non_empty(lookup("SEARCH_NONSTOP")) {
        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => update = update.nonstop(true),
            "0" | "false" | "no" => {}
            _ => return Err(ConfigError::Invalid { var: "SEARCH_NONSTOP", value: raw }),
        }
    }
    Ok(update)
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_optional<T: std::str::FromStr>(var: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    match non_empty(raw) {
        None => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
