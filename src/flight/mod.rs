//! Flight records, their derived display times, and the search engine.
//!
//! DESIGN
//! ======
//! Raw records mirror the JSON document (German field names on the wire).
//! Enrichment adds departure and arrival times once at load time; after
//! that every record is immutable and filtering only borrows.

pub mod filter;
pub mod parse;
pub mod schedule;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub use filter::{SearchCriteria, SearchUpdate, filter};
pub use parse::{duration_minutes_of_day, extract_airport_code, format_price, parse_price};
pub use schedule::{arrival_time, departure_time, departure_with_jitter, enrich};

const MINUTES_PER_DAY: u32 = 24 * 60;

// =============================================================================
// RAW RECORD
// =============================================================================

/// Economy and business fares as display strings, e.g. `"199 EUR"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub economy: String,
    pub business: String,
}

/// One flight as delivered by the data document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Origin label, e.g. `"Berlin (BER)"`.
    #[serde(rename = "start")]
    pub origin: String,
    /// Destination label, e.g. `"Palma (PMI)"`.
    #[serde(rename = "ziel")]
    pub destination: String,
    /// Duration label, e.g. `"2h 35m"`.
    #[serde(rename = "flugdauer")]
    pub duration: String,
    #[serde(rename = "stops")]
    pub stop_count: u32,
    #[serde(deserialize_with = "text_or_number")]
    pub terminal: String,
    #[serde(rename = "preis")]
    pub price: Price,
}

impl FlightRecord {
    #[must_use]
    pub fn origin_code(&self) -> &str {
        extract_airport_code(&self.origin)
    }

    #[must_use]
    pub fn destination_code(&self) -> &str {
        extract_airport_code(&self.destination)
    }

    /// Economy fare as an integer, `None` if the label carries no number.
    #[must_use]
    pub fn economy_price(&self) -> Option<u64> {
        parse_price(&self.price.economy)
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Label::deserialize(deserializer)? {
        Label::Text(s) => s,
        Label::Number(n) => n.to_string(),
    })
}

// =============================================================================
// CLOCK TIME
// =============================================================================

/// A time of day with its `HH:MM` rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockTime {
    pub hours: u8,
    pub minutes: u8,
    pub formatted: String,
}

impl ClockTime {
    pub const MIDNIGHT_MINUTES: u32 = 0;

    /// Build from minutes since midnight; values past one day wrap around.
    #[must_use]
    pub fn from_minutes_of_day(minutes: u32) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        // Both values are bounded by the modulo above.
        let hours = u8::try_from(minutes / 60).unwrap_or(0);
        let mins = u8::try_from(minutes % 60).unwrap_or(0);
        Self { hours, minutes: mins, formatted: format!("{hours:02}:{mins:02}") }
    }

    #[must_use]
    pub fn midnight() -> Self {
        Self::from_minutes_of_day(Self::MIDNIGHT_MINUTES)
    }

    #[must_use]
    pub fn minutes_of_day(&self) -> u32 {
        u32::from(self.hours) * 60 + u32::from(self.minutes)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

// =============================================================================
// ENRICHED RECORD
// =============================================================================

/// A record plus the display times derived at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedFlightRecord {
    #[serde(flatten)]
    pub record: FlightRecord,
    #[serde(rename = "departureTime")]
    pub departure_time: ClockTime,
    #[serde(rename = "arrivalTime")]
    pub arrival_time: ClockTime,
}

impl std::ops::Deref for EnrichedFlightRecord {
    type Target = FlightRecord;

    fn deref(&self) -> &FlightRecord {
        &self.record
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
