//! Text rendering of the result list.
//!
//! Each flight becomes one panel showing the same fields the booking page
//! shows: times, airport codes, stops, terminal, duration and both fares.

use std::fmt::Write as _;

use crate::flight::parse::parse_duration;
use crate::flight::{EnrichedFlightRecord, format_price};

/// Shown in place of the list when no flight matches.
pub const NO_FLIGHTS_MESSAGE: &str = "Keine Flüge gefunden, die Ihren Suchkriterien entsprechen.";

/// `"Stopp"` for exactly one stop, `"Stopps"` otherwise.
#[must_use]
pub fn stop_label(stops: u32) -> &'static str {
    if stops == 1 { "Stopp" } else { "Stopps" }
}

#[must_use]
pub fn render_flight(flight: &EnrichedFlightRecord) -> String {
    let (hours, minutes) = parse_duration(&flight.duration).unwrap_or((0, 0));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {}  ── {} {} ──  {}  {}  Terminal {}",
        flight.departure_time,
        flight.origin_code(),
        flight.stop_count,
        stop_label(flight.stop_count),
        flight.arrival_time,
        flight.destination_code(),
        flight.terminal,
    );
    let _ = writeln!(out, "Dauer: {hours}h {minutes}min");
    let _ = writeln!(out, "Economy ab {} EUR", format_price(&flight.price.economy));
    let _ = write!(out, "Business ab {} EUR", format_price(&flight.price.business));
    out
}

/// All panels separated by blank lines, or the no-results message.
#[must_use]
pub fn render_results(flights: &[&EnrichedFlightRecord]) -> String {
    if flights.is_empty() {
        return NO_FLIGHTS_MESSAGE.to_owned();
    }
    flights
        .iter()
        .map(|f| render_flight(f))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
