//! Display times derived from a record's position in the list.
//!
//! DESIGN
//! ======
//! Departures are spread across the 06:00-22:00 window by list index, with a
//! small jitter in 5-minute steps so the board does not look mechanical.
//! These are presentational placeholders, not a schedule. The jitter source
//! is any `rand::Rng` the caller passes in; a seeded generator gives
//! reproducible output.

use rand::Rng;
use tracing::debug;

use super::parse::duration_minutes_of_day;
use super::{ClockTime, EnrichedFlightRecord, FlightRecord, MINUTES_PER_DAY};

/// Earliest departure, 06:00.
pub const WINDOW_START_MINUTES: u32 = 6 * 60;
/// Latest departure, 22:00.
pub const WINDOW_END_MINUTES: u32 = 22 * 60;

const WINDOW_MINUTES: u32 = WINDOW_END_MINUTES - WINDOW_START_MINUTES;
const STEP_MINUTES: u32 = 5;
/// Jitter is `STEP_MINUTES * 0..JITTER_STEPS`, i.e. 0 to 95 minutes.
pub const JITTER_STEPS: u32 = 20;

/// Departure time for record `index` of `total`, with a random jitter.
pub fn departure_time<R: Rng + ?Sized>(index: usize, total: usize, rng: &mut R) -> ClockTime {
    let jitter = rng.random_range(0..JITTER_STEPS) * STEP_MINUTES;
    departure_with_jitter(index, total, jitter)
}

/// Departure time for record `index` of `total` with a fixed jitter.
///
/// The base offset is `floor(index * 960 / total)` minutes past 06:00; the
/// jittered result is clamped to 22:00 and rounded down to 5 minutes.
#[must_use]
pub fn departure_with_jitter(index: usize, total: usize, jitter_minutes: u32) -> ClockTime {
    let offset = if total == 0 {
        0
    } else {
        let window = WINDOW_MINUTES as usize;
        let raw = index.saturating_mul(window) / total;
        u32::try_from(raw.min(window)).unwrap_or(WINDOW_MINUTES)
    };

    let minutes = WINDOW_START_MINUTES
        .saturating_add(offset)
        .saturating_add(jitter_minutes)
        .min(WINDOW_END_MINUTES);

    ClockTime::from_minutes_of_day(minutes - minutes % STEP_MINUTES)
}

/// Departure plus the parsed duration, wrapped past midnight.
///
/// An unparseable duration yields 00:00.
#[must_use]
pub fn arrival_time(departure: &ClockTime, duration: &str) -> ClockTime {
    match duration_minutes_of_day(duration) {
        Some(total) => ClockTime::from_minutes_of_day(departure.minutes_of_day() + total % MINUTES_PER_DAY),
        None => {
            debug!(duration, "unparseable flight duration; arrival set to 00:00");
            ClockTime::midnight()
        }
    }
}

/// Attach departure and arrival times to every record, in order.
pub fn enrich<R: Rng + ?Sized>(records: Vec<FlightRecord>, rng: &mut R) -> Vec<EnrichedFlightRecord> {
    let total = records.len();
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let departure_time = departure_time(index, total, rng);
            let arrival_time = arrival_time(&departure_time, &record.duration);
            EnrichedFlightRecord { record, departure_time, arrival_time }
        })
        .collect()
}

#[cfg(test)]
#[path = "schedule_test.rs"]
mod tests;
