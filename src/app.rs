//! Caller-owned search context.
//!
//! DESIGN
//! ======
//! `FlightApp` holds the enriched list (fixed after load) and the merged
//! search criteria. The filtered view is recomputed on every call rather than
//! cached, so it can never drift from the criteria.

use rand::Rng;
use tracing::info;

use crate::flight::{EnrichedFlightRecord, FlightRecord, SearchCriteria, SearchUpdate, enrich, filter};

#[derive(Debug, Clone, Default)]
pub struct FlightApp {
    flights: Vec<EnrichedFlightRecord>,
    criteria: SearchCriteria,
}

impl FlightApp {
    #[must_use]
    pub fn new(flights: Vec<EnrichedFlightRecord>) -> Self {
        Self { flights, criteria: SearchCriteria::default() }
    }

    /// Enrich raw records with display times and wrap them in a fresh context.
    pub fn from_records<R: Rng + ?Sized>(records: Vec<FlightRecord>, rng: &mut R) -> Self {
        let flights = enrich(records, rng);
        info!(count = flights.len(), "flights enriched");
        Self::new(flights)
    }

    /// Merge `update` into the criteria and return the new filtered view.
    pub fn update_search(&mut self, update: SearchUpdate) -> Vec<&EnrichedFlightRecord> {
        self.criteria.apply(update);
        let filtered = filter(&self.flights, &self.criteria);
        info!(
            origin = ?self.criteria.origin,
            destination = ?self.criteria.destination,
            max_price = ?self.criteria.max_price,
            max_stops = ?self.criteria.max_stops,
            matches = filtered.len(),
            "search updated"
        );
        filtered
    }

    #[must_use]
    pub fn all_flights(&self) -> &[EnrichedFlightRecord] {
        &self.flights
    }

    #[must_use]
    pub fn current_filtered_flights(&self) -> Vec<&EnrichedFlightRecord> {
        filter(&self.flights, &self.criteria)
    }

    #[must_use]
    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
