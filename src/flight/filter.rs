//! Search criteria and the list filter.
//!
//! DESIGN
//! ======
//! `SearchCriteria` is the merged state; `SearchUpdate` is a partial patch.
//! Each patch field is tri-state: absent (keep), explicitly cleared, or set.
//! That mirrors how a search form behaves: submitting only the origin keeps
//! the price limit, and unticking "nonstop" removes the stop limit.

use serde::{Deserialize, Deserializer, Serialize};

use super::{EnrichedFlightRecord, FlightRecord};

// =============================================================================
// CRITERIA
// =============================================================================

/// Active filter constraints. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub max_price: Option<u64>,
    pub max_stops: Option<u32>,
}

impl SearchCriteria {
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.origin.is_none() && self.destination.is_none() && self.max_price.is_none() && self.max_stops.is_none()
    }

    /// Merge a patch into these criteria; fields absent from the patch are kept.
    ///
    /// A blank airport code clears that constraint, like an emptied form field.
    pub fn apply(&mut self, update: SearchUpdate) {
        if let Some(origin) = update.origin {
            self.origin = origin.filter(|code| !code.trim().is_empty());
        }
        if let Some(destination) = update.destination {
            self.destination = destination.filter(|code| !code.trim().is_empty());
        }
        if let Some(max_price) = update.max_price {
            self.max_price = max_price;
        }
        if let Some(max_stops) = update.max_stops {
            self.max_stops = max_stops;
        }
    }

    /// All four predicates, AND-combined.
    ///
    /// A record whose economy price carries no number cannot be compared and
    /// is not excluded by the price limit.
    #[must_use]
    pub fn matches(&self, record: &FlightRecord) -> bool {
        if let Some(origin) = &self.origin {
            if record.origin_code() != origin.as_str() {
                return false;
            }
        }
        if let Some(destination) = &self.destination {
            if record.destination_code() != destination.as_str() {
                return false;
            }
        }
        if let Some(max_stops) = self.max_stops {
            if record.stop_count > max_stops {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if record.economy_price().is_some_and(|price| price > max_price) {
                return false;
            }
        }
        true
    }
}

// =============================================================================
// UPDATE
// =============================================================================

/// Partial criteria. Outer `None` keeps the prior value, `Some(None)` clears it.
///
/// Deserializes from camelCase JSON where a missing key keeps and `null` clears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchUpdate {
    #[serde(default, deserialize_with = "explicit")]
    pub origin: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit")]
    pub destination: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit")]
    pub max_price: Option<Option<u64>>,
    #[serde(default, deserialize_with = "explicit")]
    pub max_stops: Option<Option<u32>>,
}

impl SearchUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn origin(mut self, code: impl Into<String>) -> Self {
        self.origin = Some(Some(code.into()));
        self
    }

    #[must_use]
    pub fn destination(mut self, code: impl Into<String>) -> Self {
        self.destination = Some(Some(code.into()));
        self
    }

    #[must_use]
    pub fn max_price(mut self, max: u64) -> Self {
        self.max_price = Some(Some(max));
        self
    }

    #[must_use]
    pub fn max_stops(mut self, max: u32) -> Self {
        self.max_stops = Some(Some(max));
        self
    }

    #[must_use]
    pub fn clear_origin(mut self) -> Self {
        self.origin = Some(None);
        self
    }

    #[must_use]
    pub fn clear_destination(mut self) -> Self {
        self.destination = Some(None);
        self
    }

    #[must_use]
    pub fn clear_max_price(mut self) -> Self {
        self.max_price = Some(None);
        self
    }

    #[must_use]
    pub fn clear_max_stops(mut self) -> Self {
        self.max_stops = Some(None);
        self
    }

    /// The "nonstop only" toggle: checked limits stops to 0, unchecked clears.
    #[must_use]
    pub fn nonstop(mut self, checked: bool) -> Self {
        self.max_stops = Some(checked.then_some(0));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.origin.is_none() && self.destination.is_none() && self.max_price.is_none() && self.max_stops.is_none()
    }
}

fn explicit<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// =============================================================================
// FILTER
// =============================================================================

impl AsRef<FlightRecord> for FlightRecord {
    fn as_ref(&self) -> &FlightRecord {
        self
    }
}

impl AsRef<FlightRecord> for EnrichedFlightRecord {
    fn as_ref(&self) -> &FlightRecord {
        &self.record
    }
}

/// Records matching `criteria`, in list order.
#[must_use]
pub fn filter<'a, T>(records: &'a [T], criteria: &SearchCriteria) -> Vec<&'a T>
where
    T: AsRef<FlightRecord>,
{
    if criteria.is_unconstrained() {
        return records.iter().collect();
    }
    records.iter().filter(|r| criteria.matches((*r).as_ref())).collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
