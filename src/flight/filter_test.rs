use super::*;
use crate::flight::Price;

fn flight(origin: &str, destination: &str, stops: u32, economy: &str) -> FlightRecord {
    FlightRecord {
        origin: origin.into(),
        destination: destination.into(),
        duration: "2h 0m".into(),
        stop_count: stops,
        terminal: "1".into(),
        price: Price { economy: economy.into(), business: "999 EUR".into() },
    }
}

fn sample() -> Vec<FlightRecord> {
    vec![
        flight("Berlin (BER)", "Palma (PMI)", 0, "129 EUR"),
        flight("Berlin (BER)", "Lissabon (LIS)", 1, "219 EUR"),
        flight("Hamburg (HAM)", "Palma (PMI)", 2, "89 EUR"),
        flight("München (MUC)", "Rom (FCO)", 0, "auf Anfrage"),
    ]
}

#[test]
fn empty_list_stays_empty() {
    let records: Vec<FlightRecord> = Vec::new();
    let criteria = SearchCriteria { origin: Some("BER".into()), ..SearchCriteria::default() };
    assert!(filter(&records, &criteria).is_empty());
    assert!(filter(&records, &SearchCriteria::default()).is_empty());
}

#[test]
fn unconstrained_returns_everything_in_order() {
    let records = sample();
    let result = filter(&records, &SearchCriteria::default());
    assert_eq!(result.len(), records.len());
    assert!(result.iter().zip(&records).all(|(a, b)| std::ptr::eq(*a, b)));
}

#[test]
fn max_stops_keeps_first_two_of_zero_one_two() {
    let records = vec![
        flight("A (AAA)", "B (BBB)", 0, "1"),
        flight("A (AAA)", "B (BBB)", 1, "1"),
        flight("A (AAA)", "B (BBB)", 2, "1"),
    ];
    let criteria = SearchCriteria { max_stops: Some(1), ..SearchCriteria::default() };
    let result = filter(&records, &criteria);
    assert_eq!(result.len(), 2);
    assert!(std::ptr::eq(result[0], &records[0]));
    assert!(std::ptr::eq(result[1], &records[1]));
}

#[test]
fn zero_max_stops_is_a_real_constraint() {
    let records = sample();
    let criteria = SearchCriteria { max_stops: Some(0), ..SearchCriteria::default() };
    let result = filter(&records, &criteria);
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|f| f.stop_count == 0));
}

#[test]
fn origin_and_destination_match_codes_exactly() {
    let records = sample();
    let criteria =
        SearchCriteria { origin: Some("BER".into()), destination: Some("PMI".into()), ..SearchCriteria::default() };
    let result = filter(&records, &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].destination, "Palma (PMI)");

    let partial = SearchCriteria { origin: Some("BE".into()), ..SearchCriteria::default() };
    assert!(filter(&records, &partial).is_empty());

    let lowercase = SearchCriteria { origin: Some("ber".into()), ..SearchCriteria::default() };
    assert!(filter(&records, &lowercase).is_empty());
}

#[test]
fn max_price_compares_parsed_economy_fare() {
    let records = sample();
    let criteria = SearchCriteria { max_price: Some(129), ..SearchCriteria::default() };
    let origins: Vec<&str> = filter(&records, &criteria).into_iter().map(FlightRecord::origin_code).collect();
    // 219 is excluded; the fare without a number cannot be compared and stays.
    assert_eq!(origins, ["BER", "HAM", "MUC"]);
}

#[test]
fn predicates_are_and_combined() {
    let records = sample();
    let criteria = SearchCriteria {
        destination: Some("PMI".into()),
        max_price: Some(100),
        max_stops: Some(1),
        ..SearchCriteria::default()
    };
    // PMI flights: BER (0 stops, 129) fails price, HAM (2 stops, 89) fails stops.
    assert!(filter(&records, &criteria).is_empty());
}

#[test]
fn apply_merges_instead_of_replacing() {
    let mut criteria = SearchCriteria::default();
    criteria.apply(SearchUpdate::new().max_price(100));
    criteria.apply(SearchUpdate::new().max_stops(0));
    assert_eq!(criteria.max_price, Some(100));
    assert_eq!(criteria.max_stops, Some(0));
}

#[test]
fn apply_overrides_and_clears_fields() {
    let mut criteria = SearchCriteria::default();
    criteria.apply(SearchUpdate::new().origin("BER").destination("PMI"));
    criteria.apply(SearchUpdate::new().origin("HAM"));
    assert_eq!(criteria.origin.as_deref(), Some("HAM"));
    assert_eq!(criteria.destination.as_deref(), Some("PMI"));

    criteria.apply(SearchUpdate::new().clear_destination());
    assert_eq!(criteria.destination, None);
    assert_eq!(criteria.origin.as_deref(), Some("HAM"));
}

#[test]
fn blank_codes_clear_the_constraint() {
    let mut criteria = SearchCriteria { origin: Some("BER".into()), ..SearchCriteria::default() };
    criteria.apply(SearchUpdate::new().origin("").destination("   "));
    assert_eq!(criteria.origin, None);
    assert_eq!(criteria.destination, None);
    assert!(criteria.is_unconstrained());
}

#[test]
fn empty_origin_from_json_keeps_every_flight_visible() {
    let records = sample();
    let mut criteria = SearchCriteria::default();
    criteria.apply(serde_json::from_str(r#"{"origin": ""}"#).unwrap());
    assert_eq!(filter(&records, &criteria).len(), records.len());
}

#[test]
fn nonstop_toggle_sets_and_clears_stop_limit() {
    let mut criteria = SearchCriteria::default();
    criteria.apply(SearchUpdate::new().nonstop(true));
    assert_eq!(criteria.max_stops, Some(0));
    criteria.apply(SearchUpdate::new().nonstop(false));
    assert_eq!(criteria.max_stops, None);
    assert!(criteria.is_unconstrained());
}

#[test]
fn update_deserializes_missing_as_keep_and_null_as_clear() {
    let update: SearchUpdate = serde_json::from_str(r#"{"maxPrice": 150, "maxStops": null}"#).unwrap();
    assert_eq!(update.max_price, Some(Some(150)));
    assert_eq!(update.max_stops, Some(None));
    assert_eq!(update.origin, None);
    assert!(!update.is_empty());

    let empty: SearchUpdate = serde_json::from_str("{}").unwrap();
    assert!(empty.is_empty());
}
