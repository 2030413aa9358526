mod common;

use common::{currencies, currency};
use typeahead::filter::{fuzzy_filter, matches_query, substring_filter};
use typeahead::{Candidate, Record};

#[test]
fn test_currency_scenario_eur() {
    let matches = substring_filter("eur", &currencies());
    assert_eq!(matches, vec![currency("EUR", "Euro")]);
}

#[test]
fn test_currency_scenario_d() {
    let matches = substring_filter("d", &currencies());
    assert_eq!(
        matches,
        vec![currency("USD", "US Dollar"), currency("GBP", "British Pound")]
    );
}

#[test]
fn test_empty_query_returns_all_in_order() {
    assert_eq!(substring_filter("", &currencies()), currencies());
}

#[test]
fn test_empty_candidates() {
    let none: Vec<Candidate> = Vec::new();
    assert!(substring_filter("eur", &none).is_empty());
    assert!(substring_filter("", &none).is_empty());
}

#[test]
fn test_record_matches_any_field_case_insensitively() {
    let record = Record::new()
        .set("code", "CHF")
        .set("name", "Swiss Franc")
        .set("region", "Europe");

    for query in ["chf", "SWISS", "franc", "eUrOpE", "f s"] {
        assert!(matches_query(query, &record), "query {:?} should match", query);
    }
    assert!(!matches_query("yen", &record));
}

#[test]
fn test_order_preserved_for_string_candidates() {
    let items: Vec<String> = ["banana", "Apple", "grape", "pineapple", "APPLE pie"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let matches = substring_filter("apple", &items);
    assert_eq!(matches, vec!["Apple", "pineapple", "APPLE pie"]);
}

#[test]
fn test_duplicates_are_kept() {
    let items = vec!["Euro".to_string(), "Euro".to_string()];
    assert_eq!(substring_filter("eu", &items).len(), 2);
}

#[test]
fn test_mixed_shapes() {
    let items = vec![
        Candidate::from("Euro"),
        currency("EUR", "Euro"),
        Candidate::from("Yen"),
    ];

    let matches = substring_filter("euro", &items);
    assert_eq!(matches, vec![Candidate::from("Euro"), currency("EUR", "Euro")]);
}

#[test]
fn test_candidates_from_json() {
    let json = r#"[
        {"code": "USD", "name": "US Dollar"},
        {"code": "EUR", "name": "Euro"},
        {"code": "GBP", "name": "British Pound"}
    ]"#;
    let loaded: Vec<Candidate> = serde_json::from_str(json).unwrap();

    assert_eq!(loaded, currencies());
    assert_eq!(substring_filter("pound", &loaded), vec![currency("GBP", "British Pound")]);
}

#[test]
fn test_fuzzy_filter_ranks_matches() {
    let items = vec![
        "apple".to_string(),
        "banana".to_string(),
        "apricot".to_string(),
    ];
    let matches = fuzzy_filter("ap", &items);
    assert_eq!(matches.len(), 2);
    assert!(matches.contains(&"apple".to_string()));
    assert!(matches.contains(&"apricot".to_string()));
}

#[test]
fn test_fuzzy_filter_searches_record_fields() {
    let matches = fuzzy_filter("brpnd", &currencies());
    assert_eq!(matches, vec![currency("GBP", "British Pound")]);
}

#[test]
fn test_nested_and_large_values_match_their_display_text() {
    let json = r#"{"code": "GBP", "tags": ["uk", "gb"]}"#;
    let tagged: Record = serde_json::from_str(json).unwrap();
    assert!(matches_query("uk,gb", &tagged));
    assert!(!matches_query("[\"uk\"", &tagged));

    let huge = Record::new().set("code", "ZWL").set("rate", 1e21);
    assert!(matches_query("1e+21", &huge));
}
