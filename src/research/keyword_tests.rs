//! Tests for keyword records

use super::*;
use insta::assert_snapshot;

fn record(id: u32, phrase: &str, volume: u32, level: Competition) -> KeywordResult {
    KeywordResult {
        id,
        phrase: phrase.to_string(),
        search_volume: volume,
        competition_level: level,
    }
}

#[test]
fn test_competition_labels() {
    assert_eq!(Competition::Low.label(), "Low");
    assert_eq!(Competition::Medium.label(), "Medium");
    assert_eq!(Competition::High.label(), "High");
}

#[test]
fn test_competition_display_matches_label() {
    for level in Competition::ALL {
        assert_eq!(level.to_string(), level.label());
    }
}

#[test]
fn test_formatted_volume_uses_separators() {
    let r = record(1, "seo tool", 10999, Competition::High);
    assert_eq!(r.formatted_volume(), "10,999");
}

#[test]
fn test_record_serializes_with_camel_case_fields() {
    let r = record(1, "seo tool", 1000, Competition::Low);
    let json = serde_json::to_string_pretty(&r).unwrap();

    assert_snapshot!(json, @r#"
    {
      "id": 1,
      "phrase": "seo tool",
      "searchVolume": 1000,
      "competitionLevel": "Low"
    }
    "#);
}

#[test]
fn test_batch_to_json_contains_query_and_results() {
    let batch = SearchBatch::new(
        "seo",
        vec![
            record(1, "seo tool", 1234, Competition::Medium),
            record(2, "seo guide", 5678, Competition::High),
        ],
    );

    let json = batch.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["query"], "seo");
    assert_eq!(value["results"].as_array().unwrap().len(), 2);
    assert_eq!(value["results"][1]["phrase"], "seo guide");
    assert_eq!(value["results"][0]["competitionLevel"], "Medium");
}
