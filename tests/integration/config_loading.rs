//! Rank tables from JSON: round trips and every validation failure.

use super::common::{demo_config, fused_labels, unanimous_config};
use rankfuse::{InvariantError, RankingConfig, RankingStore};
use std::fs;
use tempfile::TempDir;

fn load(json: &str) -> Result<RankingStore, InvariantError> {
    let config: RankingConfig = serde_json::from_str(json).expect("valid JSON");
    RankingStore::from_config(config)
}

#[test]
fn test_demo_config_round_trips_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demo.json");
    fs::write(&path, serde_json::to_string_pretty(&demo_config()).unwrap()).unwrap();

    let config: RankingConfig = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let store = RankingStore::from_config(config).unwrap();
    assert_eq!(store, RankingStore::demo());
}

#[test]
fn test_unanimous_config() {
    let store = RankingStore::from_config(unanimous_config()).unwrap();
    assert_eq!(fused_labels(&store, 60.0), ["alpha", "beta", "gamma"]);
}

#[test]
fn test_json_shape() {
    let store = load(
        r#"{
            "items": ["x", "y"],
            "sources": [
                {"name": "first", "ranks": [2, 1]},
                {"name": "second", "ranks": [2, 1]}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(store.sources(), ["first", "second"]);
    assert_eq!(fused_labels(&store, 60.0), ["y", "x"]);
}

#[test]
fn test_rejects_empty_items() {
    assert_eq!(
        load(r#"{"items": [], "sources": [{"name": "s", "ranks": []}]}"#),
        Err(InvariantError::EmptyItems)
    );
}

#[test]
fn test_rejects_empty_sources() {
    assert_eq!(
        load(r#"{"items": ["x"], "sources": []}"#),
        Err(InvariantError::EmptySources)
    );
}

#[test]
fn test_rejects_duplicate_labels() {
    assert!(matches!(
        load(r#"{"items": ["x", "x"], "sources": [{"name": "s", "ranks": [1, 2]}]}"#),
        Err(InvariantError::DuplicateItem { .. })
    ));
    assert!(matches!(
        load(
            r#"{"items": ["x"], "sources": [
                {"name": "s", "ranks": [1]},
                {"name": "s", "ranks": [1]}
            ]}"#
        ),
        Err(InvariantError::DuplicateSource { .. })
    ));
}

#[test]
fn test_rejects_malformed_ranks() {
    assert!(matches!(
        load(r#"{"items": ["x", "y"], "sources": [{"name": "s", "ranks": [1]}]}"#),
        Err(InvariantError::RankCountMismatch { .. })
    ));
    assert!(matches!(
        load(r#"{"items": ["x", "y"], "sources": [{"name": "s", "ranks": [1, 3]}]}"#),
        Err(InvariantError::RankOutOfRange { rank: 3, .. })
    ));
    assert!(matches!(
        load(r#"{"items": ["x", "y"], "sources": [{"name": "s", "ranks": [0, 1]}]}"#),
        Err(InvariantError::RankOutOfRange { rank: 0, .. })
    ));
    assert!(matches!(
        load(r#"{"items": ["x", "y"], "sources": [{"name": "s", "ranks": [1, 1]}]}"#),
        Err(InvariantError::DuplicateRank { rank: 1, .. })
    ));
}
