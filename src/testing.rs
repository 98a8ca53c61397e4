//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::store::RankingStore;
use crate::types::Rank;

/// Build a store with generated labels: items `item0..`, sources `source0..`.
///
/// Panics if `ranks` is not a valid rank table; tests should only pass valid ones.
pub fn make_store(ranks: Vec<Vec<Rank>>) -> RankingStore {
    let item_count = ranks.first().map_or(0, Vec::len);
    let items = (0..item_count).map(|i| format!("item{}", i)).collect();
    let sources = (0..ranks.len()).map(|s| format!("source{}", s)).collect();
    RankingStore::new(items, sources, ranks).expect("test rank table must be valid")
}

/// Turn a best-first ordering of item indices into per-item ranks.
///
/// `ordering_to_ranks(&[2, 0, 1]) == [2, 3, 1]`: item 2 is ranked first.
pub fn ordering_to_ranks(ordering: &[usize]) -> Vec<Rank> {
    let mut ranks = vec![0; ordering.len()];
    for (position, &item) in ordering.iter().enumerate() {
        ranks[item] = position as Rank + 1;
    }
    ranks
}

/// Population variance of a set of scores.
pub fn variance(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;
    scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n
}
