//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;
use rankfuse::{Rank, RankingConfig, RankingStore, SourceRanking};

// Re-export canonical test utilities from rankfuse::testing
pub use rankfuse::testing::{make_store, ordering_to_ranks, variance};

// ============================================================================
// STRATEGIES
// ============================================================================

/// A random best-first ordering of `n` items.
pub fn permutation(n: usize) -> impl Strategy<Value = Vec<usize>> {
    Just((0..n).collect::<Vec<_>>()).prop_shuffle()
}

/// A valid rank table: 1-4 sources over 2-8 items.
pub fn rank_table() -> impl Strategy<Value = Vec<Vec<Rank>>> {
    (2usize..=8).prop_flat_map(|n| {
        prop::collection::vec(permutation(n).prop_map(|o| ordering_to_ranks(&o)), 1..=4)
    })
}

/// A store built from [`rank_table`].
pub fn store_strategy() -> impl Strategy<Value = RankingStore> {
    rank_table().prop_map(make_store)
}

// ============================================================================
// FIXTURES
// ============================================================================

/// The demo rank table as a config, the shape `--data` files have.
pub fn demo_config() -> RankingConfig {
    RankingStore::demo().to_config()
}

/// A three-item config where every source agrees.
pub fn unanimous_config() -> RankingConfig {
    RankingConfig {
        items: vec!["alpha".into(), "beta".into(), "gamma".into()],
        sources: vec![
            SourceRanking {
                name: "bm25".into(),
                ranks: vec![1, 2, 3],
            },
            SourceRanking {
                name: "vector".into(),
                ranks: vec![1, 2, 3],
            },
        ],
    }
}

/// Labels of the fused ranking, best first.
pub fn fused_labels(store: &RankingStore, k: f64) -> Vec<String> {
    rankfuse::fuse(store, k)
        .expect("fuse must succeed")
        .into_iter()
        .map(|s| s.label)
        .collect()
}
