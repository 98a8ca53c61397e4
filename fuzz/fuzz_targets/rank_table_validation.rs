// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for rank table validation.
//!
//! Arbitrary JSON-shaped configs must either be rejected with an
//! `InvariantError` or produce a store where every source ranks every item
//! exactly once. Never a panic, never a half-valid store.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rankfuse::{fuse, RankingConfig, RankingStore, SourceRanking, DEFAULT_K};
use std::collections::HashSet;

#[derive(Debug, Arbitrary)]
struct RawSource {
    name: String,
    ranks: Vec<u8>,
}

#[derive(Debug, Arbitrary)]
struct RawConfig {
    items: Vec<String>,
    sources: Vec<RawSource>,
}

fuzz_target!(|raw: RawConfig| {
    let config = RankingConfig {
        items: raw.items,
        sources: raw
            .sources
            .into_iter()
            .map(|s| SourceRanking {
                name: s.name,
                ranks: s.ranks.into_iter().map(u32::from).collect(),
            })
            .collect(),
    };

    let Ok(store) = RankingStore::from_config(config.clone()) else {
        return;
    };

    // Accepted: labels are unique and every source is a permutation of 1..=N
    let n = store.item_count();
    assert!(n > 0 && store.source_count() > 0);
    assert_eq!(store.items().iter().collect::<HashSet<_>>().len(), n);
    for source in store.source_ids() {
        let ranks: HashSet<u32> = store
            .item_ids()
            .map(|item| store.rank_of(source, item).expect("own ids"))
            .collect();
        assert_eq!(ranks, (1..=n as u32).collect::<HashSet<u32>>());
        assert_eq!(store.ranking_of(source).expect("own source").len(), n);
    }

    assert_eq!(store.to_config(), config);
    assert!(fuse(&store, DEFAULT_K).is_ok());
});
