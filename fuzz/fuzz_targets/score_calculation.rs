// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Any `k` (negative, zero, subnormal, NaN, infinite) and any valid rank table
//! must produce either a clean error or a fused ranking that is a sorted
//! permutation whose scores match `score` and `explain` to the bit.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rankfuse::{explain, fuse, score, FusionError, Rank, RankingStore};

/// Fuzz input: a `k` plus one best-first ordering per source.
#[derive(Debug, Clone)]
struct ScoreInput {
    k: f64,
    orderings: Vec<Vec<usize>>,
}

impl<'a> arbitrary::Arbitrary<'a> for ScoreInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let k = match u.int_in_range(0..=4)? {
            0 => f64::from(u.int_in_range(-12i32..=12)?), // Integer k, may hit -rank
            1 => 60.0,
            2 => [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.0, f64::MIN_POSITIVE]
                [u.int_in_range(0..=4)?],
            _ => u.arbitrary()?,
        };

        let items = u.int_in_range(1..=10)?;
        let sources = u.int_in_range(1..=4)?;
        let mut orderings = Vec::with_capacity(sources);
        for _ in 0..sources {
            // Fisher-Yates driven by the fuzzer's bytes
            let mut ordering: Vec<usize> = (0..items).collect();
            for i in (1..items).rev() {
                let j = u.int_in_range(0..=i)?;
                ordering.swap(i, j);
            }
            orderings.push(ordering);
        }
        Ok(ScoreInput { k, orderings })
    }
}

fn build_store(orderings: &[Vec<usize>]) -> RankingStore {
    let items = orderings[0].len();
    let ranks = orderings
        .iter()
        .map(|ordering| {
            let mut ranks = vec![0 as Rank; items];
            for (position, &item) in ordering.iter().enumerate() {
                ranks[item] = position as Rank + 1;
            }
            ranks
        })
        .collect();
    RankingStore::new(
        (0..items).map(|i| format!("item{}", i)).collect(),
        (0..orderings.len()).map(|s| format!("source{}", s)).collect(),
        ranks,
    )
    .expect("orderings are permutations")
}

fuzz_target!(|input: ScoreInput| {
    let store = build_store(&input.orderings);
    let k = input.k;

    let first = fuse(&store, k);
    // Deterministic: same input, same output
    assert_eq!(format!("{:?}", first), format!("{:?}", fuse(&store, k)));

    match first {
        Ok(fused) => {
            assert!(k.is_finite());
            assert_eq!(fused.len(), store.item_count());
            let mut seen = vec![false; store.item_count()];
            for scored in &fused {
                assert!(!seen[scored.item.index()], "duplicate item in fused ranking");
                seen[scored.item.index()] = true;

                let s = score(&store, scored.item, k).expect("fused item must score");
                assert_eq!(s.to_bits(), scored.score.to_bits());
                let breakdown = explain(&store, scored.item, k).expect("fused item must explain");
                assert_eq!(breakdown.total.to_bits(), s.to_bits());
            }
            for pair in fused.windows(2) {
                assert!(!(pair[0].score < pair[1].score), "fused ranking not sorted");
            }
        }
        Err(FusionError::NonFiniteK { .. }) => assert!(!k.is_finite()),
        Err(FusionError::DivisionByZero { rank, k: reported, .. }) => {
            assert_eq!(reported.to_bits(), k.to_bits());
            assert_eq!(k + f64::from(rank), 0.0);
        }
        Err(e @ FusionError::NotFound { .. }) => panic!("lookup failed for own ids: {}", e),
    }
});
