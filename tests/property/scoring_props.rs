//! Per-item score properties.
//!
//! - Positivity: every score is positive for `k >= 0`
//! - Rank monotonicity: moving up one place in any source raises the score
//! - Flattening: a larger `k` shrinks the spread of scores
//! - `explain` agrees with `score` to the bit

use super::common::{make_store, ordering_to_ranks, permutation, store_strategy, variance};
use proptest::prelude::*;
use rankfuse::{explain, rrf_term, score, FusionError, ItemId, RankingStore, SourceId};

fn all_scores(store: &RankingStore, k: f64) -> Vec<f64> {
    store
        .item_ids()
        .map(|item| score(store, item, k).unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: with a non-negative `k` every term is positive, so every score is.
    #[test]
    fn prop_scores_positive_for_nonnegative_k(
        store in store_strategy(),
        k in 0.0f64..500.0
    ) {
        for item in store.item_ids() {
            let s = score(&store, item, k).unwrap();
            prop_assert!(s.is_finite() && s > 0.0, "score {} for {:?} at k {}", s, item, k);
        }
    }

    /// Property: a score is bounded by the best and worst it could get.
    ///
    /// Each of M terms lies in `[1/(k+N), 1/(k+1)]`.
    #[test]
    fn prop_scores_bounded(store in store_strategy(), k in 0.0f64..500.0) {
        let m = store.source_count() as f64;
        let n = store.item_count() as f64;
        for s in all_scores(&store, k) {
            prop_assert!(s <= m / (k + 1.0) * (1.0 + 1e-12));
            prop_assert!(s >= m / (k + n) * (1.0 - 1e-12));
        }
    }

    /// Property: swapping an item one place up in one source raises its score
    /// and lowers the score of the item it swapped with.
    #[test]
    fn prop_rank_improvement_raises_score(
        orderings in prop::collection::vec(permutation(6), 1..4),
        source_pick in any::<prop::sample::Index>(),
        position in 1usize..6,
        k in 0.0f64..500.0
    ) {
        let before = make_store(orderings.iter().map(|o| ordering_to_ranks(o)).collect());

        let s = source_pick.index(orderings.len());
        let mut swapped = orderings.clone();
        swapped[s].swap(position - 1, position);
        let after = make_store(swapped.iter().map(|o| ordering_to_ranks(o)).collect());

        let promoted = ItemId(orderings[s][position]);
        let demoted = ItemId(orderings[s][position - 1]);
        prop_assert!(score(&after, promoted, k).unwrap() > score(&before, promoted, k).unwrap());
        prop_assert!(score(&after, demoted, k).unwrap() < score(&before, demoted, k).unwrap());
    }

    /// Property: with one source, scores are `1/(k+1) .. 1/(k+N)` and their
    /// variance strictly decreases as `k` grows.
    #[test]
    fn prop_single_source_variance_decreases(
        ordering in permutation(6),
        k in 0.0f64..500.0,
        delta in 1.0f64..500.0
    ) {
        let store = make_store(vec![ordering_to_ranks(&ordering)]);
        let low = variance(&all_scores(&store, k));
        let high = variance(&all_scores(&store, k + delta));
        prop_assert!(high < low, "variance {} at k {} vs {} at k {}", low, k, high, k + delta);
    }

    /// Property: the demo data flattens as `k` grows.
    #[test]
    fn prop_demo_variance_decreases(k in 0.5f64..500.0, delta in 1.0f64..500.0) {
        let store = RankingStore::demo();
        let low = variance(&all_scores(&store, k));
        let high = variance(&all_scores(&store, k + delta));
        prop_assert!(high < low);
    }

    /// Property: `explain` reports the terms `score` sums, and the same total.
    #[test]
    fn prop_explain_total_is_score(store in store_strategy(), k in -50.0f64..500.0) {
        for item in store.item_ids() {
            match (explain(&store, item, k), score(&store, item, k)) {
                (Ok(breakdown), Ok(s)) => {
                    prop_assert_eq!(breakdown.total.to_bits(), s.to_bits());
                    prop_assert_eq!(breakdown.terms.len(), store.source_count());
                    for (term, source) in breakdown.terms.iter().zip(store.source_ids()) {
                        prop_assert_eq!(term.source, source);
                        prop_assert_eq!(term.rank, store.rank_of(source, item).unwrap());
                    }
                }
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                (a, b) => prop_assert!(false, "explain {:?} disagrees with score {:?}", a, b),
            }
        }
    }

    /// Property: a term is undefined exactly when `k + rank == 0`.
    #[test]
    fn prop_term_undefined_iff_zero_denominator(k in -20i32..20, rank in 1u32..20) {
        let result = rrf_term(f64::from(k), rank, SourceId(0), ItemId(0));
        if i64::from(k) + i64::from(rank) == 0 {
            let is_division_by_zero = matches!(result, Err(FusionError::DivisionByZero { .. }));
            prop_assert!(is_division_by_zero);
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
