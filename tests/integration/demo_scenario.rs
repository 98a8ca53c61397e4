//! The demo dataset walked through the way a user would see it.

use super::common::fused_labels;
use rankfuse::presenter::{render, Step, StepState, View};
use rankfuse::{explain, fuse, score, FusionError, RankingStore, DEFAULT_K};

const ALPHABETICAL: [&str; 5] = ["Doc A", "Doc B", "Doc C", "Doc D", "Doc E"];

#[test]
fn test_default_k_ranks_alphabetically() {
    let store = RankingStore::demo();
    assert_eq!(fused_labels(&store, DEFAULT_K), ALPHABETICAL);
}

#[test]
fn test_doc_a_and_doc_b_tie_exactly() {
    // Both collect ranks {1, 2, 3}, in a different source order
    let store = RankingStore::demo();
    let a = score(&store, store.item_by_label("Doc A").unwrap(), DEFAULT_K).unwrap();
    let b = score(&store, store.item_by_label("Doc B").unwrap(), DEFAULT_K).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
    assert!((a - 0.048395).abs() < 1e-6);

    let fused = fuse(&store, DEFAULT_K).unwrap();
    assert_eq!(fused[0].score, fused[1].score);
    assert_eq!(fused[0].label, "Doc A");
}

#[test]
fn test_order_holds_across_k() {
    let store = RankingStore::demo();
    for k in [0.0, 1.0, 10.0, 1000.0] {
        assert_eq!(fused_labels(&store, k), ALPHABETICAL, "k = {}", k);
    }
}

#[test]
fn test_fractional_negative_k_inverts_ranking() {
    // Between -3 and -2 the rank-1 and rank-2 terms turn negative
    let store = RankingStore::demo();
    assert_eq!(
        fused_labels(&store, -2.5),
        ["Doc D", "Doc E", "Doc A", "Doc B", "Doc C"]
    );
}

#[test]
fn test_k_minus_one_is_division_by_zero() {
    let store = RankingStore::demo();
    let err = fuse(&store, -1.0).unwrap_err();
    // Doc A is ranked first by Dense, the first (item, source) pair with rank 1
    assert_eq!(
        err,
        FusionError::DivisionByZero {
            source: rankfuse::SourceId(0),
            item: rankfuse::ItemId(0),
            rank: 1,
            k: -1.0,
        }
    );
    assert_eq!(
        err.to_string(),
        "division by zero: k -1 + rank 1 == 0 (source 0, item 0)"
    );
}

#[test]
fn test_nan_k_is_rejected() {
    let store = RankingStore::demo();
    assert!(matches!(
        fuse(&store, f64::NAN),
        Err(FusionError::NonFiniteK { .. })
    ));
}

#[test]
fn test_explain_doc_d() {
    let store = RankingStore::demo();
    let breakdown = explain(&store, store.item_by_label("Doc D").unwrap(), DEFAULT_K).unwrap();
    let ranks: Vec<u32> = breakdown.terms.iter().map(|t| t.rank).collect();
    assert_eq!(ranks, [5, 3, 5]);
    assert_eq!(breakdown.terms[1].source_label, "Sparse");
    assert_eq!(breakdown.terms[1].contribution, 1.0 / 63.0);
    assert_eq!(breakdown.total, 1.0 / 65.0 + 1.0 / 63.0 + 1.0 / 65.0);
}

#[test]
fn test_unknown_label_is_not_found() {
    let store = RankingStore::demo();
    let err = store.item_by_label("Doc Z").unwrap_err();
    assert_eq!(err.to_string(), "item 'Doc Z' not found");
}

#[test]
fn test_walkthrough_recovers_after_bad_k() {
    let store = RankingStore::demo();
    let mut state = StepState::new();
    state.jump_to(Step::FinalRankingView);

    state.set_k(-1.0);
    let View::FinalRanking { rows, error, .. } = render(&state, &store) else {
        panic!("expected final ranking view");
    };
    assert!(rows.is_empty());
    assert!(error.is_some());

    state.set_k(DEFAULT_K);
    let View::FinalRanking { rows, error, .. } = render(&state, &store) else {
        panic!("expected final ranking view");
    };
    assert!(error.is_none());
    assert_eq!(rows[0].item, "Doc A");
    assert_eq!(state.step(), Step::FinalRankingView);
}
